use crate::common::{Action, PriorityOpenNode, State, Trace};
use crate::map::Map;
use crate::stat::Stats;

use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument, trace};

/// Uniform-cost search with unit action costs.
///
/// Always expands the cheapest frontier entry, and among equally cheap
/// entries the one inserted first. With unit costs this visits states in
/// breadth-first order, so the returned plan is a shortest one.
#[instrument(skip_all, name = "uniform_cost", fields(start = format!("{:?}", start.position), dirty = start.dirty.len()), level = "debug")]
pub(crate) fn uniform_cost_search(map: &Map, start: &State, stats: &mut Stats) -> Option<Vec<Action>> {
    let mut open_list = BTreeSet::new();
    let mut closed_list = HashSet::new();
    let mut trace = Trace::default();

    open_list.insert(PriorityOpenNode {
        cost: 0,
        state: start.clone(),
        id: trace.root(),
    });
    stats.nodes_generated += 1;

    while let Some(current) = open_list.pop_first() {
        trace!("expand node: {current:?}");
        stats.nodes_expanded += 1;

        if current.state.is_goal() {
            debug!("found plan with cost {}", current.cost);
            return Some(trace.construct_path(current.id));
        }

        if !closed_list.insert(current.state.clone()) {
            continue;
        }

        // Assuming uniform cost.
        let tentative_cost = current.cost + 1;

        for (action, successor) in current.state.successors(map) {
            open_list.insert(PriorityOpenNode {
                cost: tentative_cost,
                state: successor,
                id: trace.child(current.id, action),
            });
            stats.nodes_generated += 1;
        }
    }

    debug!("cannot find solution");
    None
}
