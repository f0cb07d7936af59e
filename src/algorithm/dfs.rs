use crate::common::{Action, OpenNode, State, Trace};
use crate::map::Map;
use crate::stat::Stats;

use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Depth-first search over (position, dirty cells) states.
///
/// The frontier is a stack, and successors are pushed in `Action::ALL` order,
/// so the last applicable action is explored first. A state is expanded at
/// most once; duplicates still count as expanded when they are popped. The
/// first goal popped wins, which is not necessarily the shortest plan.
#[instrument(skip_all, name = "depth_first", fields(start = format!("{:?}", start.position), dirty = start.dirty.len()), level = "debug")]
pub(crate) fn depth_first_search(map: &Map, start: &State, stats: &mut Stats) -> Option<Vec<Action>> {
    let mut open_list = Vec::new();
    let mut closed_list = HashSet::new();
    let mut trace = Trace::default();

    open_list.push(OpenNode {
        state: start.clone(),
        id: trace.root(),
    });
    stats.nodes_generated += 1;

    while let Some(current) = open_list.pop() {
        trace!("expand node: {current:?}");
        stats.nodes_expanded += 1;

        if current.state.is_goal() {
            return Some(trace.construct_path(current.id));
        }

        if !closed_list.insert(current.state.clone()) {
            continue;
        }

        for (action, successor) in current.state.successors(map) {
            open_list.push(OpenNode {
                state: successor,
                id: trace.child(current.id, action),
            });
            stats.nodes_generated += 1;
        }
    }

    debug!("cannot find solution");
    None
}
