use std::cmp::Ordering;

use super::{Action, State};

/// Parent links of every generated node, indexed by node id. Frontier entries
/// carry only their id, and the action path is rebuilt on demand.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    links: Vec<Option<(usize, Action)>>,
}

impl Trace {
    pub(crate) fn root(&mut self) -> usize {
        self.links.push(None);
        self.links.len() - 1
    }

    pub(crate) fn child(&mut self, parent: usize, action: Action) -> usize {
        self.links.push(Some((parent, action)));
        self.links.len() - 1
    }

    pub(crate) fn construct_path(&self, mut current: usize) -> Vec<Action> {
        let mut path = Vec::new();
        while let Some((parent, action)) = self.links[current] {
            path.push(action);
            current = parent;
        }
        path.reverse();
        path
    }
}

// Depth-first frontier entry.
#[derive(Clone, Debug)]
pub(crate) struct OpenNode {
    pub(crate) state: State,
    pub(crate) id: usize,
}

// Uniform-cost frontier entry. Node ids grow with insertion, so ordering by
// (cost, id) pops the earliest-inserted of the cheapest entries first.
#[derive(Clone, Debug)]
pub(crate) struct PriorityOpenNode {
    pub(crate) cost: usize,
    pub(crate) state: State,
    pub(crate) id: usize,
}

impl PartialEq for PriorityOpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.id == other.id
    }
}

impl Eq for PriorityOpenNode {}

impl PartialOrd for PriorityOpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityOpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.id.cmp(&other.id))
    }
}
