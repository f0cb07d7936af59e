use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub nodes_generated: usize,
    pub nodes_expanded: usize,
    pub time_us: usize,
}

impl Stats {
    pub(crate) fn print(&self) {
        info!(
            "Nodes generated {:?} Nodes expanded {:?} Time(microseconds) {:?}",
            self.nodes_generated, self.nodes_expanded, self.time_us
        );
    }
}
