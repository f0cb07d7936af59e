mod action;
mod node;
mod state;

pub use action::Action;
pub(crate) use node::{OpenNode, PriorityOpenNode, Trace};
pub use state::{verify_plan, State};

/// Grid coordinates as `(row, column)`.
pub type Position = (usize, usize);
