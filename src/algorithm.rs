mod dfs;
mod ucs;

pub(crate) use dfs::depth_first_search;
pub(crate) use ucs::uniform_cost_search;
