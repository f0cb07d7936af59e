use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::algorithm::{depth_first_search, uniform_cost_search};
use crate::common::{Action, State};
use crate::map::Map;
use crate::stat::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[serde(alias = "dfs")]
    DepthFirst,
    #[serde(alias = "ucs")]
    UniformCost,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            "uniform-cost" | "ucs" => Ok(Strategy::UniformCost),
            _ => bail!("unknown algorithm {s:?}, use 'depth-first' or 'uniform-cost'"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::UniformCost => write!(f, "uniform-cost"),
        }
    }
}

/// Outcome of one search run. `path` is `None` when every reachable state was
/// expanded without reaching a clean world; the counters are filled either way.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub path: Option<Vec<Action>>,
    pub stats: Stats,
}

impl Report {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Writes the plan as one action per line followed by the node counters,
    /// or a single "No path found." line.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.path {
            Some(path) => {
                for action in path {
                    writeln!(out, "{action}")?;
                }
                writeln!(out, "{} nodes generated", self.stats.nodes_generated)?;
                writeln!(out, "{} nodes expanded", self.stats.nodes_expanded)
            }
            None => writeln!(out, "No path found."),
        }
    }

    pub fn write_json(&self, path: &str) -> Result<()> {
        let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

pub trait Solver {
    fn solve(&self) -> Report;
}

pub struct DepthFirst<'a> {
    map: &'a Map,
    start: State,
}

impl<'a> DepthFirst<'a> {
    pub fn new(map: &'a Map, start: State) -> Self {
        DepthFirst { map, start }
    }
}

impl Solver for DepthFirst<'_> {
    fn solve(&self) -> Report {
        run(Strategy::DepthFirst, |stats| {
            depth_first_search(self.map, &self.start, stats)
        })
    }
}

pub struct UniformCost<'a> {
    map: &'a Map,
    start: State,
}

impl<'a> UniformCost<'a> {
    pub fn new(map: &'a Map, start: State) -> Self {
        UniformCost { map, start }
    }
}

impl Solver for UniformCost<'_> {
    fn solve(&self) -> Report {
        run(Strategy::UniformCost, |stats| {
            uniform_cost_search(self.map, &self.start, stats)
        })
    }
}

fn run(strategy: Strategy, search: impl FnOnce(&mut Stats) -> Option<Vec<Action>>) -> Report {
    let start_time = Instant::now();
    let mut stats = Stats::default();
    let path = search(&mut stats);
    stats.time_us = start_time.elapsed().as_micros() as usize;

    match &path {
        Some(path) => info!("{strategy} found a plan of {} actions", path.len()),
        None => info!("{strategy} exhausted the reachable states without a plan"),
    }
    stats.print();

    Report {
        strategy,
        path,
        stats,
    }
}

/// Plans with the chosen strategy.
pub fn solve(map: &Map, start: &State, strategy: Strategy) -> Report {
    match strategy {
        Strategy::DepthFirst => DepthFirst::new(map, start.clone()).solve(),
        Strategy::UniformCost => UniformCost::new(map, start.clone()).solve(),
    }
}
