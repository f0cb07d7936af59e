use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Deserialize;

use crate::solver::Strategy;

#[derive(Parser, Debug)]
#[command(
    name = "Vacuum Planner",
    about = "Plans how a vacuum agent cleans every dirty cell of a grid world.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(help = "Search algorithm: depth-first or uniform-cost")]
    pub algorithm: Option<String>,

    #[arg(help = "Path to the world file")]
    pub world_file: Option<String>,

    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to write the result as JSON")]
    pub output_path: Option<String>,

    #[arg(long, help = "Log filter directive, RUST_LOG takes precedence")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub algorithm: Option<Strategy>,
    pub world_path: Option<String>,
    pub output_path: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: None,
            world_path: None,
            output_path: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Command-line values win over the config file.
    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = Some(algorithm.parse()?);
        }
        if let Some(world_file) = &cli.world_file {
            self.world_path = Some(world_file.clone());
        }
        if let Some(output_path) = &cli.output_path {
            self.output_path = Some(output_path.clone());
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.clone();
        }
        Ok(self)
    }

    /// Checks that everything needed for a run is set and returns the
    /// strategy and world file to use.
    pub fn validate(&self) -> anyhow::Result<(Strategy, &str)> {
        let strategy = self
            .algorithm
            .context("no algorithm given, use 'depth-first' or 'uniform-cost'")?;
        let world_path = self
            .world_path
            .as_deref()
            .ok_or_else(|| anyhow!("no world file given"))?;

        if self.output_path.as_deref() == Some(world_path) {
            return Err(anyhow!(
                "output path must differ from the world file, got {}",
                world_path
            ));
        }
        Ok((strategy, world_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("vacuum_planner").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_line_only() {
        let config = Config::default()
            .override_from_command_line(&cli(&["uniform-cost", "world.txt"]))
            .unwrap();
        let (strategy, world_path) = config.validate().unwrap();
        assert_eq!(strategy, Strategy::UniformCost);
        assert_eq!(world_path, "world.txt");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_yaml_config() {
        let config = Config::from_yaml_str(
            "algorithm: depth-first\nworld_path: worlds/a.txt\nlog_level: debug\n",
        )
        .unwrap();
        assert_eq!(config.algorithm, Some(Strategy::DepthFirst));
        assert_eq!(config.world_path.as_deref(), Some("worlds/a.txt"));
        assert_eq!(config.output_path, None);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_command_line_overrides_yaml() {
        let config = Config::from_yaml_str("algorithm: dfs\nworld_path: a.txt\n")
            .unwrap()
            .override_from_command_line(&cli(&["ucs", "--output-path", "out.json"]))
            .unwrap();
        let (strategy, world_path) = config.validate().unwrap();
        assert_eq!(strategy, Strategy::UniformCost);
        assert_eq!(world_path, "a.txt");
        assert_eq!(config.output_path.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = Config::default()
            .override_from_command_line(&cli(&["best-first", "world.txt"]))
            .unwrap_err();
        assert!(err.to_string().contains("unknown algorithm"));

        assert!(Config::from_yaml_str("algorithm: best-first\n").is_err());
    }

    #[test]
    fn test_unknown_yaml_field() {
        assert!(Config::from_yaml_str("solver: cbs\n").is_err());
    }

    #[test]
    fn test_validate_missing_values() {
        let err = Config::default().validate().unwrap_err();
        assert!(err.to_string().contains("no algorithm given"));

        let config = Config::default()
            .override_from_command_line(&cli(&["depth-first"]))
            .unwrap();
        assert!(config.validate().unwrap_err().to_string().contains("no world file"));

        let config = Config::default()
            .override_from_command_line(&cli(&["dfs", "w.txt", "--output-path", "w.txt"]))
            .unwrap();
        assert!(config.validate().is_err());
    }
}
