use vacuum_planner::common::verify_plan;
use vacuum_planner::config::{Cli, Config};
use vacuum_planner::solver::solve;
use vacuum_planner::world::World;

use anyhow::{ensure, Context};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)
            .with_context(|| format!("failed to read config file: {config_file}"))?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        Config::default()
    }
    .override_from_command_line(&cli)?;

    // Logs go to stderr, stdout carries only the plan.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();
    if cli.config.is_none() {
        info!("No config file specified, using command line only");
    }

    let (strategy, world_path) = config.validate()?;
    let world = World::from_file(world_path)?;
    ensure!(
        world.start.verify(&world.map),
        "start state of {world_path} lies outside the open cells"
    );

    let report = solve(&world.map, &world.start, strategy);
    if let Some(path) = &report.path {
        ensure!(
            verify_plan(&world.map, &world.start, path),
            "{strategy} produced a plan that does not clean {world_path}"
        );
    }

    report.render(&mut io::stdout().lock())?;

    if let Some(output_path) = &config.output_path {
        report.write_json(output_path)?;
        info!("result written to {output_path}");
    }

    Ok(())
}
