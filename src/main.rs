//! Wendler - 5/3/1 cycle planner
//!
//! CLI entry point for the planner.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wendler::cli::{print_history, print_summary, ProgramDisplay};
use wendler::config::PlannerConfig;
use wendler::log::{GenerationRecord, JsonlLogger};
use wendler::program::inputs::DEFAULT_CYCLE_COUNT;
use wendler::program::{generate_program, parse_cycle_count, LiftInputs};

/// Wendler 5/3/1 cycle planner
///
/// Computes training maxes and week-by-week set prescriptions from
/// one-rep maxes. Without any lift input the four main lifts are planned
/// from sample values.
#[derive(Parser, Debug)]
#[command(name = "wendler", version, about)]
struct Cli {
    /// Planner file with [[lift]] entries and an optional [plan] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Set a lift's one-rep max, e.g. --lift squat=315 (repeatable)
    #[arg(long = "lift", value_name = "NAME=VALUE")]
    lifts: Vec<String>,

    /// Number of cycles to generate
    #[arg(long)]
    cycles: Option<String>,

    /// Print the program as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Directory for the generation log (no log is written without it)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print the generation log and exit
    #[arg(long, requires = "log_dir")]
    history: bool,
}

/// Resolve lift inputs and cycle count from defaults, the planner file and flags.
fn resolve_request(cli: &Cli) -> Result<(LiftInputs, u32)> {
    let (mut inputs, mut cycle_count) = match &cli.config {
        Some(path) => {
            let config = PlannerConfig::from_path(path).with_context(|| {
                format!("Failed to load planner file '{}'", path.display())
            })?;
            (config.to_inputs()?, config.plan.cycles)
        }
        None => (LiftInputs::defaults(), DEFAULT_CYCLE_COUNT),
    };

    for assignment in &cli.lifts {
        inputs
            .apply_assignment(assignment)
            .with_context(|| format!("Invalid --lift '{assignment}'"))?;
    }

    if let Some(raw) = &cli.cycles {
        cycle_count = parse_cycle_count(raw).context("Invalid --cycles")?;
    }

    Ok((inputs, cycle_count))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = cli
        .log_dir
        .as_ref()
        .map(JsonlLogger::new)
        .transpose()
        .context("Failed to open generation history")?;

    if cli.history {
        if let Some(logger) = &logger {
            let records = logger.read_all().context("Failed to read generation log")?;
            print_history(&records);
        }
        return Ok(());
    }

    let (inputs, cycle_count) = resolve_request(&cli)?;
    let program = generate_program(&inputs, cycle_count).context("Failed to generate program")?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&program).context("Failed to serialize program")?;
        println!("{json}");
    } else {
        ProgramDisplay::new(&program).print();
    }

    if let Some(logger) = &logger {
        logger
            .append(&GenerationRecord::from_program(&inputs, &program))
            .context("Failed to record generation")?;
    }

    print_summary(&program);
    Ok(())
}
