//! Quorum CLI - compares round advancement policies from the command line

use clap::Parser;

use quorum_core::{run_scenario, RoundConfig, RoundState};
use quorum_sweep::{sweep_disagreements, sweep_problems, GridSpec};

mod report;

#[derive(Parser)]
#[command(name = "quorum")]
#[command(about = "Round advancement policy lab - how should skips count?")]
struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Walk through the hand-picked scenarios
    Scenarios,
    /// Sweep the full parameter grid for blocking problems
    Sweep,
    /// Probe a typical configuration for policy disagreements
    Diff,
}

/// The walk-through scenarios shown to hosts deciding between the rules.
fn manual_scenarios() -> Vec<(&'static str, RoundConfig, RoundState)> {
    vec![
        (
            "some skip, some submit",
            RoundConfig::new(80, 5, 3),
            RoundState::new(10, 6, 2),
        ),
        (
            "everyone who could submit did",
            RoundConfig::new(80, 5, 3),
            RoundState::new(10, 5, 5),
        ),
        (
            "high count threshold, many skips",
            RoundConfig::new(80, 8, 3),
            RoundState::new(10, 5, 4),
        ),
        (
            "everyone skips",
            RoundConfig::new(80, 5, 3),
            RoundState::new(10, 0, 10),
        ),
        (
            "minimum group, all submit",
            RoundConfig::new(80, 3, 3),
            RoundState::new(3, 3, 0),
        ),
        (
            "minimum group, one skip",
            RoundConfig::new(80, 3, 3),
            RoundState::new(3, 2, 1),
        ),
        (
            "low threshold, many skips",
            RoundConfig::new(50, 3, 3),
            RoundState::new(10, 3, 6),
        ),
        (
            "full percent threshold, one skip",
            RoundConfig::new(100, 3, 3),
            RoundState::new(5, 4, 1),
        ),
    ]
}

fn run_manual_scenarios(json: bool) -> anyhow::Result<()> {
    let scenarios = manual_scenarios();

    if json {
        let outcomes: Vec<serde_json::Value> = scenarios
            .iter()
            .map(|(label, config, state)| {
                serde_json::json!({
                    "label": label,
                    "outcome": run_scenario(config, state),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    report::print_banner("MANUAL SCENARIOS");
    for (label, config, state) in &scenarios {
        report::print_outcome(Some(label), &run_scenario(config, state));
    }
    Ok(())
}

fn run_problem_sweep(json: bool) -> anyhow::Result<()> {
    let summary = sweep_problems(&GridSpec::problem_search());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report::print_problem_summary(&summary);
    }
    Ok(())
}

fn run_disagreement_probe(json: bool) -> anyhow::Result<()> {
    let probe = sweep_disagreements(&GridSpec::disagreement_probe());

    if json {
        println!("{}", serde_json::to_string_pretty(&probe)?);
    } else {
        report::print_disagreements(&probe);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Some(Commands::Scenarios) => run_manual_scenarios(cli.json)?,
        Some(Commands::Sweep) => run_problem_sweep(cli.json)?,
        Some(Commands::Diff) => run_disagreement_probe(cli.json)?,
        None => {
            run_manual_scenarios(cli.json)?;
            run_problem_sweep(cli.json)?;
            run_disagreement_probe(cli.json)?;
        }
    }

    Ok(())
}
