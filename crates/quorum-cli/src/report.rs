//! Text rendering for scenario outcomes and sweep reports.

use quorum_core::{run_scenario, ScenarioOutcome};
use quorum_sweep::{DisagreementReport, ProblemSweepSummary};

const RULE_WIDTH: usize = 70;

pub fn print_banner(title: &str) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Renders one scenario as a comparison table, one row per policy.
pub fn print_outcome(label: Option<&str>, outcome: &ScenarioOutcome) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    if let Some(label) = label {
        println!("Scenario: {}", label);
    }
    println!(
        "Settings: {}% threshold, count={}, min={}",
        outcome.config.threshold_percent,
        outcome.config.threshold_count,
        outcome.config.proposing_minimum
    );
    println!(
        "State: {} participants, {} submitted, {} skipped, {} inactive",
        outcome.state.total_participants,
        outcome.state.submitted,
        outcome.state.skipped,
        outcome.state.inactive()
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for (id, verdict) in &outcome.verdicts {
        let decision = if verdict.should_advance {
            "ADVANCE"
        } else {
            "WAIT"
        };
        println!(
            "{:<20} | {:<7} | effective_count={} | {}",
            id.to_string(),
            decision,
            verdict.effective_count_threshold,
            verdict.reason()
        );
        if let Some(problems) = outcome.problems.get(id) {
            for problem in problems {
                println!("{:<20} |   {}", "", problem);
            }
        }
    }
}

/// Renders the blocking-problem census, with the retained examples
/// re-evaluated so their full comparison tables can be shown.
pub fn print_problem_summary(summary: &ProblemSweepSummary) {
    print_banner("EXHAUSTIVE PROBLEM SEARCH");
    println!("Scenarios tested: {}", summary.scenarios_tested);
    println!("Blocking (critical/stuck) outcomes per policy:");
    for (id, tally) in &summary.findings {
        println!("  {:<20} {}", id.to_string(), tally.blocking);
    }

    for (id, tally) in &summary.findings {
        if tally.examples.is_empty() {
            continue;
        }
        println!();
        println!("First offending scenarios for {}:", id);
        for example in &tally.examples {
            print_outcome(None, &run_scenario(&example.config, &example.state));
        }
    }
}

/// Renders the disagreement probe, one line per retained split.
pub fn print_disagreements(report: &DisagreementReport) {
    print_banner("POLICY DISAGREEMENTS");
    println!("Scenarios tested: {}", report.scenarios_tested);
    println!("Scenarios with split decisions: {}", report.total);
    println!();

    for example in &report.examples {
        let state = example.point.state;
        let decisions = example
            .decisions
            .iter()
            .map(|(id, advance)| {
                format!("{}={}", id, if *advance { "ADVANCE" } else { "WAIT" })
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "total={:<2} submitted={:<2} skipped={:<2} | {}",
            state.total_participants, state.submitted, state.skipped, decisions
        );
    }
}
