//! Analyze command implementation.
//!
//! Runs the full detectability analysis for a circuit config.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use paulitrace_prop::{DetectabilityReport, FinalError, analyze};

use super::common::load_config;

/// Execute the analyze command.
pub fn execute(config_path: &str, format: &str) -> Result<()> {
    let config = load_config(config_path)?;
    info!(
        "Analyzing {} qubits, {} layers, {} ancillas, {} stabilizers",
        config.circuit.num_qubits(),
        config.circuit.num_layers(),
        config.ancillas.len(),
        config.stabilizers.len()
    );

    let report = analyze(&config.circuit, &config.ancillas, &config.stabilizers)?;

    match format {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).context("JSON serialization failed")?;
            println!("{json}");
        }
        "table" => print_report(&report),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }

    Ok(())
}

fn print_report(report: &DetectabilityReport) {
    println!(
        "{} {} qubits, {} layers, {} insertion points",
        style("Circuit:").bold(),
        report.num_qubits,
        report.num_layers,
        report.insertion_points
    );
    println!("  Distinct final errors:  {}", report.distinct.len());
    println!("  Missed by ancillas:     {}", report.after_ancillas.len());
    println!("  Undetected:             {}", report.undetected.len());
    println!();

    if report.all_detected() {
        println!(
            "{} Every single-qubit error is detected",
            style("✓").green().bold()
        );
        return;
    }

    println!(
        "{} {} undetected errors:",
        style("!").yellow().bold(),
        report.undetected.len()
    );
    println!("  {:<10} {}", style("Origin").dim(), style("Final error").dim());
    for FinalError { error, origin } in &report.undetected {
        println!("  {:<10} {}", origin.to_string(), style(error).red());
    }
}
