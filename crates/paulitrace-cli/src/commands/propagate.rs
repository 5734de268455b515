//! Propagate command implementation.
//!
//! Injects errors into a layered circuit and reports where they end up.

use anyhow::Result;
use console::style;
use tracing::info;

use paulitrace_prop::{Insertion, propagate_through_circuit};

use super::common::{load_circuit, parse_insertion};

/// Execute the propagate command.
pub fn execute(circuit_path: &str, inserts: &[String], trace: bool) -> Result<()> {
    let circuit = load_circuit(circuit_path)?;
    info!(
        "Loaded circuit: {} qubits, {} layers, {} gates",
        circuit.num_qubits(),
        circuit.num_layers(),
        circuit.num_gates()
    );

    let insertions = inserts
        .iter()
        .map(|spec| parse_insertion(spec, circuit.num_qubits()))
        .collect::<Result<Vec<Insertion>>>()?;

    let states = propagate_through_circuit(&insertions, &circuit)?;

    if trace {
        for (index, state) in states.iter().enumerate() {
            let label = match circuit.layers().get(index) {
                Some(layer) => format!("-> {layer}"),
                None => "end".to_string(),
            };
            println!("  {:>3}  {}  {}", index, style(state).cyan(), style(label).dim());
        }
    }

    if let Some(last) = states.last() {
        println!(
            "{} Final error: {}",
            style("✓").green().bold(),
            style(last).cyan().bold()
        );
    }

    Ok(())
}
