//! Step command implementation.
//!
//! Advances an error through a circuit document, one layer or all the way.

use anyhow::{Context, Result};
use tracing::info;

use paulitrace_ir::CircuitIr;
use paulitrace_prop::{step_once, step_to_end};

/// Execute the step command.
pub fn execute(document: &str, all: bool) -> Result<()> {
    let doc: CircuitIr = serde_json::from_str(document).context("Invalid circuit document")?;

    let encoded = if all {
        let walk = step_to_end(&doc)?;
        info!("Walked error through {} steps", walk.len());
        serde_json::to_string_pretty(&walk)
    } else {
        serde_json::to_string_pretty(&step_once(&doc)?)
    };
    let json = encoded.context("JSON serialization failed")?;

    println!("{json}");
    Ok(())
}
