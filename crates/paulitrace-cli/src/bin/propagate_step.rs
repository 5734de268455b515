//! Single-step propagator boundary for the circuit UI.
//!
//! Takes one JSON circuit document as its only argument and prints the
//! document after one propagation step. Every failure, including a bad
//! command line, is reported as `{"error": "..."}` on stderr with exit
//! code 1. Logging is off unless `RUST_LOG` is set.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use paulitrace_ir::CircuitIr;
use paulitrace_prop::step_once;

/// Advance the first error layer of a circuit document by one position
#[derive(Parser)]
#[command(name = "propagate-step")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON-encoded circuit document: [{"type": "normal"|"error", "gates": [...]}, ...]
    document: String,
}

fn run(args: &Args) -> Result<String> {
    let doc: CircuitIr =
        serde_json::from_str(&args.document).context("Invalid circuit document")?;
    let stepped = step_once(&doc)?;
    serde_json::to_string(&stepped).context("Failed to encode circuit document")
}

fn main() -> ExitCode {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let outcome = match Args::try_parse() {
        Ok(args) => run(&args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(anyhow::anyhow!("{}", e.render().to_string().trim())),
    };

    match outcome {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", serde_json::json!({ "error": format!("{e:#}") }));
            ExitCode::FAILURE
        }
    }
}
