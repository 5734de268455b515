//! Paulitrace Command-Line Interface
//!
//! The main entry point for the Paulitrace CLI tool.
//!
//! ```text
//! paulitrace step '[{"type":"error","gates":[["X",0]]},{"type":"normal","gates":[["H",0]]}]'
//! paulitrace propagate --circuit encoder.json --insert 0:X0 --trace
//! paulitrace analyze --config repetition.yaml --format json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{analyze, propagate, step, version};

/// Paulitrace - Pauli error propagation and detectability analysis
#[derive(Parser)]
#[command(name = "paulitrace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the first error layer of a circuit document
    Step {
        /// JSON-encoded circuit document
        document: String,

        /// Keep stepping until the error reaches the last layer
        #[arg(short, long)]
        all: bool,
    },

    /// Propagate injected errors through a layered circuit
    Propagate {
        /// Circuit file (JSON or YAML)
        #[arg(short, long)]
        circuit: String,

        /// Error insertion as <position>:<terms>, e.g. 0:X1 or 2:X0,Z3
        #[arg(short, long = "insert", required = true)]
        inserts: Vec<String>,

        /// Print the error state before every layer
        #[arg(long)]
        trace: bool,
    },

    /// Find single-qubit errors missed by ancillas and stabilizers
    Analyze {
        /// Analysis config file (JSON or YAML)
        #[arg(short, long)]
        config: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Step { document, all } => step::execute(&document, all),

        Commands::Propagate {
            circuit,
            inserts,
            trace,
        } => propagate::execute(&circuit, &inserts, trace),

        Commands::Analyze { config, format } => analyze::execute(&config, &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
