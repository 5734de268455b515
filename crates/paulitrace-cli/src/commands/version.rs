//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Pauli error propagation for QEC circuits",
        style("Paulitrace").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  paulitrace-ir    Layered circuit data model");
    println!("  paulitrace-prop  Propagation and detectability analysis");
    println!("  paulitrace-cli   Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/paulitrace/paulitrace").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
