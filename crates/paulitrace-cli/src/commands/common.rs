//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use paulitrace_ir::{ErrorLayer, LayeredCircuit, Pauli, PauliError};
use paulitrace_prop::{AncillaCheck, Insertion, PauliString};

/// Detectability analysis input.
///
/// ```yaml
/// circuit:
///   num_qubits: 3
///   layers:
///     - [["CX", 0, 1]]
///     - [["CX", 0, 2]]
/// ancillas:
///   - { qubit: 0, basis: Z }
/// stabilizers: ["ZZI", "IZZ"]
/// ```
#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    /// Circuit to analyze.
    pub circuit: LayeredCircuit,
    /// Ancilla checks applied to the final errors.
    #[serde(default)]
    pub ancillas: Vec<AncillaCheck>,
    /// Stabilizers the undetected errors must commute with.
    #[serde(default)]
    pub stabilizers: Vec<PauliString>,
}

/// Load a YAML or JSON file, chosen by extension (JSON when unknown).
pub fn load_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Failed to parse YAML file: {path}")),
        _ => serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse JSON file: {path}")),
    }
}

/// Load a layered circuit file.
pub fn load_circuit(path: &str) -> Result<LayeredCircuit> {
    load_file(path)
}

/// Load an analysis config file.
pub fn load_config(path: &str) -> Result<AnalysisConfig> {
    load_file(path)
}

/// Parse an insertion of the form `<position>:<terms>`, for example `0:X1`
/// or `2:X0,Z3`.
pub fn parse_insertion(spec: &str, num_qubits: u32) -> Result<Insertion> {
    let (position, terms) = spec
        .split_once(':')
        .with_context(|| format!("Invalid insertion '{spec}': expected <position>:<terms>"))?;

    let position: usize = position
        .trim()
        .parse()
        .with_context(|| format!("Invalid insertion position '{position}'"))?;

    let errors = terms
        .split(',')
        .map(|term| parse_term(term.trim()))
        .collect::<Result<Vec<_>>>()?;

    let layer = ErrorLayer::new(errors, num_qubits)
        .with_context(|| format!("Invalid insertion '{spec}'"))?;
    Ok(Insertion::new(position, layer))
}

/// Parse one error term such as `X1`.
fn parse_term(term: &str) -> Result<PauliError> {
    let mut chars = term.chars();
    let label = chars.next().context("Empty error term")?;
    let kind: Pauli = label.to_string().parse()?;
    let qubit: u32 = chars
        .as_str()
        .parse()
        .with_context(|| format!("Invalid qubit in error term '{term}'"))?;
    Ok(PauliError::new(kind, qubit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insertion() {
        let insertion = parse_insertion("2:X0,z3", 4).unwrap();
        assert_eq!(insertion.position, 2);
        assert_eq!(
            insertion.errors.errors(),
            &[PauliError::x(0), PauliError::z(3)]
        );
    }

    #[test]
    fn test_parse_insertion_errors() {
        assert!(parse_insertion("X0", 2).is_err());
        assert!(parse_insertion("a:X0", 2).is_err());
        assert!(parse_insertion("0:Q0", 2).is_err());
        assert!(parse_insertion("0:X", 2).is_err());
        assert!(parse_insertion("0:X5", 2).is_err());
        assert!(parse_insertion("0:X0,Z0", 2).is_err());
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.yaml");
        fs::write(
            &path,
            "circuit:\n  num_qubits: 2\n  layers:\n    - [[\"CX\", 0, 1]]\nancillas:\n  - { qubit: 1, basis: Z }\n",
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.circuit.num_layers(), 1);
        assert_eq!(config.ancillas, vec![AncillaCheck::new(1, Pauli::Z)]);
        assert!(config.stabilizers.is_empty());
    }

    #[test]
    fn test_load_json_circuit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circuit.json");
        fs::write(&path, r#"{"num_qubits":1,"layers":[[["H",0]],[["S",0]]]}"#).unwrap();

        let circuit = load_circuit(path.to_str().unwrap()).unwrap();
        assert_eq!(circuit.num_layers(), 2);
    }

    #[test]
    fn test_load_invalid_circuit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circuit.json");
        fs::write(&path, r#"{"num_qubits":1,"layers":[[["H",1]]]}"#).unwrap();
        assert!(load_circuit(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_circuit("/nonexistent/circuit.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
