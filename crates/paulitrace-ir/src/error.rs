//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Structural validation failures raised while building layers and circuits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate references a qubit outside `[0, num_qubits)`.
    #[error("Gate {gate} references qubit {qubit} out of bounds (0 to {max})", max = .num_qubits.saturating_sub(1))]
    QubitOutOfRange {
        /// Rendering of the offending gate.
        gate: String,
        /// The offending qubit.
        qubit: QubitId,
        /// Declared qubit count of the layer.
        num_qubits: u32,
    },

    /// Two gates in the same layer act on the same qubit.
    #[error("Layer contains overlapping gates on {qubit} (gate: {gate})")]
    OverlappingQubit {
        /// The shared qubit.
        qubit: QubitId,
        /// Rendering of the second gate touching the qubit.
        gate: String,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// A two-qubit gate names the same qubit twice.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },

    /// An error layer contains something other than X, Y or Z.
    #[error("Invalid gate '{gate_name}' in error layer, only X, Y and Z are allowed")]
    DisallowedErrorGate {
        /// Name of the rejected gate.
        gate_name: String,
    },

    /// Gate name not in the supported set.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Layer index outside the circuit.
    #[error("Layer index {index} out of range for circuit with {len} layers")]
    LayerIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of layers in the circuit.
        len: usize,
    },

    /// A Pauli label was not one of I, X, Y, Z (or X, Y, Z where identity is meaningless).
    #[error("Invalid Pauli label '{0}'")]
    InvalidPauliLabel(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
