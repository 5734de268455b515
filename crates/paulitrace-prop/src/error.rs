//! Error types for propagation and analysis.

use paulitrace_ir::IrError;
use thiserror::Error;

/// Errors that can occur while propagating or analyzing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PropError {
    /// A layer involved in propagation violated a structural invariant.
    #[error(transparent)]
    Ir(#[from] IrError),

    /// The error layer is wider than the layer it is propagated through.
    #[error(
        "Error layer over {error_qubits} qubits exceeds the allowed range of the layer ({layer_qubits} qubits)"
    )]
    QubitRangeExceeded {
        /// Qubit count of the error layer.
        error_qubits: u32,
        /// Qubit count of the gate layer.
        layer_qubits: u32,
    },

    /// An insertion point lies past the end of the circuit.
    #[error("Insertion position {position} out of range for circuit with {num_layers} layers")]
    InsertionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of layers in the circuit.
        num_layers: usize,
    },

    /// Ancilla indices and ancilla bases have different lengths.
    #[error("Got {indices} ancilla indices but {bases} ancilla bases")]
    AncillaLengthMismatch {
        /// Number of ancilla indices.
        indices: usize,
        /// Number of ancilla bases.
        bases: usize,
    },

    /// A stabilizer string does not cover the error layer's qubits.
    #[error("Stabilizer '{stabilizer}' has length {got}, expected {expected}")]
    StabilizerLength {
        /// The offending stabilizer.
        stabilizer: String,
        /// Required length (qubit count).
        expected: usize,
        /// Actual length.
        got: usize,
    },
}

/// Result type for propagation operations.
pub type PropResult<T> = Result<T, PropError>;
