//! Paulitrace Error Propagation
//!
//! This crate moves Pauli errors through layered Clifford circuits and
//! classifies the result for error-correction analysis.
//!
//! # Components
//!
//! - [`algebra`]: per-gate commutation rules and phase-free simplification
//! - [`layer`]: one error layer through one gate layer
//! - [`circuit`]: injected errors through a whole [`LayeredCircuit`]
//! - [`step`]: one-position moves over a [`CircuitIr`] document
//! - [`detect`]: enumeration of final errors plus ancilla and stabilizer filters
//!
//! # Example
//!
//! ```rust
//! use paulitrace_ir::{ErrorLayer, Gate, LayeredCircuit, Pauli, PauliError};
//! use paulitrace_prop::{final_error, Insertion};
//!
//! let circuit = LayeredCircuit::from_gate_lists(vec![vec![Gate::cx(0, 1)]], 2).unwrap();
//! let x0 = ErrorLayer::single(Pauli::X, 0, 2).unwrap();
//!
//! let result = final_error(&[Insertion::new(0, x0)], &circuit).unwrap();
//! assert_eq!(result.errors(), &[PauliError::x(0), PauliError::x(1)]);
//! ```
//!
//! [`LayeredCircuit`]: paulitrace_ir::LayeredCircuit
//! [`CircuitIr`]: paulitrace_ir::CircuitIr

pub mod algebra;
pub mod circuit;
pub mod detect;
pub mod error;
pub mod layer;
pub mod step;

pub use algebra::{commute, simplify};
pub use circuit::{Insertion, commute_to_end, final_error, propagate_through_circuit};
pub use detect::{
    AncillaCheck, DetectabilityReport, ErrorOrigin, FinalError, PauliString, analyze,
    apply_ancilla_checks, check_stabilizer_lengths, enumerate_final_errors,
    filter_by_ancilla_checks, filter_by_stabilizers,
};
pub use error::{PropError, PropResult};
pub use layer::propagate_layer;
pub use step::{step_once, step_to_end};
