//! Paulitrace Circuit Intermediate Representation
//!
//! This crate provides the data model for Pauli error propagation: typed
//! gates and Pauli errors, validated layers, layered circuits, and the
//! loosely-typed [`CircuitIr`] document used by the interactive stepper.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing qubits
//! - **Gates**: [`Gate`], a closed union of [`SingleQubitGate`]s and CX
//! - **Errors**: [`Pauli`] labels and [`PauliError`] terms
//! - **Layers**: [`Layer`] and [`ErrorLayer`], sets of gates on disjoint qubits
//! - **Circuit**: [`LayeredCircuit`], an ordered list of layers
//! - **Document**: [`CircuitIr`], tagged `"normal"`/`"error"` layers
//!
//! # Example: Building a Circuit
//!
//! ```rust
//! use paulitrace_ir::{Gate, LayeredCircuit};
//!
//! let mut circuit = LayeredCircuit::new(3);
//! circuit
//!     .add_gates([Gate::h(0)])
//!     .unwrap()
//!     .add_gates([Gate::cx(0, 1)])
//!     .unwrap()
//!     .add_gates([Gate::cx(0, 2)])
//!     .unwrap();
//!
//! assert_eq!(circuit.num_layers(), 3);
//!
//! // Gates in one layer must act on disjoint qubits.
//! assert!(circuit.add_gates([Gate::h(1), Gate::cx(1, 2)]).is_err());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Wire form |
//! |------|--------|-----------|
//! | `I`, `X`, `Y`, `Z` | 1 | `["X", q]` |
//! | `H`, `S`, `T` | 1 | `["H", q]` |
//! | `CX` | 2 | `["CX", control, target]` |

pub mod circuit;
pub mod document;
pub mod error;
pub mod gate;
pub mod layer;
pub mod qubit;

pub use circuit::LayeredCircuit;
pub use document::{CircuitIr, IrLayer, LayerKind};
pub use error::{IrError, IrResult};
pub use gate::{Gate, Pauli, PauliError, SingleQubitGate};
pub use layer::{ErrorLayer, Layer};
pub use qubit::QubitId;
