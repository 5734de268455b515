//! Gate layers and error layers.
//!
//! A layer models one time step: every gate in it acts at the same moment,
//! so no two gates may share a qubit. Both layer types are validated once at
//! construction and are immutable afterwards.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, Pauli, PauliError};
use crate::qubit::QubitId;

/// Check the per-layer invariants: bounds, CX distinctness and disjointness.
fn validate_gates<'a>(gates: impl IntoIterator<Item = &'a Gate>, num_qubits: u32) -> IrResult<()> {
    let mut used = FxHashSet::default();
    for gate in gates {
        if let Gate::Cx { control, target } = *gate {
            if control == target {
                return Err(IrError::DuplicateQubit {
                    qubit: control,
                    gate_name: gate.name().into(),
                });
            }
        }
        for qubit in gate.qubits() {
            if qubit.0 >= num_qubits {
                return Err(IrError::QubitOutOfRange {
                    gate: gate.to_string(),
                    qubit,
                    num_qubits,
                });
            }
            if !used.insert(qubit) {
                return Err(IrError::OverlappingQubit {
                    qubit,
                    gate: gate.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// A set of gates acting on disjoint qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayer")]
pub struct Layer {
    gates: Vec<Gate>,
    num_qubits: u32,
}

#[derive(Deserialize)]
struct RawLayer {
    gates: Vec<Gate>,
    num_qubits: u32,
}

impl TryFrom<RawLayer> for Layer {
    type Error = IrError;

    fn try_from(raw: RawLayer) -> IrResult<Self> {
        Layer::new(raw.gates, raw.num_qubits)
    }
}

impl Layer {
    /// Create a validated layer.
    pub fn new(gates: impl IntoIterator<Item = Gate>, num_qubits: u32) -> IrResult<Self> {
        let gates: Vec<Gate> = gates.into_iter().collect();
        validate_gates(&gates, num_qubits)?;
        Ok(Self { gates, num_qubits })
    }

    /// An empty layer over `num_qubits` qubits.
    pub fn empty(num_qubits: u32) -> Self {
        Self {
            gates: vec![],
            num_qubits,
        }
    }

    /// Get the gates in this layer.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get the declared number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of gates in the layer.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the layer holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The gate touching `qubit`, if any. At most one exists.
    pub fn gate_on(&self, qubit: QubitId) -> Option<&Gate> {
        self.gates.iter().find(|gate| gate.acts_on(qubit))
    }

    /// Re-validate this layer's gates against a different qubit count.
    pub fn with_num_qubits(self, num_qubits: u32) -> IrResult<Self> {
        Self::new(self.gates, num_qubits)
    }

    /// Consume the layer and return its gates.
    pub fn into_gates(self) -> Vec<Gate> {
        self.gates
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{gate}")?;
        }
        write!(f, "]")
    }
}

/// A layer of single-qubit Pauli errors.
///
/// Same invariants as [`Layer`], restricted to X, Y and Z terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawErrorLayer")]
pub struct ErrorLayer {
    errors: Vec<PauliError>,
    num_qubits: u32,
}

#[derive(Deserialize)]
struct RawErrorLayer {
    errors: Vec<PauliError>,
    num_qubits: u32,
}

impl TryFrom<RawErrorLayer> for ErrorLayer {
    type Error = IrError;

    fn try_from(raw: RawErrorLayer) -> IrResult<Self> {
        ErrorLayer::new(raw.errors, raw.num_qubits)
    }
}

impl ErrorLayer {
    /// Create a validated error layer.
    pub fn new(errors: impl IntoIterator<Item = PauliError>, num_qubits: u32) -> IrResult<Self> {
        let errors: Vec<PauliError> = errors.into_iter().collect();
        let as_gates: Vec<Gate> = errors.iter().copied().map(Gate::from).collect();
        validate_gates(&as_gates, num_qubits)?;
        Ok(Self { errors, num_qubits })
    }

    /// Create an error layer from generic gate tuples, rejecting anything
    /// that is not an X, Y or Z.
    pub fn from_gates(gates: impl IntoIterator<Item = Gate>, num_qubits: u32) -> IrResult<Self> {
        let errors = gates
            .into_iter()
            .map(PauliError::try_from)
            .collect::<IrResult<Vec<_>>>()?;
        Self::new(errors, num_qubits)
    }

    /// A layer with a single error term.
    pub fn single(kind: Pauli, qubit: impl Into<QubitId>, num_qubits: u32) -> IrResult<Self> {
        Self::new([PauliError::new(kind, qubit)], num_qubits)
    }

    /// The "no error" layer.
    pub fn empty(num_qubits: u32) -> Self {
        Self {
            errors: vec![],
            num_qubits,
        }
    }

    /// Get the error terms.
    pub fn errors(&self) -> &[PauliError] {
        &self.errors
    }

    /// Get the declared number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of error terms.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if this layer carries no error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error terms sorted by qubit, for order-insensitive comparison.
    pub fn signature(&self) -> Vec<PauliError> {
        let mut terms = self.errors.clone();
        terms.sort_by_key(|e| (e.qubit, e.kind));
        terms
    }

    /// Check whether two layers hold the same terms regardless of order.
    pub fn is_equivalent(&self, other: &ErrorLayer) -> bool {
        self.errors.len() == other.errors.len() && self.signature() == other.signature()
    }

    /// Render the terms as gate tuples.
    pub fn to_gates(&self) -> Vec<Gate> {
        self.errors.iter().copied().map(Gate::from).collect()
    }

    /// Consume the layer and return its terms.
    pub fn into_errors(self) -> Vec<PauliError> {
        self.errors
    }
}

impl fmt::Display for ErrorLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "I");
        }
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}
