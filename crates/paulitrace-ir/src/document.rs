//! The interactive circuit document exchanged with the UI.
//!
//! Unlike [`crate::Layer`], a document layer is not validated when decoded.
//! It is a transport form; its gates are only checked when a layer actually
//! takes part in an algebraic propagation step.
//!
//! ```json
//! [
//!   {"type": "error",  "gates": [["X", 0]]},
//!   {"type": "normal", "gates": [["H", 0]]}
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::QubitId;

/// Tag of a document layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// A layer of circuit gates.
    Normal,
    /// A layer of injected Pauli errors.
    Error,
}

/// One layer of a [`CircuitIr`] document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrLayer {
    /// Layer tag.
    #[serde(rename = "type")]
    pub kind: LayerKind,
    /// Gate tuples in this layer.
    #[serde(default)]
    pub gates: Vec<Gate>,
}

impl IrLayer {
    /// A gate layer.
    pub fn normal(gates: impl IntoIterator<Item = Gate>) -> Self {
        Self {
            kind: LayerKind::Normal,
            gates: gates.into_iter().collect(),
        }
    }

    /// An error layer.
    pub fn error(gates: impl IntoIterator<Item = Gate>) -> Self {
        Self {
            kind: LayerKind::Error,
            gates: gates.into_iter().collect(),
        }
    }

    /// Check if this layer is tagged as an error layer.
    pub fn is_error(&self) -> bool {
        self.kind == LayerKind::Error
    }

    /// Largest qubit index referenced, or `None` for an empty layer.
    pub fn max_qubit(&self) -> Option<QubitId> {
        self.gates.iter().map(Gate::max_qubit).max()
    }
}

/// An ordered list of tagged layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitIr {
    layers: Vec<IrLayer>,
}

impl CircuitIr {
    /// Create a document from its layers.
    pub fn new(layers: impl IntoIterator<Item = IrLayer>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    /// Get the layers.
    pub fn layers(&self) -> &[IrLayer] {
        &self.layers
    }

    /// Get mutable access to the layers.
    pub fn layers_mut(&mut self) -> &mut [IrLayer] {
        &mut self.layers
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the document has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Index of the first layer tagged `"error"`.
    pub fn first_error_index(&self) -> Option<usize> {
        self.layers.iter().position(IrLayer::is_error)
    }

    /// Nothing left to propagate: no error layer, or the first one is last.
    pub fn is_terminal(&self) -> bool {
        match self.first_error_index() {
            None => true,
            Some(index) => index + 1 >= self.layers.len(),
        }
    }

    /// Consume the document and return its layers.
    pub fn into_layers(self) -> Vec<IrLayer> {
        self.layers
    }
}

impl From<Vec<IrLayer>> for CircuitIr {
    fn from(layers: Vec<IrLayer>) -> Self {
        Self { layers }
    }
}
