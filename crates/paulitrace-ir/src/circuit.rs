//! Layered circuits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::layer::Layer;

/// An ordered sequence of layers sharing one qubit count.
///
/// Every layer is validated against the circuit's qubit count, both when the
/// circuit is built and when a layer is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCircuit", into = "RawCircuit")]
pub struct LayeredCircuit {
    layers: Vec<Layer>,
    num_qubits: u32,
}

/// On-disk form: `{ "num_qubits": n, "layers": [[gate, ...], ...] }`.
#[derive(Serialize, Deserialize)]
struct RawCircuit {
    num_qubits: u32,
    #[serde(default)]
    layers: Vec<Vec<Gate>>,
}

impl TryFrom<RawCircuit> for LayeredCircuit {
    type Error = IrError;

    fn try_from(raw: RawCircuit) -> IrResult<Self> {
        LayeredCircuit::from_gate_lists(raw.layers, raw.num_qubits)
    }
}

impl From<LayeredCircuit> for RawCircuit {
    fn from(circuit: LayeredCircuit) -> Self {
        Self {
            num_qubits: circuit.num_qubits,
            layers: circuit.layers.into_iter().map(Layer::into_gates).collect(),
        }
    }
}

impl LayeredCircuit {
    /// Create an empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            layers: vec![],
            num_qubits,
        }
    }

    /// Build a circuit from existing layers, re-validating each one against
    /// `num_qubits`.
    pub fn from_layers(layers: impl IntoIterator<Item = Layer>, num_qubits: u32) -> IrResult<Self> {
        let mut circuit = Self::new(num_qubits);
        for layer in layers {
            circuit.add_layer(layer)?;
        }
        Ok(circuit)
    }

    /// Build a circuit from literal per-layer gate lists.
    pub fn from_gate_lists<L>(lists: impl IntoIterator<Item = L>, num_qubits: u32) -> IrResult<Self>
    where
        L: IntoIterator<Item = Gate>,
    {
        let layers = lists
            .into_iter()
            .map(|gates| Layer::new(gates, num_qubits))
            .collect::<IrResult<Vec<_>>>()?;
        Ok(Self { layers, num_qubits })
    }

    /// Append a layer, re-validating it against this circuit's qubit count.
    pub fn add_layer(&mut self, layer: Layer) -> IrResult<&mut Self> {
        let layer = layer.with_num_qubits(self.num_qubits)?;
        self.layers.push(layer);
        Ok(self)
    }

    /// Append a layer given as a literal gate list.
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> IrResult<&mut Self> {
        let layer = Layer::new(gates, self.num_qubits)?;
        self.layers.push(layer);
        Ok(self)
    }

    /// Get the layer at position `index`.
    pub fn layer(&self, index: usize) -> IrResult<&Layer> {
        self.layers.get(index).ok_or(IrError::LayerIndexOutOfRange {
            index,
            len: self.layers.len(),
        })
    }

    /// Get all layers in order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Get the number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Check if the circuit has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of gates across all layers.
    pub fn num_gates(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }
}

impl fmt::Display for LayeredCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayeredCircuit({} qubits) [", self.num_qubits)?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{layer}")?;
        }
        write!(f, "]")
    }
}
