//! Propagation of inserted errors through a whole circuit.

use std::iter::Peekable;

use tracing::{debug, instrument};

use paulitrace_ir::{ErrorLayer, LayeredCircuit, Pauli, QubitId};

use crate::algebra::simplify;
use crate::error::{PropError, PropResult};
use crate::layer::propagate_layer;

/// An error layer injected before circuit layer `position`.
///
/// Position 0 is before the first layer; position `num_layers` is after the
/// last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Index of the layer the errors are injected before.
    pub position: usize,
    /// The injected errors.
    pub errors: ErrorLayer,
}

impl Insertion {
    /// Create a new insertion.
    pub fn new(position: usize, errors: ErrorLayer) -> Self {
        Self { position, errors }
    }
}

impl From<(usize, ErrorLayer)> for Insertion {
    fn from((position, errors): (usize, ErrorLayer)) -> Self {
        Self::new(position, errors)
    }
}

/// Propagate `insertions` through `circuit`, recording the error state
/// entering each layer plus the final state.
///
/// The result always has `circuit.num_layers() + 1` entries. Insertions at
/// the same position are merged in the order given.
#[instrument(skip_all, fields(layers = circuit.num_layers(), insertions = insertions.len()))]
pub fn propagate_through_circuit(
    insertions: &[Insertion],
    circuit: &LayeredCircuit,
) -> PropResult<Vec<ErrorLayer>> {
    let num_layers = circuit.num_layers();
    let num_qubits = circuit.num_qubits();

    for insertion in insertions {
        if insertion.position > num_layers {
            return Err(PropError::InsertionOutOfRange {
                position: insertion.position,
                num_layers,
            });
        }
        if insertion.errors.num_qubits() > num_qubits {
            return Err(PropError::QubitRangeExceeded {
                error_qubits: insertion.errors.num_qubits(),
                layer_qubits: num_qubits,
            });
        }
    }

    // Stable sort keeps same-position insertions in their given order.
    let mut schedule: Vec<&Insertion> = insertions.iter().collect();
    schedule.sort_by_key(|insertion| insertion.position);
    let mut pending = schedule.into_iter().peekable();

    let mut current = ErrorLayer::empty(num_qubits);
    let mut states = Vec::with_capacity(num_layers + 1);

    for (index, layer) in circuit.layers().iter().enumerate() {
        current = merge_due(current, &mut pending, index, num_qubits)?;
        states.push(current.clone());
        current = propagate_layer(&current, layer)?;
    }
    current = merge_due(current, &mut pending, num_layers, num_qubits)?;
    debug!("final error after {} layers: {}", num_layers, current);
    states.push(current);

    Ok(states)
}

/// Fold every insertion scheduled at `position` into `current`.
fn merge_due<'a, I>(
    current: ErrorLayer,
    pending: &mut Peekable<I>,
    position: usize,
    num_qubits: u32,
) -> PropResult<ErrorLayer>
where
    I: Iterator<Item = &'a Insertion>,
{
    let due: Vec<&Insertion> =
        std::iter::from_fn(|| pending.next_if(|insertion| insertion.position == position)).collect();
    if due.is_empty() {
        return Ok(current);
    }

    let injected = due
        .iter()
        .flat_map(|insertion| insertion.errors.errors().iter().copied());
    let terms = simplify(current.into_errors().into_iter().chain(injected));
    Ok(ErrorLayer::new(terms, num_qubits)?)
}

/// The error state after the last layer.
pub fn final_error(insertions: &[Insertion], circuit: &LayeredCircuit) -> PropResult<ErrorLayer> {
    let states = propagate_through_circuit(insertions, circuit)?;
    Ok(states
        .into_iter()
        .last()
        .unwrap_or_else(|| ErrorLayer::empty(circuit.num_qubits())))
}

/// Propagate a single `pauli` error on `qubit`, injected before layer
/// `position`, to the end of the circuit.
pub fn commute_to_end(
    circuit: &LayeredCircuit,
    qubit: impl Into<QubitId>,
    position: usize,
    pauli: Pauli,
) -> PropResult<ErrorLayer> {
    let errors = ErrorLayer::single(pauli, qubit, circuit.num_qubits())?;
    final_error(&[Insertion::new(position, errors)], circuit)
}
