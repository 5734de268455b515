//! Single-step propagation over a [`CircuitIr`] document.
//!
//! Each call moves the first `"error"` layer forward by exactly one
//! position. Repeated calls walk an error through the whole circuit:
//!
//! ```text
//! [error X0] [normal H0]   -- step -->   [normal H0] [error Z0]
//! ```
//!
//! A position vacated by an error that moved on becomes an empty `"normal"`
//! layer, so the first error index strictly increases with every step that
//! changes the document. This holds in every case, including a shift across
//! an empty layer and a merge into a following error layer: the vacated
//! layer is not left behind as an `"error"` layer with its gates cleared,
//! which would keep it the first error layer forever.

use tracing::{debug, instrument};

use paulitrace_ir::{CircuitIr, ErrorLayer, IrError, IrLayer, Layer, PauliError};

use crate::algebra::simplify;
use crate::error::PropResult;
use crate::layer::propagate_layer;

/// Advance the first error layer of `doc` by one position.
///
/// Returns the document unchanged when there is no error layer or the first
/// one is already last. Otherwise the layer the error leaves is emitted as
/// `{"type":"normal"}`: holding the gates the error commuted through, or
/// no gates when the error shifted or merged.
pub fn step_once(doc: &CircuitIr) -> PropResult<CircuitIr> {
    let index = match doc.first_error_index() {
        Some(index) if index + 1 < doc.len() => index,
        _ => return Ok(doc.clone()),
    };

    let mut layers = doc.clone().into_layers();
    let current = std::mem::replace(&mut layers[index], IrLayer::normal([]));
    let next = &layers[index + 1];

    if next.gates.is_empty() {
        // Nothing to commute through; the error moves verbatim.
        debug!("step {}: shift across empty layer", index);
        layers[index + 1] = IrLayer::error(current.gates);
    } else if next.is_error() {
        debug!("step {}: merge into following error layer", index);
        let terms = current
            .gates
            .iter()
            .chain(&next.gates)
            .map(|&gate| PauliError::try_from(gate))
            .collect::<Result<Vec<_>, _>>()?;
        layers[index + 1] = IrLayer::error(simplify(terms).into_iter().map(Into::into));
    } else {
        let widest = current
            .gates
            .iter()
            .chain(&next.gates)
            .max_by_key(|gate| gate.max_qubit());
        let num_qubits = match widest {
            Some(gate) => {
                let qubit = gate.max_qubit();
                qubit.0.checked_add(1).ok_or_else(|| IrError::QubitOutOfRange {
                    gate: gate.to_string(),
                    qubit,
                    num_qubits: u32::MAX,
                })?
            }
            None => 0,
        };
        debug!(
            "step {}: propagate through {} gates on {} qubits",
            index,
            next.gates.len(),
            num_qubits
        );

        let gates = next.gates.clone();
        let layer = Layer::new(gates.iter().copied(), num_qubits)?;
        let errors = ErrorLayer::from_gates(current.gates, num_qubits)?;
        let propagated = propagate_layer(&errors, &layer)?;

        layers[index] = IrLayer::normal(gates);
        layers[index + 1] = IrLayer::error(propagated.to_gates());
    }

    Ok(CircuitIr::from(layers))
}

/// Step `doc` until it is terminal, returning the document after each step.
///
/// The input itself is not included; a terminal input yields an empty list.
#[instrument(skip_all, fields(layers = doc.len()))]
pub fn step_to_end(doc: &CircuitIr) -> PropResult<Vec<CircuitIr>> {
    let mut walk = Vec::new();
    let mut current = doc.clone();
    while !current.is_terminal() {
        current = step_once(&current)?;
        walk.push(current.clone());
    }
    debug!("reached terminal document after {} steps", walk.len());
    Ok(walk)
}
