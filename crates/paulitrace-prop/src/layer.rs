//! Propagation of an error layer through one gate layer.

use tracing::trace;

use paulitrace_ir::{ErrorLayer, Layer};

use crate::algebra::{commute, simplify};
use crate::error::{PropError, PropResult};

/// Propagate `errors` through `layer`.
///
/// Each term is threaded through every gate of the layer in order. Since
/// the gates are disjoint, at most one of them touches a given qubit, so
/// the order does not matter. The result is simplified and declared over
/// the layer's qubit count.
pub fn propagate_layer(errors: &ErrorLayer, layer: &Layer) -> PropResult<ErrorLayer> {
    if errors.num_qubits() > layer.num_qubits() {
        return Err(PropError::QubitRangeExceeded {
            error_qubits: errors.num_qubits(),
            layer_qubits: layer.num_qubits(),
        });
    }

    let mut propagated = Vec::with_capacity(errors.len());
    for &error in errors.errors() {
        let mut terms = vec![error];
        for gate in layer.gates() {
            terms = terms.into_iter().flat_map(|term| commute(term, gate)).collect();
        }
        propagated.extend(terms);
    }

    let result = ErrorLayer::new(simplify(propagated), layer.num_qubits())?;
    trace!("{} through {} -> {}", errors, layer, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paulitrace_ir::{Gate, PauliError};

    #[test]
    fn test_simple_propagation() {
        let errors = ErrorLayer::new([PauliError::x(0)], 2).unwrap();
        let layer = Layer::new([Gate::h(0)], 2).unwrap();
        let result = propagate_layer(&errors, &layer).unwrap();
        assert_eq!(result.errors(), &[PauliError::z(0)]);
    }

    #[test]
    fn test_multiple_errors_through_multiple_gates() {
        let errors = ErrorLayer::new([PauliError::x(0), PauliError::z(1)], 2).unwrap();
        let layer = Layer::new([Gate::h(0), Gate::s(1)], 2).unwrap();
        let result = propagate_layer(&errors, &layer).unwrap();
        assert_eq!(result.errors(), &[PauliError::z(0), PauliError::z(1)]);
    }

    #[test]
    fn test_cx_spreads_error() {
        let errors = ErrorLayer::new([PauliError::x(0)], 2).unwrap();
        let layer = Layer::new([Gate::cx(0, 1)], 2).unwrap();
        let result = propagate_layer(&errors, &layer).unwrap();
        assert_eq!(result.errors(), &[PauliError::x(0), PauliError::x(1)]);
    }

    #[test]
    fn test_cx_cancels_error() {
        // X_c X_t through CX becomes X_c X_t X_t = X_c.
        let errors = ErrorLayer::new([PauliError::x(0), PauliError::x(1)], 2).unwrap();
        let layer = Layer::new([Gate::cx(0, 1)], 2).unwrap();
        let result = propagate_layer(&errors, &layer).unwrap();
        assert_eq!(result.errors(), &[PauliError::x(0)]);
    }

    #[test]
    fn test_result_takes_layer_width() {
        let errors = ErrorLayer::new([PauliError::y(0)], 1).unwrap();
        let layer = Layer::new([Gate::x(2)], 3).unwrap();
        let result = propagate_layer(&errors, &layer).unwrap();
        assert_eq!(result.num_qubits(), 3);
        assert_eq!(result.errors(), &[PauliError::y(0)]);
    }

    #[test]
    fn test_empty_error_layer() {
        let layer = Layer::new([Gate::cx(0, 1)], 2).unwrap();
        let result = propagate_layer(&ErrorLayer::empty(2), &layer).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_range_failure() {
        let errors = ErrorLayer::new([PauliError::x(2)], 3).unwrap();
        let layer = Layer::new([Gate::h(0)], 2).unwrap();
        assert!(matches!(
            propagate_layer(&errors, &layer),
            Err(PropError::QubitRangeExceeded {
                error_qubits: 3,
                layer_qubits: 2
            })
        ));
    }
}
