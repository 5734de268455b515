//! Property-based tests for layer validation.
//!
//! A layer is accepted exactly when every qubit is in range, every CX names
//! two distinct qubits, and no two gates share a qubit.

use paulitrace_ir::{ErrorLayer, Gate, IrError, Layer, Pauli, PauliError, SingleQubitGate};
use proptest::prelude::*;

fn arb_single_kind() -> impl Strategy<Value = SingleQubitGate> {
    prop_oneof![
        Just(SingleQubitGate::I),
        Just(SingleQubitGate::X),
        Just(SingleQubitGate::Y),
        Just(SingleQubitGate::Z),
        Just(SingleQubitGate::H),
        Just(SingleQubitGate::S),
        Just(SingleQubitGate::T),
    ]
}

/// Gates whose qubits may fall outside `0..num_qubits` by one.
fn arb_gate(num_qubits: u32) -> impl Strategy<Value = Gate> {
    prop_oneof![
        (arb_single_kind(), 0..=num_qubits).prop_map(|(kind, q)| Gate::single(kind, q)),
        (0..=num_qubits, 0..=num_qubits).prop_map(|(c, t)| Gate::cx(c, t)),
    ]
}

fn arb_layer_input() -> impl Strategy<Value = (u32, Vec<Gate>)> {
    (1_u32..=6).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_gate(n), 0..=5)))
}

fn arb_pauli() -> impl Strategy<Value = Pauli> {
    prop_oneof![Just(Pauli::X), Just(Pauli::Y), Just(Pauli::Z)]
}

fn expected_valid(gates: &[Gate], num_qubits: u32) -> bool {
    let mut seen = vec![false; num_qubits as usize + 1];
    for gate in gates {
        if let Gate::Cx { control, target } = *gate {
            if control == target {
                return false;
            }
        }
        for q in gate.qubits() {
            if q.0 >= num_qubits || seen[q.index()] {
                return false;
            }
            seen[q.index()] = true;
        }
    }
    true
}

proptest! {
    #[test]
    fn test_layer_accepts_exactly_disjoint_in_range_gates((n, gates) in arb_layer_input()) {
        let expected = expected_valid(&gates, n);
        let result = Layer::new(gates.clone(), n);
        prop_assert_eq!(result.is_ok(), expected, "gates: {:?}", gates);
        if let Ok(layer) = result {
            prop_assert_eq!(layer.gates(), gates.as_slice());
        }
    }

    #[test]
    fn test_error_layer_matches_layer_rules(
        n in 1_u32..=5,
        terms in prop::collection::vec((arb_pauli(), 0_u32..=5), 0..=4),
    ) {
        let errors: Vec<PauliError> = terms.iter().map(|&(p, q)| PauliError::new(p, q)).collect();
        let gates: Vec<Gate> = errors.iter().copied().map(Gate::from).collect();
        let expected = expected_valid(&gates, n);
        prop_assert_eq!(ErrorLayer::new(errors, n).is_ok(), expected);
    }

    #[test]
    fn test_error_layer_rejects_clifford_gates(q in 0_u32..4) {
        for gate in [Gate::h(q), Gate::s(q), Gate::single(SingleQubitGate::T, q)] {
            let result = ErrorLayer::from_gates([gate], 4);
            let rejected = matches!(result, Err(IrError::DisallowedErrorGate { .. }));
            prop_assert!(rejected);
        }
    }
}
