//! Property-based tests for the propagation algebra.

use paulitrace_ir::{
    CircuitIr, ErrorLayer, Gate, IrLayer, Layer, LayeredCircuit, Pauli, PauliError, SingleQubitGate,
};
use paulitrace_prop::{Insertion, final_error, propagate_layer, simplify, step_once, step_to_end};
use proptest::prelude::*;

const NUM_QUBITS: u32 = 4;

fn arb_pauli() -> impl Strategy<Value = Pauli> {
    prop_oneof![Just(Pauli::X), Just(Pauli::Y), Just(Pauli::Z)]
}

fn arb_error() -> impl Strategy<Value = PauliError> {
    (arb_pauli(), 0..NUM_QUBITS).prop_map(|(kind, q)| PauliError::new(kind, q))
}

fn arb_clifford_kind() -> impl Strategy<Value = SingleQubitGate> {
    prop_oneof![
        Just(SingleQubitGate::I),
        Just(SingleQubitGate::X),
        Just(SingleQubitGate::Z),
        Just(SingleQubitGate::H),
        Just(SingleQubitGate::S),
        Just(SingleQubitGate::T),
    ]
}

/// A valid layer: a random permutation of the qubits, paired up into CXs or
/// given single-qubit gates.
fn arb_layer() -> impl Strategy<Value = Vec<Gate>> {
    (
        Just((0..NUM_QUBITS).collect::<Vec<_>>()).prop_shuffle(),
        prop::collection::vec((any::<bool>(), arb_clifford_kind()), NUM_QUBITS as usize),
    )
        .prop_map(|(order, choices)| {
            let mut gates = Vec::new();
            let mut i = 0;
            while i < order.len() {
                let (pair, kind) = choices[i];
                if pair && i + 1 < order.len() {
                    gates.push(Gate::cx(order[i], order[i + 1]));
                    i += 2;
                } else {
                    gates.push(Gate::single(kind, order[i]));
                    i += 1;
                }
            }
            gates
        })
}

fn arb_circuit() -> impl Strategy<Value = LayeredCircuit> {
    prop::collection::vec(arb_layer(), 0..6)
        .prop_map(|lists| LayeredCircuit::from_gate_lists(lists, NUM_QUBITS).unwrap())
}

fn arb_ir_layer() -> impl Strategy<Value = IrLayer> {
    prop_oneof![
        2 => arb_layer().prop_map(|gates| IrLayer::normal(gates)),
        1 => Just(IrLayer::normal([])),
        1 => prop::collection::vec(arb_error(), 0..3)
            .prop_map(|errs| IrLayer::error(simplify(errs).into_iter().map(Gate::from))),
    ]
}

proptest! {
    #[test]
    fn test_simplify_idempotent(errors in prop::collection::vec(arb_error(), 0..12)) {
        let once = simplify(errors);
        let twice = simplify(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_simplify_order_independent(errors in prop::collection::vec(arb_error(), 0..12)) {
        let mut reversed = errors.clone();
        reversed.reverse();
        prop_assert_eq!(simplify(errors), simplify(reversed));
    }

    #[test]
    fn test_simplify_one_term_per_qubit(errors in prop::collection::vec(arb_error(), 0..12)) {
        let simplified = simplify(errors);
        prop_assert!(simplified.windows(2).all(|w| w[0].qubit < w[1].qubit));
    }

    #[test]
    fn test_layer_gate_order_irrelevant(
        gates in arb_layer(),
        errors in prop::collection::vec(arb_error(), 0..4),
    ) {
        let errors = ErrorLayer::new(simplify(errors), NUM_QUBITS).unwrap();
        let forward = Layer::new(gates.clone(), NUM_QUBITS).unwrap();
        let backward = Layer::new(gates.into_iter().rev(), NUM_QUBITS).unwrap();
        prop_assert_eq!(
            propagate_layer(&errors, &forward).unwrap(),
            propagate_layer(&errors, &backward).unwrap()
        );
    }

    #[test]
    fn test_single_error_never_vanishes(
        circuit in arb_circuit(),
        kind in arb_pauli(),
        qubit in 0..NUM_QUBITS,
    ) {
        let errors = ErrorLayer::single(kind, qubit, NUM_QUBITS).unwrap();
        let result = final_error(&[Insertion::new(0, errors)], &circuit).unwrap();
        prop_assert!(!result.is_empty());
    }

    #[test]
    fn test_step_walk_terminates(layers in prop::collection::vec(arb_ir_layer(), 0..8)) {
        let doc = CircuitIr::new(layers);
        let walk = step_to_end(&doc).unwrap();
        prop_assert!(walk.len() <= doc.len());
        if let Some(last) = walk.last() {
            prop_assert!(last.is_terminal());
            prop_assert_eq!(last.len(), doc.len());
            prop_assert_eq!(&step_once(last).unwrap(), last);
        }
    }

    #[test]
    fn test_step_walk_matches_circuit_propagation(
        circuit in arb_circuit(),
        kind in arb_pauli(),
        qubit in 0..NUM_QUBITS,
    ) {
        let error = PauliError::new(kind, qubit);
        let mut layers = vec![IrLayer::error([Gate::from(error)])];
        layers.extend(circuit.layers().iter().map(|l| IrLayer::normal(l.gates().iter().copied())));
        let doc = CircuitIr::new(layers);

        let walk = step_to_end(&doc).unwrap();
        let end = walk.last().unwrap_or(&doc);
        let stepped = ErrorLayer::from_gates(end.layers()[end.len() - 1].gates.clone(), NUM_QUBITS)
            .unwrap();

        let expected = final_error(
            &[Insertion::new(0, ErrorLayer::new([error], NUM_QUBITS).unwrap())],
            &circuit,
        )
        .unwrap();
        prop_assert!(stepped.is_equivalent(&expected));
    }
}
