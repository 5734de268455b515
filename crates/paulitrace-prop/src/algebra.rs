//! Commutation rules and phase-free Pauli simplification.
//!
//! Moving a Pauli error `P` from before a Clifford gate `G` to after it
//! rewrites it to `G P G†`. Only which labels end up on which qubits is
//! tracked; the ±1 global phase some rewrites introduce is dropped, since
//! detectability does not depend on it.
//!
//! | Gate | Incoming | Outgoing |
//! |------|----------|----------|
//! | `I`, `X`, `Y`, `Z`, `T` | any | unchanged |
//! | `H` | X / Y / Z | Z / Y / X |
//! | `S` | X / Y / Z | Y / X / Z |
//! | `CX` control | X / Y / Z | X_c X_t / Y_c X_t / Z_c |
//! | `CX` target | X / Y / Z | X_t / Y_t Z_c / Z_t Z_c |

use std::collections::BTreeMap;

use paulitrace_ir::{Gate, Pauli, PauliError, QubitId, SingleQubitGate};

/// Rewrite `error` as the equivalent error(s) after `gate`.
///
/// Errors on qubits the gate does not touch pass through unchanged, as does
/// any combination without a rule.
pub fn commute(error: PauliError, gate: &Gate) -> Vec<PauliError> {
    if !gate.acts_on(error.qubit) {
        return vec![error];
    }

    match *gate {
        Gate::Single { kind, qubit } => {
            let rewritten = match (kind, error.kind) {
                (SingleQubitGate::H, Pauli::X) => Pauli::Z,
                (SingleQubitGate::H, Pauli::Z) => Pauli::X,
                (SingleQubitGate::S, Pauli::X) => Pauli::Y,
                (SingleQubitGate::S, Pauli::Y) => Pauli::X,
                (_, unchanged) => unchanged,
            };
            vec![PauliError::new(rewritten, qubit)]
        }

        Gate::Cx { control, target } if error.qubit == control => match error.kind {
            Pauli::X => vec![PauliError::x(control), PauliError::x(target)],
            Pauli::Z => vec![PauliError::z(control)],
            Pauli::Y => vec![PauliError::y(control), PauliError::x(target)],
        },

        Gate::Cx { control, target } => match error.kind {
            Pauli::X => vec![PauliError::x(target)],
            Pauli::Z => vec![PauliError::z(target), PauliError::z(control)],
            Pauli::Y => vec![PauliError::y(target), PauliError::z(control)],
        },
    }
}

/// Collapse all terms on the same qubit into one, dropping identities.
///
/// Terms are folded by XOR of their two-bit codes, which is Pauli
/// multiplication modulo phase. Output is sorted by ascending qubit.
pub fn simplify(errors: impl IntoIterator<Item = PauliError>) -> Vec<PauliError> {
    let mut folded: BTreeMap<QubitId, u8> = BTreeMap::new();
    for error in errors {
        *folded.entry(error.qubit).or_insert(0) ^= error.kind.code();
    }

    folded
        .into_iter()
        .filter_map(|(qubit, code)| Pauli::from_code(code).map(|kind| PauliError::new(kind, qubit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pauli_gates_commute() {
        for gate in [Gate::x(0), Gate::y(0), Gate::z(0)] {
            for err in [PauliError::x(0), PauliError::y(0), PauliError::z(0)] {
                assert_eq!(commute(err, &gate), vec![err]);
            }
        }
    }

    #[test]
    fn test_hadamard_rules() {
        assert_eq!(commute(PauliError::x(0), &Gate::h(0)), vec![PauliError::z(0)]);
        assert_eq!(commute(PauliError::z(0), &Gate::h(0)), vec![PauliError::x(0)]);
        assert_eq!(commute(PauliError::y(0), &Gate::h(0)), vec![PauliError::y(0)]);
    }

    #[test]
    fn test_s_rules() {
        assert_eq!(commute(PauliError::x(0), &Gate::s(0)), vec![PauliError::y(0)]);
        assert_eq!(commute(PauliError::y(0), &Gate::s(0)), vec![PauliError::x(0)]);
        assert_eq!(commute(PauliError::z(0), &Gate::s(0)), vec![PauliError::z(0)]);
    }

    #[test]
    fn test_unruled_gates_pass_through() {
        let t = Gate::single(SingleQubitGate::T, 0);
        let id = Gate::single(SingleQubitGate::I, 0);
        assert_eq!(commute(PauliError::x(0), &t), vec![PauliError::x(0)]);
        assert_eq!(commute(PauliError::y(0), &id), vec![PauliError::y(0)]);
    }

    #[test]
    fn test_other_qubit_untouched() {
        assert_eq!(commute(PauliError::x(1), &Gate::h(0)), vec![PauliError::x(1)]);
        assert_eq!(commute(PauliError::y(1), &Gate::s(0)), vec![PauliError::y(1)]);
        assert_eq!(commute(PauliError::x(2), &Gate::cx(0, 1)), vec![PauliError::x(2)]);
    }

    #[test]
    fn test_cx_control_rules() {
        let cx = Gate::cx(0, 1);
        assert_eq!(
            commute(PauliError::x(0), &cx),
            vec![PauliError::x(0), PauliError::x(1)]
        );
        assert_eq!(commute(PauliError::z(0), &cx), vec![PauliError::z(0)]);
        assert_eq!(
            commute(PauliError::y(0), &cx),
            vec![PauliError::y(0), PauliError::x(1)]
        );
    }

    #[test]
    fn test_cx_target_rules() {
        let cx = Gate::cx(0, 1);
        assert_eq!(commute(PauliError::x(1), &cx), vec![PauliError::x(1)]);
        assert_eq!(
            commute(PauliError::z(1), &cx),
            vec![PauliError::z(1), PauliError::z(0)]
        );
        assert_eq!(
            commute(PauliError::y(1), &cx),
            vec![PauliError::y(1), PauliError::z(0)]
        );
    }

    #[test]
    fn test_simplify_cancellation() {
        assert!(simplify([PauliError::x(0), PauliError::x(0)]).is_empty());
        assert!(simplify(Vec::<PauliError>::new()).is_empty());
    }

    #[test]
    fn test_simplify_products() {
        assert_eq!(simplify([PauliError::x(0), PauliError::y(0)]), vec![PauliError::z(0)]);
        assert_eq!(simplify([PauliError::y(0), PauliError::z(0)]), vec![PauliError::x(0)]);
        assert_eq!(simplify([PauliError::z(0), PauliError::x(0)]), vec![PauliError::y(0)]);
        assert_eq!(simplify([PauliError::x(0), PauliError::z(0)]), vec![PauliError::y(0)]);
    }

    #[test]
    fn test_simplify_multiple_qubits_sorted() {
        let result = simplify([
            PauliError::y(2),
            PauliError::x(0),
            PauliError::z(1),
            PauliError::x(0),
        ]);
        assert_eq!(result, vec![PauliError::z(1), PauliError::y(2)]);
    }

    #[test]
    fn test_simplify_three_terms() {
        // X·Y·Z is the identity up to phase.
        assert!(simplify([PauliError::x(3), PauliError::y(3), PauliError::z(3)]).is_empty());
    }
}
