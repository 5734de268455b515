//! Gate and Pauli error types.
//!
//! Gates travel over the wire as compact tuples, `["H", 0]` or
//! `["CX", control, target]`, and are decoded into the closed [`Gate`] union.
//! Any tuple that does not name a known gate with the right arity is rejected
//! at decode time.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// A non-identity single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pauli {
    /// Bit flip.
    X,
    /// Combined bit and phase flip.
    Y,
    /// Phase flip.
    Z,
}

impl Pauli {
    /// All three Paulis in canonical order.
    pub const ALL: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Get the upper-case label of this Pauli.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        }
    }

    /// Two-bit code used for phase-free multiplication (I=0, X=1, Y=2, Z=3).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Pauli::X => 1,
            Pauli::Y => 2,
            Pauli::Z => 3,
        }
    }

    /// Inverse of [`Pauli::code`]. Returns `None` for the identity code and
    /// for anything outside two bits.
    #[inline]
    pub fn from_code(code: u8) -> Option<Pauli> {
        match code {
            1 => Some(Pauli::X),
            2 => Some(Pauli::Y),
            3 => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Multiply two Paulis, discarding the global phase.
    ///
    /// Returns `None` when the product is the identity.
    #[inline]
    pub fn product(self, other: Pauli) -> Option<Pauli> {
        Pauli::from_code(self.code() ^ other.code())
    }

    /// Two single-qubit Paulis anticommute iff they differ.
    #[inline]
    pub fn anticommutes_with(self, other: Pauli) -> bool {
        self != other
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pauli {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "X" => Ok(Pauli::X),
            "Y" => Ok(Pauli::Y),
            "Z" => Ok(Pauli::Z),
            _ => Err(IrError::InvalidPauliLabel(s.to_string())),
        }
    }
}

impl Serialize for Pauli {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Pauli {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

/// Single-qubit gates understood by the propagation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleQubitGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
}

impl SingleQubitGate {
    /// Get the upper-case name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            SingleQubitGate::I => "I",
            SingleQubitGate::X => "X",
            SingleQubitGate::Y => "Y",
            SingleQubitGate::Z => "Z",
            SingleQubitGate::H => "H",
            SingleQubitGate::S => "S",
            SingleQubitGate::T => "T",
        }
    }

    /// The Pauli this gate applies, if it is one.
    #[inline]
    pub fn as_pauli(self) -> Option<Pauli> {
        match self {
            SingleQubitGate::X => Some(Pauli::X),
            SingleQubitGate::Y => Some(Pauli::Y),
            SingleQubitGate::Z => Some(Pauli::Z),
            _ => None,
        }
    }
}

impl From<Pauli> for SingleQubitGate {
    fn from(pauli: Pauli) -> Self {
        match pauli {
            Pauli::X => SingleQubitGate::X,
            Pauli::Y => SingleQubitGate::Y,
            Pauli::Z => SingleQubitGate::Z,
        }
    }
}

impl FromStr for SingleQubitGate {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "I" => Ok(SingleQubitGate::I),
            "X" => Ok(SingleQubitGate::X),
            "Y" => Ok(SingleQubitGate::Y),
            "Z" => Ok(SingleQubitGate::Z),
            "H" => Ok(SingleQubitGate::H),
            "S" => Ok(SingleQubitGate::S),
            "T" => Ok(SingleQubitGate::T),
            _ => Err(IrError::UnknownGate(s.to_string())),
        }
    }
}

/// A gate placed on specific qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// A single-qubit gate.
    Single {
        /// Which gate.
        kind: SingleQubitGate,
        /// The qubit it acts on.
        qubit: QubitId,
    },
    /// Controlled-X (CNOT).
    Cx {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
}

impl Gate {
    /// Name used for the two-qubit CNOT on the wire.
    pub const CX_NAME: &'static str = "CX";

    /// Create a single-qubit gate.
    pub fn single(kind: SingleQubitGate, qubit: impl Into<QubitId>) -> Self {
        Gate::Single {
            kind,
            qubit: qubit.into(),
        }
    }

    /// Create a CNOT gate.
    pub fn cx(control: impl Into<QubitId>, target: impl Into<QubitId>) -> Self {
        Gate::Cx {
            control: control.into(),
            target: target.into(),
        }
    }

    /// Hadamard on `qubit`.
    pub fn h(qubit: impl Into<QubitId>) -> Self {
        Gate::single(SingleQubitGate::H, qubit)
    }

    /// S on `qubit`.
    pub fn s(qubit: impl Into<QubitId>) -> Self {
        Gate::single(SingleQubitGate::S, qubit)
    }

    /// Pauli-X on `qubit`.
    pub fn x(qubit: impl Into<QubitId>) -> Self {
        Gate::single(SingleQubitGate::X, qubit)
    }

    /// Pauli-Y on `qubit`.
    pub fn y(qubit: impl Into<QubitId>) -> Self {
        Gate::single(SingleQubitGate::Y, qubit)
    }

    /// Pauli-Z on `qubit`.
    pub fn z(qubit: impl Into<QubitId>) -> Self {
        Gate::single(SingleQubitGate::Z, qubit)
    }

    /// Build a gate from a literal `(name, qubits...)` tuple.
    ///
    /// Checks the name and the arity only; qubit bounds and distinctness are
    /// layer-level invariants checked by [`crate::Layer::new`].
    pub fn from_parts(name: &str, qubits: &[u32]) -> IrResult<Self> {
        if name.eq_ignore_ascii_case(Self::CX_NAME) {
            return match *qubits {
                [control, target] => Ok(Gate::cx(control, target)),
                _ => Err(IrError::QubitCountMismatch {
                    gate_name: Self::CX_NAME.into(),
                    expected: 2,
                    got: qubits.len(),
                }),
            };
        }

        let kind: SingleQubitGate = name.parse()?;
        match *qubits {
            [qubit] => Ok(Gate::single(kind, qubit)),
            _ => Err(IrError::QubitCountMismatch {
                gate_name: kind.name().into(),
                expected: 1,
                got: qubits.len(),
            }),
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Single { kind, .. } => kind.name(),
            Gate::Cx { .. } => Self::CX_NAME,
        }
    }

    /// Get the qubits this gate acts on, control first for CX.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Gate::Single { qubit, .. } => vec![qubit],
            Gate::Cx { control, target } => vec![control, target],
        }
    }

    /// Check whether this gate touches `qubit`.
    #[inline]
    pub fn acts_on(&self, qubit: QubitId) -> bool {
        match *self {
            Gate::Single { qubit: q, .. } => q == qubit,
            Gate::Cx { control, target } => control == qubit || target == qubit,
        }
    }

    /// Largest qubit index referenced by this gate.
    #[inline]
    pub fn max_qubit(&self) -> QubitId {
        match *self {
            Gate::Single { qubit, .. } => qubit,
            Gate::Cx { control, target } => control.max(target),
        }
    }
}

impl From<PauliError> for Gate {
    fn from(error: PauliError) -> Self {
        Gate::single(error.kind.into(), error.qubit)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Single { kind, qubit } => write!(f, "{}({})", kind.name(), qubit.0),
            Gate::Cx { control, target } => write!(f, "CX({}, {})", control.0, target.0),
        }
    }
}

impl Serialize for Gate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let qubits = self.qubits();
        let mut seq = serializer.serialize_seq(Some(qubits.len() + 1))?;
        seq.serialize_element(self.name())?;
        for qubit in qubits {
            seq.serialize_element(&qubit.0)?;
        }
        seq.end()
    }
}

struct GateVisitor;

impl<'de> Visitor<'de> for GateVisitor {
    type Value = Gate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a gate tuple like [\"H\", 0] or [\"CX\", 0, 1]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Gate, A::Error> {
        let name: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let mut qubits = Vec::with_capacity(2);
        while let Some(qubit) = seq.next_element::<u32>()? {
            qubits.push(qubit);
        }
        Gate::from_parts(&name, &qubits).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Gate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(GateVisitor)
    }
}

/// A single-qubit Pauli error.
///
/// Identity is never materialized; "no error" is the absence of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PauliError {
    /// Which Pauli.
    pub kind: Pauli,
    /// Where it sits.
    pub qubit: QubitId,
}

impl PauliError {
    /// Create a new error term.
    pub fn new(kind: Pauli, qubit: impl Into<QubitId>) -> Self {
        Self {
            kind,
            qubit: qubit.into(),
        }
    }

    /// X error on `qubit`.
    pub fn x(qubit: impl Into<QubitId>) -> Self {
        Self::new(Pauli::X, qubit)
    }

    /// Y error on `qubit`.
    pub fn y(qubit: impl Into<QubitId>) -> Self {
        Self::new(Pauli::Y, qubit)
    }

    /// Z error on `qubit`.
    pub fn z(qubit: impl Into<QubitId>) -> Self {
        Self::new(Pauli::Z, qubit)
    }
}

impl TryFrom<Gate> for PauliError {
    type Error = IrError;

    fn try_from(gate: Gate) -> IrResult<Self> {
        match gate {
            Gate::Single { kind, qubit } => kind
                .as_pauli()
                .map(|pauli| PauliError::new(pauli, qubit))
                .ok_or_else(|| IrError::DisallowedErrorGate {
                    gate_name: kind.name().into(),
                }),
            Gate::Cx { .. } => Err(IrError::DisallowedErrorGate {
                gate_name: Gate::CX_NAME.into(),
            }),
        }
    }
}

impl fmt::Display for PauliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.qubit.0)
    }
}

impl Serialize for PauliError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Gate::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PauliError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let gate = Gate::deserialize(deserializer)?;
        PauliError::try_from(gate).map_err(de::Error::custom)
    }
}
