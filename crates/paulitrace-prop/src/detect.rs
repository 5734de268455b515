//! Detectability analysis.
//!
//! Every single-qubit Pauli error that could occur anywhere in a circuit is
//! pushed to the end, collapsed to its distinct final forms, and then
//! filtered by what ancilla measurements and stabilizers would catch. What
//! survives the filters is the set of undetected errors.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, instrument};

use paulitrace_ir::{ErrorLayer, IrError, LayeredCircuit, Pauli, PauliError, QubitId};

use crate::circuit::commute_to_end;
use crate::error::{PropError, PropResult};

// ============================================================================
// Enumeration
// ============================================================================

/// Where a single-qubit error was injected.
///
/// Ordered by position, then qubit, then Pauli, which is the enumeration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ErrorOrigin {
    /// Layer index the error was injected before.
    pub position: usize,
    /// Qubit the error was injected on.
    pub qubit: QubitId,
    /// The injected Pauli.
    pub pauli: Pauli,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}@{}", self.pauli, self.qubit.0, self.position)
    }
}

/// A distinct final error together with the first origin producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalError {
    /// The error at the end of the circuit.
    pub error: ErrorLayer,
    /// First insertion point, in enumeration order, that produces `error`.
    pub origin: ErrorOrigin,
}

/// All insertion points of `circuit` in enumeration order.
fn origins(circuit: &LayeredCircuit) -> Vec<ErrorOrigin> {
    let num_qubits = circuit.num_qubits();
    (0..=circuit.num_layers())
        .flat_map(|position| {
            (0..num_qubits).flat_map(move |qubit| {
                Pauli::ALL.into_iter().map(move |pauli| ErrorOrigin {
                    position,
                    qubit: QubitId(qubit),
                    pauli,
                })
            })
        })
        .collect()
}

/// Propagate every single-qubit error at every position to the end of
/// `circuit` and keep one result per distinct final error.
///
/// The per-origin propagations run in parallel; the results are collected
/// in enumeration order, so the kept origin is always the first one.
#[instrument(skip_all, fields(layers = circuit.num_layers(), qubits = circuit.num_qubits()))]
pub fn enumerate_final_errors(circuit: &LayeredCircuit) -> PropResult<Vec<FinalError>> {
    let origins = origins(circuit);

    let propagated = origins
        .par_iter()
        .map(|&origin| {
            commute_to_end(circuit, origin.qubit, origin.position, origin.pauli)
                .map(|error| FinalError { error, origin })
        })
        .collect::<PropResult<Vec<_>>>()?;

    let mut seen: FxHashSet<Vec<PauliError>> = FxHashSet::default();
    let distinct: Vec<FinalError> = propagated
        .into_iter()
        .filter(|result| seen.insert(result.error.signature()))
        .collect();

    debug!(
        "{} insertion points, {} distinct final errors",
        origins.len(),
        distinct.len()
    );
    Ok(distinct)
}

// ============================================================================
// Ancilla checks
// ============================================================================

/// An ancilla measuring one data qubit in a fixed Pauli basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AncillaCheck {
    /// Monitored data qubit.
    pub qubit: QubitId,
    /// Measurement basis.
    pub basis: Pauli,
}

impl AncillaCheck {
    /// Create a new check.
    pub fn new(qubit: impl Into<QubitId>, basis: Pauli) -> Self {
        Self {
            qubit: qubit.into(),
            basis,
        }
    }

    /// A check in basis `B` sees an error `E` on its qubit iff `E != B`.
    pub fn detects(&self, error: PauliError) -> bool {
        error.qubit == self.qubit && self.basis.anticommutes_with(error.kind)
    }
}

/// Drop every result with at least one term seen by an ancilla.
///
/// `ancilla_qubits[i]` is measured in `ancilla_bases[i]`. A qubit may be
/// monitored more than once; every basis on it is consulted.
pub fn filter_by_ancilla_checks(
    results: &[FinalError],
    ancilla_qubits: &[QubitId],
    ancilla_bases: &[Pauli],
) -> PropResult<Vec<FinalError>> {
    if ancilla_qubits.len() != ancilla_bases.len() {
        return Err(PropError::AncillaLengthMismatch {
            indices: ancilla_qubits.len(),
            bases: ancilla_bases.len(),
        });
    }

    let checks: Vec<AncillaCheck> = ancilla_qubits
        .iter()
        .zip(ancilla_bases)
        .map(|(&qubit, &basis)| AncillaCheck::new(qubit, basis))
        .collect();
    Ok(apply_ancilla_checks(results, &checks))
}

/// Same as [`filter_by_ancilla_checks`] over paired checks.
pub fn apply_ancilla_checks(results: &[FinalError], checks: &[AncillaCheck]) -> Vec<FinalError> {
    let mut by_qubit: FxHashMap<QubitId, Vec<AncillaCheck>> = FxHashMap::default();
    for check in checks {
        by_qubit.entry(check.qubit).or_default().push(*check);
    }

    results
        .iter()
        .filter(|result| {
            !result.error.errors().iter().any(|&term| {
                by_qubit
                    .get(&term.qubit)
                    .is_some_and(|on_qubit| on_qubit.iter().any(|check| check.detects(term)))
            })
        })
        .cloned()
        .collect()
}

// ============================================================================
// Stabilizers
// ============================================================================

/// A multi-qubit Pauli string such as `XZZXI`; position `i` acts on qubit `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString {
    ops: Vec<Option<Pauli>>,
}

impl PauliString {
    /// Create from per-qubit operators, `None` being the identity.
    pub fn new(ops: impl IntoIterator<Item = Option<Pauli>>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }

    /// Number of qubits covered.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the string covers no qubits.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Operator on `qubit`; identity past the end.
    pub fn get(&self, qubit: QubitId) -> Option<Pauli> {
        self.ops.get(qubit.index()).copied().flatten()
    }

    /// Check whether `error` commutes with this string.
    ///
    /// The anticommuting terms are counted; an even count commutes.
    pub fn commutes_with(&self, error: &ErrorLayer) -> bool {
        let parity = error
            .errors()
            .iter()
            .filter(|term| self.get(term.qubit).is_some_and(|op| op.anticommutes_with(term.kind)))
            .count()
            % 2;
        parity == 0
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            f.write_str(op.map_or("I", Pauli::name))?;
        }
        Ok(())
    }
}

impl FromStr for PauliString {
    type Err = PropError;

    fn from_str(s: &str) -> PropResult<Self> {
        let ops = s
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'I' => Ok(None),
                'X' => Ok(Some(Pauli::X)),
                'Y' => Ok(Some(Pauli::Y)),
                'Z' => Ok(Some(Pauli::Z)),
                _ => Err(IrError::InvalidPauliLabel(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ops })
    }
}

impl Serialize for PauliString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PauliString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Check that every stabilizer covers exactly `expected` qubits.
pub fn check_stabilizer_lengths(stabilizers: &[PauliString], expected: usize) -> PropResult<()> {
    match stabilizers.iter().find(|s| s.len() != expected) {
        Some(bad) => Err(PropError::StabilizerLength {
            stabilizer: bad.to_string(),
            expected,
            got: bad.len(),
        }),
        None => Ok(()),
    }
}

/// Keep only results that commute with every stabilizer.
///
/// Each stabilizer must cover exactly the qubits of the result's error
/// layer. Lengths are checked against the results, so an empty `results`
/// accepts any stabilizers; [`analyze`] checks them against the circuit
/// before filtering.
pub fn filter_by_stabilizers(
    results: &[FinalError],
    stabilizers: &[PauliString],
) -> PropResult<Vec<FinalError>> {
    let mut kept = Vec::with_capacity(results.len());
    for result in results {
        check_stabilizer_lengths(stabilizers, result.error.num_qubits() as usize)?;
        if stabilizers.iter().all(|s| s.commutes_with(&result.error)) {
            kept.push(result.clone());
        }
    }
    Ok(kept)
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a full detectability analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectabilityReport {
    /// Qubits in the analyzed circuit.
    pub num_qubits: u32,
    /// Layers in the analyzed circuit.
    pub num_layers: usize,
    /// Number of single-qubit insertion points tried.
    pub insertion_points: usize,
    /// Distinct final errors.
    pub distinct: Vec<FinalError>,
    /// Distinct final errors missed by every ancilla check.
    pub after_ancillas: Vec<FinalError>,
    /// Errors missed by the ancillas that also commute with every stabilizer.
    pub undetected: Vec<FinalError>,
}

impl DetectabilityReport {
    /// Check if every possible single-qubit error is caught.
    pub fn all_detected(&self) -> bool {
        self.undetected.is_empty()
    }
}

/// Enumerate final errors and run both filters.
#[instrument(skip_all, fields(ancillas = ancillas.len(), stabilizers = stabilizers.len()))]
pub fn analyze(
    circuit: &LayeredCircuit,
    ancillas: &[AncillaCheck],
    stabilizers: &[PauliString],
) -> PropResult<DetectabilityReport> {
    check_stabilizer_lengths(stabilizers, circuit.num_qubits() as usize)?;

    let distinct = enumerate_final_errors(circuit)?;
    let after_ancillas = apply_ancilla_checks(&distinct, ancillas);
    let undetected = filter_by_stabilizers(&after_ancillas, stabilizers)?;

    info!(
        "{} distinct final errors, {} pass ancillas, {} undetected",
        distinct.len(),
        after_ancillas.len(),
        undetected.len()
    );

    Ok(DetectabilityReport {
        num_qubits: circuit.num_qubits(),
        num_layers: circuit.num_layers(),
        insertion_points: (circuit.num_layers() + 1) * circuit.num_qubits() as usize * Pauli::ALL.len(),
        distinct,
        after_ancillas,
        undetected,
    })
}
