//! Problem normalization onto the solver's coordinate system.
//!
//! Produces the `lin`/`quad` arrays of the `qp` payload: `lin` carries
//! one entry per solver qubit in solver order (`null` for qubits the
//! embedded problem never used, a bias defaulting to 0 for active ones),
//! and `quad` carries one entry per solver coupler whose endpoints are
//! both active, summing both key directions of the coupling map.
//! Couplers with an inactive endpoint are omitted, never emitted as 0.

use rustc_hash::FxHashSet;
use tracing::warn;

use muninn_model::Ising;
use muninn_solver::SolverTopology;

use crate::error::{InspectError, InspectResult, Leniency, Policy};

/// Normalize a problem's (h, J) display form against a solver topology.
///
/// Out-of-topology references are dropped with a warning under
/// [`Leniency::Tolerate`] and abort the conversion under
/// [`Leniency::Fail`].
pub fn normalize_problem(
    display: &Ising,
    topology: &SolverTopology,
    active_variables: &[u32],
    policy: Policy,
    warnings: &mut Vec<String>,
) -> InspectResult<(Vec<Option<f64>>, Vec<f64>)> {
    if display.h.values().any(|bias| !bias.is_finite()) {
        return Err(InspectError::NonFiniteValue { field: "lin" });
    }
    if display.j.values().any(|bias| !bias.is_finite()) {
        return Err(InspectError::NonFiniteValue { field: "quad" });
    }

    check_references(display, topology, policy, warnings)?;

    let active: FxHashSet<u32> = active_variables.iter().copied().collect();

    let lin = topology
        .encoding_qubits
        .iter()
        .map(|qubit| {
            if active.contains(qubit) {
                Some(display.h.get(qubit).copied().unwrap_or(0.0))
            } else {
                None
            }
        })
        .collect();

    let quad = topology
        .encoding_couplers
        .iter()
        .filter(|(u, v)| active.contains(u) && active.contains(v))
        .map(|&(u, v)| display.coupling(u, v))
        .collect();

    Ok((lin, quad))
}

/// Detect problem references the solver topology cannot express.
fn check_references(
    display: &Ising,
    topology: &SolverTopology,
    policy: Policy,
    warnings: &mut Vec<String>,
) -> InspectResult<()> {
    let qubits = topology.qubit_set();
    let couplers: FxHashSet<(u32, u32)> = topology
        .encoding_couplers
        .iter()
        .map(|&(u, v)| (u.min(v), u.max(v)))
        .collect();

    let mut stray_qubits: Vec<u32> = display
        .h
        .keys()
        .copied()
        .filter(|q| !qubits.contains(q))
        .collect();
    stray_qubits.sort_unstable();
    stray_qubits.dedup();

    let mut stray_couplers: Vec<(u32, u32)> = display
        .j
        .keys()
        .copied()
        .filter(|&(u, v)| !couplers.contains(&(u.min(v), u.max(v))))
        .collect();
    stray_couplers.sort_unstable();
    stray_couplers.dedup();

    if policy.unknown_index == Leniency::Fail {
        if let Some(&qubit) = stray_qubits.first() {
            return Err(InspectError::QubitNotInTopology(qubit));
        }
        if let Some(&(u, v)) = stray_couplers.first() {
            return Err(InspectError::CouplerNotInTopology(u, v));
        }
        return Ok(());
    }

    for qubit in stray_qubits {
        warn!(qubit, "problem references qubit outside solver topology");
        warnings.push(format!(
            "qubit {qubit} not in solver topology; dropped from display"
        ));
    }
    for (u, v) in stray_couplers {
        warn!(u, v, "problem references coupler outside solver topology");
        warnings.push(format!(
            "coupler ({u}, {v}) not in solver topology; dropped from display"
        ));
    }
    Ok(())
}
