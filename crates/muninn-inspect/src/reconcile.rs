//! Physical-row reconstruction from resolved sample sets.
//!
//! When the input is a logical sample set, chain breaks have already
//! been resolved upstream and no per-physical-qubit answer survives. To
//! still present a physical-qubit-indexed answer, each shot's resolved
//! logical value is broadcast to every qubit of the variable's chain;
//! qubits outside every chain keep the service filler value.
//!
//! This is a best-effort display reconstruction and is inherently lossy:
//! which physical qubits inside a chain disagreed before resolution is
//! not recoverable from the resolved samples, so the reconstructed rows
//! never show a broken chain.

use tracing::warn;

use muninn_model::{Embedding, SampleSet};
use muninn_solver::{SolverTopology, UNUSED_QUBIT};

use crate::error::{InspectError, InspectResult, Leniency, Policy};

/// Rebuild full-width physical solution rows from a resolved sample set.
///
/// Rows are sized to the solver's row width and handed to the answer
/// encoder for projection, exactly like raw service rows.
pub fn reconcile_chain_breaks(
    sampleset: &SampleSet,
    embedding: &Embedding,
    topology: &SolverTopology,
    policy: Policy,
    warnings: &mut Vec<String>,
) -> InspectResult<Vec<Vec<i8>>> {
    let width = topology.row_width();
    let known = topology.qubit_set();
    let columns = sampleset.variable_indices();

    // Qubit -> sample column, dropping or rejecting chain qubits the
    // solver does not recognize.
    let mut placements: Vec<(u32, usize)> = Vec::new();
    let mut stray: Vec<u32> = Vec::new();
    for (&qubit, var) in &embedding.invert() {
        let column = *columns
            .get(var)
            .ok_or_else(|| InspectError::ChainVariableNotInSampleSet(var.to_string()))?;
        if known.contains(&qubit) {
            placements.push((qubit, column));
        } else {
            stray.push(qubit);
        }
    }
    stray.sort_unstable();

    if !stray.is_empty() {
        if policy.unknown_index == Leniency::Fail {
            return Err(InspectError::QubitNotInTopology(stray[0]));
        }
        for qubit in stray {
            warn!(qubit, "chain references qubit outside solver topology");
            warnings.push(format!(
                "chain qubit {qubit} not in solver topology; dropped from display"
            ));
        }
    }

    let rows = sampleset
        .samples()
        .iter()
        .map(|sample| {
            let mut row = vec![UNUSED_QUBIT; width];
            for &(qubit, column) in &placements {
                row[qubit as usize] = sample[column];
            }
            row
        })
        .collect();

    Ok(rows)
}
