//! Answer-block encoding.
//!
//! Projects raw full-width solution rows onto the active-variable
//! columns and passes the remaining answer fields through untouched.
//! Shape inconsistencies are always fatal here: an answer whose parallel
//! vectors disagree cannot be displayed truthfully.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{InspectError, InspectResult};
use crate::snapshot::Answer;

/// Encode the answer block from raw response parts.
///
/// Every field is always present in the result; a shotless response
/// yields empty vectors rather than omissions.
pub fn encode_answer(
    active_variables: &[u32],
    solutions: &[Vec<i8>],
    energies: &[f64],
    num_occurrences: &[u32],
    num_variables: usize,
    timing: Map<String, Value>,
) -> InspectResult<Answer> {
    if energies.len() != solutions.len() {
        return Err(InspectError::ShapeMismatch {
            field: "energies",
            expected: solutions.len(),
            actual: energies.len(),
        });
    }
    if num_occurrences.len() != solutions.len() {
        return Err(InspectError::ShapeMismatch {
            field: "num_occurrences",
            expected: solutions.len(),
            actual: num_occurrences.len(),
        });
    }
    if let Some(bad) = energies.iter().find(|e| !e.is_finite()) {
        debug!(energy = *bad, "rejecting non-finite energy");
        return Err(InspectError::NonFiniteValue { field: "energies" });
    }

    let projected = solutions
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            active_variables
                .iter()
                .map(|&qubit| {
                    row.get(qubit as usize).copied().ok_or(
                        InspectError::SolutionRowTooShort {
                            row: row_idx,
                            qubit,
                            needed: qubit as usize + 1,
                            actual: row.len(),
                        },
                    )
                })
                .collect::<InspectResult<Vec<i8>>>()
        })
        .collect::<InspectResult<Vec<Vec<i8>>>>()?;

    debug!(
        rows = projected.len(),
        active = active_variables.len(),
        "encoded answer block"
    );

    Ok(Answer {
        active_variables: active_variables.to_vec(),
        solutions: projected,
        energies: energies.to_vec(),
        num_occurrences: num_occurrences.to_vec(),
        num_variables,
        timing,
    })
}
