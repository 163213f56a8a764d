//! Canonical inspector snapshot.
//!
//! The one output schema every entry point funnels into. Everything in
//! it is a JSON primitive — numbers, strings, booleans, nulls, arrays,
//! objects — so a snapshot survives an encode/decode cycle with no
//! information loss and downstream tooling never sees a solver-specific
//! object reference.
//!
//! Layout (fixed, field names are part of the contract):
//!
//! ```text
//! {
//!   "details":  { "id", "solver" },
//!   "data":     { "type", "params", "data": { "format", "lin", "quad", "embedding"? } },
//!   "answer":   { "active_variables", "solutions", "energies",
//!                 "num_occurrences", "num_variables", "timing" },
//!   "warnings": [ ... ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use muninn_model::{Embedding, ProblemType};

/// Wire name of the quadratic-problem payload format.
pub const FORMAT_QP: &str = "qp";

/// Request identity block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    /// Service request id; `null` when the source carried none.
    pub id: Option<String>,
    /// Solver id the answer came from.
    pub solver: String,
}

/// Normalized problem payload in `qp` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemPayload {
    /// Payload format tag, always [`FORMAT_QP`].
    pub format: String,
    /// Linear bias per solver qubit, in solver order; `null` for
    /// inactive qubits.
    pub lin: Vec<Option<f64>>,
    /// Symmetric coupling per active solver coupler, in solver order.
    pub quad: Vec<f64>,
    /// The embedding used to realize the problem, verbatim, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<BTreeMap<String, Vec<u32>>>,
}

impl ProblemPayload {
    /// Create a payload from normalized bias arrays.
    pub fn new(lin: Vec<Option<f64>>, quad: Vec<f64>) -> Self {
        Self {
            format: FORMAT_QP.to_string(),
            lin,
            quad,
            embedding: None,
        }
    }

    /// Attach an embedding, copied chain-for-chain with no re-derivation.
    /// Keys are sorted so serialization is deterministic.
    pub fn with_embedding(mut self, embedding: &Embedding) -> Self {
        self.embedding = Some(
            embedding
                .chains()
                .iter()
                .map(|(var, chain)| (var.clone(), chain.clone()))
                .collect(),
        );
        self
    }
}

/// Problem block: formulation, request parameters and normalized payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemData {
    /// Formulation the problem was submitted in.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Request parameters as sent to the solver (e.g. `num_reads`).
    pub params: Map<String, Value>,
    /// Normalized problem payload.
    pub data: ProblemPayload,
}

/// Answer block: the solver's result projected onto active variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Physical qubits used by the embedded problem, in service order.
    pub active_variables: Vec<u32>,
    /// One row per distinct assignment, restricted to `active_variables`
    /// columns in that order.
    pub solutions: Vec<Vec<i8>>,
    /// Energy per row.
    pub energies: Vec<f64>,
    /// Occurrence count per row.
    pub num_occurrences: Vec<u32>,
    /// Total variable count reported by the solver.
    pub num_variables: usize,
    /// Opaque service timing block.
    pub timing: Map<String, Value>,
}

/// The canonical, fully-serializable snapshot of one solved problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorSnapshot {
    /// Request identity.
    pub details: Details,
    /// Problem block.
    pub data: ProblemData,
    /// Answer block.
    pub answer: Answer,
    /// Conditions absorbed while encoding, empty when none applied.
    pub warnings: Vec<String>,
}

impl InspectorSnapshot {
    /// Compose a snapshot from its four blocks.
    pub fn assemble(
        details: Details,
        data: ProblemData,
        answer: Answer,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            details,
            data,
            answer,
            warnings,
        }
    }

    /// The snapshot as a JSON value tree.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// The snapshot as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
