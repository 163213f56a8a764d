//! Raw solver responses.
//!
//! The answer record as returned by the solving service, before any
//! display encoding: full-width per-shot solution rows addressed by
//! physical qubit index, parallel energy and occurrence vectors, and the
//! opaque timing block. Qubits the embedded problem never used carry the
//! service filler value in solution rows.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use muninn_model::ProblemType;

use crate::solver::Solver;

/// Filler value the service writes for qubits outside the embedded problem.
pub const UNUSED_QUBIT: i8 = 3;

/// A raw answer record from the solving service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    /// Service-assigned request id, when the service returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<String>,
    /// The solver that produced this answer.
    pub solver: Solver,
    /// Formulation the problem was submitted in.
    pub problem_type: ProblemType,
    /// Physical qubit indices actually used by the embedded problem,
    /// in service order.
    pub active_variables: Vec<u32>,
    /// One full-width row per distinct returned assignment, addressed
    /// positionally by physical qubit index.
    pub solutions: Vec<Vec<i8>>,
    /// Energy per row.
    pub energies: Vec<f64>,
    /// Occurrence count per row.
    pub num_occurrences: Vec<u32>,
    /// Total variable count the solver reports for this problem.
    pub num_variables: usize,
    /// Opaque service timing block.
    pub timing: Map<String, Value>,
}

impl SolverResponse {
    /// Create an empty response for a solver (no shots).
    pub fn new(solver: Solver, problem_type: ProblemType) -> Self {
        Self {
            problem_id: None,
            solver,
            problem_type,
            active_variables: Vec::new(),
            solutions: Vec::new(),
            energies: Vec::new(),
            num_occurrences: Vec::new(),
            num_variables: 0,
            timing: Map::new(),
        }
    }

    /// Set the service request id.
    pub fn with_problem_id(mut self, id: impl Into<String>) -> Self {
        self.problem_id = Some(id.into());
        self
    }

    /// Set the active variable list.
    pub fn with_active_variables(mut self, active_variables: Vec<u32>) -> Self {
        self.num_variables = active_variables.len();
        self.active_variables = active_variables;
        self
    }

    /// Add one returned assignment: a full-width solution row with its
    /// energy and occurrence count.
    pub fn with_shot(mut self, solution: Vec<i8>, energy: f64, occurrences: u32) -> Self {
        self.solutions.push(solution);
        self.energies.push(energy);
        self.num_occurrences.push(occurrences);
        self
    }

    /// Set the timing block.
    pub fn with_timing(mut self, timing: Map<String, Value>) -> Self {
        self.timing = timing;
        self
    }

    /// Number of distinct returned assignments.
    pub fn num_rows(&self) -> usize {
        self.solutions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::SolverTopology;

    #[test]
    fn test_builder() {
        let solver = Solver::new("mock", SolverTopology::from_couplers(vec![(0, 1)]));
        let response = SolverResponse::new(solver, ProblemType::Ising)
            .with_problem_id("req-42")
            .with_active_variables(vec![0, 1])
            .with_shot(vec![1, -1], -1.0, 100);

        assert_eq!(response.problem_id.as_deref(), Some("req-42"));
        assert_eq!(response.num_variables, 2);
        assert_eq!(response.num_rows(), 1);
        assert_eq!(response.energies, vec![-1.0]);
    }

    #[test]
    fn test_empty_response_has_no_rows() {
        let solver = Solver::new("mock", SolverTopology::default());
        let response = SolverResponse::new(solver, ProblemType::Qubo);
        assert_eq!(response.num_rows(), 0);
        assert!(response.timing.is_empty());
    }
}
