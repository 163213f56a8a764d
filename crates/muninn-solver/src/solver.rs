//! Solver identity.

use serde::{Deserialize, Serialize};

use crate::topology::SolverTopology;

/// A solver: its service identity plus the working graph it advertises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solver {
    /// Service-assigned solver id, e.g. `"Advantage_system4.1"`.
    pub id: String,
    /// The solver's working graph.
    pub topology: SolverTopology,
}

impl Solver {
    /// Create a solver descriptor.
    pub fn new(id: impl Into<String>, topology: SolverTopology) -> Self {
        Self {
            id: id.into(),
            topology,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_new() {
        let solver = Solver::new("mock_dw_1", SolverTopology::complete(3));
        assert_eq!(solver.id, "mock_dw_1");
        assert_eq!(solver.topology.num_qubits(), 3);
    }
}
