//! Solver working graphs.
//!
//! A solver advertises an ordered list of physical qubits and an ordered
//! list of physically valid couplers. Order matters: display encodings
//! index into both lists positionally, so the topology must be carried
//! around verbatim rather than rebuilt from an adjacency structure.
//! Hardware graphs are typically partially active (dead qubits and
//! couplers are simply absent from the lists).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Ordered qubit and coupler lists for one solver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverTopology {
    /// All physical qubit indices the solver recognizes, in solver order.
    pub encoding_qubits: Vec<u32>,
    /// All physically valid coupler pairs, in solver order.
    pub encoding_couplers: Vec<(u32, u32)>,
}

impl SolverTopology {
    /// Create a topology from explicit lists.
    pub fn new(encoding_qubits: Vec<u32>, encoding_couplers: Vec<(u32, u32)>) -> Self {
        Self {
            encoding_qubits,
            encoding_couplers,
        }
    }

    /// Build a topology from an edge list alone; the qubit list is the
    /// sorted set of edge endpoints.
    pub fn from_couplers(encoding_couplers: Vec<(u32, u32)>) -> Self {
        let mut encoding_qubits: Vec<u32> = encoding_couplers
            .iter()
            .flat_map(|&(u, v)| [u, v])
            .collect();
        encoding_qubits.sort_unstable();
        encoding_qubits.dedup();
        Self {
            encoding_qubits,
            encoding_couplers,
        }
    }

    /// Fully connected topology on `n` qubits (test/demo graphs).
    pub fn complete(n: u32) -> Self {
        let encoding_qubits: Vec<u32> = (0..n).collect();
        let mut encoding_couplers = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                encoding_couplers.push((i, j));
            }
        }
        Self {
            encoding_qubits,
            encoding_couplers,
        }
    }

    /// Number of recognized qubits.
    pub fn num_qubits(&self) -> usize {
        self.encoding_qubits.len()
    }

    /// Width a positionally-indexed solution row must have to address
    /// every recognized qubit by index.
    pub fn row_width(&self) -> usize {
        self.encoding_qubits
            .iter()
            .max()
            .map_or(0, |&q| q as usize + 1)
    }

    /// Whether the solver recognizes a qubit index.
    pub fn contains_qubit(&self, qubit: u32) -> bool {
        self.encoding_qubits.contains(&qubit)
    }

    /// Whether the solver has a coupler between two qubits, in either
    /// key direction.
    pub fn contains_coupler(&self, u: u32, v: u32) -> bool {
        self.encoding_couplers.contains(&(u, v)) || self.encoding_couplers.contains(&(v, u))
    }

    /// Set view of the qubit list, for membership-heavy passes.
    pub fn qubit_set(&self) -> FxHashSet<u32> {
        self.encoding_qubits.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_couplers_collects_endpoints() {
        let topo = SolverTopology::from_couplers(vec![(0, 4), (0, 5), (1, 4), (1, 5)]);
        assert_eq!(topo.encoding_qubits, vec![0, 1, 4, 5]);
        assert_eq!(topo.num_qubits(), 4);
        assert_eq!(topo.row_width(), 6);
    }

    #[test]
    fn test_complete() {
        let topo = SolverTopology::complete(4);
        assert_eq!(topo.num_qubits(), 4);
        assert_eq!(topo.encoding_couplers.len(), 6);
        assert_eq!(topo.row_width(), 4);
    }

    #[test]
    fn test_coupler_membership_is_direction_free() {
        let topo = SolverTopology::from_couplers(vec![(0, 4)]);
        assert!(topo.contains_coupler(0, 4));
        assert!(topo.contains_coupler(4, 0));
        assert!(!topo.contains_coupler(0, 5));
    }

    #[test]
    fn test_empty_topology() {
        let topo = SolverTopology::default();
        assert_eq!(topo.row_width(), 0);
        assert!(!topo.contains_qubit(0));
    }
}
