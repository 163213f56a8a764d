//! Physical-index problem formulations.
//!
//! A problem submitted to an annealing solver is expressed either as an
//! Ising model (linear biases `h` plus pairwise couplings `J` over ±1
//! spins) or as a QUBO (a single quadratic coefficient map over 0/1
//! variables, with diagonal entries acting as linear biases). Both are
//! keyed by physical qubit indices; no canonical key direction is
//! assumed for coupling entries.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Formulation of a problem as understood by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    /// Ising model over ±1 spins.
    Ising,
    /// Quadratic unconstrained binary optimization over 0/1 variables.
    Qubo,
}

impl ProblemType {
    /// Wire name of the problem type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::Ising => "ising",
            ProblemType::Qubo => "qubo",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ising" => Ok(ProblemType::Ising),
            "qubo" => Ok(ProblemType::Qubo),
            other => Err(ModelError::UnknownProblemType(other.to_string())),
        }
    }
}

/// An Ising problem over physical qubit indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ising {
    /// Linear biases, one per qubit (missing entries are 0).
    pub h: FxHashMap<u32, f64>,
    /// Pairwise couplings; `(u, v)` and `(v, u)` may both carry weight.
    pub j: FxHashMap<(u32, u32), f64>,
}

impl Ising {
    /// Create an Ising problem from explicit bias maps.
    pub fn new(h: FxHashMap<u32, f64>, j: FxHashMap<(u32, u32), f64>) -> Self {
        Self { h, j }
    }

    /// Create an Ising problem with couplings only.
    pub fn from_couplings(j: FxHashMap<(u32, u32), f64>) -> Self {
        Self {
            h: FxHashMap::default(),
            j,
        }
    }

    /// All qubit indices referenced by a bias or a coupling, sorted.
    pub fn referenced_qubits(&self) -> Vec<u32> {
        let mut qubits: Vec<u32> = self
            .h
            .keys()
            .copied()
            .chain(self.j.keys().flat_map(|&(u, v)| [u, v]))
            .collect();
        qubits.sort_unstable();
        qubits.dedup();
        qubits
    }

    /// Symmetric coupling weight between `u` and `v`: the sum of both
    /// key directions, with missing entries treated as 0.
    pub fn coupling(&self, u: u32, v: u32) -> f64 {
        self.j.get(&(u, v)).copied().unwrap_or(0.0)
            + self.j.get(&(v, u)).copied().unwrap_or(0.0)
    }

    /// Re-express as a QUBO via the substitution `s = 2x - 1`.
    ///
    /// Energy is preserved up to an additive constant, which display
    /// encoding does not carry.
    pub fn to_qubo(&self) -> Qubo {
        let mut q: FxHashMap<(u32, u32), f64> = FxHashMap::default();
        for (&(u, v), &bias) in &self.j {
            *q.entry((u, v)).or_insert(0.0) += 4.0 * bias;
            *q.entry((u, u)).or_insert(0.0) -= 2.0 * bias;
            *q.entry((v, v)).or_insert(0.0) -= 2.0 * bias;
        }
        for (&u, &bias) in &self.h {
            *q.entry((u, u)).or_insert(0.0) += 2.0 * bias;
        }
        Qubo { q }
    }
}

/// A QUBO problem over physical qubit indices.
///
/// Diagonal entries `(u, u)` are linear biases; off-diagonal entries are
/// couplings, with no canonical key direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qubo {
    /// Quadratic coefficient map.
    pub q: FxHashMap<(u32, u32), f64>,
}

impl Qubo {
    /// Create a QUBO from an explicit coefficient map.
    pub fn new(q: FxHashMap<(u32, u32), f64>) -> Self {
        Self { q }
    }

    /// Split coefficients into the (h, J) form used for display:
    /// diagonal entries become linear biases, off-diagonal entries
    /// couplings. This is a relabelling, not an energy transform, so a
    /// QUBO and the Ising built from the same split encode identically.
    pub fn split(&self) -> Ising {
        let mut h = FxHashMap::default();
        let mut j = FxHashMap::default();
        for (&(u, v), &bias) in &self.q {
            if u == v {
                h.insert(u, bias);
            } else {
                j.insert((u, v), bias);
            }
        }
        Ising { h, j }
    }
}

/// A problem in either formulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    /// Ising formulation.
    Ising(Ising),
    /// QUBO formulation.
    Qubo(Qubo),
}

impl Problem {
    /// The formulation tag.
    pub fn problem_type(&self) -> ProblemType {
        match self {
            Problem::Ising(_) => ProblemType::Ising,
            Problem::Qubo(_) => ProblemType::Qubo,
        }
    }

    /// The (h, J) view used for display encoding.
    pub fn display_form(&self) -> Ising {
        match self {
            Problem::Ising(ising) => ising.clone(),
            Problem::Qubo(qubo) => qubo.split(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j(entries: &[((u32, u32), f64)]) -> FxHashMap<(u32, u32), f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_problem_type_roundtrip() {
        assert_eq!("ising".parse::<ProblemType>().unwrap(), ProblemType::Ising);
        assert_eq!("qubo".parse::<ProblemType>().unwrap(), ProblemType::Qubo);
        assert!(matches!(
            "spin".parse::<ProblemType>(),
            Err(ModelError::UnknownProblemType(_))
        ));
    }

    #[test]
    fn test_problem_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProblemType::Ising).unwrap(),
            "\"ising\""
        );
        assert_eq!(
            serde_json::from_str::<ProblemType>("\"qubo\"").unwrap(),
            ProblemType::Qubo
        );
    }

    #[test]
    fn test_referenced_qubits_sorted_dedup() {
        let ising = Ising::new(
            [(4, 0.5)].into_iter().collect(),
            j(&[((0, 4), 1.0), ((4, 1), -1.0)]),
        );
        assert_eq!(ising.referenced_qubits(), vec![0, 1, 4]);
    }

    #[test]
    fn test_coupling_sums_both_directions() {
        let ising = Ising::from_couplings(j(&[((0, 4), 0.5), ((4, 0), 0.25)]));
        assert!((ising.coupling(0, 4) - 0.75).abs() < 1e-12);
        assert!((ising.coupling(4, 0) - 0.75).abs() < 1e-12);
        assert_eq!(ising.coupling(1, 2), 0.0);
    }

    #[test]
    fn test_qubo_split() {
        let qubo = Qubo::new(j(&[((0, 0), 2.0), ((0, 4), 0.5), ((4, 0), 0.5)]));
        let ising = qubo.split();
        assert_eq!(ising.h.get(&0), Some(&2.0));
        assert!((ising.coupling(0, 4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ising_to_qubo_energy_shape() {
        // s0*s1 with J=1: QUBO gets 4 on the off-diagonal, -2 on each diagonal.
        let ising = Ising::from_couplings(j(&[((0, 1), 1.0)]));
        let qubo = ising.to_qubo();
        assert_eq!(qubo.q.get(&(0, 1)), Some(&4.0));
        assert_eq!(qubo.q.get(&(0, 0)), Some(&-2.0));
        assert_eq!(qubo.q.get(&(1, 1)), Some(&-2.0));
    }

    #[test]
    fn test_display_form_matches_formulation() {
        let ising = Ising::new([(0, 1.0)].into_iter().collect(), j(&[((0, 1), -1.0)]));
        let problem = Problem::Ising(ising.clone());
        assert_eq!(problem.problem_type(), ProblemType::Ising);
        assert_eq!(problem.display_form(), ising);
    }
}
