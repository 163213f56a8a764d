//! Binary quadratic model over logical variables.
//!
//! A BQM unifies the Ising and QUBO formulations at the logical level:
//! variables carry string labels rather than physical qubit indices, and
//! the `Vartype` records whether values range over ±1 spins or 0/1
//! binaries. Vartype conversion uses the standard substitution
//! `s = 2x - 1`, tracking the energy offset exactly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::problem::ProblemType;

/// Value domain of a BQM's variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vartype {
    /// Variables take values in {-1, +1}.
    Spin,
    /// Variables take values in {0, 1}.
    Binary,
}

impl Vartype {
    /// The problem type a solver associates with this domain.
    pub fn problem_type(&self) -> ProblemType {
        match self {
            Vartype::Spin => ProblemType::Ising,
            Vartype::Binary => ProblemType::Qubo,
        }
    }
}

/// A binary quadratic model over string-labelled logical variables.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryQuadraticModel {
    /// Linear biases.
    pub linear: FxHashMap<String, f64>,
    /// Quadratic biases; no canonical key direction.
    pub quadratic: FxHashMap<(String, String), f64>,
    /// Constant energy offset.
    pub offset: f64,
    /// Value domain.
    pub vartype: Vartype,
}

impl BinaryQuadraticModel {
    /// Create an empty model with the given vartype.
    pub fn new(vartype: Vartype) -> Self {
        Self {
            linear: FxHashMap::default(),
            quadratic: FxHashMap::default(),
            offset: 0.0,
            vartype,
        }
    }

    /// Build a spin-valued model from Ising biases.
    pub fn from_ising(
        linear: FxHashMap<String, f64>,
        quadratic: FxHashMap<(String, String), f64>,
    ) -> Self {
        Self {
            linear,
            quadratic,
            offset: 0.0,
            vartype: Vartype::Spin,
        }
    }

    /// Build a binary-valued model from a QUBO coefficient map.
    /// Diagonal entries become linear biases.
    pub fn from_qubo(q: FxHashMap<(String, String), f64>) -> Self {
        let mut linear = FxHashMap::default();
        let mut quadratic = FxHashMap::default();
        for ((u, v), bias) in q {
            if u == v {
                *linear.entry(u).or_insert(0.0) += bias;
            } else {
                *quadratic.entry((u, v)).or_insert(0.0) += bias;
            }
        }
        Self {
            linear,
            quadratic,
            offset: 0.0,
            vartype: Vartype::Binary,
        }
    }

    /// All variable labels, sorted.
    pub fn variables(&self) -> Vec<String> {
        let mut vars: Vec<String> = self
            .linear
            .keys()
            .cloned()
            .chain(
                self.quadratic
                    .keys()
                    .flat_map(|(u, v)| [u.clone(), v.clone()]),
            )
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Re-express the model in the given vartype.
    ///
    /// Identity when the vartype already matches. Energy is preserved
    /// exactly, with the constant part folded into `offset`.
    pub fn change_vartype(&self, vartype: Vartype) -> Self {
        match (self.vartype, vartype) {
            (Vartype::Spin, Vartype::Spin) | (Vartype::Binary, Vartype::Binary) => self.clone(),
            (Vartype::Spin, Vartype::Binary) => self.spin_to_binary(),
            (Vartype::Binary, Vartype::Spin) => self.binary_to_spin(),
        }
    }

    /// Substitute `s = 2x - 1` into `sum h_i s_i + sum J_uv s_u s_v`.
    fn spin_to_binary(&self) -> Self {
        let mut linear: FxHashMap<String, f64> = FxHashMap::default();
        let mut quadratic: FxHashMap<(String, String), f64> = FxHashMap::default();
        let mut offset = self.offset;

        for (var, &h) in &self.linear {
            *linear.entry(var.clone()).or_insert(0.0) += 2.0 * h;
            offset -= h;
        }
        for ((u, v), &j) in &self.quadratic {
            *quadratic.entry((u.clone(), v.clone())).or_insert(0.0) += 4.0 * j;
            *linear.entry(u.clone()).or_insert(0.0) -= 2.0 * j;
            *linear.entry(v.clone()).or_insert(0.0) -= 2.0 * j;
            offset += j;
        }

        Self {
            linear,
            quadratic,
            offset,
            vartype: Vartype::Binary,
        }
    }

    /// Substitute `x = (s + 1) / 2` into `sum L_i x_i + sum Q_uv x_u x_v`.
    fn binary_to_spin(&self) -> Self {
        let mut linear: FxHashMap<String, f64> = FxHashMap::default();
        let mut quadratic: FxHashMap<(String, String), f64> = FxHashMap::default();
        let mut offset = self.offset;

        for (var, &l) in &self.linear {
            *linear.entry(var.clone()).or_insert(0.0) += l / 2.0;
            offset += l / 2.0;
        }
        for ((u, v), &q) in &self.quadratic {
            *quadratic.entry((u.clone(), v.clone())).or_insert(0.0) += q / 4.0;
            *linear.entry(u.clone()).or_insert(0.0) += q / 4.0;
            *linear.entry(v.clone()).or_insert(0.0) += q / 4.0;
            offset += q / 4.0;
        }

        Self {
            linear,
            quadratic,
            offset,
            vartype: Vartype::Spin,
        }
    }

    /// Logical Ising biases `(h, J, offset)`, converting from binary
    /// vartype first when needed.
    pub fn to_ising(
        &self,
    ) -> (
        FxHashMap<String, f64>,
        FxHashMap<(String, String), f64>,
        f64,
    ) {
        let spin = self.change_vartype(Vartype::Spin);
        (spin.linear, spin.quadratic, spin.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> BinaryQuadraticModel {
        let quadratic: FxHashMap<(String, String), f64> = [
            (("a".to_string(), "b".to_string()), 1.0),
            (("b".to_string(), "c".to_string()), 1.0),
            (("c".to_string(), "a".to_string()), 1.0),
        ]
        .into_iter()
        .collect();
        BinaryQuadraticModel::from_ising(FxHashMap::default(), quadratic)
    }

    fn energy(bqm: &BinaryQuadraticModel, assignment: &FxHashMap<String, f64>) -> f64 {
        let mut e = bqm.offset;
        for (v, &h) in &bqm.linear {
            e += h * assignment[v];
        }
        for ((u, v), &j) in &bqm.quadratic {
            e += j * assignment[u] * assignment[v];
        }
        e
    }

    #[test]
    fn test_variables_sorted() {
        assert_eq!(triangle().variables(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_qubo_diagonal_is_linear() {
        let q: FxHashMap<(String, String), f64> = [
            (("x".to_string(), "x".to_string()), -1.0),
            (("x".to_string(), "y".to_string()), 2.0),
        ]
        .into_iter()
        .collect();
        let bqm = BinaryQuadraticModel::from_qubo(q);
        assert_eq!(bqm.vartype, Vartype::Binary);
        assert_eq!(bqm.linear.get("x"), Some(&-1.0));
        assert_eq!(
            bqm.quadratic.get(&("x".to_string(), "y".to_string())),
            Some(&2.0)
        );
    }

    #[test]
    fn test_vartype_conversion_preserves_energy() {
        let bqm = triangle();
        let binary = bqm.change_vartype(Vartype::Binary);

        // Enumerate all spin assignments of the triangle.
        for bits in 0..8_u32 {
            let spin_assign: FxHashMap<String, f64> = ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    (v.to_string(), if bits >> i & 1 == 1 { 1.0 } else { -1.0 })
                })
                .collect();
            let bin_assign: FxHashMap<String, f64> = spin_assign
                .iter()
                .map(|(v, &s)| (v.clone(), (s + 1.0) / 2.0))
                .collect();

            let e_spin = energy(&bqm, &spin_assign);
            let e_bin = energy(&binary, &bin_assign);
            assert!(
                (e_spin - e_bin).abs() < 1e-12,
                "energy diverged for assignment {bits:03b}: {e_spin} vs {e_bin}"
            );
        }
    }

    #[test]
    fn test_vartype_roundtrip() {
        let bqm = triangle();
        let roundtrip = bqm
            .change_vartype(Vartype::Binary)
            .change_vartype(Vartype::Spin);
        for (k, v) in &bqm.quadratic {
            assert!((roundtrip.quadratic[k] - v).abs() < 1e-12);
        }
        for v in roundtrip.linear.values() {
            assert!(v.abs() < 1e-12);
        }
        assert!(roundtrip.offset.abs() < 1e-12);
    }

    #[test]
    fn test_change_vartype_identity() {
        let bqm = triangle();
        assert_eq!(bqm.change_vartype(Vartype::Spin), bqm);
    }

    #[test]
    fn test_vartype_problem_type() {
        assert_eq!(Vartype::Spin.problem_type(), ProblemType::Ising);
        assert_eq!(Vartype::Binary.problem_type(), ProblemType::Qubo);
    }
}
