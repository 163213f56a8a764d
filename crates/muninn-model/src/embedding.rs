//! Graph embeddings: logical variables mapped to chains of physical qubits.
//!
//! An embedding is produced by an external minor-embedding algorithm and
//! consumed here as-is: chains are assumed disjoint and are never
//! re-derived. What this module does implement is the deterministic
//! *fixed-embedding* encoding of a logical Ising problem onto a target
//! edge set, which is pure re-encoding arithmetic rather than embedding
//! search: linear biases are spread evenly across chain qubits, logical
//! couplings are spread evenly across the available inter-chain edges,
//! and each intra-chain edge receives a ferromagnetic `-chain_strength`
//! coupler.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::problem::Ising;

/// Default chain strength for fixed-embedding encoding.
pub const DEFAULT_CHAIN_STRENGTH: f64 = 1.0;

/// A mapping from logical variables to disjoint chains of physical qubits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embedding {
    chains: FxHashMap<String, Vec<u32>>,
}

impl Embedding {
    /// Create an embedding from explicit chains.
    pub fn new(chains: FxHashMap<String, Vec<u32>>) -> Self {
        Self { chains }
    }

    /// Add or replace the chain for a variable.
    pub fn insert(&mut self, var: impl Into<String>, chain: Vec<u32>) {
        self.chains.insert(var.into(), chain);
    }

    /// The chain for a variable, if embedded.
    pub fn chain(&self, var: &str) -> Option<&[u32]> {
        self.chains.get(var).map(Vec::as_slice)
    }

    /// All chains, keyed by variable.
    pub fn chains(&self) -> &FxHashMap<String, Vec<u32>> {
        &self.chains
    }

    /// True when no variable is embedded.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Number of embedded variables.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Invert to a physical-qubit → logical-variable map.
    ///
    /// Chains are assumed disjoint; with overlapping chains the last
    /// writer wins, matching the lenient posture of the display layer.
    pub fn invert(&self) -> FxHashMap<u32, &str> {
        let mut inverted = FxHashMap::default();
        for (var, chain) in &self.chains {
            for &qubit in chain {
                inverted.insert(qubit, var.as_str());
            }
        }
        inverted
    }

    /// All physical qubits used by some chain, sorted.
    pub fn physical_qubits(&self) -> Vec<u32> {
        let mut qubits: Vec<u32> = self.chains.values().flatten().copied().collect();
        qubits.sort_unstable();
        qubits.dedup();
        qubits
    }

    /// Encode a logical Ising problem onto a target edge set through
    /// this (fixed) embedding.
    ///
    /// Fails when a referenced variable has no chain, a multi-qubit
    /// chain is not connected in the target graph, or two coupled
    /// chains share no target edge.
    pub fn embed_ising(
        &self,
        h: &FxHashMap<String, f64>,
        j: &FxHashMap<(String, String), f64>,
        target_couplers: &[(u32, u32)],
        chain_strength: f64,
    ) -> ModelResult<Ising> {
        let mut adjacency: FxHashMap<u32, FxHashSet<u32>> = FxHashMap::default();
        for &(u, v) in target_couplers {
            adjacency.entry(u).or_default().insert(v);
            adjacency.entry(v).or_default().insert(u);
        }

        let mut embedded = Ising::default();

        // Linear biases: spread evenly across the chain.
        for (var, &bias) in h {
            let chain = self
                .chain(var)
                .ok_or_else(|| ModelError::UnknownVariable(var.clone()))?;
            let share = bias / chain.len() as f64;
            for &qubit in chain {
                *embedded.h.entry(qubit).or_insert(0.0) += share;
            }
        }

        // Chain couplers: every induced intra-chain edge at -chain_strength.
        for (var, chain) in &self.chains {
            if chain.len() < 2 {
                continue;
            }
            let members: FxHashSet<u32> = chain.iter().copied().collect();
            let mut edges = induced_edges(chain, &members, &adjacency);
            if !is_connected(chain, &edges) {
                return Err(ModelError::DisconnectedChain(var.clone()));
            }
            edges.sort_unstable();
            for (u, v) in edges {
                *embedded.j.entry((u, v)).or_insert(0.0) -= chain_strength;
            }
        }

        // Logical couplings: spread evenly across available inter-chain edges.
        for ((u, v), &bias) in j {
            if u == v {
                // A diagonal quadratic entry is a linear bias in disguise.
                let chain = self
                    .chain(u)
                    .ok_or_else(|| ModelError::UnknownVariable(u.clone()))?;
                let share = bias / chain.len() as f64;
                for &qubit in chain {
                    *embedded.h.entry(qubit).or_insert(0.0) += share;
                }
                continue;
            }
            let chain_u = self
                .chain(u)
                .ok_or_else(|| ModelError::UnknownVariable(u.clone()))?;
            let chain_v = self
                .chain(v)
                .ok_or_else(|| ModelError::UnknownVariable(v.clone()))?;

            let mut available: Vec<(u32, u32)> = Vec::new();
            for &a in chain_u {
                for &b in chain_v {
                    if adjacency.get(&a).is_some_and(|n| n.contains(&b)) {
                        available.push((a, b));
                    }
                }
            }
            if available.is_empty() {
                return Err(ModelError::NoAvailableCoupler(u.clone(), v.clone()));
            }
            available.sort_unstable();
            let share = bias / available.len() as f64;
            for (a, b) in available {
                *embedded.j.entry((a, b)).or_insert(0.0) += share;
            }
        }

        Ok(embedded)
    }
}

/// Target edges with both endpoints inside the chain.
fn induced_edges(
    chain: &[u32],
    members: &FxHashSet<u32>,
    adjacency: &FxHashMap<u32, FxHashSet<u32>>,
) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for &u in chain {
        if let Some(neighbors) = adjacency.get(&u) {
            for &v in neighbors {
                if u < v && members.contains(&v) {
                    edges.push((u, v));
                }
            }
        }
    }
    edges
}

/// BFS connectivity check over the induced edge set.
fn is_connected(chain: &[u32], edges: &[(u32, u32)]) -> bool {
    let Some(&start) = chain.first() else {
        return true;
    };
    let mut neighbors: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
    for &(u, v) in edges {
        neighbors.entry(u).or_default().push(v);
        neighbors.entry(v).or_default().push(u);
    }
    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let mut queue = vec![start];
    seen.insert(start);
    while let Some(u) = queue.pop() {
        for &v in neighbors.get(&u).into_iter().flatten() {
            if seen.insert(v) {
                queue.push(v);
            }
        }
    }
    chain.iter().all(|q| seen.contains(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_embedding() -> Embedding {
        let mut embedding = Embedding::default();
        embedding.insert("a", vec![0]);
        embedding.insert("b", vec![4]);
        embedding.insert("c", vec![1, 5]);
        embedding
    }

    fn triangle_couplings() -> FxHashMap<(String, String), f64> {
        [
            (("a".to_string(), "b".to_string()), 1.0),
            (("b".to_string(), "c".to_string()), 1.0),
            (("c".to_string(), "a".to_string()), 1.0),
        ]
        .into_iter()
        .collect()
    }

    const TARGET: [(u32, u32); 4] = [(0, 4), (0, 5), (1, 4), (1, 5)];

    #[test]
    fn test_invert() {
        let embedding = triangle_embedding();
        let inverted = embedding.invert();
        assert_eq!(inverted[&0], "a");
        assert_eq!(inverted[&1], "c");
        assert_eq!(inverted[&5], "c");
        assert_eq!(inverted.len(), 4);
    }

    #[test]
    fn test_physical_qubits_sorted() {
        assert_eq!(triangle_embedding().physical_qubits(), vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_embed_triangle() {
        let embedding = triangle_embedding();
        let embedded = embedding
            .embed_ising(
                &FxHashMap::default(),
                &triangle_couplings(),
                &TARGET,
                DEFAULT_CHAIN_STRENGTH,
            )
            .unwrap();

        // ab -> (0,4); bc -> (1,4); ca -> (0,5); chain c -> (1,5).
        assert!((embedded.coupling(0, 4) - 1.0).abs() < 1e-12);
        assert!((embedded.coupling(1, 4) - 1.0).abs() < 1e-12);
        assert!((embedded.coupling(0, 5) - 1.0).abs() < 1e-12);
        assert!((embedded.coupling(1, 5) + 1.0).abs() < 1e-12);
        assert!(embedded.h.is_empty());
    }

    #[test]
    fn test_embed_spreads_linear_bias() {
        let embedding = triangle_embedding();
        let h: FxHashMap<String, f64> = [("c".to_string(), 1.0)].into_iter().collect();
        let embedded = embedding
            .embed_ising(&h, &FxHashMap::default(), &TARGET, DEFAULT_CHAIN_STRENGTH)
            .unwrap();
        assert!((embedded.h[&1] - 0.5).abs() < 1e-12);
        assert!((embedded.h[&5] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_embed_spreads_coupling_across_edges() {
        // Chains b=[4] and c=[1,5] reach each other through (1,4) only in
        // TARGET; add (4,5) so the bc coupling splits across two edges.
        let mut target = TARGET.to_vec();
        target.push((4, 5));
        let embedding = triangle_embedding();
        let j: FxHashMap<(String, String), f64> =
            [(("b".to_string(), "c".to_string()), 1.0)].into_iter().collect();
        let embedded = embedding
            .embed_ising(&FxHashMap::default(), &j, &target, DEFAULT_CHAIN_STRENGTH)
            .unwrap();
        assert!((embedded.coupling(1, 4) - 0.5).abs() < 1e-12);
        assert!((embedded.coupling(4, 5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_embed_disconnected_chain_fails() {
        let mut embedding = Embedding::default();
        embedding.insert("a", vec![0, 1]); // no (0,1) edge in TARGET
        let err = embedding
            .embed_ising(
                &[("a".to_string(), 1.0)].into_iter().collect(),
                &FxHashMap::default(),
                &TARGET,
                DEFAULT_CHAIN_STRENGTH,
            )
            .unwrap_err();
        assert!(matches!(err, ModelError::DisconnectedChain(v) if v == "a"));
    }

    #[test]
    fn test_embed_missing_coupler_fails() {
        let mut embedding = triangle_embedding();
        embedding.insert("b", vec![2]); // qubit 2 has no TARGET edges
        let err = embedding
            .embed_ising(
                &FxHashMap::default(),
                &triangle_couplings(),
                &TARGET,
                DEFAULT_CHAIN_STRENGTH,
            )
            .unwrap_err();
        assert!(matches!(err, ModelError::NoAvailableCoupler(..)));
    }

    #[test]
    fn test_embed_unknown_variable_fails() {
        let embedding = triangle_embedding();
        let h: FxHashMap<String, f64> = [("d".to_string(), 1.0)].into_iter().collect();
        let err = embedding
            .embed_ising(&h, &FxHashMap::default(), &TARGET, DEFAULT_CHAIN_STRENGTH)
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownVariable(v) if v == "d"));
    }
}
