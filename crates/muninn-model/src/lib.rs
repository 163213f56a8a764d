//! Muninn problem model
//!
//! Data model shared by the Muninn inspector pipeline: physical-index
//! problem formulations (Ising/QUBO), the logical binary quadratic model
//! (BQM), graph embeddings with fixed-embedding encoding, and resolved
//! sample sets.
//!
//! # Example
//!
//! ```
//! use muninn_model::{BinaryQuadraticModel, Embedding, DEFAULT_CHAIN_STRENGTH};
//! use rustc_hash::FxHashMap;
//!
//! // A triangle over logical variables a, b, c...
//! let j: FxHashMap<(String, String), f64> = [
//!     (("a".to_string(), "b".to_string()), 1.0),
//!     (("b".to_string(), "c".to_string()), 1.0),
//!     (("c".to_string(), "a".to_string()), 1.0),
//! ]
//! .into_iter()
//! .collect();
//! let bqm = BinaryQuadraticModel::from_ising(FxHashMap::default(), j);
//!
//! // ...realized on hardware through a fixed embedding.
//! let mut embedding = Embedding::default();
//! embedding.insert("a", vec![0]);
//! embedding.insert("b", vec![4]);
//! embedding.insert("c", vec![1, 5]);
//!
//! let (h, j, _offset) = bqm.to_ising();
//! let target = [(0, 4), (0, 5), (1, 4), (1, 5)];
//! let physical = embedding
//!     .embed_ising(&h, &j, &target, DEFAULT_CHAIN_STRENGTH)
//!     .unwrap();
//! assert_eq!(physical.coupling(1, 5), -1.0); // chain coupler for c
//! ```

pub mod bqm;
pub mod embedding;
pub mod error;
pub mod problem;
pub mod sampleset;

pub use bqm::{BinaryQuadraticModel, Vartype};
pub use embedding::{DEFAULT_CHAIN_STRENGTH, Embedding};
pub use error::{ModelError, ModelResult};
pub use problem::{Ising, Problem, ProblemType, Qubo};
pub use sampleset::SampleSet;
