//! Muninn inspector adapter
//!
//! Converts a solved binary-optimization problem — a raw Ising/QUBO
//! formulation, or a BQM with a graph embedding — together with the
//! solver's raw answer into one canonical, fully JSON-serializable
//! [`InspectorSnapshot`] for downstream visualization tooling.
//!
//! Three entry points cover the three input shapes, all funneling into
//! the same normalization/encoding/assembly pipeline:
//!
//! - [`from_problem_and_response`] — raw physical-index problem + response
//! - [`from_bqm_and_response`] — logical BQM + embedding + response
//! - [`from_bqm_and_sampleset`] — logical BQM + resolved sample set
//!
//! The adapter re-encodes already-computed results; it never talks to a
//! solving service, computes embeddings, or judges solution quality.
//!
//! # Example
//!
//! ```
//! use muninn_inspect::from_problem_and_response;
//! use muninn_model::{Ising, Problem, ProblemType};
//! use muninn_solver::{Solver, SolverResponse, SolverTopology};
//! use rustc_hash::FxHashMap;
//!
//! let topology = SolverTopology::from_couplers(vec![(0, 4)]);
//! let solver = Solver::new("mock_solver", topology);
//!
//! let j: FxHashMap<(u32, u32), f64> = [((0, 4), 1.0)].into_iter().collect();
//! let problem = Problem::Ising(Ising::from_couplings(j));
//!
//! let response = SolverResponse::new(solver, ProblemType::Ising)
//!     .with_problem_id("req-7")
//!     .with_active_variables(vec![0, 4])
//!     .with_shot(vec![1, 3, 3, 3, -1], -1.0, 100);
//!
//! let mut params = serde_json::Map::new();
//! params.insert("num_reads".to_string(), 100.into());
//!
//! let snapshot = from_problem_and_response(&problem, &response, params).unwrap();
//! assert_eq!(snapshot.answer.solutions, vec![vec![1, -1]]);
//! assert_eq!(snapshot.data.data.quad, vec![1.0]);
//! ```

pub mod adapter;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod reconcile;
pub mod snapshot;

pub use adapter::{
    Adapter, from_bqm_and_response, from_bqm_and_sampleset, from_problem_and_response,
};
pub use error::{InspectError, InspectResult, Leniency, Policy};
pub use snapshot::{Answer, Details, FORMAT_QP, InspectorSnapshot, ProblemData, ProblemPayload};
