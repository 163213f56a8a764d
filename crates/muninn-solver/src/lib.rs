//! Muninn solver shapes
//!
//! External-collaborator data shapes consumed by the inspector pipeline:
//! the solver's working graph ([`SolverTopology`]), its identity
//! ([`Solver`]), and the raw answer record ([`SolverResponse`]). This
//! crate holds passive data only — how these objects are obtained from a
//! solving service is out of scope.

pub mod response;
pub mod solver;
pub mod topology;

pub use response::{SolverResponse, UNUSED_QUBIT};
pub use solver::Solver;
pub use topology::SolverTopology;
