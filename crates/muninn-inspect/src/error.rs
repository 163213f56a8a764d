//! Error taxonomy and leniency policy for the inspector pipeline.
//!
//! Two classes of trouble exist here. Inconsistent *answers* (parallel
//! vectors disagreeing in length, rows too short to project, non-finite
//! floats that cannot survive JSON) are always fatal: a misleading
//! snapshot is worse than none. Inconsistent *problems* (references to
//! qubits or couplers the solver does not have) are a display concern,
//! and whether they abort or get dropped with a warning is an explicit
//! per-kind [`Policy`] choice rather than an implicit behavior.

use muninn_model::{ModelError, ProblemType};
use thiserror::Error;

/// Result type for inspector operations.
pub type InspectResult<T> = Result<T, InspectError>;

/// Errors that can occur while encoding a snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InspectError {
    /// Parallel response vectors disagree in length.
    #[error("{field} length mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A solution row is too short to address an active qubit.
    #[error("Solution row {row} too short: qubit {qubit} needs width {needed}, row has {actual}")]
    SolutionRowTooShort {
        /// Row index.
        row: usize,
        /// Qubit the projection tried to read.
        qubit: u32,
        /// Minimum row width required.
        needed: usize,
        /// Actual row width.
        actual: usize,
    },

    /// The problem formulation disagrees with the response's problem type.
    #[error("Problem type mismatch: response says {response}, problem is {problem}")]
    ProblemTypeMismatch {
        /// Type reported by the response.
        response: ProblemType,
        /// Type of the supplied problem.
        problem: ProblemType,
    },

    /// The problem references a qubit outside the solver topology.
    #[error("Qubit {0} not in solver topology")]
    QubitNotInTopology(u32),

    /// The problem references a coupler outside the solver topology.
    #[error("Coupler ({0}, {1}) not in solver topology")]
    CouplerNotInTopology(u32, u32),

    /// The sample set carries no embedding to unembed through.
    #[error("Sample set has no embedding attached")]
    MissingEmbedding,

    /// A chain references a variable absent from the sample set.
    #[error("Chain variable '{0}' not present in sample set")]
    ChainVariableNotInSampleSet(String),

    /// A float that JSON cannot represent.
    #[error("Non-finite value in {field}")]
    NonFiniteValue {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Model-level failure (vartype, embedding arithmetic, shapes).
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// How to react to one tolerable error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Leniency {
    /// Absorb the condition, record a warning in the snapshot.
    #[default]
    Tolerate,
    /// Fail the whole conversion.
    Fail,
}

/// Per-error-kind leniency switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    /// Problem references to qubits/couplers outside the solver topology.
    pub unknown_index: Leniency,
    /// Sample-set entry point invoked without an embedding.
    pub missing_embedding: Leniency,
}

impl Policy {
    /// Fail on every condition that is tolerable by default.
    pub fn strict() -> Self {
        Self {
            unknown_index: Leniency::Fail,
            missing_embedding: Leniency::Fail,
        }
    }
}
