//! Error types for the model crate.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when constructing or transforming model entities.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Problem type string is neither `ising` nor `qubo`.
    #[error("Unknown problem type: {0}")]
    UnknownProblemType(String),

    /// A variable is referenced but not defined where it is needed.
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Parallel sequences disagree in length.
    #[error("{field} length mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A chain is not connected in the target graph.
    #[error("Chain for variable '{0}' is not connected in the target graph")]
    DisconnectedChain(String),

    /// No target edge is available to carry a logical coupling.
    #[error("No target edge available between chains of '{0}' and '{1}'")]
    NoAvailableCoupler(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_problem_type_display() {
        let err = ModelError::UnknownProblemType("spin-glass".into());
        assert!(err.to_string().contains("spin-glass"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = ModelError::ShapeMismatch {
            field: "energies",
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("energies"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_no_available_coupler_display() {
        let err = ModelError::NoAvailableCoupler("a".into(), "c".into());
        assert!(err.to_string().contains('a'));
        assert!(err.to_string().contains('c'));
    }
}
