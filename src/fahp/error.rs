//! Error types for the FAHP pipeline.

use thiserror::Error;

/// Malformed or mismatched input shapes. The caller must fix the input before retrying.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("comparison matrix is empty")]
    EmptyMatrix,

    #[error("comparison matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("consistency check needs a matrix of size 2 or more, got {size}")]
    MatrixTooSmall { size: usize },

    #[error("invalid triangular fuzzy number ({l}, {m}, {u}): need finite 0 <= l <= m <= u")]
    InvalidTfn { l: f64, m: f64, u: f64 },

    #[error("score for '{label}' is not a finite number")]
    NonFiniteScore { label: String },

    #[error("score difference {diff} between '{left}' and '{right}' is not a whole number")]
    FractionalDifference {
        left: String,
        right: String,
        diff: f64,
    },

    #[error("criteria and alternative-matrix count mismatch: {criteria} criteria, {matrices} alternative matrices")]
    CriteriaCountMismatch { criteria: usize, matrices: usize },

    #[error("alternative matrix for criterion {criterion} has size {found}, expected {expected}")]
    RaggedAlternatives {
        criterion: usize,
        found: usize,
        expected: usize,
    },

    #[error("{labels} alternative labels supplied for alternative matrices of size {size}")]
    LabelCountMismatch { labels: usize, size: usize },

    #[error("criterion {criterion} rates {found} alternatives, expected {expected}")]
    RatingsCountMismatch {
        criterion: usize,
        found: usize,
        expected: usize,
    },

    #[error("criterion {criterion} rates '{found}' at position {position}, expected '{expected}'")]
    RatingsOrderMismatch {
        criterion: usize,
        position: usize,
        found: String,
        expected: String,
    },

    #[error("fuzzy geometric mean sum has a zero component")]
    ZeroGeometricMeanSum,
}

/// Failures of the numerical routines themselves.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NumericalError {
    #[error("eigenvalue iteration did not converge after {iterations} iterations")]
    EigenNoConvergence { iterations: usize },

    #[error("eigenvalue iteration collapsed to a zero vector")]
    DegenerateIterate,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FahpError {
    #[error("invalid input: {0}")]
    Domain(#[from] DomainError),

    #[error("computation failed: {0}")]
    Numerical(#[from] NumericalError),
}

impl FahpError {
    pub fn is_domain(&self) -> bool {
        matches!(self, FahpError::Domain(_))
    }

    pub fn is_numerical(&self) -> bool {
        matches!(self, FahpError::Numerical(_))
    }
}

pub type Result<T, E = FahpError> = std::result::Result<T, E>;
