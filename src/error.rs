//! Error types for spline construction.

use thiserror::Error;

/// Errors that can occur while constructing a spline.
///
/// Evaluation never fails; every error is reported by the constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplineError {
    /// Too few control points for the chosen scheme.
    #[error("{kind} curve must have at least {required} points. Found: {actual}")]
    NotEnoughPoints {
        kind: &'static str,
        required: usize,
        actual: usize,
    },

    /// A raw coordinate slice did not hold exactly two values.
    #[error("points must have exactly 2 coordinates. Found: {actual}")]
    InvalidPointDimension { actual: usize },

    /// The scheme tag is not a [`SplineKind`](crate::SplineKind)
    /// discriminant.
    #[error("unknown spline type {0}")]
    UnknownSplineType(i64),
}

/// Result type for spline construction.
pub type SplineResult<T> = Result<T, SplineError>;
