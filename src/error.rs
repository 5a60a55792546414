//! Error types shared across the crate.

use std::error::Error;
use std::fmt;

/// Errors produced while constructing a curve or editing its control points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Construction was requested with fewer control points than a curve needs
    TooFewPoints(String),
    /// A control point edit was attempted while the point set is frozen
    Frozen(String),
    /// Control point input data could not be parsed or serialized
    ParseError(String),
}

/// Result type used throughout the crate
pub type CurveResult<T> = Result<T, CurveError>;

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TooFewPoints(message) => write!(f, "too few control points: {}", message),
            CurveError::Frozen(message) => write!(f, "point set is frozen: {}", message),
            CurveError::ParseError(message) => write!(f, "parse error: {}", message),
        }
    }
}

impl Error for CurveError {}
