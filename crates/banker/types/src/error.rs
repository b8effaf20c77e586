use thiserror::Error;

/// Errors from component-wise vector arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("vectors must be of the same size: left has {left} components, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("component {index} overflows")]
    Overflow { index: usize },

    #[error("component {index} would become negative")]
    Underflow { index: usize },
}
