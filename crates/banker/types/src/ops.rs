//! Component-wise arithmetic on resource vectors.
//!
//! Every helper checks lengths first and reports [`VectorError::LengthMismatch`]
//! rather than truncating to the shorter operand.

use crate::error::VectorError;
use crate::vector::ResourceVector;

fn ensure_same_len(left: &ResourceVector, right: &ResourceVector) -> Result<(), VectorError> {
    if left.len() != right.len() {
        return Err(VectorError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

/// `left + right`, failing on overflow of any component.
pub fn vector_add(
    left: &ResourceVector,
    right: &ResourceVector,
) -> Result<ResourceVector, VectorError> {
    ensure_same_len(left, right)?;
    left.iter()
        .zip(right.iter())
        .enumerate()
        .map(|(index, (l, r))| l.checked_add(*r).ok_or(VectorError::Overflow { index }))
        .collect()
}

/// `left - right`, failing if any component would go negative.
pub fn vector_sub(
    left: &ResourceVector,
    right: &ResourceVector,
) -> Result<ResourceVector, VectorError> {
    ensure_same_len(left, right)?;
    left.iter()
        .zip(right.iter())
        .enumerate()
        .map(|(index, (l, r))| l.checked_sub(*r).ok_or(VectorError::Underflow { index }))
        .collect()
}

/// True when every component of `left` is at most the matching one in `right`.
pub fn vector_le(left: &ResourceVector, right: &ResourceVector) -> Result<bool, VectorError> {
    ensure_same_len(left, right)?;
    Ok(left.iter().zip(right.iter()).all(|(l, r)| l <= r))
}

/// True when every component of `left` is at least the matching one in `right`.
pub fn vector_ge(left: &ResourceVector, right: &ResourceVector) -> Result<bool, VectorError> {
    vector_le(right, left)
}

/// Index of the first component where `left` exceeds `right`, if any.
pub fn first_excess(
    left: &ResourceVector,
    right: &ResourceVector,
) -> Result<Option<usize>, VectorError> {
    ensure_same_len(left, right)?;
    Ok(left.iter().zip(right.iter()).position(|(l, r)| l > r))
}
