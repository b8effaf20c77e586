use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// One non-negative count per resource type.
///
/// Used for the available pool, for every allocation and need row, and for
/// requests. All vectors in one system share the same length `m`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceVector(Vec<u64>);

impl ResourceVector {
    pub fn new(components: Vec<u64>) -> Self {
        Self(components)
    }

    /// The all-zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for the empty vector and for a vector of zeros.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &u64> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.0.get(index).copied()
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }

    /// Add `other` component-wise, clamping at `u64::MAX`.
    ///
    /// Only used to accumulate released work during safety simulation, where
    /// a saturated component still dominates every representable need.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn saturating_add_assign(&mut self, other: &ResourceVector) {
        assert_eq!(
            self.len(),
            other.len(),
            "vectors must be of the same size"
        );
        for (c, o) in self.0.iter_mut().zip(other.0.iter()) {
            *c = c.saturating_add(*o);
        }
    }
}

impl From<Vec<u64>> for ResourceVector {
    fn from(components: Vec<u64>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[u64; N]> for ResourceVector {
    fn from(components: [u64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl FromIterator<u64> for ResourceVector {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for ResourceVector {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl fmt::Display for ResourceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

/// Display adapter for a matrix of resource vectors: `[[1, 0]; [0, 2]]`.
pub struct MatrixDisplay<'a>(&'a [ResourceVector]);

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}

pub fn display_matrix(rows: &[ResourceVector]) -> MatrixDisplay<'_> {
    MatrixDisplay(rows)
}
