//! # banker-types
//!
//! Data model shared by the banker arbiter crates.
//!
//! A system has `m` countable, non-preemptible resource types and `n` tasks.
//! Every quantity is a [`ResourceVector`] of length `m`; the allocation and
//! need matrices are `n` such vectors each. Components are `u64`, so the
//! non-negativity invariant is carried by the type rather than checked.
//!
//! Arithmetic goes through explicitly named component-wise helpers
//! ([`vector_add`], [`vector_sub`], [`vector_le`], [`vector_ge`]) that fail on
//! length mismatch instead of producing silently-wrong results.

pub mod error;
pub mod ops;
pub mod outcome;
pub mod state;
pub mod vector;

pub use error::VectorError;
pub use ops::{first_excess, vector_add, vector_ge, vector_le, vector_sub};
pub use outcome::Outcome;
pub use state::{Request, ResourceState};
pub use vector::{display_matrix, MatrixDisplay, ResourceVector};
