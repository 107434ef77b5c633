//! linalg-core: immutable, validated vectors and matrices.
//!
//! This crate provides [`Vector`] and [`Matrix`] value types with the core linear-algebra
//! operations (sums, scaling, dot and matrix products, transposition, linear transformation
//! of a vector, augmented-matrix construction). Every constructor and operation is gated by
//! the checks in [`validator`], and every operation returns a new instance.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod validator;
pub mod vector;
pub mod visual;

// Re-exports for convenience
pub use crate::config::PlotOptions;
pub use crate::core::{Dims, Indexing, InnerProduct, MatShape, MatVec, Operand, Product, Scalar, Value};
pub use crate::error::{ErrorKind, LinalgError};
pub use crate::matrix::{AugmentedMatrix, Matrix};
pub use crate::vector::Vector;
