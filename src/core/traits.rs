//! Core linear-algebra traits for linalg-core.

use std::fmt;

use crate::error::LinalgError;

/// Matrix–vector product: y = A x.
pub trait MatVec<V> {
    /// Compute y = A · x, returning a freshly allocated `y`.
    fn matvec(&self, x: &V) -> Result<V, LinalgError>;
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar, LinalgError>;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Uniform indexing into vectors and matrices.
pub trait Indexing {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
}

/// Two-dimensional shape of a matrix-like value.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    fn dims(&self) -> Dims {
        Dims::new(MatShape::nrows(self), MatShape::ncols(self))
    }
}

/// Matrix dimensions `(rows, cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Dimensions with rows and columns swapped.
    pub const fn transposed(self) -> Self {
        Self::new(self.cols, self.rows)
    }
}

impl From<(usize, usize)> for Dims {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl From<Dims> for (usize, usize) {
    fn from(d: Dims) -> Self {
        (d.rows, d.cols)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}
