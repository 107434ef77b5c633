//! Core traits, the scalar domain, and operand tagging.

pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use scalar::{Scalar, Value};
pub use traits::{Dims, Indexing, InnerProduct, MatShape, MatVec};

use crate::matrix::Matrix;
use crate::vector::Vector;

/// A tagged right-hand operand for the combined multiplication entry points.
///
/// Identity checks ("is this a Vector?") are resolved by matching the tag.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    Vector(&'a Vector),
    Matrix(&'a Matrix),
    Value(&'a Value),
}

impl Operand<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "Vector",
            Operand::Matrix(_) => "Matrix",
            Operand::Value(v) => v.type_name(),
        }
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(v: &'a Vector) -> Self {
        Operand::Vector(v)
    }
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(m: &'a Matrix) -> Self {
        Operand::Matrix(m)
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(v: &'a Value) -> Self {
        Operand::Value(v)
    }
}

/// Result of [`Matrix::multiply`]: a matrix product or a transformed vector.
#[derive(Clone, Debug, PartialEq)]
pub enum Product {
    Matrix(Matrix),
    Vector(Vector),
}

impl Product {
    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Product::Matrix(m) => Some(m),
            Product::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Matrix(_) => None,
        }
    }
}
