//! Augmented matrices `[A | b]` for linear systems `A x = b`.

use std::fmt;
use std::ops::Deref;

use log::trace;

use crate::core::{MatShape, Operand};
use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::validator;
use crate::vector::Vector;

/// A [`Matrix`] formed by appending `b` as an extra column to `A`.
///
/// The augmented grid is computed once at construction and owned outright; the borrowed
/// `A` and `b` are kept only for traceability. Every [`Matrix`] operation is available
/// through `Deref`.
#[derive(Clone, Debug)]
pub struct AugmentedMatrix<'a> {
    matrix: Matrix,
    original_matrix: &'a Matrix,
    original_vector: &'a Vector,
}

impl<'a> AugmentedMatrix<'a> {
    /// Build `[A | b]`. Requires `rows(A) == len(b)`.
    pub fn new(a: &'a Matrix, b: &'a Vector) -> Result<Self, LinalgError> {
        validator::validate_matrix_vector_length(a, b)?;
        let grid = a
            .rows()
            .zip(b.iter())
            .map(|(row, bi)| {
                let mut r = Vec::with_capacity(row.len() + 1);
                r.extend_from_slice(row);
                r.push(bi);
                r
            })
            .collect();
        let matrix = Matrix::from_grid(grid)?;
        trace!("augmented {} with vector of length {}", a.dims(), b.len());
        Ok(Self {
            matrix,
            original_matrix: a,
            original_vector: b,
        })
    }

    /// Build `[A | b]` from tagged operands, checking that `a` is a Matrix and `b` a Vector.
    pub fn from_operands(a: Operand<'a>, b: Operand<'a>) -> Result<Self, LinalgError> {
        let a = validator::validate_is_matrix(a)?;
        let b = validator::validate_is_vector(b)?;
        Self::new(a, b)
    }

    pub fn original_matrix(&self) -> &'a Matrix {
        self.original_matrix
    }

    pub fn original_vector(&self) -> &'a Vector {
        self.original_vector
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }
}

impl Deref for AugmentedMatrix<'_> {
    type Target = Matrix;

    fn deref(&self) -> &Matrix {
        &self.matrix
    }
}

impl PartialEq for AugmentedMatrix<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl PartialEq<Matrix> for AugmentedMatrix<'_> {
    fn eq(&self, other: &Matrix) -> bool {
        &self.matrix == other
    }
}

impl PartialEq<AugmentedMatrix<'_>> for Matrix {
    fn eq(&self, other: &AugmentedMatrix<'_>) -> bool {
        self == &other.matrix
    }
}

impl fmt::Display for AugmentedMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

impl MatShape for AugmentedMatrix<'_> {
    fn nrows(&self) -> usize {
        self.matrix.nrows()
    }
    fn ncols(&self) -> usize {
        self.matrix.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dims, Value};
    use crate::error::ErrorKind;

    #[test]
    fn keeps_back_references() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Vector::new(vec![1, 2]);
        let ab = AugmentedMatrix::new(&a, &b).unwrap();
        assert!(std::ptr::eq(ab.original_matrix(), &a));
        assert!(std::ptr::eq(ab.original_vector(), &b));
        assert_eq!(ab.dims(), Dims::new(2, 3));
    }

    #[test]
    fn from_operands_checks_tags() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Vector::new(vec![1, 2]);
        let x = Value::from(1);
        assert!(AugmentedMatrix::from_operands(Operand::Matrix(&a), Operand::Vector(&b)).is_ok());
        let err = AugmentedMatrix::from_operands(Operand::Vector(&b), Operand::Vector(&b))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = AugmentedMatrix::from_operands(Operand::Matrix(&a), Operand::Value(&x))
            .unwrap_err();
        assert_eq!(
            err,
            LinalgError::WrongOperand {
                expected: "Vector",
                found: "int"
            }
        );
    }
}
