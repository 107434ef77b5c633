//! Dense, immutable row-major matrix.
//!
//! A [`Matrix`] is an ordered sequence of equally long rows with at least one row and one
//! column. Like [`Vector`], it is never mutated after construction: transposition, sums,
//! scaling and products all allocate a new matrix.

use std::fmt;
use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq};

use log::trace;

use crate::core::{Dims, Indexing, MatShape, MatVec, Operand, Product, Scalar, Value};
use crate::error::LinalgError;
use crate::matrix::AugmentedMatrix;
use crate::validator;
use crate::vector::Vector;
use crate::vector::dense::write_list;

/// Rectangular grid of real scalars.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    dims: Dims,
}

impl Matrix {
    /// Build a matrix from rows of scalars. Fails if there are no rows, the rows are empty,
    /// or the rows differ in length.
    pub fn new<S: Scalar>(rows: Vec<Vec<S>>) -> Result<Self, LinalgError> {
        Self::from_grid(
            rows.into_iter()
                .map(|row| row.into_iter().map(Scalar::to_f64).collect())
                .collect(),
        )
    }

    /// Build a matrix from `f64` rows without per-element conversion.
    pub fn from_grid(data: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        let cols = validator::validate_rectangular(&data)?;
        let dims = Dims::new(data.len(), cols);
        Ok(Self { data, dims })
    }

    /// Build a matrix whose rows are the given vectors.
    pub fn from_rows(rows: &[Vector]) -> Result<Self, LinalgError> {
        Self::from_grid(rows.iter().map(|r| r.data().to_vec()).collect())
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, LinalgError> {
        Self::from_grid(
            (0..n)
                .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect(),
        )
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn nrows(&self) -> usize {
        self.dims.rows
    }

    pub fn ncols(&self) -> usize {
        self.dims.cols
    }

    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.data.get(i).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Row `i` as a [`Vector`].
    pub fn row_vector(&self, i: usize) -> Option<Vector> {
        self.row(i).map(|r| r.iter().copied().collect())
    }

    /// Column `j` as a [`Vector`].
    pub fn column_vector(&self, j: usize) -> Option<Vector> {
        if j >= self.ncols() {
            return None;
        }
        Some(self.data.iter().map(|row| row[j]).collect())
    }

    /// Aᵀ, with `result[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Matrix {
        let data = (0..self.ncols())
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();
        Matrix {
            data,
            dims: self.dims.transposed(),
        }
    }

    /// A + B, element-wise.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        validator::validate_same_shape(self, other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// A - B, element-wise.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        validator::validate_same_shape(self, other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// α · A, element-wise.
    pub fn scalar_multiply<K: Scalar>(&self, k: K) -> Matrix {
        let k = k.to_f64();
        Matrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|a| a * k).collect())
                .collect(),
            dims: self.dims,
        }
    }

    /// Matrix product `C = A · B` with `C[i][j] = Σₖ A[i][k] B[k][j]`.
    ///
    /// Each entry is the dot product of a row of `self` with a row of `other.transpose()`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        validator::validate_product_compatible(self, other)?;
        let columns: Vec<Vector> = other.transpose().row_vectors().collect();
        let data = self
            .row_vectors()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.dot(col))
                    .collect::<Result<Vec<f64>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        trace!("matrix product {} x {}", self.dims, other.dims);
        Matrix::from_grid(data)
    }

    /// Linear transformation `A v`: `v` is treated as a `len × 1` column matrix, multiplied
    /// on the right, and the single result column is unpacked into a vector of length
    /// `self.nrows()`.
    pub fn apply_to_vector(&self, v: &Vector) -> Result<Vector, LinalgError> {
        validator::validate_product_compatible(self, v)?;
        let column = Matrix::from_grid(v.iter().map(|x| vec![x]).collect())?;
        let product = self.dot(&column)?;
        Ok(product.data.into_iter().map(|row| row[0]).collect())
    }

    /// Combined multiplication entry point: a [`Matrix`] operand yields the matrix product,
    /// a [`Vector`] operand yields the transformed vector. Anything else is a type violation.
    pub fn multiply(&self, rhs: Operand<'_>) -> Result<Product, LinalgError> {
        match rhs {
            Operand::Matrix(m) => self.dot(m).map(Product::Matrix),
            Operand::Vector(v) => self.apply_to_vector(v).map(Product::Vector),
            Operand::Value(v) => Err(LinalgError::OperandMismatch {
                lhs: "Matrix",
                rhs: v.type_name(),
            }),
        }
    }

    /// The augmented matrix `[self | b]`.
    pub fn augment<'a>(&'a self, b: &'a Vector) -> Result<AugmentedMatrix<'a>, LinalgError> {
        AugmentedMatrix::new(self, b)
    }

    fn row_vectors(&self) -> impl Iterator<Item = Vector> + '_ {
        self.data.iter().map(|row| row.iter().copied().collect())
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(ra, rb)| ra.iter().zip(rb).map(|(&a, &b)| f(a, b)).collect())
            .collect();
        Matrix {
            data,
            dims: self.dims,
        }
    }
}

impl TryFrom<&Value> for Matrix {
    type Error = LinalgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Matrix::from_grid(validator::validate_matrix_value(value)?)
    }
}

impl TryFrom<Value> for Matrix {
    type Error = LinalgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Matrix::try_from(&value)
    }
}

impl Index<usize> for Matrix {
    type Output = [f64];

    fn index(&self, i: usize) -> &[f64] {
        &self.data[i]
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix([")?;
        for (i, row) in self.data.iter().enumerate() {
            write!(f, "        ")?;
            write_list(f, row)?;
            if i + 1 < self.data.len() {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        write!(f, "    ])")
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dims == other.dims
            && self
                .rows()
                .zip(other.rows())
                .all(|(ra, rb)| ra.abs_diff_eq(rb, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dims == other.dims
            && self
                .rows()
                .zip(other.rows())
                .all(|(ra, rb)| ra.relative_eq(rb, epsilon, max_relative))
    }
}

impl MatVec<Vector> for Matrix {
    fn matvec(&self, x: &Vector) -> Result<Vector, LinalgError> {
        self.apply_to_vector(x)
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.dims.rows
    }
    fn ncols(&self) -> usize {
        self.dims.cols
    }
}

impl Indexing for Matrix {
    fn nrows(&self) -> usize {
        self.dims.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn transpose_swaps_dims() {
        let x = Matrix::new(vec![vec![0, 1, 2], vec![0, 3, 5]]).unwrap();
        let t = x.transpose();
        assert_eq!(t.dims(), Dims::new(3, 2));
        assert_eq!(t, Matrix::new(vec![vec![0, 0], vec![1, 3], vec![2, 5]]).unwrap());
    }

    #[test]
    fn column_extraction() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(a.column_vector(1), Some(Vector::new(vec![2, 4])));
        assert_eq!(a.column_vector(2), None);
        assert_eq!(a.row_vector(0), Some(Vector::new(vec![1, 2])));
        assert_eq!(&a[1], &[3.0, 4.0]);
        assert_eq!(Indexing::nrows(&a), 2);
        assert_eq!(Indexing::nrows(&Vector::new(vec![1, 2, 3])), 3);
    }

    #[test]
    fn apply_rejects_wrong_length() {
        let a = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let err = a.apply_to_vector(&Vector::new(vec![1, 2])).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ProductMismatch {
                left: Dims::new(2, 3),
                right: Dims::new(2, 1)
            }
        );
        let err = a.apply_to_vector(&Vector::new(Vec::<f64>::new())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn multiply_dispatches_on_operand() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let v = Vector::new(vec![1, 1]);
        assert_eq!(
            a.multiply(Operand::Vector(&v)).unwrap(),
            Product::Vector(Vector::new(vec![3, 7]))
        );
        assert!(matches!(
            a.multiply(Operand::Matrix(&a)).unwrap(),
            Product::Matrix(_)
        ));
        let k = Value::from(2);
        assert_eq!(
            a.multiply(Operand::Value(&k)).unwrap_err(),
            LinalgError::OperandMismatch {
                lhs: "Matrix",
                rhs: "int"
            }
        );
    }

    #[test]
    fn display_lists_each_row() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            a.to_string(),
            "Matrix([\n        [1, 2],\n        [3, 4]\n    ])"
        );
    }
}
