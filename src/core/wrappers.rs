//! Conversions between linalg-core types and faer dense matrices.
//!
//! Converting into `faer::Mat<f64>` gives access to faer's factorizations and optimized
//! kernels; converting back runs the usual [`Matrix`] validation, so an empty faer matrix is
//! rejected with [`LinalgError::EmptyMatrix`].
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use faer::{Mat, MatRef};

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::vector::Vector;

impl From<&Matrix> for Mat<f64> {
    fn from(m: &Matrix) -> Self {
        Mat::from_fn(m.nrows(), m.ncols(), |i, j| m[i][j])
    }
}

impl<'a> TryFrom<MatRef<'a, f64>> for Matrix {
    type Error = LinalgError;

    fn try_from(m: MatRef<'a, f64>) -> Result<Self, Self::Error> {
        Matrix::from_grid(
            (0..m.nrows())
                .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
                .collect(),
        )
    }
}

impl TryFrom<&Mat<f64>> for Matrix {
    type Error = LinalgError;

    fn try_from(m: &Mat<f64>) -> Result<Self, Self::Error> {
        Matrix::try_from(m.as_ref())
    }
}

/// Column matrix `len × 1` holding the vector's entries.
impl From<&Vector> for Mat<f64> {
    fn from(v: &Vector) -> Self {
        Mat::from_fn(v.len(), 1, |i, _| v.data()[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faer_round_trip_preserves_layout() {
        let a = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let fa = Mat::<f64>::from(&a);
        assert_eq!(fa.nrows(), 2);
        assert_eq!(fa.ncols(), 3);
        assert_eq!(fa[(1, 0)], 4.0);
        assert_eq!(Matrix::try_from(&fa).unwrap(), a);
    }

    #[test]
    fn empty_faer_matrix_is_rejected() {
        let empty = Mat::<f64>::zeros(0, 3);
        assert_eq!(
            Matrix::try_from(&empty).unwrap_err(),
            LinalgError::EmptyMatrix
        );
    }
}
