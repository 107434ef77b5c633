// Operator overloads for Matrix; each delegates to the validated named method.

use std::ops::{Add, Mul, Sub};

use super::Matrix;
use crate::error::LinalgError;
use crate::vector::Vector;

impl<'a> Add for &'a Matrix {
    type Output = Result<Matrix, LinalgError>;
    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<'a> Sub for &'a Matrix {
    type Output = Result<Matrix, LinalgError>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a> Mul for &'a Matrix {
    type Output = Result<Matrix, LinalgError>;
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

impl<'a> Mul<&'a Vector> for &'a Matrix {
    type Output = Result<Vector, LinalgError>;
    fn mul(self, rhs: &'a Vector) -> Self::Output {
        self.apply_to_vector(rhs)
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;
    fn mul(self, k: f64) -> Matrix {
        self.scalar_multiply(k)
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, m: &'a Matrix) -> Matrix {
        m.scalar_multiply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_route_through_methods() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::new(vec![vec![5, 6], vec![7, 8]]).unwrap();
        assert_eq!((&a * &b).unwrap(), a.dot(&b).unwrap());
        assert_eq!((&a + &b).unwrap(), a.add(&b).unwrap());
        assert_eq!(
            (&a * &Vector::new(vec![1, 0])).unwrap(),
            Vector::new(vec![1, 3])
        );
        assert_eq!(&a * 2.0, 2.0 * &a);
        let wide = Matrix::new(vec![vec![1, 2, 3]]).unwrap();
        assert!((&a - &wide).is_err());
        assert!((&wide * &a).is_err());
    }
}
