// Operator overloads for Vector; each delegates to the validated named method.

use std::ops::{Add, Mul, Neg, Sub};

use super::Vector;
use crate::error::LinalgError;

impl<'a> Add for &'a Vector {
    type Output = Result<Vector, LinalgError>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl<'a> Sub for &'a Vector {
    type Output = Result<Vector, LinalgError>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a> Mul<f64> for &'a Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        self.scalar_multiply(k)
    }
}

impl<'a> Mul<&'a Vector> for f64 {
    type Output = Vector;
    fn mul(self, v: &'a Vector) -> Vector {
        v.scalar_multiply(self)
    }
}

impl<'a> Neg for &'a Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.scalar_multiply(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_route_through_methods() {
        let v = Vector::new(vec![0, 1, 2]);
        let w = Vector::new(vec![0, 1, 2, 3]);
        assert_eq!((&v + &v).unwrap(), Vector::new(vec![0, 2, 4]));
        assert!((&v - &w).is_err());
        assert_eq!(&v * 5.0, 5.0 * &v);
        assert_eq!(-&v, Vector::new(vec![0, -1, -2]));
    }
}
