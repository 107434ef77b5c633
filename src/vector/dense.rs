//! Dense, immutable real vector.
//!
//! Every operation validates its arguments first and then returns a newly allocated
//! [`Vector`] (or a scalar); neither `self` nor the argument is ever modified.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::core::{Indexing, InnerProduct, MatShape, Operand, Scalar, Value};
use crate::error::LinalgError;
use crate::validator;

/// Fixed-length ordered sequence of real scalars.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Build a vector from any sequence of scalars. Booleans do not implement [`Scalar`].
    pub fn new<S: Scalar>(data: Vec<S>) -> Self {
        Self {
            data: data.into_iter().map(Scalar::to_f64).collect(),
        }
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.data.iter().copied()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// α · v, element-wise.
    pub fn scalar_multiply<K: Scalar>(&self, k: K) -> Vector {
        let k = k.to_f64();
        self.iter().map(|x| k * x).collect()
    }

    /// v + w, element-wise.
    pub fn add(&self, other: &Vector) -> Result<Vector, LinalgError> {
        validator::validate_same_length(self, other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// v - w, element-wise.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, LinalgError> {
        validator::validate_same_length(self, other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// v · w = Σ vᵢ wᵢ.
    pub fn dot(&self, other: &Vector) -> Result<f64, LinalgError> {
        validator::validate_same_length(self, other)?;
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            Ok(self
                .data
                .par_iter()
                .zip(other.data.par_iter())
                .map(|(a, b)| a * b)
                .sum())
        }
        #[cfg(not(feature = "rayon"))]
        {
            Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
        }
    }

    /// Euclidean norm ‖v‖ = √(Σ vᵢ²). Zero for the zero (or empty) vector.
    pub fn magnitude(&self) -> f64 {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            self.data.par_iter().map(|x| x * x).sum::<f64>().sqrt()
        }
        #[cfg(not(feature = "rayon"))]
        {
            self.iter().map(|x| x * x).sum::<f64>().sqrt()
        }
    }

    /// d(v, w) = ‖v - w‖.
    pub fn distance(&self, other: &Vector) -> Result<f64, LinalgError> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// cos θ = (v · w) / (‖v‖ ‖w‖). Fails with [`LinalgError::ZeroMagnitude`] if either
    /// vector has zero length.
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f64, LinalgError> {
        validator::validate_same_length(self, other)?;
        validator::validate_non_zero_magnitude(self)?;
        validator::validate_non_zero_magnitude(other)?;
        Ok(self.dot(other)? / (self.magnitude() * other.magnitude()))
    }

    /// Multiplication entry point for a loosely typed right-hand side. Only a scalar
    /// [`Value`] is accepted; it routes to [`Vector::scalar_multiply`].
    pub fn multiply(&self, rhs: Operand<'_>) -> Result<Vector, LinalgError> {
        match rhs {
            Operand::Value(v) => Ok(self.scalar_multiply(validator::validate_scalar(v)?)),
            other => Err(LinalgError::OperandMismatch {
                lhs: "Vector",
                rhs: other.type_name(),
            }),
        }
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<S: Scalar> From<Vec<S>> for Vector {
    fn from(data: Vec<S>) -> Self {
        Vector::new(data)
    }
}

impl TryFrom<&Value> for Vector {
    type Error = LinalgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = validator::validate_list(value)?;
        Ok(Self {
            data: validator::validate_all_scalars(items)?,
        })
    }
}

impl TryFrom<Value> for Vector {
    type Error = LinalgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Vector::try_from(&value)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        write_list(f, &self.data)?;
        write!(f, ")")
    }
}

/// Writes `[a, b, c]`, the list form shared by the textual representations.
pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, items: &[f64]) -> fmt::Result {
    write!(f, "[")?;
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_scalar(f, *x)?;
    }
    write!(f, "]")
}

/// Positional notation for magnitudes in `[1e-4, 1e16)`, scientific (`1e+300`, `2.5e-07`)
/// outside it.
fn write_scalar(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let magnitude = x.abs();
    if x == 0.0 || !x.is_finite() || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{x}");
    }
    let sci = format!("{x:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}

/// Implements inner product and norm for [`Vector`].
impl InnerProduct<Vector> for () {
    type Scalar = f64;

    fn dot(&self, x: &Vector, y: &Vector) -> Result<f64, LinalgError> {
        x.dot(y)
    }

    fn norm(&self, x: &Vector) -> f64 {
        x.magnitude()
    }
}

/// A vector is treated as a column: `len × 1`.
impl MatShape for Vector {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        1
    }
}

impl Indexing for Vector {
    fn nrows(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn arithmetic_leaves_operands_untouched() {
        let v = Vector::new(vec![0, 1, 2]);
        let w = Vector::new(vec![2, 1, 0]);
        assert_eq!(v.add(&w).unwrap(), Vector::new(vec![2, 2, 2]));
        assert_eq!(v.subtract(&w).unwrap(), Vector::new(vec![-2, 0, 2]));
        assert_eq!(v, Vector::new(vec![0, 1, 2]));
        assert_eq!(w, Vector::new(vec![2, 1, 0]));
    }

    #[test]
    fn zero_vector_has_zero_magnitude() {
        assert_eq!(Vector::new(vec![0, 0, 0]).magnitude(), 0.0);
        assert_eq!(Vector::new(Vec::<f64>::new()).magnitude(), 0.0);
    }

    #[test]
    fn cosine_checks_length_before_magnitude() {
        let err = Vector::new(vec![0, 0])
            .cosine_similarity(&Vector::new(vec![1, 2, 3]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn multiply_rejects_non_scalar_values() {
        let v = Vector::new(vec![0, 1, 2]);
        let ten = Value::from("10");
        let err = v.multiply(Operand::Value(&ten)).unwrap_err();
        assert_eq!(err, LinalgError::NotScalar("str"));
        let five = Value::from(5);
        assert_eq!(
            v.multiply(Operand::Value(&five)).unwrap(),
            Vector::new(vec![0, 5, 10])
        );
        let err = v.multiply(Operand::Vector(&v)).unwrap_err();
        assert_eq!(
            err,
            LinalgError::OperandMismatch {
                lhs: "Vector",
                rhs: "Vector"
            }
        );
    }

    #[test]
    fn display_matches_canonical_form() {
        assert_eq!(Vector::new(vec![3, 4]).to_string(), "Vector([3, 4])");
        assert_eq!(Vector::new(vec![0.5, -1.0]).to_string(), "Vector([0.5, -1])");
    }

    #[test]
    fn extreme_magnitudes_use_scientific_notation() {
        assert_eq!(
            Vector::new(vec![1e300, -2.5e-7, 1e16]).to_string(),
            "Vector([1e+300, -2.5e-07, 1e+16])"
        );
        assert_eq!(
            Vector::new(vec![1e15, 0.0001, 0.0]).to_string(),
            "Vector([1000000000000000, 0.0001, 0])"
        );
    }

    #[test]
    fn into_inner_returns_the_data() {
        assert_eq!(Vector::new(vec![1, 2]).into_inner(), vec![1.0, 2.0]);
    }
}
