//! The scalar domain: typed scalars and loosely typed input values.
//!
//! Typed constructors accept anything implementing [`Scalar`], which covers the integer and
//! floating-point primitives but deliberately not `bool`. Data that arrives without static
//! types (a driver script handing over a nested list, say) is described by [`Value`] and
//! checked at runtime by the validator.

use num_traits::AsPrimitive;

mod sealed {
    pub trait Sealed {}
}

/// A real number convertible to `f64`. Sealed; booleans are excluded.
pub trait Scalar: AsPrimitive<f64> + sealed::Sealed {
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Scalar for $t {}
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A loosely typed input value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// The numeric value, if this is an `Int` or `Float`.
    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            Value::Int(i) => Some(i as f64),
            Value::Float(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_widen_to_f64() {
        assert_eq!(3i32.to_f64(), 3.0);
        assert_eq!(7u8.to_f64(), 7.0);
        assert_eq!(0.5f32.to_f64(), 0.5);
    }

    #[test]
    fn nested_lists_convert() {
        let v = Value::from(vec![vec![1, 2], vec![3, 4]]);
        let rows = v.as_list().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].as_list().unwrap()[0].as_scalar(), Some(3.0));
        assert_eq!(Value::from(true).as_scalar(), None);
        assert_eq!(Value::from("8").type_name(), "str");
    }
}
