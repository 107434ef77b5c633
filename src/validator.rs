//! Validation gates for every constructor and operation.
//!
//! Each `validate_*` function either returns `Ok` (sometimes with the checked data, converted
//! to `f64`) or the specific [`LinalgError`] describing the violation. Nothing is computed by
//! a caller until its checks have passed, so operations are all-or-nothing.

use log::debug;

use crate::core::{MatShape, Operand, Value};
use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::vector::Vector;

fn fail<T>(err: LinalgError) -> Result<T, LinalgError> {
    debug!("validation failed: {err}");
    Err(err)
}

// --------------------
// DATA TYPES
// --------------------

/// Scalar check: numeric and not a boolean.
pub fn validate_scalar(value: &Value) -> Result<f64, LinalgError> {
    match value.as_scalar() {
        Some(x) => Ok(x),
        None => fail(LinalgError::NotScalar(value.type_name())),
    }
}

/// List check: the value is a sequence.
pub fn validate_list(value: &Value) -> Result<&[Value], LinalgError> {
    match value.as_list() {
        Some(items) => Ok(items),
        None => fail(LinalgError::NotList(value.type_name())),
    }
}

/// All-scalars check over a sequence.
pub fn validate_all_scalars(items: &[Value]) -> Result<Vec<f64>, LinalgError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.as_scalar() {
            Some(x) => Ok(x),
            None => fail(LinalgError::ElementNotScalar {
                index,
                found: item.type_name(),
            }),
        })
        .collect()
}

/// Matrix well-formedness of loosely typed data: a list of lists of scalars with one common
/// row length. Type violations are reported before shape violations.
pub fn validate_matrix_value(value: &Value) -> Result<Vec<Vec<f64>>, LinalgError> {
    let rows = validate_list(value)?;
    let mut grid = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let Some(items) = row.as_list() else {
            return fail(LinalgError::RowNotList {
                row: r,
                found: row.type_name(),
            });
        };
        let parsed = items
            .iter()
            .enumerate()
            .map(|(c, item)| match item.as_scalar() {
                Some(x) => Ok(x),
                None => fail(LinalgError::EntryNotScalar {
                    row: r,
                    col: c,
                    found: item.type_name(),
                }),
            })
            .collect::<Result<Vec<f64>, _>>()?;
        grid.push(parsed);
    }
    validate_rectangular(&grid)?;
    Ok(grid)
}

/// Matrix shape check on typed rows: at least one row, at least one column, equal lengths.
/// Returns the number of columns.
pub fn validate_rectangular<R: AsRef<[f64]>>(rows: &[R]) -> Result<usize, LinalgError> {
    let Some(first) = rows.first() else {
        return fail(LinalgError::EmptyMatrix);
    };
    let expected = first.as_ref().len();
    if expected == 0 {
        return fail(LinalgError::EmptyMatrix);
    }
    for (row, r) in rows.iter().enumerate().skip(1) {
        let found = r.as_ref().len();
        if found != expected {
            return fail(LinalgError::RaggedRows {
                row,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Identity check: the operand is a Vector.
pub fn validate_is_vector<'a>(operand: Operand<'a>) -> Result<&'a Vector, LinalgError> {
    match operand {
        Operand::Vector(v) => Ok(v),
        other => fail(LinalgError::WrongOperand {
            expected: "Vector",
            found: other.type_name(),
        }),
    }
}

/// Identity check: the operand is a Matrix.
pub fn validate_is_matrix<'a>(operand: Operand<'a>) -> Result<&'a Matrix, LinalgError> {
    match operand {
        Operand::Matrix(m) => Ok(m),
        other => fail(LinalgError::WrongOperand {
            expected: "Matrix",
            found: other.type_name(),
        }),
    }
}

// --------------------
// DIMENSIONALITY
// --------------------

pub fn validate_vector_is_2d(v: &Vector) -> Result<(), LinalgError> {
    if v.len() != 2 {
        return fail(LinalgError::NotPlanar(v.len()));
    }
    Ok(())
}

pub fn validate_same_length(a: &Vector, b: &Vector) -> Result<(), LinalgError> {
    if a.len() != b.len() {
        return fail(LinalgError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

pub fn validate_same_shape<A: MatShape, B: MatShape>(a: &A, b: &B) -> Result<(), LinalgError> {
    if a.dims() != b.dims() {
        return fail(LinalgError::ShapeMismatch {
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(())
}

/// `rows(A) == length(b)`, as required to augment `A` with `b`.
pub fn validate_matrix_vector_length(a: &Matrix, b: &Vector) -> Result<(), LinalgError> {
    if a.nrows() != b.len() {
        return fail(LinalgError::MatrixVectorMismatch {
            rows: a.nrows(),
            len: b.len(),
        });
    }
    Ok(())
}

/// `cols(A) == rows(B)`. A [`Vector`] on the right is treated as a column.
pub fn validate_product_compatible<A: MatShape, B: MatShape>(
    a: &A,
    b: &B,
) -> Result<(), LinalgError> {
    if a.ncols() != b.nrows() {
        return fail(LinalgError::ProductMismatch {
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(())
}

// --------------------
// VECTOR OPERATIONS
// --------------------

pub fn validate_non_zero_magnitude(v: &Vector) -> Result<(), LinalgError> {
    if v.magnitude() == 0.0 {
        return fail(LinalgError::ZeroMagnitude);
    }
    Ok(())
}
