use thiserror::Error;

use crate::core::Dims;

// Unified error type for linalg-core

/// Broad class of a [`LinalgError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong element type, wrong operand class, or a non-scalar where a scalar is required.
    Type,
    /// Mismatched lengths or dimensions, or non-rectangular row data.
    Shape,
    /// A mathematically undefined operation, such as normalizing a zero vector.
    Degenerate,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("expected a scalar value (non-boolean int or float), found {0}")]
    NotScalar(&'static str),
    #[error("expected a list as input, found {0}")]
    NotList(&'static str),
    #[error("row {row} must be a list, found {found}")]
    RowNotList { row: usize, found: &'static str },
    #[error("element {index} must be a scalar value, found {found}")]
    ElementNotScalar { index: usize, found: &'static str },
    #[error("entry ({row}, {col}) must be a scalar value, found {found}")]
    EntryNotScalar {
        row: usize,
        col: usize,
        found: &'static str,
    },
    #[error("expected a {expected} object, found {found}")]
    WrongOperand {
        expected: &'static str,
        found: &'static str,
    },
    #[error("unsupported operand types for multiplication: {lhs} and {rhs}")]
    OperandMismatch {
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("vectors are not the same dimension: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("matrices are not the same shape: {left} vs {right}")]
    ShapeMismatch { left: Dims, right: Dims },
    #[error("matrix with {rows} rows is incompatible with a vector of length {len}")]
    MatrixVectorMismatch { rows: usize, len: usize },
    #[error("cannot multiply {left} by {right}: {} columns vs {} rows", .left.cols, .right.rows)]
    ProductMismatch { left: Dims, right: Dims },
    #[error("matrix rows must all be the same length: row {row} has {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,
    #[error("expected a 2D vector, found length {0}")]
    NotPlanar(usize),
    #[error("cannot compute cosine similarity with a zero vector")]
    ZeroMagnitude,
}

impl LinalgError {
    /// Classify this error as a type, shape, or degenerate-input violation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::NotScalar(_)
            | LinalgError::NotList(_)
            | LinalgError::RowNotList { .. }
            | LinalgError::ElementNotScalar { .. }
            | LinalgError::EntryNotScalar { .. }
            | LinalgError::WrongOperand { .. }
            | LinalgError::OperandMismatch { .. } => ErrorKind::Type,
            LinalgError::LengthMismatch { .. }
            | LinalgError::ShapeMismatch { .. }
            | LinalgError::MatrixVectorMismatch { .. }
            | LinalgError::ProductMismatch { .. }
            | LinalgError::RaggedRows { .. }
            | LinalgError::EmptyMatrix
            | LinalgError::NotPlanar(_) => ErrorKind::Shape,
            LinalgError::ZeroMagnitude => ErrorKind::Degenerate,
        }
    }
}
