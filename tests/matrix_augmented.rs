//! Tests for augmented matrices `[A | b]`.

use linalg_core::{AugmentedMatrix, Dims, ErrorKind, LinalgError, Matrix, Vector};

#[test]
fn augmented_matrix_compatible_dimensions() {
    let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Vector::new(vec![1, 2]);
    let ab = Matrix::new(vec![vec![1, 2, 1], vec![3, 4, 2]]).unwrap();
    let aug = AugmentedMatrix::new(&a, &b).unwrap();
    assert_eq!(ab, aug);
    assert_eq!(aug, ab);
    assert_eq!(aug.ncols(), a.ncols() + 1);
}

#[test]
fn augmented_matrix_incompatible_dimensions() {
    let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Vector::new(vec![1, 2, 3]);
    let err = AugmentedMatrix::new(&a, &b).unwrap_err();
    assert_eq!(err, LinalgError::MatrixVectorMismatch { rows: 2, len: 3 });
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn matrix_operations_apply_unchanged() {
    let a = Matrix::new(vec![vec![1, 0], vec![0, 1], vec![2, 2]]).unwrap();
    let b = Vector::new(vec![5, 6, 7]);
    let aug = a.augment(&b).unwrap();
    assert_eq!(aug.dims(), Dims::new(3, 3));
    assert_eq!(
        aug.transpose(),
        Matrix::new(vec![vec![1, 0, 2], vec![0, 1, 2], vec![5, 6, 7]]).unwrap()
    );
    assert_eq!(
        aug.apply_to_vector(&Vector::new(vec![0, 0, 1])).unwrap(),
        b
    );
    assert_eq!(aug.column_vector(2), Some(b.clone()));
}

#[test]
fn sources_are_not_the_source_of_truth() {
    let a = Matrix::new(vec![vec![1.5, 2.5]]).unwrap();
    let b = Vector::new(vec![9]);
    let aug = AugmentedMatrix::new(&a, &b).unwrap();
    assert_eq!(aug.original_matrix(), &a);
    assert_eq!(aug.original_vector(), &b);
    assert_eq!(aug.as_matrix(), &Matrix::new(vec![vec![1.5, 2.5, 9.0]]).unwrap());
    let owned = aug.into_matrix();
    assert_eq!(owned, Matrix::new(vec![vec![1.5, 2.5, 9.0]]).unwrap());
    assert_eq!(a.dims(), Dims::new(1, 2));
}

#[test]
fn augmented_display_is_a_matrix() {
    let a = Matrix::new(vec![vec![1, 2]]).unwrap();
    let b = Vector::new(vec![3]);
    let aug = AugmentedMatrix::new(&a, &b).unwrap();
    assert_eq!(aug.to_string(), "Matrix([\n        [1, 2, 3]\n    ])");
}
