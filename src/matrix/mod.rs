//! Matrix module: dense matrices, augmented matrices, and operator overloads.

pub mod augmented;
pub mod dense;
mod ops;

pub use augmented::AugmentedMatrix;
pub use dense::Matrix;
