//! Vector module: the dense real vector type and its operator overloads.

pub mod dense;
pub use dense::Vector;
mod ops;
