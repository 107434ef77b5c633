//! Configuration options.

pub mod options;
pub use options::PlotOptions;
