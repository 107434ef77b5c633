//! Options for building plot scenes.
//!
//! This module provides the `PlotOptions` struct, which is used to specify how a
//! [`Scene`](crate::visual::Scene) should be framed: the axis limits, whether a grid is
//! drawn, and whether both axes share one scale. The defaults frame the square
//! `[-10, 10] × [-10, 10]` with a grid and equal aspect.

/// Scene framing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Horizontal axis limits (min, max)
    pub xlim: (f64, f64),

    /// Vertical axis limits (min, max)
    pub ylim: (f64, f64),

    /// Draw a background grid
    pub grid: bool,

    /// Use the same scale on both axes
    pub equal_aspect: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            xlim: (-10.0, 10.0),
            ylim: (-10.0, 10.0),
            grid: true,
            equal_aspect: true,
        }
    }
}
