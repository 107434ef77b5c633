//! Renderer-agnostic descriptions of 2D vector plots.
//!
//! A [`Scene`] lists arrows drawn from the origin together with framing options. Drawing is
//! left to whatever backend consumes the scene; this module only reads vector data and
//! calls [`Vector::scalar_multiply`].

use log::debug;

use crate::config::PlotOptions;
use crate::core::Scalar;
use crate::error::LinalgError;
use crate::validator;
use crate::vector::Vector;

const DEFAULT_COLOR: &str = "blue";

/// An arrow from `tail` to `head`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub tail: (f64, f64),
    pub head: (f64, f64),
    pub color: String,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub arrows: Vec<Arrow>,
    pub title: Option<String>,
    pub options: PlotOptions,
}

impl Scene {
    /// A legend is shown iff at least one arrow is labelled.
    pub fn show_legend(&self) -> bool {
        self.arrows.iter().any(|a| a.label.is_some())
    }
}

/// Build a scene with one arrow per vector. Missing colors default to blue; every vector
/// must have exactly two components.
pub fn plot_vectors(
    vectors: &[&Vector],
    colors: Option<&[&str]>,
    labels: Option<&[&str]>,
    title: Option<&str>,
    options: PlotOptions,
) -> Result<Scene, LinalgError> {
    let arrows = vectors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            validator::validate_vector_is_2d(v)?;
            let d = v.data();
            Ok(Arrow {
                tail: (0.0, 0.0),
                head: (d[0], d[1]),
                color: colors
                    .and_then(|c| c.get(i))
                    .unwrap_or(&DEFAULT_COLOR)
                    .to_string(),
                label: labels.and_then(|l| l.get(i)).map(|s| s.to_string()),
            })
        })
        .collect::<Result<Vec<_>, LinalgError>>()?;
    debug!("built scene with {} arrows", arrows.len());
    Ok(Scene {
        arrows,
        title: title.map(str::to_owned),
        options,
    })
}

/// A single vector labelled `v`.
pub fn plot_vector(v: &Vector) -> Result<Scene, LinalgError> {
    plot_vectors(&[v], None, Some(&["v"][..]), None, PlotOptions::default())
}

/// The vector (blue, `original`) next to `k · v` (red, `scaled`).
pub fn plot_scalar_multiplication<K: Scalar>(v: &Vector, k: K) -> Result<Scene, LinalgError> {
    let k = k.to_f64();
    let scaled = v.scalar_multiply(k);
    let title = format!("Scalar Multiplication: {k}");
    plot_vectors(
        &[v, &scaled],
        Some(&["blue", "red"][..]),
        Some(&["original", "scaled"][..]),
        Some(title.as_str()),
        PlotOptions::default(),
    )
}
