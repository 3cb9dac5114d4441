#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart composition and rendering.
//!
//! [`compose`] turns court geometry, shots and zone statistics into the
//! renderer-independent specs from `shot_chart_chart_models`. [`svg`] draws
//! those specs as SVG documents with `plotters`.

pub mod compose;
pub mod svg;

pub use compose::{compose_scatter, compose_zone_bar_chart, format_bar_label, shot_chart_title};
pub use svg::{parse_color, render_bar_chart_svg, render_scatter_svg};

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The drawing backend failed.
    #[error(transparent)]
    Drawing(#[from] DrawingAreaErrorKind<std::io::Error>),
    /// A color string is neither `#rrggbb` nor a known name.
    #[error("Invalid color: {color}")]
    InvalidColor { color: String },
}
