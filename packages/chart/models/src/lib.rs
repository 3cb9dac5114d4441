#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Renderer-independent chart specifications.
//!
//! A spec carries everything a backend needs to draw a chart (data, styles,
//! axes, labels) and nothing about how to draw it.

use serde::{Deserialize, Serialize};
use shot_chart_court_models::{CourtPrimitive, Point, Viewport};
use strum_macros::{AsRefStr, Display, EnumString};

/// Shape of a scatter marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MarkerShape {
    /// Filled circle.
    Circle,
    /// Diagonal cross ("x").
    Cross,
}

/// Visual style of one scatter series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Marker shape.
    pub shape: MarkerShape,
    /// Fill color for circles, stroke color for crosses.
    pub color: String,
    /// Outline color, if any.
    pub edge_color: Option<String>,
    /// Marker area in square points.
    pub size: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Stroke width of crosses and outlines.
    pub line_width: f64,
}

/// A labelled set of points sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    /// Legend label.
    pub label: String,
    /// Marker style.
    pub style: MarkerStyle,
    /// Points in display coordinates.
    pub points: Vec<Point>,
}

impl ScatterSeries {
    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Corner a legend is anchored to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LegendPosition {
    /// Top right.
    #[default]
    UpperRight,
    /// Top left.
    UpperLeft,
    /// Bottom right.
    LowerRight,
    /// Bottom left.
    LowerLeft,
}

/// A shot scatter drawn over the court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSpec {
    /// Title, possibly spanning several lines.
    pub title: String,
    /// Display window.
    pub viewport: Viewport,
    /// Background layer.
    pub court: Vec<CourtPrimitive>,
    /// Made shots.
    pub made: ScatterSeries,
    /// Missed shots.
    pub missed: ScatterSeries,
    /// Legend anchor.
    pub legend: LegendPosition,
    /// Shown in place of the data when there are no shots.
    pub empty_message: Option<String>,
}

impl ScatterSpec {
    /// Total points across both series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.made.len() + self.missed.len()
    }

    /// Whether neither series has points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

/// One bar of a categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Category axis label.
    pub category: String,
    /// Bar height in y-axis units.
    pub height: f64,
    /// Annotation drawn above the bar.
    pub label: String,
    /// y position of the annotation.
    pub label_y: f64,
}

/// Inclusive axis limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Lower limit.
    pub min: f64,
    /// Upper limit.
    pub max: f64,
}

impl AxisRange {
    /// Creates an axis range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A vertical bar chart over string categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    /// Chart title.
    pub title: String,
    /// Category axis label.
    pub x_label: String,
    /// Value axis label.
    pub y_label: String,
    /// Value axis limits.
    pub y_range: AxisRange,
    /// Rotation of category labels in degrees (counter-clockwise).
    pub category_label_rotation_deg: f64,
    /// Bars in display order.
    pub bars: Vec<Bar>,
    /// Shown in place of the bars when there are none.
    pub empty_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use shot_chart_court_models::Point;

    use super::*;

    fn series(label: &str, points: usize) -> ScatterSeries {
        ScatterSeries {
            label: label.to_string(),
            style: MarkerStyle {
                shape: MarkerShape::Circle,
                color: "black".to_string(),
                edge_color: None,
                size: 100.0,
                alpha: 1.0,
                line_width: 1.0,
            },
            points: vec![Point::new(0.0, 0.0); points],
        }
    }

    #[test]
    fn point_count_spans_both_series() {
        let spec = ScatterSpec {
            title: String::new(),
            viewport: Viewport {
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
                equal_aspect: false,
            },
            court: Vec::new(),
            made: series("Made", 3),
            missed: series("Missed", 2),
            legend: LegendPosition::default(),
            empty_message: None,
        };
        assert_eq!(spec.point_count(), 5);
        assert!(!spec.is_empty());
    }

    #[test]
    fn legend_position_names() {
        assert_eq!(LegendPosition::UpperRight.to_string(), "upper_right");
        assert_eq!(MarkerShape::Cross.as_ref(), "cross");
    }

    #[test]
    fn axis_span() {
        assert!((AxisRange::new(0.0, 100.0).span() - 100.0).abs() < f64::EPSILON);
    }
}
