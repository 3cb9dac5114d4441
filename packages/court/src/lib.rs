#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Regulation half-court geometry.
//!
//! [`build_court`] returns the court markings as plain values; drawing them is
//! left to whichever renderer consumes the chart specification. Dimensions
//! are NBA regulation, in tenths of a foot, with the hoop at the origin.

use shot_chart_court_models::{CourtPrimitive, Point, Stroke, Viewport};

/// Default line color.
pub const DEFAULT_LINE_COLOR: &str = "black";

/// Default line width.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Radius of the rim.
pub const HOOP_RADIUS: f64 = 7.5;

/// Half the backboard width.
pub const BACKBOARD_HALF_WIDTH: f64 = 30.0;
/// Distance from the hoop center to the face of the backboard.
pub const BACKBOARD_OFFSET: f64 = 7.5;
/// Backboard thickness.
pub const BACKBOARD_DEPTH: f64 = 1.0;

/// Half the lane width.
pub const PAINT_HALF_WIDTH: f64 = 80.0;
/// Baseline position relative to the hoop.
pub const BASELINE_Y: f64 = -47.5;
/// Length of the lane from the baseline to the free-throw line.
pub const PAINT_LENGTH: f64 = 190.0;

/// Radius of the free-throw circle.
pub const FREE_THROW_RADIUS: f64 = 60.0;

/// Radius of the restricted-area arc.
pub const RESTRICTED_AREA_RADIUS: f64 = 40.0;

/// Distance of the corner-three lines from the center line of the court.
pub const CORNER_THREE_X: f64 = 220.0;
/// Length of the straight corner-three segments.
pub const CORNER_THREE_LENGTH: f64 = 140.0;

/// Radius of the three-point arc.
pub const THREE_POINT_RADIUS: f64 = 237.5;
/// Angle at which the three-point arc meets the right corner line.
pub const THREE_POINT_START_DEG: f64 = 22.0;
/// Angle at which the three-point arc meets the left corner line.
pub const THREE_POINT_END_DEG: f64 = 158.0;

/// Fixed display window for a half-court chart.
pub const COURT_VIEWPORT: Viewport = Viewport {
    x_min: -250.0,
    x_max: 250.0,
    y_min: -50.0,
    y_max: 400.0,
    equal_aspect: true,
};

/// y coordinate of the free-throw line.
#[must_use]
pub const fn free_throw_line_y() -> f64 {
    BASELINE_Y + PAINT_LENGTH
}

/// Builds the court markings with the given line color and width.
///
/// The order is fixed: hoop, backboard, paint, free-throw circle (far half
/// solid, near half dashed), restricted area, left and right corner-three
/// lines, three-point arc.
#[must_use]
pub fn build_court(color: &str, line_width: f64) -> Vec<CourtPrimitive> {
    let solid = Stroke::solid(color, line_width);
    let free_throw_center = Point::new(0.0, free_throw_line_y());

    vec![
        CourtPrimitive::Circle {
            center: Point::new(0.0, 0.0),
            radius: HOOP_RADIUS,
            filled: false,
            stroke: solid.clone(),
        },
        CourtPrimitive::Rectangle {
            origin: Point::new(
                -BACKBOARD_HALF_WIDTH,
                -BACKBOARD_OFFSET - BACKBOARD_DEPTH,
            ),
            width: BACKBOARD_HALF_WIDTH * 2.0,
            height: BACKBOARD_DEPTH,
            filled: true,
            stroke: solid.clone(),
        },
        CourtPrimitive::Rectangle {
            origin: Point::new(-PAINT_HALF_WIDTH, BASELINE_Y),
            width: PAINT_HALF_WIDTH * 2.0,
            height: PAINT_LENGTH,
            filled: false,
            stroke: solid.clone(),
        },
        CourtPrimitive::Arc {
            center: free_throw_center,
            radius: FREE_THROW_RADIUS,
            start_deg: 0.0,
            end_deg: 180.0,
            stroke: solid.clone(),
        },
        CourtPrimitive::Arc {
            center: free_throw_center,
            radius: FREE_THROW_RADIUS,
            start_deg: 180.0,
            end_deg: 360.0,
            stroke: Stroke::dashed(color, line_width),
        },
        CourtPrimitive::Arc {
            center: Point::new(0.0, 0.0),
            radius: RESTRICTED_AREA_RADIUS,
            start_deg: 0.0,
            end_deg: 180.0,
            stroke: solid.clone(),
        },
        corner_three(-CORNER_THREE_X, solid.clone()),
        corner_three(CORNER_THREE_X, solid.clone()),
        CourtPrimitive::Arc {
            center: Point::new(0.0, 0.0),
            radius: THREE_POINT_RADIUS,
            start_deg: THREE_POINT_START_DEG,
            end_deg: THREE_POINT_END_DEG,
            stroke: solid,
        },
    ]
}

/// Builds the court with [`DEFAULT_LINE_COLOR`] and [`DEFAULT_LINE_WIDTH`].
#[must_use]
pub fn default_court() -> Vec<CourtPrimitive> {
    build_court(DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH)
}

fn corner_three(x: f64, stroke: Stroke) -> CourtPrimitive {
    CourtPrimitive::Rectangle {
        origin: Point::new(x, BASELINE_Y),
        width: 0.0,
        height: CORNER_THREE_LENGTH,
        filled: false,
        stroke,
    }
}
