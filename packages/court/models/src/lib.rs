#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Court drawing primitives and display viewport types.
//!
//! All geometry shares the shot coordinate system: tenths of a foot, origin
//! at the hoop, y increasing away from the baseline. Angles are in degrees,
//! measured counter-clockwise from the positive x-axis.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A point in court coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dash pattern of a stroked line.
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
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
}

/// Stroke parameters shared by every court primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    /// Any CSS color (e.g. `"black"`, `"#777777"`).
    pub color: String,
    /// Line width in display units.
    pub width: f64,
    /// Dash pattern.
    pub style: LineStyle,
}

impl Stroke {
    /// A solid stroke.
    #[must_use]
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            style: LineStyle::Solid,
        }
    }

    /// A dashed stroke.
    #[must_use]
    pub fn dashed(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            style: LineStyle::Dashed,
        }
    }
}

/// One shape of the court diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CourtPrimitive {
    /// A full circle.
    Circle {
        /// Center of the circle.
        center: Point,
        /// Radius.
        radius: f64,
        /// Whether the interior is painted with the stroke color.
        filled: bool,
        /// Outline stroke.
        stroke: Stroke,
    },
    /// An axis-aligned rectangle. Width or height may be zero, which
    /// degenerates the rectangle into a line segment.
    Rectangle {
        /// Corner with the smallest x and y.
        origin: Point,
        /// Extent along x (non-negative).
        width: f64,
        /// Extent along y (non-negative).
        height: f64,
        /// Whether the interior is painted with the stroke color.
        filled: bool,
        /// Outline stroke.
        stroke: Stroke,
    },
    /// A circular arc swept counter-clockwise from `start_deg` to `end_deg`.
    Arc {
        /// Center of the arc's circle.
        center: Point,
        /// Radius.
        radius: f64,
        /// Start angle in degrees.
        start_deg: f64,
        /// End angle in degrees.
        end_deg: f64,
        /// Arc stroke.
        stroke: Stroke,
    },
}

impl CourtPrimitive {
    /// Returns the stroke of this primitive.
    #[must_use]
    pub const fn stroke(&self) -> &Stroke {
        match self {
            Self::Circle { stroke, .. }
            | Self::Rectangle { stroke, .. }
            | Self::Arc { stroke, .. } => stroke,
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Self::Circle { center, radius, .. } => (
                Point::new(center.x - radius, center.y - radius),
                Point::new(center.x + radius, center.y + radius),
            ),
            Self::Arc {
                center,
                radius,
                start_deg,
                end_deg,
                ..
            } => arc_bounds(*center, *radius, *start_deg, *end_deg),
            Self::Rectangle {
                origin,
                width,
                height,
                ..
            } => (*origin, Point::new(origin.x + width, origin.y + height)),
        }
    }

    /// The primitive traced as a polyline.
    ///
    /// Circles and rectangles come back closed (first point repeated last).
    /// Curves are sampled every [`ARC_STEP_DEG`] degrees at most. A
    /// rectangle with zero width or height collapses to its visible segment.
    #[must_use]
    pub fn outline(&self) -> Vec<Point> {
        match self {
            Self::Circle { center, radius, .. } => sample_arc(*center, *radius, 0.0, 360.0),
            Self::Arc {
                center,
                radius,
                start_deg,
                end_deg,
                ..
            } => sample_arc(
                *center,
                *radius,
                *start_deg,
                *start_deg + sweep_degrees(*start_deg, *end_deg),
            ),
            Self::Rectangle {
                origin,
                width,
                height,
                ..
            } => {
                let (x0, y0) = (origin.x, origin.y);
                let (x1, y1) = (origin.x + width, origin.y + height);
                let mut points = vec![
                    Point::new(x0, y0),
                    Point::new(x1, y0),
                    Point::new(x1, y1),
                    Point::new(x0, y1),
                    Point::new(x0, y0),
                ];
                points.dedup();
                points
            }
        }
    }

    /// Whether the interior is painted.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        match self {
            Self::Circle { filled, .. } | Self::Rectangle { filled, .. } => *filled,
            Self::Arc { .. } => false,
        }
    }
}

/// Largest angle between consecutive samples of a traced curve.
pub const ARC_STEP_DEG: f64 = 2.0;

fn sample_arc(center: Point, radius: f64, from_deg: f64, to_deg: f64) -> Vec<Point> {
    let sweep = to_deg - from_deg;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (sweep.abs() / ARC_STEP_DEG).ceil().max(1.0) as u32;

    (0..=steps)
        .map(|i| {
            let angle = if i == steps {
                to_deg
            } else {
                (sweep / f64::from(steps)).mul_add(f64::from(i), from_deg)
            };
            point_on_circle(center, radius, angle)
        })
        .collect()
}

/// Point on the circle around `center` at `angle_deg`.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    Point::new(
        radius.mul_add(theta.cos(), center.x),
        radius.mul_add(theta.sin(), center.y),
    )
}

/// Bounds of an arc: its endpoints plus every axis extreme the sweep passes.
fn arc_bounds(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> (Point, Point) {
    let sweep = sweep_degrees(start_deg, end_deg);
    let extremes = [0.0_f64, 90.0, 180.0, 270.0]
        .into_iter()
        .filter(|angle| (angle - start_deg).rem_euclid(360.0) <= sweep);

    [start_deg, start_deg + sweep]
        .into_iter()
        .chain(extremes)
        .map(|angle| point_on_circle(center, radius, angle))
        .fold(
            (
                Point::new(f64::INFINITY, f64::INFINITY),
                Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(min, max), p| {
                (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                )
            },
        )
}

/// Degrees covered by a counter-clockwise sweep from `start_deg` to
/// `end_deg`, in `(0, 360]`.
#[must_use]
pub fn sweep_degrees(start_deg: f64, end_deg: f64) -> f64 {
    let sweep = (end_deg - start_deg).rem_euclid(360.0);
    if sweep <= f64::EPSILON { 360.0 } else { sweep }
}

/// The data-space window a chart is displayed through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
    /// Whether one x unit must render the same length as one y unit.
    pub equal_aspect: bool,
}

impl Viewport {
    /// Width of the window in data units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the window in data units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `point` lies inside the window (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }

    /// The part of segment `a`-`b` inside the window, if any.
    ///
    /// Endpoints that are already inside are returned unchanged.
    #[must_use]
    pub fn clip_segment(&self, a: Point, b: Point) -> Option<(Point, Point)> {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let mut enter = 0.0_f64;
        let mut exit = 1.0_f64;

        for (p, q) in [
            (-dx, a.x - self.x_min),
            (dx, self.x_max - a.x),
            (-dy, a.y - self.y_min),
            (dy, self.y_max - a.y),
        ] {
            if p.abs() < f64::EPSILON {
                if q < 0.0 {
                    return None;
                }
            } else if p < 0.0 {
                enter = enter.max(q / p);
            } else {
                exit = exit.min(q / p);
            }
            if enter > exit {
                return None;
            }
        }

        Some((lerp(a, b, enter), lerp(a, b, exit)))
    }

    /// Splits a polyline into the runs that lie inside the window.
    ///
    /// A run is broken wherever the line leaves the window and restarted
    /// where it comes back. Runs have at least two points.
    #[must_use]
    pub fn clip_polyline(&self, points: &[Point]) -> Vec<Vec<Point>> {
        let mut runs: Vec<Vec<Point>> = Vec::new();
        for pair in points.windows(2) {
            let Some((start, end)) = self.clip_segment(pair[0], pair[1]) else {
                continue;
            };
            match runs.last_mut() {
                Some(run) if run.last() == Some(&start) => run.push(end),
                _ => runs.push(vec![start, end]),
            }
        }
        runs
    }

    /// Clips a closed polygon to the window, one edge at a time.
    ///
    /// Returns an empty vector when nothing of the polygon is visible.
    #[must_use]
    pub fn clip_polygon(&self, points: &[Point]) -> Vec<Point> {
        let mut output = points.to_vec();
        for edge in [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top] {
            let input = std::mem::take(&mut output);
            let Some(&last) = input.last() else {
                break;
            };
            let mut previous = last;
            for &current in &input {
                let (current_in, previous_in) =
                    (self.inside(edge, current), self.inside(edge, previous));
                if current_in {
                    if !previous_in {
                        output.push(self.crossing(edge, previous, current));
                    }
                    output.push(current);
                } else if previous_in {
                    output.push(self.crossing(edge, previous, current));
                }
                previous = current;
            }
        }
        output
    }

    fn inside(&self, edge: Edge, p: Point) -> bool {
        match edge {
            Edge::Left => p.x >= self.x_min,
            Edge::Right => p.x <= self.x_max,
            Edge::Bottom => p.y >= self.y_min,
            Edge::Top => p.y <= self.y_max,
        }
    }

    /// Where `a`-`b` crosses `edge`. Only called when it does cross.
    fn crossing(&self, edge: Edge, a: Point, b: Point) -> Point {
        let t = match edge {
            Edge::Left => (self.x_min - a.x) / (b.x - a.x),
            Edge::Right => (self.x_max - a.x) / (b.x - a.x),
            Edge::Bottom => (self.y_min - a.y) / (b.y - a.y),
            Edge::Top => (self.y_max - a.y) / (b.y - a.y),
        };
        lerp(a, b, t)
    }
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        Point::new((b.x - a.x).mul_add(t, a.x), (b.y - a.y).mul_add(t, a.y))
    }
}
