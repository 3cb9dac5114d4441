//! SVG backend for chart specs, drawn with `plotters`.
//!
//! Court geometry is traced into polylines, clipped to the spec's viewport
//! and stroked as path elements. Shots outside the viewport are not drawn.

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use shot_chart_chart_models::{
    Bar, BarChartSpec, LegendPosition, MarkerShape, MarkerStyle, ScatterSeries, ScatterSpec,
};
use shot_chart_court_models::{CourtPrimitive, LineStyle, Point, Stroke, Viewport};

use crate::ChartError;

type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type Plot<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const MARGIN: i32 = 20;
const TITLE_FONT_SIZE: f64 = 20.0;
const TITLE_LINE_HEIGHT: i32 = 26;
const LABEL_FONT_SIZE: f64 = 13.0;
const AXIS_FONT_SIZE: f64 = 15.0;
const PLACEHOLDER_FONT_SIZE: f64 = 16.0;
const PLACEHOLDER_COLOR: RGBColor = RGBColor(0x55, 0x55, 0x55);

/// Height over width of a scatter whose viewport does not fix the aspect.
const FREE_ASPECT: f64 = 0.9;

/// Dash pattern in data units.
const DASH_LENGTH: f64 = 8.0;
const DASH_GAP: f64 = 6.0;

const BAR_COLOR: RGBColor = RGBColor(0x34, 0x98, 0xdb);
const BAR_WIDTH: f64 = 0.8;
const VALUE_AREA: i32 = 60;
const CATEGORY_AREA: i32 = 170;
const CATEGORY_LABEL_GAP: i32 = 8;
const Y_TICKS: usize = 6;

const NAMED_COLORS: [(&str, RGBColor); 8] = [
    ("black", RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255)),
    ("red", RGBColor(255, 0, 0)),
    ("green", RGBColor(0, 128, 0)),
    ("blue", RGBColor(0, 0, 255)),
    ("gray", RGBColor(128, 128, 128)),
    ("grey", RGBColor(128, 128, 128)),
    ("orange", RGBColor(255, 165, 0)),
];

/// Parses `#rrggbb` or one of a few basic color names.
///
/// # Errors
///
/// Returns [`ChartError::InvalidColor`] for anything else.
pub fn parse_color(color: &str) -> Result<RGBColor, ChartError> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#')
        && hex.len() == 6
        && hex.chars().all(|c| c.is_ascii_hexdigit())
        && let Ok(value) = u32::from_str_radix(hex, 16)
    {
        let [_, r, g, b] = value.to_be_bytes();
        return Ok(RGBColor(r, g, b));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, rgb)| *rgb)
        .ok_or_else(|| ChartError::InvalidColor {
            color: color.to_string(),
        })
}

fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

const fn xy(point: Point) -> (f64, f64) {
    (point.x, point.y)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_width(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

fn stroke_style(stroke: &Stroke) -> Result<ShapeStyle, ChartError> {
    Ok(parse_color(&stroke.color)?.stroke_width(pixel_width(stroke.width)))
}

/// Cuts a polyline into dashes of [`DASH_LENGTH`] separated by [`DASH_GAP`].
fn dashes(points: &[Point]) -> Vec<Vec<Point>> {
    if points.len() < 2 {
        return Vec::new();
    }

    let distances: Vec<f64> = std::iter::once(0.0)
        .chain(points.windows(2).scan(0.0, |total, pair| {
            *total += (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y);
            Some(*total)
        }))
        .collect();
    let total = distances.last().copied().unwrap_or(0.0);
    let period = DASH_LENGTH + DASH_GAP;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (total / period).ceil() as u32;

    (0..count)
        .map(|k| {
            let start = f64::from(k) * period;
            sub_path(points, &distances, start, (start + DASH_LENGTH).min(total))
        })
        .collect()
}

/// The stretch of `points` between two distances along it.
fn sub_path(points: &[Point], distances: &[f64], from: f64, to: f64) -> Vec<Point> {
    let at = |distance: f64| {
        let i = distances
            .partition_point(|d| *d < distance)
            .clamp(1, points.len() - 1);
        let (a, b) = (points[i - 1], points[i]);
        let span = distances[i] - distances[i - 1];
        let t = if span > 0.0 {
            (distance - distances[i - 1]) / span
        } else {
            0.0
        };
        Point::new((b.x - a.x).mul_add(t, a.x), (b.y - a.y).mul_add(t, a.y))
    };

    let mut path = vec![at(from)];
    path.extend(
        points
            .iter()
            .zip(distances)
            .filter(|(_, d)| **d > from && **d < to)
            .map(|(p, _)| *p),
    );
    path.push(at(to));
    path
}

/// Stroked court polylines, clipped to `viewport` and split into dashes
/// where the stroke asks for it.
fn court_paths<'a>(
    court: &'a [CourtPrimitive],
    viewport: &Viewport,
) -> Vec<(Vec<Point>, &'a Stroke)> {
    court
        .iter()
        .flat_map(|primitive| {
            let stroke = primitive.stroke();
            viewport
                .clip_polyline(&primitive.outline())
                .into_iter()
                .flat_map(move |run| match stroke.style {
                    LineStyle::Solid => vec![run],
                    LineStyle::Dashed => dashes(&run),
                })
                .map(move |run| (run, stroke))
        })
        .collect()
}

/// Interiors of filled court primitives, clipped to `viewport`.
fn court_fills<'a>(
    court: &'a [CourtPrimitive],
    viewport: &Viewport,
) -> Vec<(Vec<Point>, &'a Stroke)> {
    court
        .iter()
        .filter(|primitive| primitive.is_filled())
        .map(|primitive| (viewport.clip_polygon(&primitive.outline()), primitive.stroke()))
        .filter(|(points, _)| points.len() >= 3)
        .collect()
}

fn draw_court(chart: &mut Plot<'_, '_>, spec: &ScatterSpec) -> Result<(), ChartError> {
    for (points, stroke) in court_fills(&spec.court, &spec.viewport) {
        let fill = parse_color(&stroke.color)?.filled();
        let points: Vec<(f64, f64)> = points.into_iter().map(xy).collect();
        chart.draw_series(std::iter::once(Polygon::new(points, fill)))?;
    }

    for (points, stroke) in court_paths(&spec.court, &spec.viewport) {
        let style = stroke_style(stroke)?;
        let points: Vec<(f64, f64)> = points.into_iter().map(xy).collect();
        chart.draw_series(std::iter::once(PathElement::new(points, style)))?;
    }
    Ok(())
}

/// Marker radius in pixels for a marker area given in square points.
#[allow(clippy::cast_possible_truncation)]
fn marker_radius(style: &MarkerStyle) -> i32 {
    (style.size.max(0.0).sqrt() / 2.0).round() as i32
}

/// Points of `series` that fall inside `viewport`.
fn visible_points(series: &ScatterSeries, viewport: &Viewport) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .filter(|point| viewport.contains(**point))
        .map(|point| xy(*point))
        .collect()
}

fn draw_markers(
    chart: &mut Plot<'_, '_>,
    series: &ScatterSeries,
    viewport: &Viewport,
) -> Result<(), ChartError> {
    let style = &series.style;
    let color = parse_color(&style.color)?.mix(style.alpha);
    let radius = marker_radius(style);
    let points = visible_points(series, viewport);

    match style.shape {
        MarkerShape::Circle => {
            let fill = color.filled();
            chart
                .draw_series(points.iter().map(|p| Circle::new(*p, radius, fill)))?
                .label(series.label.clone())
                .legend(move |p| Circle::new(p, radius, fill));

            if let Some(edge) = &style.edge_color {
                let edge = parse_color(edge)?
                    .mix(style.alpha)
                    .stroke_width(pixel_width(style.line_width));
                chart.draw_series(points.iter().map(|p| Circle::new(*p, radius, edge)))?;
            }
        }
        MarkerShape::Cross => {
            let stroke = color.stroke_width(pixel_width(style.line_width));
            chart
                .draw_series(points.iter().map(|p| Cross::new(*p, radius, stroke)))?
                .label(series.label.clone())
                .legend(move |p| Cross::new(p, radius, stroke));
        }
    }
    Ok(())
}

fn draw_placeholder(
    chart: &mut Plot<'_, '_>,
    message: &str,
    at: (f64, f64),
) -> Result<(), ChartError> {
    let style = font(PLACEHOLDER_FONT_SIZE)
        .color(&PLACEHOLDER_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(message.to_string(), at, style)))?;
    Ok(())
}

const fn legend_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
    }
}

/// Pixels taken by a title, one row per line.
fn title_height(title: &str) -> i32 {
    match title.lines().count() {
        0 => 0,
        lines => i32::try_from(lines).map_or(i32::MAX, |n| {
            n.saturating_mul(TITLE_LINE_HEIGHT)
                .saturating_add(MARGIN / 2)
        }),
    }
}

/// Draws `title` centered across the top of `root` and returns the area
/// left below it.
fn draw_title<'a>(root: &Canvas<'a>, title: &str) -> Result<Canvas<'a>, ChartError> {
    let (title_area, rest) = root.split_vertically(title_height(title));
    let (width, _) = title_area.dim_in_pixel();
    let center = i32::try_from(width / 2).unwrap_or(0);
    let style = font(TITLE_FONT_SIZE)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (row, line) in (0_i32..).zip(title.lines()) {
        title_area.draw_text(line, &style, (center, MARGIN / 2 + row * TITLE_LINE_HEIGHT))?;
    }
    Ok(rest)
}

/// Canvas size for a scatter `width_px` wide.
///
/// With an equal-aspect viewport the height is chosen so one x unit and one
/// y unit cover the same number of pixels.
fn scatter_size(spec: &ScatterSpec, width_px: u32) -> (u32, u32) {
    let margin = MARGIN.unsigned_abs();
    let plot_width = width_px.saturating_sub(2 * margin).max(1);
    let aspect = if spec.viewport.equal_aspect {
        spec.viewport.height() / spec.viewport.width()
    } else {
        FREE_ASPECT
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let plot_height = (f64::from(plot_width) * aspect).round().max(1.0) as u32;

    (
        width_px,
        title_height(&spec.title).unsigned_abs() + plot_height + 2 * margin,
    )
}

/// Renders a shot scatter with its court background, `width_px` wide.
///
/// The court is drawn first, then made shots, then missed shots, then the
/// legend. An empty spec draws its placeholder message instead of markers.
///
/// # Errors
///
/// * [`ChartError::InvalidColor`] if a stroke or marker color is unknown
/// * [`ChartError::Drawing`] if the backend fails
pub fn render_scatter_svg(spec: &ScatterSpec, width_px: u32) -> Result<String, ChartError> {
    let size = scatter_size(spec, width_px);
    let viewport = spec.viewport;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;
        let plot_area = draw_title(&root, &spec.title)?;

        let mut chart = ChartBuilder::on(&plot_area).margin(MARGIN).build_cartesian_2d(
            viewport.x_min..viewport.x_max,
            viewport.y_min..viewport.y_max,
        )?;

        draw_court(&mut chart, spec)?;

        if let Some(message) = spec.empty_message.as_deref().filter(|_| spec.is_empty()) {
            let center = (
                f64::midpoint(viewport.x_min, viewport.x_max),
                f64::midpoint(viewport.y_min, viewport.y_max),
            );
            draw_placeholder(&mut chart, message, center)?;
        } else {
            draw_markers(&mut chart, &spec.made, &viewport)?;
            draw_markers(&mut chart, &spec.missed, &viewport)?;

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK.mix(0.3))
                .label_font(font(LABEL_FONT_SIZE))
                .position(legend_position(spec.legend))
                .draw()?;
        }

        root.present()?;
    }

    log::debug!(
        "render_scatter_svg: {} points, {} court markings, {} bytes",
        spec.point_count(),
        spec.court.len(),
        svg.len()
    );
    Ok(svg)
}

#[allow(clippy::cast_precision_loss)]
const fn slot_center(index: usize) -> f64 {
    index as f64
}

/// Where a bar's annotation is anchored. The label height is not clamped to
/// the value axis, so it may sit above the plot.
const fn annotation_point(index: usize, bar: &Bar) -> (f64, f64) {
    (slot_center(index), bar.label_y)
}

/// Nearest quarter turn for a counter-clockwise label rotation, with the
/// anchor that hangs the label below its tick.
///
/// The backend only turns text by right angles, and its turns run
/// clockwise.
fn category_label(rotation_deg: f64) -> (FontTransform, Pos) {
    #[allow(clippy::cast_possible_truncation)]
    let quarters = (rotation_deg / 90.0).round() as i64;
    match quarters.rem_euclid(4) {
        1 => (FontTransform::Rotate270, Pos::new(HPos::Right, VPos::Center)),
        2 => (FontTransform::Rotate180, Pos::new(HPos::Center, VPos::Bottom)),
        3 => (FontTransform::Rotate90, Pos::new(HPos::Left, VPos::Center)),
        _ => (FontTransform::None, Pos::new(HPos::Center, VPos::Top)),
    }
}

fn bar_chart_height(spec: &BarChartSpec, width_px: u32) -> u32 {
    let plot_height = (width_px.saturating_mul(11) / 20).max(1);
    title_height(&spec.title).unsigned_abs()
        + plot_height
        + CATEGORY_AREA.unsigned_abs()
        + 2 * MARGIN.unsigned_abs()
}

/// Renders a vertical bar chart, `width_px` wide.
///
/// # Errors
///
/// Returns [`ChartError::Drawing`] if the backend fails.
pub fn render_bar_chart_svg(spec: &BarChartSpec, width_px: u32) -> Result<String, ChartError> {
    let size = (width_px, bar_chart_height(spec, width_px));
    let range = spec.y_range;
    let slots = spec.bars.len().max(1);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;
        let plot_area = draw_title(&root, &spec.title)?;

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(MARGIN)
            .set_label_area_size(LabelAreaPosition::Left, VALUE_AREA)
            .set_label_area_size(LabelAreaPosition::Bottom, CATEGORY_AREA)
            .build_cartesian_2d(-0.5..(slot_center(slots) - 0.5), range.min..range.max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_labels(Y_TICKS)
            .y_label_formatter(&|v| format!("{v:.0}"))
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .label_style(font(LABEL_FONT_SIZE))
            .axis_desc_style(font(AXIS_FONT_SIZE))
            .draw()?;

        if spec.bars.is_empty() {
            if let Some(message) = &spec.empty_message {
                draw_placeholder(&mut chart, message, (0.0, f64::midpoint(range.min, range.max)))?;
            }
        } else {
            chart.draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
                let x = slot_center(i);
                let top = bar.height.max(range.min).min(range.max);
                Rectangle::new(
                    [(x - BAR_WIDTH / 2.0, range.min), (x + BAR_WIDTH / 2.0, top)],
                    BAR_COLOR.filled(),
                )
            }))?;

            let annotation = font(LABEL_FONT_SIZE)
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart.draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
                Text::new(bar.label.clone(), annotation_point(i, bar), annotation.clone())
            }))?;

            let (rotation, anchor) = category_label(spec.category_label_rotation_deg);
            let category = font(LABEL_FONT_SIZE)
                .transform(rotation)
                .color(&BLACK)
                .pos(anchor);
            chart.draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
                EmptyElement::at((slot_center(i), range.min))
                    + Text::new(bar.category.clone(), (0, CATEGORY_LABEL_GAP), category.clone())
            }))?;
        }

        root.present()?;
    }

    log::debug!(
        "render_bar_chart_svg: {} bars, {} bytes",
        spec.bars.len(),
        svg.len()
    );
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shot_chart_analytics_models::ZoneStat;
    use shot_chart_court::{COURT_VIEWPORT, CORNER_THREE_X, default_court};
    use shot_chart_shot_models::ShotEvent;

    use super::*;
    use crate::compose::{
        NO_SHOTS_MESSAGE, NO_ZONES_MESSAGE, compose_scatter, compose_zone_bar_chart,
    };

    fn shots() -> Vec<ShotEvent> {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![
            ShotEvent::new(-120.0, 80.0, true, "Mid-Range", "", "", day),
            ShotEvent::new(35.0, 210.0, false, "Above the Break 3", "", "", day),
            ShotEvent::new(0.0, 5.0, true, "Restricted Area", "", "", day),
        ]
    }

    fn path_length(points: &[Point]) -> f64 {
        points
            .windows(2)
            .map(|pair| (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y))
            .sum()
    }

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#3498db").unwrap(), RGBColor(0x34, 0x98, 0xdb));
        assert_eq!(parse_color("Red").unwrap(), RGBColor(255, 0, 0));
        assert!(matches!(
            parse_color("#12345"),
            Err(ChartError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_color("chartreuse-ish"),
            Err(ChartError::InvalidColor { .. })
        ));
    }

    #[test]
    fn corner_three_lines_are_stroked() {
        let court = default_court();
        let corner_lines = court_paths(&court, &COURT_VIEWPORT)
            .into_iter()
            .filter(|(points, _)| {
                points
                    .iter()
                    .all(|p| (p.x.abs() - CORNER_THREE_X).abs() < 1e-9)
            })
            .collect::<Vec<_>>();

        assert_eq!(corner_lines.len(), 2);
        for (points, _) in corner_lines {
            let low = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let high = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            assert!((low + 47.5).abs() < 1e-9);
            assert!((high - 92.5).abs() < 1e-9);
        }
    }

    #[test]
    fn every_court_marking_reaches_the_svg() {
        let court = default_court();
        let paths = court_paths(&court, &COURT_VIEWPORT).len();
        let spec = compose_scatter(court, &[], "t");
        let svg = render_scatter_svg(&spec, 720).unwrap();

        assert!(paths > spec.court.len());
        assert_eq!(svg.matches("<polyline").count(), paths);
        // Backboard.
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn dashed_arc_is_split_into_short_dashes() {
        let dashed = default_court()
            .into_iter()
            .find(|p| p.stroke().style == LineStyle::Dashed)
            .unwrap();
        let pieces = dashes(&dashed.outline());

        assert!(pieces.len() > 1);
        assert!(
            pieces
                .iter()
                .all(|dash| dash.len() >= 2 && path_length(dash) <= DASH_LENGTH + 1e-9)
        );
    }

    #[test]
    fn court_is_clipped_to_viewport() {
        let court = vec![CourtPrimitive::Rectangle {
            origin: Point::new(-250.0, -47.5),
            width: 500.0,
            height: 470.0,
            filled: false,
            stroke: Stroke::solid("black", 1.0),
        }];
        let paths = court_paths(&court, &COURT_VIEWPORT);
        assert!(!paths.is_empty());
        assert!(
            paths
                .iter()
                .flat_map(|(points, _)| points)
                .all(|p| COURT_VIEWPORT.contains(*p))
        );
    }

    #[test]
    fn scatter_size_keeps_equal_aspect() {
        let spec = compose_scatter(default_court(), &[], "Player Shot Chart\n2024-25 Playoffs");
        // 680 px of plot width over 500 units is 1.36 px per unit; 450 units
        // tall is then 612 px, plus two title rows and the margins.
        assert_eq!(scatter_size(&spec, 720), (720, 612 + 62 + 40));
    }

    #[test]
    fn scatter_draws_one_marker_per_shot() {
        let title = "Player Shot Chart\n2024-25 Playoffs";
        let spec = compose_scatter(default_court(), &shots(), title);
        let svg = render_scatter_svg(&spec, 720).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // Two made markers, each filled and outlined, plus the legend swatch.
        assert_eq!(svg.matches("<circle").count(), 5);
        // One missed cross plus the legend swatch, two strokes each.
        assert_eq!(svg.matches("<line").count(), 4);
        assert!(svg.contains("Player Shot Chart"));
        assert!(svg.contains("2024-25 Playoffs"));
        assert!(svg.contains("Made"));
        assert!(svg.contains("Missed"));
        assert!(!svg.contains(NO_SHOTS_MESSAGE));
    }

    #[test]
    fn shots_outside_the_viewport_are_not_drawn() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut with_heave = shots();
        with_heave.push(ShotEvent::new(0.0, 430.0, false, "Backcourt", "", "", day));

        let spec = compose_scatter(default_court(), &with_heave, "t");
        assert_eq!(spec.missed.points.len(), 2);
        assert_eq!(visible_points(&spec.missed, &spec.viewport).len(), 1);

        let clipped = render_scatter_svg(&spec, 720).unwrap();
        let baseline = render_scatter_svg(&compose_scatter(default_court(), &shots(), "t"), 720)
            .unwrap();
        assert_eq!(clipped, baseline);
    }

    #[test]
    fn empty_scatter_renders_placeholder() {
        let spec = compose_scatter(default_court(), &[], "Nobody");
        let svg = render_scatter_svg(&spec, 720).unwrap();
        assert!(svg.contains(NO_SHOTS_MESSAGE));
        assert!(!svg.contains("<circle"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn unknown_court_color_is_rejected() {
        let court = shot_chart_court::build_court("not-a-color", 1.0);
        let spec = compose_scatter(court, &shots(), "t");
        assert!(matches!(
            render_scatter_svg(&spec, 720),
            Err(ChartError::InvalidColor { color }) if color == "not-a-color"
        ));
    }

    #[test]
    fn full_bar_annotation_sits_above_the_axis() {
        let stats = vec![ZoneStat::new("Restricted Area", 4, 4)];
        let spec = compose_zone_bar_chart(&stats, "Player", "2024-25");
        let (x, y) = annotation_point(0, &spec.bars[0]);
        assert!(x.abs() < f64::EPSILON);
        assert!(y > spec.y_range.max);
        assert!((y - 101.0).abs() < f64::EPSILON);
    }

    #[test]
    fn diagonal_rotation_turns_labels_upright() {
        assert!(matches!(category_label(45.0).0, FontTransform::Rotate270));
        assert!(matches!(category_label(0.0).0, FontTransform::None));
        assert!(matches!(category_label(-90.0).0, FontTransform::Rotate90));
    }

    #[test]
    fn bar_chart_renders_annotations() {
        let stats = vec![ZoneStat::new("Mid-Range", 4, 6), ZoneStat::new("Restricted Area", 4, 4)];
        let spec = compose_zone_bar_chart(&stats, "Player", "2024-25");
        let svg = render_bar_chart_svg(&spec, 720).unwrap();

        assert_eq!(svg.to_ascii_uppercase().matches("#3498DB").count(), 2);
        assert!(svg.contains("66.7% (4/6)"));
        assert!(svg.contains("100.0% (4/4)"));
        assert!(svg.contains("Mid-Range"));
        assert!(svg.contains("Restricted Area"));
        assert!(svg.contains("Success Rate (%)"));
        assert!(svg.contains("Player - Shot Success Rate by Zone (2024-25)"));
        assert!(!svg.contains(NO_ZONES_MESSAGE));
    }

    #[test]
    fn empty_bar_chart_renders_placeholder() {
        let spec = compose_zone_bar_chart(&[], "Player", "2024-25");
        let svg = render_bar_chart_svg(&spec, 720).unwrap();
        assert!(svg.contains(NO_ZONES_MESSAGE));
        assert!(!svg.to_ascii_uppercase().contains("#3498DB"));
    }
}
