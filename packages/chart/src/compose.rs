//! Builds chart specs from court geometry, shots and zone statistics.

use shot_chart_analytics_models::ZoneStat;
use shot_chart_chart_models::{
    AxisRange, Bar, BarChartSpec, LegendPosition, MarkerShape, MarkerStyle, ScatterSeries,
    ScatterSpec,
};
use shot_chart_court::COURT_VIEWPORT;
use shot_chart_court_models::{CourtPrimitive, Point};
use shot_chart_shot_models::ShotEvent;

/// Fill color of made-shot markers.
pub const MADE_COLOR: &str = "#3498db";
/// Color of missed-shot markers.
pub const MISSED_COLOR: &str = "red";
/// Marker area in square points.
pub const MARKER_SIZE: f64 = 100.0;
/// Marker opacity.
pub const MARKER_ALPHA: f64 = 0.7;

/// Placeholder shown on a scatter with no shots.
pub const NO_SHOTS_MESSAGE: &str = "No shots match the current selection";
/// Placeholder shown on a bar chart with no zones.
pub const NO_ZONES_MESSAGE: &str = "No zone data available";

/// Gap between the top of a bar and its annotation.
const BAR_LABEL_OFFSET: f64 = 1.0;

fn made_style() -> MarkerStyle {
    MarkerStyle {
        shape: MarkerShape::Circle,
        color: MADE_COLOR.to_string(),
        edge_color: Some("black".to_string()),
        size: MARKER_SIZE,
        alpha: MARKER_ALPHA,
        line_width: 1.0,
    }
}

fn missed_style() -> MarkerStyle {
    MarkerStyle {
        shape: MarkerShape::Cross,
        color: MISSED_COLOR.to_string(),
        edge_color: None,
        size: MARKER_SIZE,
        alpha: MARKER_ALPHA,
        line_width: 2.0,
    }
}

/// Maps a shot to display coordinates.
///
/// The provider's x-axis is mirrored relative to the baseline view, so x is
/// negated; y is unchanged.
#[must_use]
pub const fn display_point(shot: &ShotEvent) -> Point {
    Point::new(-shot.loc_x, shot.loc_y)
}

/// Builds the scatter spec for `shots` drawn over `court`.
///
/// Every shot becomes exactly one point, in the made or the missed series.
#[must_use]
pub fn compose_scatter(
    court: Vec<CourtPrimitive>,
    shots: &[ShotEvent],
    title: &str,
) -> ScatterSpec {
    let (made, missed): (Vec<&ShotEvent>, Vec<&ShotEvent>) =
        shots.iter().partition(|shot| shot.made);

    log::debug!(
        "compose_scatter: {} made, {} missed",
        made.len(),
        missed.len()
    );

    ScatterSpec {
        title: title.to_string(),
        viewport: COURT_VIEWPORT,
        court,
        made: ScatterSeries {
            label: "Made".to_string(),
            style: made_style(),
            points: made.into_iter().map(display_point).collect(),
        },
        missed: ScatterSeries {
            label: "Missed".to_string(),
            style: missed_style(),
            points: missed.into_iter().map(display_point).collect(),
        },
        legend: LegendPosition::UpperRight,
        empty_message: shots.is_empty().then(|| NO_SHOTS_MESSAGE.to_string()),
    }
}

/// Annotation for a zone bar, e.g. `"66.7% (4/6)"`.
#[must_use]
pub fn format_bar_label(stat: &ZoneStat) -> String {
    format!(
        "{:.1}% ({}/{})",
        stat.success_rate, stat.made_count, stat.attempted_count
    )
}

/// Builds the per-zone success-rate bar chart.
///
/// Bars keep the order of `zone_stats`.
#[must_use]
pub fn compose_zone_bar_chart(
    zone_stats: &[ZoneStat],
    player_name: &str,
    season: &str,
) -> BarChartSpec {
    let bars = zone_stats
        .iter()
        .map(|stat| Bar {
            category: stat.zone.clone(),
            height: stat.success_rate,
            label: format_bar_label(stat),
            label_y: stat.success_rate + BAR_LABEL_OFFSET,
        })
        .collect::<Vec<_>>();

    BarChartSpec {
        title: format!("{player_name} - Shot Success Rate by Zone ({season})"),
        x_label: "Zone".to_string(),
        y_label: "Success Rate (%)".to_string(),
        y_range: AxisRange::new(0.0, 100.0),
        category_label_rotation_deg: 45.0,
        empty_message: bars.is_empty().then(|| NO_ZONES_MESSAGE.to_string()),
        bars,
    }
}

/// Two-line scatter title: player, then season and season type.
#[must_use]
pub fn shot_chart_title(player_name: &str, season: &str, season_type: &str) -> String {
    format!("{player_name} Shot Chart\n{season} {season_type}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shot_chart_court::default_court;
    use shot_chart_shot_models::zone_basic::{MID_RANGE, RESTRICTED_AREA};

    use super::*;

    fn shot(x: f64, y: f64, made: bool) -> ShotEvent {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ShotEvent::new(x, y, made, MID_RANGE, "Center(C)", "8-16 ft.", day)
    }

    #[test]
    fn every_shot_becomes_one_mirrored_point() {
        let shots = vec![
            shot(-120.0, 80.0, true),
            shot(35.0, 210.0, false),
            shot(0.0, 5.0, true),
            shot(230.0, 10.0, false),
        ];
        let spec = compose_scatter(default_court(), &shots, "Test");

        assert_eq!(spec.point_count(), shots.len());
        assert_eq!(
            spec.made.points,
            vec![Point::new(120.0, 80.0), Point::new(-0.0, 5.0)]
        );
        assert_eq!(
            spec.missed.points,
            vec![Point::new(-35.0, 210.0), Point::new(-230.0, 10.0)]
        );
        assert!(spec.empty_message.is_none());
    }

    #[test]
    fn series_styles_and_labels() {
        let spec = compose_scatter(default_court(), &[shot(0.0, 0.0, true)], "Test");
        assert_eq!(spec.made.label, "Made");
        assert_eq!(spec.missed.label, "Missed");
        assert_eq!(spec.made.style.shape, MarkerShape::Circle);
        assert_eq!(spec.made.style.color, "#3498db");
        assert_eq!(spec.made.style.edge_color.as_deref(), Some("black"));
        assert_eq!(spec.missed.style.shape, MarkerShape::Cross);
        assert_eq!(spec.missed.style.color, "red");
        assert!((spec.made.style.alpha - 0.7).abs() < f64::EPSILON);
        assert!((spec.missed.style.size - 100.0).abs() < f64::EPSILON);
        assert_eq!(spec.legend, LegendPosition::UpperRight);
    }

    #[test]
    fn scatter_carries_court_title_and_viewport() {
        let title = shot_chart_title("Stephen Curry", "2024-25", "Regular Season");
        let spec = compose_scatter(default_court(), &[], &title);
        assert_eq!(spec.title, "Stephen Curry Shot Chart\n2024-25 Regular Season");
        assert_eq!(spec.court, default_court());
        assert_eq!(spec.viewport, COURT_VIEWPORT);
    }

    #[test]
    fn empty_scatter_has_placeholder() {
        let spec = compose_scatter(default_court(), &[], "Empty");
        assert!(spec.is_empty());
        assert_eq!(spec.empty_message.as_deref(), Some(NO_SHOTS_MESSAGE));
    }

    #[test]
    fn bar_chart_annotations() {
        let stats = vec![
            ZoneStat::new(MID_RANGE, 4, 6),
            ZoneStat::new(RESTRICTED_AREA, 4, 4),
        ];
        let spec = compose_zone_bar_chart(&stats, "Stephen Curry", "2024-25");

        assert_eq!(
            spec.title,
            "Stephen Curry - Shot Success Rate by Zone (2024-25)"
        );
        assert_eq!(spec.x_label, "Zone");
        assert_eq!(spec.y_label, "Success Rate (%)");
        assert_eq!(spec.y_range, AxisRange::new(0.0, 100.0));
        assert!((spec.category_label_rotation_deg - 45.0).abs() < f64::EPSILON);

        assert_eq!(spec.bars.len(), 2);
        assert_eq!(spec.bars[0].category, MID_RANGE);
        assert_eq!(spec.bars[0].label, "66.7% (4/6)");
        assert!((spec.bars[0].label_y - (spec.bars[0].height + 1.0)).abs() < 1e-9);
        assert_eq!(spec.bars[1].label, "100.0% (4/4)");
        assert!((spec.bars[1].height - 100.0).abs() < f64::EPSILON);
        assert!(spec.empty_message.is_none());
    }

    #[test]
    fn empty_bar_chart_has_placeholder() {
        let spec = compose_zone_bar_chart(&[], "Nobody", "2024-25");
        assert!(spec.bars.is_empty());
        assert_eq!(spec.empty_message.as_deref(), Some(NO_ZONES_MESSAGE));
    }

    #[test]
    fn zero_attempt_zone_label() {
        assert_eq!(format_bar_label(&ZoneStat::new("Backcourt", 0, 0)), "0.0% (0/0)");
    }
}
