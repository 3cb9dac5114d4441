//! Zone and date filtering.
//!
//! Zone selections are exact string matches; absent, empty or `"All"`
//! selections are no-ops. Date bounds are inclusive and each one is
//! optional on its own.

use chrono::{NaiveDate, NaiveDateTime};
use shot_chart_analytics_models::{ShotFilter, ShotFilterParams, zone_constraint};
use shot_chart_shot_models::ShotEvent;

use crate::AnalyticsError;

/// Parses a date string like `"2024-01-15"`.
///
/// Full datetimes (`"2024-01-15T00:00:00"`, as the stats provider formats
/// them) are accepted and truncated to their date.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidDate`] if the string is neither form.
pub fn parse_date(s: &str) -> Result<NaiveDate, AnalyticsError> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| AnalyticsError::InvalidDate {
        value: s.to_string(),
        message: format!("{e}. Expected format: YYYY-MM-DD"),
    })
}

fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, AnalyticsError> {
    s.filter(|s| !s.trim().is_empty()).map(parse_date).transpose()
}

/// Converts string-typed front-end parameters into a [`ShotFilter`].
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidDate`] if either date cannot be parsed.
pub fn filter_from_params(params: &ShotFilterParams) -> Result<ShotFilter, AnalyticsError> {
    Ok(ShotFilter {
        zone_basic: params.zone_basic.clone(),
        zone_area: params.zone_area.clone(),
        zone_range: params.zone_range.clone(),
        date_start: parse_optional_date(params.date_from.as_deref())?,
        date_end: parse_optional_date(params.date_to.as_deref())?,
    })
}

fn zone_matches(selection: Option<&str>, value: &str) -> bool {
    zone_constraint(selection).is_none_or(|wanted| wanted == value)
}

fn date_matches(start: Option<NaiveDate>, end: Option<NaiveDate>, date: NaiveDate) -> bool {
    start.is_none_or(|start| date >= start) && end.is_none_or(|end| date <= end)
}

/// Whether `shot` satisfies every predicate in `filter`.
#[must_use]
pub fn matches(shot: &ShotEvent, filter: &ShotFilter) -> bool {
    zone_matches(filter.zone_basic.as_deref(), &shot.zone_basic)
        && zone_matches(filter.zone_area.as_deref(), &shot.zone_area)
        && zone_matches(filter.zone_range.as_deref(), &shot.zone_range)
        && date_matches(filter.date_start, filter.date_end, shot.game_date)
}

/// Returns the shots satisfying every predicate in `filter`, in their
/// original order.
#[must_use]
pub fn filter_shots(shots: &[ShotEvent], filter: &ShotFilter) -> Vec<ShotEvent> {
    let filtered: Vec<ShotEvent> = shots
        .iter()
        .filter(|shot| matches(shot, filter))
        .cloned()
        .collect();

    log::debug!(
        "filter_shots: kept {}/{} shots ({filter:?})",
        filtered.len(),
        shots.len()
    );

    filtered
}

/// Zone-only filtering.
#[must_use]
pub fn filter_shots_by_zone(
    shots: &[ShotEvent],
    zone_basic: Option<&str>,
    zone_area: Option<&str>,
    zone_range: Option<&str>,
) -> Vec<ShotEvent> {
    let filter = ShotFilter {
        zone_basic: zone_basic.map(str::to_string),
        zone_area: zone_area.map(str::to_string),
        zone_range: zone_range.map(str::to_string),
        ..ShotFilter::default()
    };
    filter_shots(shots, &filter)
}

/// Date-only filtering with inclusive bounds.
#[must_use]
pub fn filter_shots_by_date(
    shots: &[ShotEvent],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<ShotEvent> {
    let filter = ShotFilter {
        date_start: start,
        date_end: end,
        ..ShotFilter::default()
    };
    filter_shots(shots, &filter)
}

/// Earliest and latest game dates in `shots`, or `None` when empty.
#[must_use]
pub fn date_bounds(shots: &[ShotEvent]) -> Option<(NaiveDate, NaiveDate)> {
    let first = shots.first()?.game_date;
    Some(shots.iter().fold((first, first), |(min, max), shot| {
        (min.min(shot.game_date), max.max(shot.game_date))
    }))
}

#[cfg(test)]
mod tests {
    use shot_chart_shot_models::zone_basic::{ABOVE_THE_BREAK_3, MID_RANGE, RESTRICTED_AREA};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shot(zone: &str, area: &str, range: &str, made: bool, day: NaiveDate) -> ShotEvent {
        ShotEvent::new(10.0, 20.0, made, zone, area, range, day)
    }

    fn sample() -> Vec<ShotEvent> {
        vec![
            shot(MID_RANGE, "Left Side(L)", "16-24 ft.", true, date(2024, 1, 1)),
            shot(RESTRICTED_AREA, "Center(C)", "Less Than 8 ft.", true, date(2024, 1, 2)),
            shot(MID_RANGE, "Right Side(R)", "16-24 ft.", false, date(2024, 2, 1)),
            shot(ABOVE_THE_BREAK_3, "Center(C)", "24+ ft.", false, date(2024, 3, 1)),
            shot(MID_RANGE, "Center(C)", "8-16 ft.", true, date(2024, 3, 5)),
        ]
    }

    #[test]
    fn zone_filter_keeps_only_matching_shots() {
        let shots = sample();
        let filtered = filter_shots(&shots, &ShotFilter::new().zone_basic(MID_RANGE));
        assert_eq!(filtered.len(), 3);
        assert!(filtered.len() <= shots.len());
        assert!(filtered.iter().all(|s| s.zone_basic == MID_RANGE));
    }

    #[test]
    fn all_sentinel_is_a_no_op() {
        let shots = sample();
        let filter = ShotFilter::new()
            .zone_basic("All")
            .zone_area("All")
            .zone_range("All");
        assert_eq!(filter_shots(&shots, &filter), shots);
        assert_eq!(filter_shots(&shots, &ShotFilter::new()), shots);
    }

    #[test]
    fn predicates_are_conjoined() {
        let shots = sample();
        let filter = ShotFilter::new().zone_basic(MID_RANGE).zone_area("Center(C)");
        let filtered = filter_shots(&shots, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].zone_range, "8-16 ft.");
    }

    #[test]
    fn preserves_relative_order() {
        let shots = sample();
        let filtered = filter_shots_by_zone(&shots, Some(MID_RANGE), None, None);
        let dates: Vec<NaiveDate> = filtered.iter().map(|s| s.game_date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 5)]);
    }

    #[test]
    fn unknown_zone_matches_nothing() {
        let filtered = filter_shots_by_zone(&sample(), Some("Half Court Heave"), None, None);
        assert!(filtered.is_empty());
    }

    #[test]
    fn date_range_is_inclusive_window() {
        let shots = vec![
            shot(MID_RANGE, "", "", true, date(2024, 1, 1)),
            shot(MID_RANGE, "", "", true, date(2024, 2, 1)),
            shot(MID_RANGE, "", "", true, date(2024, 3, 1)),
        ];
        let filtered =
            filter_shots_by_date(&shots, Some(date(2024, 1, 15)), Some(date(2024, 2, 15)));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].game_date, date(2024, 2, 1));
    }

    #[test]
    fn date_bounds_are_inclusive_at_edges() {
        let filtered =
            filter_shots_by_date(&sample(), Some(date(2024, 1, 2)), Some(date(2024, 3, 1)));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn single_date_bound_is_half_open() {
        let shots = sample();
        assert_eq!(filter_shots_by_date(&shots, Some(date(2024, 3, 1)), None).len(), 2);
        assert_eq!(filter_shots_by_date(&shots, None, Some(date(2024, 1, 1))).len(), 1);
    }

    #[test]
    fn inverted_date_range_is_empty() {
        let filtered =
            filter_shots_by_date(&sample(), Some(date(2024, 3, 1)), Some(date(2024, 1, 1)));
        assert!(filtered.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let shots = sample();
        let filter = ShotFilter::new()
            .zone_basic(MID_RANGE)
            .date_range(date(2024, 1, 1), date(2024, 2, 28));
        let once = filter_shots(&shots, &filter);
        let twice = filter_shots(&once, &filter);
        assert_eq!(once, twice);

        let narrower = filter_shots(&once, &filter.clone().zone_area("Left Side(L)"));
        assert!(narrower.iter().all(|s| once.contains(s)));
    }

    #[test]
    fn empty_input_is_valid() {
        assert!(filter_shots(&[], &ShotFilter::new().zone_basic(MID_RANGE)).is_empty());
        assert_eq!(date_bounds(&[]), None);
    }

    #[test]
    fn parses_dates_and_datetimes() {
        assert_eq!(parse_date("2024-01-15").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_date("2024-01-15T00:00:00").unwrap(), date(2024, 1, 15));
        assert!(matches!(
            parse_date("01/15/2024"),
            Err(AnalyticsError::InvalidDate { .. })
        ));
    }

    #[test]
    fn params_convert_to_filter() {
        let params = ShotFilterParams {
            zone_basic: Some(MID_RANGE.to_string()),
            date_from: Some("2024-01-15".to_string()),
            date_to: Some(String::new()),
            ..ShotFilterParams::default()
        };
        let filter = filter_from_params(&params).unwrap();
        assert_eq!(filter.zone_basic.as_deref(), Some(MID_RANGE));
        assert_eq!(filter.date_start, Some(date(2024, 1, 15)));
        assert_eq!(filter.date_end, None);

        let bad = ShotFilterParams {
            date_to: Some("yesterday".to_string()),
            ..ShotFilterParams::default()
        };
        assert!(filter_from_params(&bad).is_err());
    }

    #[test]
    fn computes_date_bounds() {
        assert_eq!(
            date_bounds(&sample()),
            Some((date(2024, 1, 1), date(2024, 3, 5)))
        );
    }
}
