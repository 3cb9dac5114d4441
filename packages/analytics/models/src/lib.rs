#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shot filter parameters and aggregate result types.
//!
//! [`ShotFilter`] is the typed predicate set the analytics functions take;
//! [`ShotFilterParams`] is its serializable, string-typed counterpart for
//! front ends that pass dates as ISO 8601 text. The result types are pure
//! views recomputed from each filtered collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shot_chart_shot_models::ALL;

/// Success rate as a percentage.
///
/// Zero attempts yield `0.0` rather than `NaN` so that empty selections can
/// be rendered without special-casing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn success_rate(made: u64, attempted: u64) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        made as f64 / attempted as f64 * 100.0
    }
}

/// Returns the zone value to match against, or `None` when the selection
/// places no constraint (absent, empty, or [`ALL`]).
#[must_use]
pub fn zone_constraint(selection: Option<&str>) -> Option<&str> {
    selection.filter(|value| !value.is_empty() && *value != ALL)
}

/// Conjunction of optional predicates over a shot collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotFilter {
    /// Exact `zone_basic` match.
    pub zone_basic: Option<String>,
    /// Exact `zone_area` match.
    pub zone_area: Option<String>,
    /// Exact `zone_range` match.
    pub zone_range: Option<String>,
    /// Earliest game date (inclusive).
    pub date_start: Option<NaiveDate>,
    /// Latest game date (inclusive).
    pub date_end: Option<NaiveDate>,
}

impl ShotFilter {
    /// A filter that keeps every shot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a basic zone.
    #[must_use]
    pub fn zone_basic(mut self, zone: impl Into<String>) -> Self {
        self.zone_basic = Some(zone.into());
        self
    }

    /// Restricts to an area zone.
    #[must_use]
    pub fn zone_area(mut self, zone: impl Into<String>) -> Self {
        self.zone_area = Some(zone.into());
        self
    }

    /// Restricts to a range zone.
    #[must_use]
    pub fn zone_range(mut self, zone: impl Into<String>) -> Self {
        self.zone_range = Some(zone.into());
        self
    }

    /// Restricts to games on or between `start` and `end`.
    #[must_use]
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }

    /// Whether the zone part of this filter constrains anything.
    #[must_use]
    pub fn has_zone_constraint(&self) -> bool {
        zone_constraint(self.zone_basic.as_deref()).is_some()
            || zone_constraint(self.zone_area.as_deref()).is_some()
            || zone_constraint(self.zone_range.as_deref()).is_some()
    }

    /// Whether the date part of this filter constrains anything.
    #[must_use]
    pub const fn has_date_constraint(&self) -> bool {
        self.date_start.is_some() || self.date_end.is_some()
    }

    /// Whether this filter keeps every shot.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        !self.has_zone_constraint() && !self.has_date_constraint()
    }
}

/// String-typed filter parameters as submitted by a front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotFilterParams {
    /// Basic zone selection (`"All"` for none).
    pub zone_basic: Option<String>,
    /// Area zone selection (`"All"` for none).
    pub zone_area: Option<String>,
    /// Range zone selection (`"All"` for none).
    pub zone_range: Option<String>,
    /// Start date (ISO 8601, `YYYY-MM-DD`).
    pub date_from: Option<String>,
    /// End date (ISO 8601, `YYYY-MM-DD`).
    pub date_to: Option<String>,
}

/// Made/attempted counts for one basic zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStat {
    /// The `zone_basic` value.
    pub zone: String,
    /// Shots made in this zone.
    pub made_count: u64,
    /// Shots attempted in this zone.
    pub attempted_count: u64,
    /// `made_count / attempted_count * 100`, or `0.0` with no attempts.
    pub success_rate: f64,
}

impl ZoneStat {
    /// Creates a zone stat, deriving the success rate.
    #[must_use]
    pub fn new(zone: impl Into<String>, made_count: u64, attempted_count: u64) -> Self {
        Self {
            zone: zone.into(),
            made_count,
            attempted_count,
            success_rate: success_rate(made_count, attempted_count),
        }
    }

    /// Shots missed in this zone.
    #[must_use]
    pub const fn missed_count(&self) -> u64 {
        self.attempted_count.saturating_sub(self.made_count)
    }
}

/// Overall made/attempted counts for a shot collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSummary {
    /// Shots made.
    pub made: u64,
    /// Shots attempted.
    pub attempted: u64,
    /// `made / attempted * 100`, or `0.0` with no attempts.
    pub rate: f64,
}

impl ShotSummary {
    /// Creates a summary, deriving the rate.
    #[must_use]
    pub fn new(made: u64, attempted: u64) -> Self {
        Self {
            made,
            attempted,
            rate: success_rate(made, attempted),
        }
    }
}

impl std::fmt::Display for ShotSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}% ({}/{})", self.rate, self.made, self.attempted)
    }
}

/// Selectable values for each zone field, each list led by [`ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOptions {
    /// Basic zone choices.
    pub basic: Vec<String>,
    /// Area zone choices.
    pub area: Vec<String>,
    /// Range zone choices.
    pub range: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_attempts_rate_is_zero() {
        let rate = success_rate(0, 0);
        assert!(rate.abs() < f64::EPSILON);
        assert!(!rate.is_nan());
    }

    #[test]
    fn rate_is_percentage() {
        assert!((success_rate(4, 6) - 66.666_666_666_666_67).abs() < 1e-9);
        assert!((success_rate(4, 4) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_and_empty_are_unconstrained() {
        assert_eq!(zone_constraint(Some("All")), None);
        assert_eq!(zone_constraint(Some("")), None);
        assert_eq!(zone_constraint(None), None);
        assert_eq!(zone_constraint(Some("Mid-Range")), Some("Mid-Range"));
    }

    #[test]
    fn filter_constraint_flags() {
        assert!(ShotFilter::new().is_unconstrained());
        assert!(ShotFilter::new().zone_basic("All").is_unconstrained());
        assert!(ShotFilter::new().zone_area("Center(C)").has_zone_constraint());

        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dated = ShotFilter::new().date_range(day, day);
        assert!(dated.has_date_constraint());
        assert!(!dated.has_zone_constraint());
    }

    #[test]
    fn summary_display_matches_metric_format() {
        assert_eq!(ShotSummary::new(8, 10).to_string(), "80.00% (8/10)");
        assert_eq!(ShotSummary::new(0, 0).to_string(), "0.00% (0/0)");
    }

    #[test]
    fn missed_count() {
        assert_eq!(ZoneStat::new("Mid-Range", 4, 6).missed_count(), 2);
    }
}
