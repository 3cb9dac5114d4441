#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shot event records and the shot zone vocabulary.
//!
//! A [`ShotEvent`] is one recorded field-goal attempt as delivered by the
//! stats provider. The zone fields are open string sets: the constants in
//! [`zone_basic`] name the values the provider is known to use, but nothing
//! in the workspace rejects a value outside that list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Sentinel zone selection meaning "no constraint on this field".
pub const ALL: &str = "All";

/// Known `SHOT_ZONE_BASIC` values.
pub mod zone_basic {
    /// Within four feet of the hoop.
    pub const RESTRICTED_AREA: &str = "Restricted Area";
    /// Inside the lane but outside the restricted area.
    pub const IN_THE_PAINT: &str = "In The Paint (Non-RA)";
    /// Two-point attempts outside the paint.
    pub const MID_RANGE: &str = "Mid-Range";
    /// Corner three from the left side (provider orientation).
    pub const LEFT_CORNER_3: &str = "Left Corner 3";
    /// Corner three from the right side (provider orientation).
    pub const RIGHT_CORNER_3: &str = "Right Corner 3";
    /// Three-point attempts above the break.
    pub const ABOVE_THE_BREAK_3: &str = "Above the Break 3";
    /// Attempts from beyond half court.
    pub const BACKCOURT: &str = "Backcourt";

    /// All known values, in the provider's usual display order.
    pub const KNOWN: &[&str] = &[
        RESTRICTED_AREA,
        IN_THE_PAINT,
        MID_RANGE,
        LEFT_CORNER_3,
        RIGHT_CORNER_3,
        ABOVE_THE_BREAK_3,
        BACKCOURT,
    ];
}

/// Season types accepted by the stats provider.
///
/// Only used to offer defaults and listings; requests carry the season type
/// as a plain string.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SeasonType {
    /// Regular season games.
    #[default]
    #[serde(rename = "Regular Season")]
    #[strum(serialize = "Regular Season")]
    RegularSeason,
    /// Playoff games.
    #[serde(rename = "Playoffs")]
    #[strum(serialize = "Playoffs")]
    Playoffs,
    /// Pre-season games.
    #[serde(rename = "Pre Season")]
    #[strum(serialize = "Pre Season")]
    PreSeason,
    /// All-Star games.
    #[serde(rename = "All Star")]
    #[strum(serialize = "All Star")]
    AllStar,
}

impl SeasonType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::RegularSeason,
            Self::Playoffs,
            Self::PreSeason,
            Self::AllStar,
        ]
    }
}

/// Builds a season label in the provider's `"YYYY-YY"` format from the
/// calendar year the season starts in.
///
/// ```
/// assert_eq!(shot_chart_shot_models::season_label(2024), "2024-25");
/// assert_eq!(shot_chart_shot_models::season_label(1999), "1999-00");
/// ```
#[must_use]
pub fn season_label(start_year: i32) -> String {
    format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100))
}

/// Descriptive fields of a shot that the chart pipeline never consults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotMetadata {
    /// Provider game identifier (e.g. `"0022400061"`).
    pub game_id: String,
    /// Event number within the game.
    pub game_event_id: u32,
    /// Provider player identifier.
    pub player_id: u64,
    /// Player display name.
    pub player_name: String,
    /// Team display name.
    pub team_name: String,
    /// Period (quarter or overtime number).
    pub period: u8,
    /// Minutes left on the period clock.
    pub minutes_remaining: u8,
    /// Seconds left on the period clock.
    pub seconds_remaining: u8,
    /// Play description (e.g. `"Jump Shot"`).
    pub action_type: String,
    /// `"2PT Field Goal"` or `"3PT Field Goal"`.
    pub shot_type: String,
    /// Distance from the hoop in feet.
    pub shot_distance: u32,
}

/// One recorded field-goal attempt.
///
/// Coordinates are in tenths of a foot with the origin at the hoop's
/// projection onto the floor and y increasing away from the baseline. The
/// provider's x-axis is mirrored relative to the baseline camera view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotEvent {
    /// Horizontal position (provider orientation).
    pub loc_x: f64,
    /// Distance out from the baseline.
    pub loc_y: f64,
    /// Whether the shot went in.
    pub made: bool,
    /// Basic zone (see [`zone_basic`]).
    pub zone_basic: String,
    /// Area zone (e.g. `"Left Side(L)"`, `"Center(C)"`).
    pub zone_area: String,
    /// Range zone (e.g. `"Less Than 8 ft."`, `"24+ ft."`).
    pub zone_range: String,
    /// Calendar date of the game.
    pub game_date: NaiveDate,
    /// Informational fields.
    #[serde(default)]
    pub metadata: ShotMetadata,
}

impl ShotEvent {
    /// Creates a shot with the given location, outcome, zones and date and
    /// empty metadata.
    #[must_use]
    pub fn new(
        loc_x: f64,
        loc_y: f64,
        made: bool,
        zone_basic: impl Into<String>,
        zone_area: impl Into<String>,
        zone_range: impl Into<String>,
        game_date: NaiveDate,
    ) -> Self {
        Self {
            loc_x,
            loc_y,
            made,
            zone_basic: zone_basic.into(),
            zone_area: zone_area.into(),
            zone_range: zone_range.into(),
            game_date,
            metadata: ShotMetadata::default(),
        }
    }

    /// Attaches metadata to this shot.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ShotMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether the shot missed.
    #[must_use]
    pub const fn missed(&self) -> bool {
        !self.made
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_type_uses_provider_strings() {
        assert_eq!(SeasonType::RegularSeason.to_string(), "Regular Season");
        assert_eq!(SeasonType::AllStar.as_ref(), "All Star");
        assert_eq!(
            "Pre Season".parse::<SeasonType>().unwrap(),
            SeasonType::PreSeason
        );
        assert!("Summer League".parse::<SeasonType>().is_err());
    }

    #[test]
    fn season_type_default_is_regular_season() {
        assert_eq!(SeasonType::default(), SeasonType::RegularSeason);
        assert_eq!(SeasonType::all().len(), 4);
    }

    #[test]
    fn season_label_wraps_century() {
        assert_eq!(season_label(2014), "2014-15");
        assert_eq!(season_label(2099), "2099-00");
    }

    #[test]
    fn made_and_missed_are_exclusive() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let shot = ShotEvent::new(0.0, 0.0, false, zone_basic::MID_RANGE, "", "", date);
        assert!(shot.missed());
        assert!(!shot.made);
    }

    #[test]
    fn known_zones_are_distinct() {
        let mut zones = zone_basic::KNOWN.to_vec();
        zones.sort_unstable();
        zones.dedup();
        assert_eq!(zones.len(), zone_basic::KNOWN.len());
    }
}
