#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Stats API response envelope and player record types.
//!
//! The stats provider answers every endpoint with a list of named result
//! sets, each a header row plus positional data rows. [`Row`] gives
//! by-column-name access to one data row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result set names used by the endpoints this workspace calls.
pub mod result_set {
    /// Shot-level rows from `shotchartdetail`.
    pub const SHOT_CHART_DETAIL: &str = "Shot_Chart_Detail";
    /// Player biography from `commonplayerinfo`.
    pub const COMMON_PLAYER_INFO: &str = "CommonPlayerInfo";
    /// Player index from `commonallplayers`.
    pub const COMMON_ALL_PLAYERS: &str = "CommonAllPlayers";
}

/// One named table in a stats response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Table name.
    pub name: String,
    /// Column names.
    pub headers: Vec<String>,
    /// Data rows, positionally aligned with `headers`.
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of the column called `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates over the data rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().map(|values| Row { set: self, values })
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.row_set.len()
    }

    /// Whether there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }
}

/// A data row with access by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    set: &'a ResultSet,
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Raw value of column `name`. JSON `null` is reported as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.set
            .column(name)
            .and_then(|i| self.values.get(i))
            .filter(|v| !v.is_null())
    }

    /// String value of column `name`.
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Integer value of column `name`. Numeric strings are accepted, since
    /// the provider is not consistent about quoting ids.
    #[must_use]
    pub fn i64(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Floating-point value of column `name`.
    #[must_use]
    pub fn f64(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Display form of column `name`: strings verbatim, numbers formatted,
    /// anything else empty.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        match self.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// Top-level stats response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Endpoint name echoed by the provider.
    #[serde(default)]
    pub resource: Option<String>,
    /// Result tables.
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// The result set called `name`.
    #[must_use]
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|set| set.name == name)
    }
}

/// Biographical information for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// Provider player identifier.
    pub player_id: u64,
    /// Full display name.
    pub display_name: String,
    /// Team city (e.g. `"Golden State"`).
    pub team_city: String,
    /// Team name (e.g. `"Warriors"`).
    pub team_name: String,
    /// Team abbreviation (e.g. `"GSW"`).
    pub team_abbreviation: String,
    /// Listed position.
    pub position: String,
    /// Listed height, feet-inches (e.g. `"6-2"`).
    pub height: String,
    /// Listed weight in pounds.
    pub weight: String,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Country.
    pub country: String,
    /// Seasons of experience.
    pub season_experience: u32,
    /// Jersey number.
    pub jersey: String,
}

impl PlayerProfile {
    /// `"{city} {name}"`, or whichever half is present.
    #[must_use]
    pub fn team_display(&self) -> String {
        format!("{} {}", self.team_city, self.team_name)
            .trim()
            .to_string()
    }
}

/// One entry of the player index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Provider player identifier.
    pub player_id: u64,
    /// Full display name.
    pub display_name: String,
    /// Current team abbreviation, empty for free agents and retirees.
    pub team_abbreviation: String,
    /// Whether the player is on an active roster.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response() -> StatsResponse {
        serde_json::from_value(json!({
            "resource": "commonallplayers",
            "resultSets": [{
                "name": "CommonAllPlayers",
                "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ABBREVIATION"],
                "rowSet": [
                    [201939, "Stephen Curry", 1, "GSW"],
                    ["2544", "LeBron James", 1, null]
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn finds_result_set_by_name() {
        let response = response();
        assert!(response.result_set(result_set::COMMON_ALL_PLAYERS).is_some());
        assert!(response.result_set(result_set::SHOT_CHART_DETAIL).is_none());
        assert_eq!(response.resource.as_deref(), Some("commonallplayers"));
    }

    #[test]
    fn row_access_by_column_name() {
        let response = response();
        let set = response.result_set(result_set::COMMON_ALL_PLAYERS).unwrap();
        let rows: Vec<Row<'_>> = set.rows().collect();

        assert_eq!(set.len(), 2);
        assert_eq!(rows[0].i64("PERSON_ID"), Some(201_939));
        assert_eq!(rows[0].str("DISPLAY_FIRST_LAST"), Some("Stephen Curry"));
        assert_eq!(rows[1].i64("PERSON_ID"), Some(2544));
        assert_eq!(rows[1].str("TEAM_ABBREVIATION"), None);
        assert_eq!(rows[1].text("TEAM_ABBREVIATION"), "");
        assert_eq!(rows[0].text("ROSTERSTATUS"), "1");
        assert_eq!(rows[0].get("NOT_A_COLUMN"), None);
    }

    #[test]
    fn team_display_trims_missing_half() {
        let profile = PlayerProfile {
            team_city: "Golden State".to_string(),
            team_name: "Warriors".to_string(),
            ..PlayerProfile::default()
        };
        assert_eq!(profile.team_display(), "Golden State Warriors");
        assert_eq!(PlayerProfile::default().team_display(), "");
    }
}
