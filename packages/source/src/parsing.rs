//! Decoding of stats API result sets into domain records.
//!
//! Rows are read by column name, so column order changes on the provider
//! side do not matter. Malformed shot rows are skipped with a warning
//! rather than failing the whole response.

use chrono::{NaiveDate, NaiveDateTime};
use shot_chart_shot_models::{ShotEvent, ShotMetadata};
use shot_chart_source_models::{
    PlayerProfile, PlayerSummary, ResultSet, Row, StatsResponse, result_set,
};

use crate::SourceError;

/// Parses a `GAME_DATE` value (`"YYYYMMDD"`). ISO dates are accepted too.
#[must_use]
pub fn parse_game_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Parses a `BIRTHDATE` value (`"1988-03-14T00:00:00"`).
#[must_use]
pub fn parse_birth_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

fn require<'a>(response: &'a StatsResponse, name: &str) -> Result<&'a ResultSet, SourceError> {
    response
        .result_set(name)
        .ok_or_else(|| SourceError::MissingResultSet {
            name: name.to_string(),
        })
}

/// Integer column narrowed to `T`; missing or out-of-range values become
/// zero.
fn narrow<T: TryFrom<i64> + Default>(row: &Row<'_>, column: &str) -> T {
    row.i64(column)
        .and_then(|v| T::try_from(v).ok())
        .unwrap_or_default()
}

/// Decodes one `Shot_Chart_Detail` row.
///
/// # Errors
///
/// Returns a description of the first required field that is missing or
/// malformed.
pub fn parse_shot_row(row: &Row<'_>) -> Result<ShotEvent, String> {
    let loc_x = row.f64("LOC_X").ok_or("missing LOC_X")?;
    let loc_y = row.f64("LOC_Y").ok_or("missing LOC_Y")?;
    let made = match row.i64("SHOT_MADE_FLAG") {
        Some(0) => false,
        Some(1) => true,
        Some(other) => return Err(format!("invalid SHOT_MADE_FLAG {other}")),
        None => return Err("missing SHOT_MADE_FLAG".to_string()),
    };
    let raw_date = row.text("GAME_DATE");
    let game_date =
        parse_game_date(&raw_date).ok_or_else(|| format!("invalid GAME_DATE '{raw_date}'"))?;

    let metadata = ShotMetadata {
        game_id: row.text("GAME_ID"),
        game_event_id: narrow(row, "GAME_EVENT_ID"),
        player_id: narrow(row, "PLAYER_ID"),
        player_name: row.text("PLAYER_NAME"),
        team_name: row.text("TEAM_NAME"),
        period: narrow(row, "PERIOD"),
        minutes_remaining: narrow(row, "MINUTES_REMAINING"),
        seconds_remaining: narrow(row, "SECONDS_REMAINING"),
        action_type: row.text("ACTION_TYPE"),
        shot_type: row.text("SHOT_TYPE"),
        shot_distance: narrow(row, "SHOT_DISTANCE"),
    };

    Ok(ShotEvent::new(
        loc_x,
        loc_y,
        made,
        row.text("SHOT_ZONE_BASIC"),
        row.text("SHOT_ZONE_AREA"),
        row.text("SHOT_ZONE_RANGE"),
        game_date,
    )
    .with_metadata(metadata))
}

/// Decodes a `shotchartdetail` response.
///
/// # Errors
///
/// Returns [`SourceError::MissingResultSet`] if the response has no
/// `Shot_Chart_Detail` result set.
pub fn parse_shot_chart(response: &StatsResponse) -> Result<Vec<ShotEvent>, SourceError> {
    let set = require(response, result_set::SHOT_CHART_DETAIL)?;
    let mut shots = Vec::with_capacity(set.len());
    let mut skipped = 0_usize;

    for (i, row) in set.rows().enumerate() {
        match parse_shot_row(&row) {
            Ok(shot) => shots.push(shot),
            Err(reason) => {
                skipped += 1;
                log::warn!("Skipping shot row {i}: {reason}");
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped}/{} malformed shot rows", set.len());
    }
    log::debug!("Decoded {} shots", shots.len());
    Ok(shots)
}

/// Decodes a `commonplayerinfo` response.
///
/// # Errors
///
/// Returns [`SourceError::MissingResultSet`] if the response has no
/// `CommonPlayerInfo` result set, or [`SourceError::PlayerNotFound`] if it
/// has no rows.
pub fn parse_player_profile(
    response: &StatsResponse,
    player_id: u64,
) -> Result<PlayerProfile, SourceError> {
    let set = require(response, result_set::COMMON_PLAYER_INFO)?;
    let row = set.rows().next().ok_or_else(|| SourceError::PlayerNotFound {
        name: player_id.to_string(),
    })?;

    Ok(PlayerProfile {
        player_id: row
            .i64("PERSON_ID")
            .and_then(|id| u64::try_from(id).ok())
            .unwrap_or(player_id),
        display_name: row.text("DISPLAY_FIRST_LAST"),
        team_city: row.text("TEAM_CITY"),
        team_name: row.text("TEAM_NAME"),
        team_abbreviation: row.text("TEAM_ABBREVIATION"),
        position: row.text("POSITION"),
        height: row.text("HEIGHT"),
        weight: row.text("WEIGHT"),
        birth_date: row.str("BIRTHDATE").and_then(parse_birth_date),
        country: row.text("COUNTRY"),
        season_experience: narrow(&row, "SEASON_EXP"),
        jersey: row.text("JERSEY"),
    })
}

/// Decodes a `commonallplayers` response. Rows without a usable id are
/// skipped.
///
/// # Errors
///
/// Returns [`SourceError::MissingResultSet`] if the response has no
/// `CommonAllPlayers` result set.
pub fn parse_player_index(response: &StatsResponse) -> Result<Vec<PlayerSummary>, SourceError> {
    let set = require(response, result_set::COMMON_ALL_PLAYERS)?;

    let players = set
        .rows()
        .filter_map(|row| {
            let player_id = row.i64("PERSON_ID").and_then(|id| u64::try_from(id).ok());
            if player_id.is_none() {
                log::warn!("Skipping player row without PERSON_ID");
            }
            Some(PlayerSummary {
                player_id: player_id?,
                display_name: row.text("DISPLAY_FIRST_LAST"),
                team_abbreviation: row.text("TEAM_ABBREVIATION"),
                is_active: row.i64("ROSTERSTATUS") == Some(1),
            })
        })
        .collect::<Vec<_>>();

    log::debug!("Decoded {} players", players.len());
    Ok(players)
}
