#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shot and player data acquisition.
//!
//! [`ShotDataSource`] is the seam between the chart pipeline and wherever
//! shots come from. [`client::NbaStatsClient`] talks to the live stats API;
//! [`local::LocalFileSource`] replays responses previously saved to disk.

pub mod client;
pub mod local;
pub mod parsing;
pub mod retry;

use async_trait::async_trait;
use shot_chart_shot_models::ShotEvent;
use shot_chart_source_models::{PlayerProfile, PlayerSummary};

pub use client::{NbaStatsClient, StatsApiConfig};
pub use local::{LocalFileSource, RawResponse};

/// Base URL of the player headshot CDN.
pub const HEADSHOT_BASE_URL: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760";

/// Errors that can occur during data acquisition.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The response did not have the expected shape.
    #[error("Normalization error: {message}")]
    Normalization {
        /// Description of what went wrong.
        message: String,
    },

    /// The response lacked a required result set.
    #[error("Response has no '{name}' result set")]
    MissingResultSet {
        /// Name of the missing result set.
        name: String,
    },

    /// No player matched a lookup.
    #[error("No player found matching '{name}'")]
    PlayerNotFound {
        /// The name or id that was looked up.
        name: String,
    },
}

/// A provider of shot and player records.
#[async_trait]
pub trait ShotDataSource: Send + Sync {
    /// Fetches every field-goal attempt by `player_id` in `season`
    /// (e.g. `"2024-25"`) of `season_type` (e.g. `"Regular Season"`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the shots cannot be retrieved or decoded.
    async fn fetch_shots(
        &self,
        player_id: u64,
        season: &str,
        season_type: &str,
    ) -> Result<Vec<ShotEvent>, SourceError>;

    /// Fetches biographical information for `player_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the profile cannot be retrieved, or
    /// [`SourceError::PlayerNotFound`] if the provider has no such player.
    async fn fetch_player_profile(&self, player_id: u64) -> Result<PlayerProfile, SourceError>;

    /// Fetches the player index for `season`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the index cannot be retrieved or decoded.
    async fn fetch_players(&self, season: &str) -> Result<Vec<PlayerSummary>, SourceError>;
}

/// Finds a player by full name, ignoring case and surrounding whitespace.
///
/// When several players share the name, an active one is preferred.
#[must_use]
pub fn find_player<'a>(players: &'a [PlayerSummary], name: &str) -> Option<&'a PlayerSummary> {
    let wanted = name.trim().to_lowercase();
    let mut matches = players
        .iter()
        .filter(|p| p.display_name.trim().to_lowercase() == wanted);
    let first = matches.next()?;
    if first.is_active {
        return Some(first);
    }
    Some(matches.find(|p| p.is_active).unwrap_or(first))
}

/// Players on an active roster.
#[must_use]
pub fn active_players(players: &[PlayerSummary]) -> Vec<&PlayerSummary> {
    players.iter().filter(|p| p.is_active).collect()
}

/// URL of the headshot image for `player_id`.
#[must_use]
pub fn headshot_url(player_id: u64) -> String {
    format!("{HEADSHOT_BASE_URL}/{player_id}.png")
}
