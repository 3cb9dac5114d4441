//! Saved raw responses on disk.
//!
//! [`LocalFileSource`] stores stats responses verbatim as pretty-printed
//! JSON, one file per request, and can serve them back through
//! [`ShotDataSource`] without touching the network.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shot_chart_shot_models::ShotEvent;
use shot_chart_source_models::{PlayerProfile, PlayerSummary, StatsResponse};

use crate::{ShotDataSource, SourceError, parsing};

/// Identifies one stats request, and so one saved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawResponse<'a> {
    /// `shotchartdetail` for a player, season and season type.
    Shots {
        /// Provider player identifier.
        player_id: u64,
        /// Season label (e.g. `"2024-25"`).
        season: &'a str,
        /// Season type (e.g. `"Regular Season"`).
        season_type: &'a str,
    },
    /// `commonplayerinfo` for a player.
    Profile {
        /// Provider player identifier.
        player_id: u64,
    },
    /// `commonallplayers` for a season.
    Players {
        /// Season label.
        season: &'a str,
    },
}

fn slug(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

impl RawResponse<'_> {
    /// File name the response is saved under.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::Shots {
                player_id,
                season,
                season_type,
            } => format!("shots_{player_id}_{}_{}.json", slug(season), slug(season_type)),
            Self::Profile { player_id } => format!("player_{player_id}.json"),
            Self::Players { season } => format!("players_{}.json", slug(season)),
        }
    }
}

/// A directory of saved stats responses.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    dir: PathBuf,
}

impl LocalFileSource {
    /// Uses `dir` for reading and writing responses.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `raw`.
    #[must_use]
    pub fn path_for(&self, raw: &RawResponse<'_>) -> PathBuf {
        self.dir.join(raw.file_name())
    }

    /// Reads and decodes the saved response for `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read or
    /// [`SourceError::Json`] if it is not a stats response.
    pub async fn load(&self, raw: &RawResponse<'_>) -> Result<StatsResponse, SourceError> {
        let path = self.path_for(raw);
        log::debug!("Reading saved response {}", path.display());
        let text = tokio::fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Saves `value` as the response for `raw`, creating the directory if
    /// needed. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be written.
    pub async fn store(
        &self,
        raw: &RawResponse<'_>,
        value: &serde_json::Value,
    ) -> Result<PathBuf, SourceError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(raw);
        tokio::fs::write(&path, serde_json::to_string_pretty(value)?).await?;
        log::debug!("Saved response to {}", path.display());
        Ok(path)
    }
}

#[async_trait]
impl ShotDataSource for LocalFileSource {
    async fn fetch_shots(
        &self,
        player_id: u64,
        season: &str,
        season_type: &str,
    ) -> Result<Vec<ShotEvent>, SourceError> {
        let response = self
            .load(&RawResponse::Shots {
                player_id,
                season,
                season_type,
            })
            .await?;
        parsing::parse_shot_chart(&response)
    }

    async fn fetch_player_profile(&self, player_id: u64) -> Result<PlayerProfile, SourceError> {
        let response = self.load(&RawResponse::Profile { player_id }).await?;
        parsing::parse_player_profile(&response, player_id)
    }

    async fn fetch_players(&self, season: &str) -> Result<Vec<PlayerSummary>, SourceError> {
        let response = self.load(&RawResponse::Players { season }).await?;
        parsing::parse_player_index(&response)
    }
}
