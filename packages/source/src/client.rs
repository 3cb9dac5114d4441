//! Live client for the NBA stats API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER,
};
use serde::{Deserialize, Serialize};
use shot_chart_shot_models::ShotEvent;
use shot_chart_source_models::{PlayerProfile, PlayerSummary, StatsResponse};

use crate::local::{LocalFileSource, RawResponse};
use crate::retry::{self, RetryPolicy};
use crate::{ShotDataSource, SourceError, parsing};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

/// The API rejects requests that do not look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// League identifier of the NBA.
const LEAGUE_ID: &str = "00";

/// Connection settings for [`NbaStatsClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsApiConfig {
    /// API root, without a trailing endpoint.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for StatsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Query parameters for `shotchartdetail`: every field-goal attempt by one
/// player, any team.
#[must_use]
pub fn shot_chart_params(
    player_id: u64,
    season: &str,
    season_type: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("PlayerID", player_id.to_string()),
        ("TeamID", "0".to_string()),
        ("Season", season.to_string()),
        ("SeasonType", season_type.to_string()),
        ("ContextMeasure", "FGA".to_string()),
        ("LeagueID", LEAGUE_ID.to_string()),
    ];
    // Required by the endpoint even when unused.
    for name in ["Period", "LastNGames", "Month", "OpponentTeamID"] {
        params.push((name, "0".to_string()));
    }
    for name in [
        "DateFrom",
        "DateTo",
        "GameID",
        "GameSegment",
        "Location",
        "Outcome",
        "PlayerPosition",
        "RookieYear",
        "SeasonSegment",
        "VsConference",
        "VsDivision",
    ] {
        params.push((name, String::new()));
    }
    params
}

/// Query parameters for `commonplayerinfo`.
#[must_use]
pub fn player_info_params(player_id: u64) -> Vec<(&'static str, String)> {
    vec![
        ("PlayerID", player_id.to_string()),
        ("LeagueID", LEAGUE_ID.to_string()),
    ]
}

/// Query parameters for `commonallplayers`, covering every player who has
/// ever appeared, each flagged active or not.
#[must_use]
pub fn all_players_params(season: &str) -> Vec<(&'static str, String)> {
    vec![
        ("LeagueID", LEAGUE_ID.to_string()),
        ("Season", season.to_string()),
        ("IsOnlyCurrentSeason", "0".to_string()),
    ]
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    headers.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    headers
}

/// HTTP client for the stats API.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: reqwest::Client,
    config: StatsApiConfig,
    retry: RetryPolicy,
    archive: Option<LocalFileSource>,
}

impl NbaStatsClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: StatsApiConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            retry: RetryPolicy::default(),
            archive: None,
        })
    }

    /// Replaces the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Saves every raw response into `archive` as it is fetched.
    #[must_use]
    pub fn with_archive(mut self, archive: LocalFileSource) -> Self {
        self.archive = Some(archive);
        self
    }

    /// The connection settings in use.
    #[must_use]
    pub const fn config(&self) -> &StatsApiConfig {
        &self.config
    }

    /// Full URL of `endpoint`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    async fn get(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        raw: RawResponse<'_>,
    ) -> Result<StatsResponse, SourceError> {
        let url = self.endpoint_url(endpoint);
        log::info!("Fetching {endpoint}");
        let value = retry::send_json(&self.retry, || self.client.get(&url).query(params)).await?;

        if let Some(archive) = &self.archive
            && let Err(e) = archive.store(&raw, &value).await
        {
            log::warn!("Failed to save {endpoint} response: {e}");
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl ShotDataSource for NbaStatsClient {
    async fn fetch_shots(
        &self,
        player_id: u64,
        season: &str,
        season_type: &str,
    ) -> Result<Vec<ShotEvent>, SourceError> {
        let params = shot_chart_params(player_id, season, season_type);
        let raw = RawResponse::Shots {
            player_id,
            season,
            season_type,
        };
        let response = self.get("shotchartdetail", &params, raw).await?;
        let shots = parsing::parse_shot_chart(&response)?;
        log::info!(
            "Fetched {} shots for player {player_id} ({season} {season_type})",
            shots.len()
        );
        Ok(shots)
    }

    async fn fetch_player_profile(&self, player_id: u64) -> Result<PlayerProfile, SourceError> {
        let params = player_info_params(player_id);
        let response = self
            .get("commonplayerinfo", &params, RawResponse::Profile { player_id })
            .await?;
        parsing::parse_player_profile(&response, player_id)
    }

    async fn fetch_players(&self, season: &str) -> Result<Vec<PlayerSummary>, SourceError> {
        let params = all_players_params(season);
        let response = self
            .get("commonallplayers", &params, RawResponse::Players { season })
            .await?;
        parsing::parse_player_index(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn shot_chart_params_cover_required_fields() {
        let params = shot_chart_params(201_939, "2024-25", "Regular Season");
        assert_eq!(param(&params, "PlayerID"), Some("201939"));
        assert_eq!(param(&params, "TeamID"), Some("0"));
        assert_eq!(param(&params, "Season"), Some("2024-25"));
        assert_eq!(param(&params, "SeasonType"), Some("Regular Season"));
        assert_eq!(param(&params, "ContextMeasure"), Some("FGA"));
        assert_eq!(param(&params, "LastNGames"), Some("0"));
        assert_eq!(param(&params, "DateFrom"), Some(""));
        assert_eq!(param(&params, "VsDivision"), Some(""));
    }

    #[test]
    fn player_params() {
        assert_eq!(param(&player_info_params(2544), "PlayerID"), Some("2544"));
        let index = all_players_params("2023-24");
        assert_eq!(param(&index, "Season"), Some("2023-24"));
        assert_eq!(param(&index, "IsOnlyCurrentSeason"), Some("0"));
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let client = NbaStatsClient::new(StatsApiConfig {
            base_url: "http://localhost:8080/stats/".to_string(),
            ..StatsApiConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint_url("shotchartdetail"),
            "http://localhost:8080/stats/shotchartdetail"
        );
    }

    #[test]
    fn config_defaults() {
        let config = StatsApiConfig::default();
        assert_eq!(config.base_url, "https://stats.nba.com/stats");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }
}
