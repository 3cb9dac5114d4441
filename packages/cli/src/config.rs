//! TOML configuration with environment and command-line overrides.
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! `SHOT_CHART_API_URL`, then flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shot_chart_court::{DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH};
use shot_chart_source::StatsApiConfig;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "shot_chart.toml";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "SHOT_CHART_API_URL";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Court line styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    /// Line color.
    pub line_color: String,
    /// Line width.
    pub line_width: f64,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Where and how charts are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory.
    pub dir: PathBuf,
    /// Chart width in pixels.
    pub width_px: u32,
    /// Also write the filtered shots as CSV.
    pub write_table: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            width_px: 720,
            write_table: false,
        }
    }
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stats API connection.
    pub api: StatsApiConfig,
    /// Court styling.
    pub court: CourtConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document is invalid.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_PATH`] when `None`, then applies
    /// environment overrides.
    ///
    /// An explicitly requested file must exist; a missing default file
    /// means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = path.map_or_else(
            || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
            |p| (p.to_path_buf(), true),
        );

        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Loaded config from {}", path.display());
                Self::from_toml(&text)?
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies environment overrides, reading variables through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            log::debug!("{API_URL_ENV} overrides api.base_url");
            self.api.base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, "https://stats.nba.com/stats");
        assert_eq!(config.court.line_color, "black");
        assert!((config.court.line_width - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.output.width_px, 720);
        assert!(!config.output.write_table);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r##"
            [api]
            timeout_secs = 5

            [court]
            line_color = "#777777"

            [output]
            write_table = true
            "##,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, "https://stats.nba.com/stats");
        assert_eq!(config.court.line_color, "#777777");
        assert!((config.court.line_width - 2.0).abs() < f64::EPSILON);
        assert!(config.output.write_table);
        assert_eq!(config.output.width_px, 720);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(matches!(
            Config::from_toml("[output]\nwidth_px = \"wide\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn env_overrides_base_url() {
        let mut config = Config::default();
        config.apply_env(|key| (key == API_URL_ENV).then(|| "http://localhost:9000".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:9000");

        let mut untouched = Config::default();
        untouched.apply_env(|_| Some("   ".to_string()));
        assert_eq!(untouched.api.base_url, "https://stats.nba.com/stats");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("shot_chart_no_such_config.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}
