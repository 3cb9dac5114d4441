//! Terminal and file output.

use std::path::{Path, PathBuf};

use serde::Serialize;
use shot_chart_analytics_models::{ShotSummary, ZoneOptions, ZoneStat};
use shot_chart_shot_models::ShotEvent;
use shot_chart_source_models::PlayerProfile;

/// File name of the shot scatter.
pub const SHOT_CHART_FILE: &str = "shot_chart.svg";
/// File name of the zone bar chart.
pub const ZONE_RATES_FILE: &str = "zone_rates.svg";
/// File name of the filtered shot table.
pub const SHOTS_TABLE_FILE: &str = "shots.csv";

/// One row of the exported shot table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ShotTableRow<'a> {
    game_id: &'a str,
    game_date: String,
    period: u8,
    minutes_remaining: u8,
    seconds_remaining: u8,
    action_type: &'a str,
    shot_type: &'a str,
    shot_zone_basic: &'a str,
    shot_zone_area: &'a str,
    shot_zone_range: &'a str,
    shot_distance: u32,
    loc_x: f64,
    loc_y: f64,
    shot_made_flag: u8,
}

impl<'a> From<&'a ShotEvent> for ShotTableRow<'a> {
    fn from(shot: &'a ShotEvent) -> Self {
        Self {
            game_id: &shot.metadata.game_id,
            game_date: shot.game_date.format("%Y-%m-%d").to_string(),
            period: shot.metadata.period,
            minutes_remaining: shot.metadata.minutes_remaining,
            seconds_remaining: shot.metadata.seconds_remaining,
            action_type: &shot.metadata.action_type,
            shot_type: &shot.metadata.shot_type,
            shot_zone_basic: &shot.zone_basic,
            shot_zone_area: &shot.zone_area,
            shot_zone_range: &shot.zone_range,
            shot_distance: shot.metadata.shot_distance,
            loc_x: shot.loc_x,
            loc_y: shot.loc_y,
            shot_made_flag: u8::from(shot.made),
        }
    }
}

/// Writes `shots` as CSV with a header row.
///
/// # Errors
///
/// Returns [`csv::Error`] if serialization or the underlying write fails.
pub fn write_shots_csv<W: std::io::Write>(
    writer: W,
    shots: &[ShotEvent],
) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    for shot in shots {
        csv.serialize(ShotTableRow::from(shot))?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes `contents` to `dir/name`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`std::io::Error`] if the directory or file cannot be written.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Multi-line profile block.
#[must_use]
pub fn format_profile(profile: &PlayerProfile, headshot_url: &str) -> String {
    let birth_date = profile
        .birth_date
        .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());

    let mut out = format!("{}\n", profile.display_name);
    for (label, value) in [
        ("Team", profile.team_display()),
        ("Position", profile.position.clone()),
        ("Height", profile.height.clone()),
        ("Weight", profile.weight.clone()),
        ("Born", birth_date),
        ("Country", profile.country.clone()),
        ("Experience", format!("{} seasons", profile.season_experience)),
        ("Headshot", headshot_url.to_string()),
    ] {
        let value = if value.is_empty() { "-".to_string() } else { value };
        out.push_str(&format!("  {label:<11}{value}\n"));
    }
    out
}

/// Overall success line, e.g. `"Success rate: 80.00% (8/10)"`.
#[must_use]
pub fn format_summary(summary: &ShotSummary) -> String {
    format!("Success rate: {summary}")
}

/// Aligned per-zone table.
#[must_use]
pub fn format_zone_table(stats: &[ZoneStat]) -> String {
    let width = stats
        .iter()
        .map(|s| s.zone.len())
        .max()
        .unwrap_or(0)
        .max("Zone".len());

    let header = format!("{:<width$}  {:>4}  {:>4}  {:>7}\n", "Zone", "FGM", "FGA", "FG%");
    stats.iter().fold(header, |mut out, stat| {
        out.push_str(&format!(
            "{:<width$}  {:>4}  {:>4}  {:>6.1}%\n",
            stat.zone, stat.made_count, stat.attempted_count, stat.success_rate
        ));
        out
    })
}

/// Zone choices, one field per line.
#[must_use]
pub fn format_zone_options(options: &ZoneOptions) -> String {
    [
        ("Basic", &options.basic),
        ("Area", &options.area),
        ("Range", &options.range),
    ]
    .into_iter()
    .flat_map(|(label, values)| {
        std::iter::once(format!("{label}:\n")).chain(values.iter().map(|v| format!("  {v}\n")))
    })
    .collect()
}
