#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for player shot charts.
//!
//! Fetches a player's shots from the stats API (or from responses saved
//! with `--archive`), filters them by zone and date, prints the summary and
//! per-zone table, and writes the scatter and zone charts as SVG.

mod config;
mod output;
mod progress;

use std::path::PathBuf;

use chrono::{Datelike as _, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use indicatif::MultiProgress;
use shot_chart_analytics::{
    aggregate_by_zone, date_bounds, filter_from_params, filter_shots, summarize, zone_options,
};
use shot_chart_analytics_models::ShotFilterParams;
use shot_chart_chart::{
    compose_scatter, compose_zone_bar_chart, render_bar_chart_svg, render_scatter_svg,
    shot_chart_title,
};
use shot_chart_court::build_court;
use shot_chart_shot_models::{SeasonType, ShotEvent, season_label};
use shot_chart_source::{
    LocalFileSource, NbaStatsClient, ShotDataSource, SourceError, active_players, find_player,
    headshot_url,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "shot_chart", about = "Basketball shot chart generator")]
struct Cli {
    /// Config file (defaults to `shot_chart.toml` when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stats API root, overriding config and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Read saved responses from this directory instead of the network
    #[arg(long, global = true, conflicts_with = "archive")]
    offline: Option<PathBuf>,

    /// Save every raw response fetched into this directory
    #[arg(long, global = true)]
    archive: Option<PathBuf>,

    /// More log output; repeat for trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ShotsArgs {
    /// Player full name or numeric player id
    player: String,

    /// Season label, e.g. `2024-25` (defaults to the current season)
    #[arg(long)]
    season: Option<String>,

    /// Season type
    #[arg(long, default_value_t = SeasonType::RegularSeason)]
    season_type: SeasonType,
}

#[derive(Args)]
struct ChartArgs {
    #[command(flatten)]
    shots: ShotsArgs,

    /// Basic zone, e.g. `Mid-Range` (`All` for no constraint)
    #[arg(long)]
    zone_basic: Option<String>,

    /// Area zone, e.g. `Left Side(L)`
    #[arg(long)]
    zone_area: Option<String>,

    /// Range zone, e.g. `24+ ft.`
    #[arg(long)]
    zone_range: Option<String>,

    /// Earliest game date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<String>,

    /// Latest game date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<String>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Chart width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Also write the filtered shots as CSV
    #[arg(long)]
    table: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a player's shot chart and zone success rates
    Chart(ChartArgs),
    /// List the zone values available for a player's shots
    Zones(ShotsArgs),
    /// List active players
    Players {
        /// Season label (defaults to the current season)
        #[arg(long)]
        season: Option<String>,
    },
    /// Show a player's profile
    Player {
        /// Player full name or numeric player id
        player: String,

        /// Season used to look up the name (defaults to the current season)
        #[arg(long)]
        season: Option<String>,
    },
}

/// Label of the season in progress on `today`. Seasons start in October.
fn current_season(today: NaiveDate) -> String {
    let start_year = if today.month() >= 10 {
        today.year()
    } else {
        today.year() - 1
    };
    season_label(start_year)
}

fn season_or_current(season: Option<String>) -> String {
    season.unwrap_or_else(|| current_season(Local::now().date_naive()))
}

fn build_source(cli: &Cli, config: &Config) -> Result<Box<dyn ShotDataSource>, SourceError> {
    if let Some(dir) = &cli.offline {
        log::info!("Reading saved responses from {}", dir.display());
        return Ok(Box::new(LocalFileSource::new(dir)));
    }

    let mut client = NbaStatsClient::new(config.api.clone())?;
    if let Some(dir) = &cli.archive {
        client = client.with_archive(LocalFileSource::new(dir));
    }
    Ok(Box::new(client))
}

/// Resolves a player argument to an id: numbers are taken as ids, anything
/// else is looked up by name in the season's player index.
async fn resolve_player(
    source: &dyn ShotDataSource,
    multi: &MultiProgress,
    player: &str,
    season: &str,
) -> Result<u64, SourceError> {
    if let Ok(id) = player.trim().parse::<u64>() {
        return Ok(id);
    }

    let spinner = progress::spinner(multi, &format!("Looking up {player}..."));
    let players = source.fetch_players(season).await;
    spinner.finish_and_clear();

    let players = players?;
    find_player(&players, player)
        .map(|p| p.player_id)
        .ok_or_else(|| SourceError::PlayerNotFound {
            name: player.to_string(),
        })
}

/// Fetches shots, logging a failure and falling back to no data.
async fn fetch_shots_or_empty(
    source: &dyn ShotDataSource,
    multi: &MultiProgress,
    player_id: u64,
    season: &str,
    season_type: &str,
) -> Vec<ShotEvent> {
    let spinner = progress::spinner(multi, &format!("Fetching {season} {season_type} shots..."));
    let result = source.fetch_shots(player_id, season, season_type).await;
    spinner.finish_and_clear();

    result.unwrap_or_else(|e| {
        log::error!("Failed to fetch shots for player {player_id}: {e}");
        Vec::new()
    })
}

async fn run_chart(
    source: &dyn ShotDataSource,
    multi: &MultiProgress,
    config: &Config,
    args: ChartArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let season = season_or_current(args.shots.season);
    let season_type = args.shots.season_type.to_string();
    let filter = filter_from_params(&ShotFilterParams {
        zone_basic: args.zone_basic,
        zone_area: args.zone_area,
        zone_range: args.zone_range,
        date_from: args.from,
        date_to: args.to,
    })?;

    let player_id = resolve_player(source, multi, &args.shots.player, &season).await?;

    let profile = match source.fetch_player_profile(player_id).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("Failed to fetch profile for player {player_id}: {e}");
            None
        }
    };
    let player_name = profile
        .as_ref()
        .map_or_else(|| args.shots.player.clone(), |p| p.display_name.clone());

    let shots = fetch_shots_or_empty(source, multi, player_id, &season, &season_type).await;
    if shots.is_empty() {
        log::warn!("No shots for {player_name} in {season} {season_type}");
    } else if let Some((first, last)) = date_bounds(&shots) {
        log::info!("{} shots between {first} and {last}", shots.len());
    }

    let filtered = filter_shots(&shots, &filter);
    let summary = summarize(&filtered);
    let zone_stats = aggregate_by_zone(&filtered);

    if let Some(profile) = &profile {
        println!("{}", output::format_profile(profile, &headshot_url(player_id)));
    }
    println!("{}", output::format_summary(&summary));
    println!();
    print!("{}", output::format_zone_table(&zone_stats));

    let out_dir = args.out.unwrap_or_else(|| config.output.dir.clone());
    let width = args.width.unwrap_or(config.output.width_px);

    let court = build_court(&config.court.line_color, config.court.line_width);
    let title = shot_chart_title(&player_name, &season, &season_type);
    let scatter = compose_scatter(court, &filtered, &title);
    output::write_file(&out_dir, output::SHOT_CHART_FILE, &render_scatter_svg(&scatter, width)?)?;

    let bars = compose_zone_bar_chart(&zone_stats, &player_name, &season);
    output::write_file(&out_dir, output::ZONE_RATES_FILE, &render_bar_chart_svg(&bars, width)?)?;

    if args.table || config.output.write_table {
        std::fs::create_dir_all(&out_dir)?;
        let path = out_dir.join(output::SHOTS_TABLE_FILE);
        output::write_shots_csv(std::fs::File::create(&path)?, &filtered)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

async fn run_zones(
    source: &dyn ShotDataSource,
    multi: &MultiProgress,
    args: ShotsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let season = season_or_current(args.season);
    let season_type = args.season_type.to_string();
    let player_id = resolve_player(source, multi, &args.player, &season).await?;
    let shots = fetch_shots_or_empty(source, multi, player_id, &season, &season_type).await;

    print!("{}", output::format_zone_options(&zone_options(&shots)));
    if let Some((first, last)) = date_bounds(&shots) {
        println!("Dates: {first} to {last}");
    }
    Ok(())
}

async fn run_players(
    source: &dyn ShotDataSource,
    multi: &MultiProgress,
    season: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let season = season_or_current(season);
    let spinner = progress::spinner(multi, &format!("Fetching {season} players..."));
    let players = source.fetch_players(&season).await;
    spinner.finish_and_clear();

    let players = players?;
    let mut active = active_players(&players);
    active.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    for player in &active {
        println!(
            "{:>8}  {:<4} {}",
            player.player_id, player.team_abbreviation, player.display_name
        );
    }
    log::info!("{} active players", active.len());
    Ok(())
}

async fn run_player(
    source: &dyn ShotDataSource,
    multi: &MultiProgress,
    player: &str,
    season: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let season = season_or_current(season);
    let player_id = resolve_player(source, multi, player, &season).await?;
    let profile = source.fetch_player_profile(player_id).await?;
    print!("{}", output::format_profile(&profile, &headshot_url(player_id)));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let multi = progress::init_logger(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = &cli.base_url {
        config.api.base_url.clone_from(url);
    }

    let source = build_source(&cli, &config)?;

    match cli.command {
        Commands::Chart(args) => run_chart(source.as_ref(), &multi, &config, args).await?,
        Commands::Zones(args) => run_zones(source.as_ref(), &multi, args).await?,
        Commands::Players { season } => run_players(source.as_ref(), &multi, season).await?,
        Commands::Player { player, season } => {
            run_player(source.as_ref(), &multi, &player, season).await?;
        }
    }

    Ok(())
}
