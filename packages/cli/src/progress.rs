//! Logger setup and the fetch spinner.
//!
//! `log` output is routed through `indicatif-log-bridge` so that log lines
//! and the spinner never fight for the terminal.

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::LevelFilter;

/// Module prefix shared by every crate in the workspace.
const LOG_TARGET: &str = "shot_chart";

/// Level for the workspace's own log lines given the number of `-v` flags.
#[must_use]
pub const fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes the global logger wrapped in `indicatif-log-bridge`.
///
/// Dependencies log at `warn`, the workspace's crates at
/// [`verbosity_level`]. Directives in `RUST_LOG` take precedence.
///
/// Returns the [`MultiProgress`] that spinners must be added to.
#[must_use]
pub fn init_logger(verbose: u8) -> MultiProgress {
    let multi = MultiProgress::new();

    let logger = pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .filter_module(LOG_TARGET, verbosity_level(verbose))
        .parse_env("RUST_LOG")
        .build();
    let max_level = logger.filter();

    if let Err(e) = indicatif_log_bridge::LogWrapper::new(multi.clone(), logger).try_init() {
        eprintln!("Logger already initialized: {e}");
    }
    log::set_max_level(max_level);

    multi
}

/// A spinner shown while waiting on the stats API.
#[must_use]
pub fn spinner(multi: &MultiProgress, message: &str) -> ProgressBar {
    let bar = multi.add(ProgressBar::new_spinner());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_verbose_flag_raises_the_level() {
        assert_eq!(verbosity_level(0), LevelFilter::Info);
        assert_eq!(verbosity_level(1), LevelFilter::Debug);
        assert_eq!(verbosity_level(2), LevelFilter::Trace);
        assert_eq!(verbosity_level(9), LevelFilter::Trace);
    }
}
