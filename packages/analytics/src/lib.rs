#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shot filtering, per-zone aggregation and summary statistics.
//!
//! Every function here is a pure transform over a borrowed shot slice:
//! nothing is mutated in place and filtered collections preserve the
//! relative order of the shots that survive.

pub mod filter;
pub mod summary;
pub mod zones;

pub use filter::{
    date_bounds, filter_from_params, filter_shots, filter_shots_by_date, filter_shots_by_zone,
    parse_date,
};
pub use summary::summarize;
pub use zones::{aggregate_by_zone, zone_options};

use thiserror::Error;

/// Errors that can occur while preparing an analytics query.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A date parameter could not be parsed.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Description of what went wrong.
        message: String,
    },
}
