//! Overall shooting summary.

use shot_chart_analytics_models::ShotSummary;
use shot_chart_shot_models::ShotEvent;

/// Counts makes and attempts across `shots`.
#[must_use]
pub fn summarize(shots: &[ShotEvent]) -> ShotSummary {
    let made = shots.iter().filter(|shot| shot.made).count() as u64;
    ShotSummary::new(made, shots.len() as u64)
}
