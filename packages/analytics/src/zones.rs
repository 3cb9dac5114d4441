//! Per-zone aggregation.

use std::collections::{BTreeMap, BTreeSet};

use shot_chart_analytics_models::{ZoneOptions, ZoneStat};
use shot_chart_shot_models::{ALL, ShotEvent};

/// Groups shots by `zone_basic` and counts makes and attempts.
///
/// Returns one [`ZoneStat`] per distinct zone present in `shots`, ordered
/// lexicographically by zone name.
#[must_use]
pub fn aggregate_by_zone(shots: &[ShotEvent]) -> Vec<ZoneStat> {
    let mut counts: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for shot in shots {
        let (made, attempted) = counts.entry(shot.zone_basic.as_str()).or_default();
        *attempted += 1;
        if shot.made {
            *made += 1;
        }
    }

    log::debug!(
        "aggregate_by_zone: {} shots across {} zones",
        shots.len(),
        counts.len()
    );

    counts
        .into_iter()
        .map(|(zone, (made, attempted))| ZoneStat::new(zone, made, attempted))
        .collect()
}

fn options_for<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values.collect();
    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(ALL.to_string());
    options.extend(distinct.into_iter().map(str::to_string));
    options
}

/// Selectable values for each zone field: `"All"` followed by the distinct
/// values present in `shots`, sorted.
#[must_use]
pub fn zone_options(shots: &[ShotEvent]) -> ZoneOptions {
    ZoneOptions {
        basic: options_for(shots.iter().map(|s| s.zone_basic.as_str())),
        area: options_for(shots.iter().map(|s| s.zone_area.as_str())),
        range: options_for(shots.iter().map(|s| s.zone_range.as_str())),
    }
}
