//! Aggregate call statistics: durations and demographic breakdowns.

use std::collections::BTreeMap;

use domain::CallRecord;
use serde::Serialize;

/// Aggregate statistics across a set of calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CallStatistics {
    pub total_calls: usize,
    pub total_duration_minutes: f64,
    pub avg_duration_minutes: f64,
    pub channels: BTreeMap<String, u32>,
    pub languages: BTreeMap<String, u32>,
    pub age_ranges: BTreeMap<String, u32>,
}

/// Computes duration totals and per-channel/language/age-range counts.
///
/// An empty input yields the zeroed default shape.
pub fn call_statistics(calls: &[CallRecord]) -> CallStatistics {
    if calls.is_empty() {
        return CallStatistics::default();
    }

    let mut stats = CallStatistics {
        total_calls: calls.len(),
        ..CallStatistics::default()
    };
    let mut total_duration_sec: u64 = 0;

    for call in calls {
        total_duration_sec += u64::from(call.duration_sec);
        *stats.channels.entry(call.channel.clone()).or_insert(0) += 1;
        *stats.languages.entry(call.language.clone()).or_insert(0) += 1;
        *stats
            .age_ranges
            .entry(call.caller_profile.age_range.clone())
            .or_insert(0) += 1;
    }

    stats.total_duration_minutes = total_duration_sec as f64 / 60.0;
    stats.avg_duration_minutes = stats.total_duration_minutes / calls.len() as f64;
    stats
}
