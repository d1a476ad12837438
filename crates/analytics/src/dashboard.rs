//! Dashboard headline numbers: risk distribution and pickup time.

use domain::{CallRecord, RED_ALERT_THRESHOLD};
use serde::Serialize;

/// Count of calls per highest-dimension risk score, indexed 0..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RiskDistribution {
    counts: [u32; 6],
}

impl RiskDistribution {
    /// Number of calls whose highest dimension scored `score`.
    ///
    /// Scores above 5 are out of range and always count zero.
    pub fn count_for(&self, score: u8) -> u32 {
        self.counts.get(usize::from(score)).copied().unwrap_or(0)
    }

    /// The raw per-score counts, indexed by score.
    pub fn counts(&self) -> [u32; 6] {
        self.counts
    }

    /// Total calls across all scores.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn record(&mut self, score: u8) {
        if let Some(slot) = self.counts.get_mut(usize::from(score)) {
            *slot += 1;
        }
    }
}

/// Headline analytics for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardAnalytics {
    pub total_calls: usize,
    pub risk_distribution: RiskDistribution,
    pub avg_response_time: f64,
}

/// Calls grouped into high (4-5), moderate (2-3), and low (0-1) risk bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskBandCounts {
    pub high_risk: u32,
    pub moderate_risk: u32,
    pub low_risk: u32,
    pub total: u32,
}

/// Buckets each call by the highest score across its risk dimensions.
pub fn risk_distribution(calls: &[CallRecord]) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for call in calls {
        distribution.record(call.risk.highest_score());
    }
    distribution
}

/// Mean responder pickup time in seconds.
///
/// Calls with a zero `response_time_sec` are treated as unrecorded and
/// excluded; returns 0.0 when no call has a recorded time.
pub fn average_response_time(calls: &[CallRecord]) -> f64 {
    let recorded: Vec<u32> = calls
        .iter()
        .map(|call| call.handling.response_time_sec)
        .filter(|&secs| secs > 0)
        .collect();

    if recorded.is_empty() {
        return 0.0;
    }

    f64::from(recorded.iter().sum::<u32>()) / recorded.len() as f64
}

/// Computes the headline dashboard numbers.
///
/// An empty input yields the zeroed shape rather than an error, matching
/// what the dashboard renders before any calls arrive.
pub fn dashboard_analytics(calls: &[CallRecord]) -> DashboardAnalytics {
    DashboardAnalytics {
        total_calls: calls.len(),
        risk_distribution: risk_distribution(calls),
        avg_response_time: average_response_time(calls),
    }
}

/// Collapses the distribution into high/moderate/low bands.
pub fn risk_band_counts(calls: &[CallRecord]) -> RiskBandCounts {
    let distribution = risk_distribution(calls);
    RiskBandCounts {
        high_risk: distribution.count_for(RED_ALERT_THRESHOLD) + distribution.count_for(5),
        moderate_risk: distribution.count_for(2) + distribution.count_for(3),
        low_risk: distribution.count_for(0) + distribution.count_for(1),
        total: distribution.total(),
    }
}
