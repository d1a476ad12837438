//! Read-side calculators for the crisis call dashboard.
//!
//! Pure functions over slices of [`domain::CallRecord`]; nothing here holds
//! state or performs I/O.

pub mod dashboard;
pub mod statistics;

pub use dashboard::{
    DashboardAnalytics, RiskBandCounts, RiskDistribution, average_response_time,
    dashboard_analytics, risk_band_counts, risk_distribution,
};
pub use statistics::{CallStatistics, call_statistics};
