pub mod analytics;
pub mod calls;
pub mod metrics;
pub mod status;
