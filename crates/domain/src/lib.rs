//! Domain layer for the crisis call coordinator.
//!
//! Models hotline call records (transcript, structured summary, handling
//! metadata) and the risk assessment attached to each call, together with
//! the rules that turn raw dimension scores into alert and escalation
//! decisions.

pub mod call;
pub mod directory;
pub mod error;
pub mod risk;

pub use call::{
    CallHandling, CallRecord, CallSummary, CallerProfile, Speaker, SummarySections, TranscriptTurn,
};
pub use directory::CallDirectory;
pub use error::DomainError;
pub use risk::{
    DimensionSummary, MAX_SCORE, RED_ALERT_THRESHOLD, RiskAssessment, RiskCategory, RiskDimension,
    RiskLevel, RiskSummary,
};
