//! Hotline call records.
//!
//! Serde field names follow the JSON wire format the dashboard consumes;
//! the handling metadata is serialized under the legacy `analytics` key.

use chrono::{DateTime, FixedOffset};
use common::CallId;
use serde::{Deserialize, Serialize};

use crate::risk::RiskAssessment;

/// Who is speaking in a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Responder,
    Caller,
}

/// A single utterance in the call transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Anonymized demographic information about the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerProfile {
    pub age_range: String,
    pub gender: String,
    pub notes: String,
}

/// The named sections of a structured call summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySections {
    pub caller_profile: String,
    pub presenting_problem: String,
    pub context_timeline: String,
    pub risk_factors: String,
    pub protective_factors: String,
    pub interventions: String,
    pub outcome: String,
    pub safety_plan: String,
}

/// Structured post-call summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSummary {
    pub sections: SummarySections,
    pub tone: String,
}

/// Operational metadata about how the call was handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHandling {
    pub response_time_sec: u32,
    pub handled_by: String,
}

/// A complete crisis hotline call record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_id: CallId,
    pub started_at: DateTime<FixedOffset>,
    pub ended_at: DateTime<FixedOffset>,
    pub duration_sec: u32,
    pub channel: String,
    pub language: String,
    pub timezone: String,
    pub caller_profile: CallerProfile,
    #[serde(default)]
    pub turns: Vec<TranscriptTurn>,
    pub summary: CallSummary,
    pub risk: RiskAssessment,
    #[serde(rename = "analytics")]
    pub handling: CallHandling,
}

impl CallRecord {
    /// Call duration in minutes.
    pub fn duration_minutes(&self) -> f64 {
        f64::from(self.duration_sec) / 60.0
    }
}
