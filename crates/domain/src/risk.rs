//! Risk assessment model and alerting rules.
//!
//! Every call carries a score of 0..=5 in four fixed dimensions. A score of
//! [`RED_ALERT_THRESHOLD`] or above in any dimension triggers a red alert.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Any dimension scoring at or above this value triggers a red alert.
pub const RED_ALERT_THRESHOLD: u8 = 4;

/// Highest valid dimension score.
pub const MAX_SCORE: u8 = 5;

/// The four risk dimensions assessed for every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Suicide,
    Homicide,
    SelfHarm,
    HarmOthers,
}

impl RiskCategory {
    /// All dimensions, in assessment order.
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Suicide,
        RiskCategory::Homicide,
        RiskCategory::SelfHarm,
        RiskCategory::HarmOthers,
    ];

    /// Returns the wire-format name of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Suicide => "suicide",
            RiskCategory::Homicide => "homicide",
            RiskCategory::SelfHarm => "self_harm",
            RiskCategory::HarmOthers => "harm_others",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and supporting evidence for a single risk dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDimension {
    pub score: u8,
    pub reason_quotes: Vec<String>,
    pub explanation: String,
}

impl RiskDimension {
    /// A zero-score dimension with no evidence.
    pub fn none(explanation: impl Into<String>) -> Self {
        Self {
            score: 0,
            reason_quotes: Vec::new(),
            explanation: explanation.into(),
        }
    }
}

/// Human-readable risk band derived from a dimension score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "NO INDICATORS")]
    NoIndicators,
    #[serde(rename = "LOW RISK")]
    Low,
    #[serde(rename = "MODERATE RISK")]
    Moderate,
    #[serde(rename = "HIGH RISK")]
    High,
}

impl RiskLevel {
    /// Bands a raw score: >=4 high, >=2 moderate, >=1 low, 0 no indicators.
    pub fn from_score(score: u8) -> Self {
        if score >= RED_ALERT_THRESHOLD {
            RiskLevel::High
        } else if score >= 2 {
            RiskLevel::Moderate
        } else if score >= 1 {
            RiskLevel::Low
        } else {
            RiskLevel::NoIndicators
        }
    }

    /// Returns the display label for the band.
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Moderate => "MODERATE RISK",
            RiskLevel::Low => "LOW RISK",
            RiskLevel::NoIndicators => "NO INDICATORS",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Full four-dimension risk assessment for a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub suicide: RiskDimension,
    pub homicide: RiskDimension,
    pub self_harm: RiskDimension,
    pub harm_others: RiskDimension,
}

impl RiskAssessment {
    /// Returns the dimension for a category.
    pub fn dimension(&self, category: RiskCategory) -> &RiskDimension {
        match category {
            RiskCategory::Suicide => &self.suicide,
            RiskCategory::Homicide => &self.homicide,
            RiskCategory::SelfHarm => &self.self_harm,
            RiskCategory::HarmOthers => &self.harm_others,
        }
    }

    /// Iterates all dimensions in assessment order.
    pub fn dimensions(&self) -> impl Iterator<Item = (RiskCategory, &RiskDimension)> {
        RiskCategory::ALL
            .into_iter()
            .map(|category| (category, self.dimension(category)))
    }

    /// Returns the highest score across all dimensions.
    pub fn highest_score(&self) -> u8 {
        self.dimensions()
            .map(|(_, dim)| dim.score)
            .max()
            .unwrap_or(0)
    }

    /// True if any dimension meets the red alert threshold.
    pub fn has_red_alert(&self) -> bool {
        self.dimensions()
            .any(|(_, dim)| dim.score >= RED_ALERT_THRESHOLD)
    }

    /// Checks every dimension score against the valid 0..=5 range.
    ///
    /// Returns all violations rather than stopping at the first, so callers
    /// can report the complete set.
    pub fn validation_errors(&self) -> Vec<DomainError> {
        self.dimensions()
            .filter(|(_, dim)| dim.score > MAX_SCORE)
            .map(|(category, dim)| DomainError::ScoreOutOfRange {
                category,
                score: dim.score,
            })
            .collect()
    }

    /// Summarizes the assessment: highest score, band, alert flag, and a
    /// per-dimension breakdown.
    pub fn summary(&self) -> RiskSummary {
        let highest_score = self.highest_score();
        RiskSummary {
            highest_score,
            risk_level: RiskLevel::from_score(highest_score),
            has_red_alert: self.has_red_alert(),
            dimensions: self
                .dimensions()
                .map(|(category, dim)| DimensionSummary {
                    category,
                    score: dim.score,
                    level: RiskLevel::from_score(dim.score),
                })
                .collect(),
        }
    }

    /// Recommended escalation actions, ordered most urgent first.
    pub fn escalation_recommendations(&self) -> Vec<&'static str> {
        let mut recommendations = Vec::new();

        if self.has_red_alert() {
            recommendations.push("IMMEDIATE: Escalate to supervisor");
            recommendations.push("IMMEDIATE: Activate crisis response protocol");
        }

        match self.highest_score() {
            s if s >= RED_ALERT_THRESHOLD => {
                recommendations.push("HIGH PRIORITY: Schedule immediate follow-up");
                recommendations.push("HIGH PRIORITY: Consider emergency services contact");
            }
            s if s >= 2 => {
                recommendations.push("MODERATE: Schedule follow-up within 24 hours");
                recommendations.push("MODERATE: Connect with mental health resources");
            }
            s if s >= 1 => {
                recommendations.push("LOW: Provide ongoing support resources");
                recommendations.push("LOW: Schedule routine follow-up");
            }
            _ => {}
        }

        recommendations
    }
}

/// Condensed view of a risk assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    pub highest_score: u8,
    pub risk_level: RiskLevel,
    pub has_red_alert: bool,
    pub dimensions: Vec<DimensionSummary>,
}

/// Score and band for a single dimension within a [`RiskSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionSummary {
    pub category: RiskCategory,
    pub score: u8,
    pub level: RiskLevel,
}
