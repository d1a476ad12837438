//! Domain error types.

use thiserror::Error;

use crate::risk::RiskCategory;

/// Errors that can occur during domain operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A risk dimension score is outside the valid 0..=5 range.
    #[error("Invalid {category} risk score: {score}. Must be integer 0-5.")]
    ScoreOutOfRange { category: RiskCategory, score: u8 },
}
