//! Domain error types.

use thiserror::Error;

/// All errors that can occur in the benefits domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("benefit {benefit}: remaining {remaining} exceeds total {total}")]
    RemainingExceedsTotal {
        benefit: String,
        remaining: String,
        total: String,
    },

    #[error("duplicate benefit id: {0}")]
    DuplicateBenefitId(String),

    #[error("duplicate charge id: {0}")]
    DuplicateChargeId(String),

    #[error("no benefit matches '{0}'")]
    BenefitNotFound(String),
}
