//! Estimate payload errors.
//!
//! Only malformed payloads are errors. Missing fields inside a
//! well-formed payload normalize to fallbacks or `None`, never errors.

use super::error_code::GroundworkErrorCode;

/// Errors that can occur while parsing a backend estimate payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Failed to parse estimate payload JSON: {message}")]
    Json { message: String },

    #[error("Estimate payload has no calculations block")]
    MissingCalculations,
}

impl GroundworkErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Json { .. } => "PAYLOAD_JSON",
            Self::MissingCalculations => "PAYLOAD_MISSING_CALCULATIONS",
        }
    }
}
