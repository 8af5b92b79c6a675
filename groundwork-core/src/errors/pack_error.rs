//! Pack loading and compilation errors.

use super::error_code::GroundworkErrorCode;

/// Errors that can occur while loading or compiling a data pack.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("Failed to parse pack TOML: {message}")]
    Parse { message: String },

    #[error("Unknown building key '{key}' in pack header")]
    UnknownBuilding { key: String },

    #[error("Invalid pattern '{pattern}' in rule '{rule}': {message}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        message: String,
    },

    #[error("Failed to read pack file '{path}': {message}")]
    Io { path: String, message: String },
}

impl GroundworkErrorCode for PackError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "PACK_PARSE",
            Self::UnknownBuilding { .. } => "PACK_UNKNOWN_BUILDING",
            Self::InvalidPattern { .. } => "PACK_INVALID_PATTERN",
            Self::Io { .. } => "PACK_IO",
        }
    }
}
