//! Stable machine error codes.

/// Implemented by every Groundwork error enum to expose a stable,
/// machine-readable code alongside the human-readable message.
pub trait GroundworkErrorCode {
    fn error_code(&self) -> &'static str;
}
