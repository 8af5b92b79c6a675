//! Error types shared across Groundwork crates.

pub mod error_code;
pub mod pack_error;
pub mod payload_error;

pub use error_code::GroundworkErrorCode;
pub use pack_error::PackError;
pub use payload_error::PayloadError;
