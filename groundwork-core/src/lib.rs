//! # groundwork-core
//!
//! Foundation crate for the Groundwork intake engine.
//! Defines the building taxonomy, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PackFilter;
pub use errors::error_code::GroundworkErrorCode;
pub use types::building::BuildingCategory;
pub use types::collections::{FxHashMap, FxHashSet};
