//! Keyword detection — TOML-driven, user-extensible feature and subtype
//! detection from free-text project descriptions.
//!
//! Each building category ships a rule pack: feature rules whose hits
//! accumulate into a deduplicated feature set, and (for categories whose
//! subtypes are ambiguous from the building type alone) an ordered
//! subtype rule list where the first match wins.
//!
//! Architecture:
//! - `types.rs` — RulePackSpec serde types (TOML pack schema)
//! - `loader.rs` — TOML parsing → CompiledRulePack (automata pre-built)
//! - `matcher.rs` — FeatureDetector feature-set accumulation
//! - `classifier.rs` — first-match-wins subtype classification
//! - `registry.rs` — built-in pack loading + custom pack directories
//! - `diagnostics.rs` — load metrics

pub mod classifier;
pub mod diagnostics;
pub mod loader;
pub mod matcher;
pub mod registry;
pub mod types;

pub use diagnostics::DetectDiagnostics;
pub use loader::{CompiledRule, CompiledRulePack};
pub use matcher::FeatureDetector;
pub use registry::RulePackRegistry;
