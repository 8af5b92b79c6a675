//! Feature-cost catalog — TOML-driven, user-extensible special-feature pricing.
//!
//! Per-subtype cost tables ship as TOML packs embedded at compile time.
//! Loading pivots each pack into a per-feature view (cost by subtype,
//! allowed subtypes) which the intake UI looks up when a project
//! description selects features.
//!
//! Architecture:
//! - `types.rs` — CatalogSpec serde types (TOML pack schema)
//! - `loader.rs` — TOML parsing → CompiledCatalogPack (the pivot runs here)
//! - `catalog.rs` — FeatureCatalog lookup surface
//! - `registry.rs` — built-in pack loading + custom pack directories
//! - `diagnostics.rs` — load metrics

pub mod catalog;
pub mod diagnostics;
pub mod loader;
pub mod registry;
pub mod types;

pub use catalog::FeatureCatalog;
pub use diagnostics::CatalogDiagnostics;
pub use loader::{build_feature_catalog, CompiledCatalogPack, FeatureEntry};
pub use registry::CatalogRegistry;
