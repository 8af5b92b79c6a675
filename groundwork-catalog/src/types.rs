//! Core types for the catalog pack system.
//!
//! These serde types define the TOML schema for building-category cost
//! packs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level catalog pack definition (one per TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CatalogSpec {
    /// Pack metadata.
    pub catalog: CatalogMeta,
    /// Per-subtype cost tables: subtype key → (feature id → cost per SF).
    #[serde(default)]
    pub subtype_costs: BTreeMap<String, BTreeMap<String, f64>>,
    /// Per-feature metadata and flat cost fields.
    #[serde(default)]
    pub features: BTreeMap<String, FeatureMetaDef>,
}

/// Catalog pack metadata.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CatalogMeta {
    /// Building category key this pack prices (e.g., "restaurant").
    pub building: String,
    /// Display name for UI/reporting.
    pub display_name: Option<String>,
    /// Pack version string (e.g., "1.0.0").
    pub version: Option<String>,
}

/// Per-feature metadata within a catalog pack.
///
/// A feature that appears only here (no subtype cost table entries) is
/// unrestricted — selectable for every subtype of the building.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct FeatureMetaDef {
    /// Human label. Missing → title-cased feature id.
    pub display_name: Option<String>,
    /// Human explanation of scope. Missing → generic description.
    pub description: Option<String>,
    /// Flat cost per square foot, used when no subtype cost applies.
    pub cost_per_sf: Option<f64>,
    /// Flat lump-sum cost, lowest-priority fallback.
    pub cost: Option<f64>,
}

/// Generate a JSON Schema for the `CatalogSpec` type.
///
/// Custom pack authors can use this schema to validate their TOML files.
pub fn generate_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(CatalogSpec)
}
