//! Core types for the detection rule system.
//!
//! These serde types define the TOML schema for building-category rule
//! packs.

use serde::{Deserialize, Serialize};

/// Top-level rule pack definition (one per TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RulePackSpec {
    /// Pack metadata.
    pub pack: RulePackMeta,
    /// Feature-detection rules. Table order is insertion order, not
    /// priority — detection accumulates a set.
    #[serde(default)]
    pub feature_rules: Vec<FeatureRuleDef>,
    /// Subtype-classification rules in priority order — first match wins.
    #[serde(default)]
    pub subtype_rules: Vec<SubtypeRuleDef>,
}

/// Rule pack metadata.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RulePackMeta {
    /// Building category key this pack detects for (e.g., "restaurant").
    pub building: String,
    /// Pack version string (e.g., "1.0.0").
    pub version: Option<String>,
}

/// One feature-detection rule.
///
/// Keywords and patterns are OR-combined: any hit adds the feature id to
/// the result set. Keywords are case-insensitive substrings; patterns
/// are case-insensitive regexes for spelling variants a plain substring
/// cannot cover.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FeatureRuleDef {
    /// Feature id this rule emits (a catalog feature key).
    pub feature: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// One subtype-classification rule.
///
/// Rule order in the pack is priority order: the first matching rule
/// wins, so more specific phrasings must be declared before generic ones
/// ("community college" before "college").
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SubtypeRuleDef {
    /// Subtype id this rule emits (a declared subtype key).
    pub subtype: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Generate a JSON Schema for the `RulePackSpec` type.
///
/// Custom pack authors can use this schema to validate their TOML files.
pub fn generate_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(RulePackSpec)
}
