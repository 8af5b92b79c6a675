//! TOML parsing → CompiledCatalogPack.
//!
//! The pivot from per-subtype cost tables to the per-feature view runs
//! here, once per pack, at load time. Lookups never rebuild it.

use std::collections::BTreeMap;
use std::path::Path;

use groundwork_core::errors::PackError;
use groundwork_core::{BuildingCategory, FxHashMap};
use smallvec::SmallVec;

use super::types::{CatalogSpec, FeatureMetaDef};

/// One selectable special feature, in per-feature view.
#[derive(Debug, Clone)]
pub struct FeatureEntry {
    /// Stable machine key, unique within a building category.
    pub id: String,
    /// Human label.
    pub display_name: String,
    /// Human explanation of scope.
    pub description: String,
    /// Subtype key → cost per square foot.
    pub cost_per_sf_by_subtype: FxHashMap<&'static str, f64>,
    /// Subtypes this feature is selectable for, in the category's
    /// declared order. Empty = valid for all subtypes.
    pub allowed_subtypes: SmallVec<[&'static str; 4]>,
    /// Flat cost per square foot, used when no subtype cost applies.
    pub cost_per_sf: Option<f64>,
    /// Flat lump-sum cost, lowest-priority fallback.
    pub cost: Option<f64>,
}

impl FeatureEntry {
    /// Whether this feature is selectable for the given declared subtype.
    pub fn allows_subtype(&self, subtype: &str) -> bool {
        self.allowed_subtypes.is_empty() || self.allowed_subtypes.iter().any(|s| *s == subtype)
    }
}

/// A catalog pack compiled into its per-feature view.
#[derive(Debug, Clone)]
pub struct CompiledCatalogPack {
    pub building: BuildingCategory,
    pub display_name: String,
    pub version: Option<String>,
    /// Features sorted by id (lexicographic) for deterministic ordering.
    pub features: Vec<FeatureEntry>,
    /// Cost tables dropped because their subtype key is not declared
    /// for this building.
    pub dropped_subtype_tables: usize,
}

/// Parse and compile a catalog pack from a TOML string.
pub fn load_from_str(toml_str: &str) -> Result<CompiledCatalogPack, PackError> {
    let spec: CatalogSpec = toml::from_str(toml_str).map_err(|e| PackError::Parse {
        message: e.to_string(),
    })?;
    compile(spec)
}

/// Parse and compile a catalog pack from a TOML file.
pub fn load_from_file(path: &Path) -> Result<CompiledCatalogPack, PackError> {
    let toml_str = std::fs::read_to_string(path).map_err(|e| PackError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_from_str(&toml_str)
}

fn compile(spec: CatalogSpec) -> Result<CompiledCatalogPack, PackError> {
    let building = BuildingCategory::parse(&spec.catalog.building).ok_or_else(|| {
        PackError::UnknownBuilding {
            key: spec.catalog.building.clone(),
        }
    })?;

    let mut dropped = 0;
    for key in spec.subtype_costs.keys() {
        if !building.is_declared_subtype(key) {
            tracing::warn!(
                pack = %spec.catalog.building,
                subtype = %key,
                "dropping cost table for undeclared subtype"
            );
            dropped += 1;
        }
    }

    let features = build_feature_catalog(building, &spec.subtype_costs, &spec.features);

    let display_name = spec
        .catalog
        .display_name
        .unwrap_or_else(|| title_case(building.as_str()));

    Ok(CompiledCatalogPack {
        building,
        display_name,
        version: spec.catalog.version,
        features,
        dropped_subtype_tables: dropped,
    })
}

/// Pivot a per-subtype cost table into the per-feature catalog view.
///
/// Iterates subtypes in the category's declared enumeration order so
/// `allowed_subtypes` preserves it; output is sorted by feature id for
/// deterministic ordering. Subtype keys outside the declared enumeration
/// are never visited — validation is the pack boundary's job, not this
/// function's.
pub fn build_feature_catalog(
    building: BuildingCategory,
    per_subtype_costs: &BTreeMap<String, BTreeMap<String, f64>>,
    metadata: &BTreeMap<String, FeatureMetaDef>,
) -> Vec<FeatureEntry> {
    let mut by_id: FxHashMap<String, FeatureEntry> = FxHashMap::default();

    for &subtype in building.subtypes() {
        let Some(costs) = per_subtype_costs.get(subtype) else {
            continue;
        };
        for (feature_id, &cost) in costs {
            let entry = by_id
                .entry(feature_id.clone())
                .or_insert_with(|| new_entry(feature_id, metadata.get(feature_id)));
            entry.cost_per_sf_by_subtype.insert(subtype, cost);
            if !entry.allowed_subtypes.iter().any(|s| *s == subtype) {
                entry.allowed_subtypes.push(subtype);
            }
        }
    }

    // Features declared only in metadata with a flat cost are
    // unrestricted: no allowed_subtypes, valid for every subtype.
    for (feature_id, meta) in metadata {
        if (meta.cost_per_sf.is_some() || meta.cost.is_some()) && !by_id.contains_key(feature_id) {
            by_id.insert(feature_id.clone(), new_entry(feature_id, Some(meta)));
        }
    }

    let mut entries: Vec<FeatureEntry> = by_id.into_values().collect();
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    entries
}

fn new_entry(id: &str, meta: Option<&FeatureMetaDef>) -> FeatureEntry {
    let display_name = meta
        .and_then(|m| m.display_name.clone())
        .unwrap_or_else(|| title_case(id));
    let description = meta
        .and_then(|m| m.description.clone())
        .unwrap_or_else(|| format!("{display_name} scope addition."));
    FeatureEntry {
        id: id.to_string(),
        display_name,
        description,
        cost_per_sf_by_subtype: FxHashMap::default(),
        allowed_subtypes: SmallVec::new(),
        cost_per_sf: meta.and_then(|m| m.cost_per_sf),
        cost: meta.and_then(|m| m.cost),
    }
}

/// "drive_thru" → "Drive Thru".
fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
