//! Feature catalog lookup over compiled packs.

use groundwork_core::{BuildingCategory, FxHashMap};

use super::loader::{CompiledCatalogPack, FeatureEntry};

/// Immutable feature catalog spanning every loaded building category.
///
/// Built once at registry construction; all lookups are pure and safe to
/// call from any number of threads without synchronization.
pub struct FeatureCatalog {
    packs: FxHashMap<BuildingCategory, CompiledCatalogPack>,
}

impl FeatureCatalog {
    /// Build a catalog from compiled packs. Later packs (custom
    /// overrides) replace earlier ones for the same building wholesale.
    pub fn from_packs(packs: Vec<CompiledCatalogPack>) -> Self {
        let mut map = FxHashMap::default();
        for pack in packs {
            map.insert(pack.building, pack);
        }
        Self { packs: map }
    }

    /// The compiled pack for a building, if one loaded.
    pub fn pack(&self, building: BuildingCategory) -> Option<&CompiledCatalogPack> {
        self.packs.get(&building)
    }

    /// Features available for a building category, optionally narrowed
    /// to one subtype.
    ///
    /// An undeclared subtype yields an empty list. Intake UI relies on
    /// "no features available" to signal an invalid subtype, so this
    /// contract is deliberate.
    pub fn available_features(
        &self,
        building: BuildingCategory,
        subtype: Option<&str>,
    ) -> Vec<&FeatureEntry> {
        let Some(pack) = self.packs.get(&building) else {
            return Vec::new();
        };
        match subtype {
            None => pack.features.iter().collect(),
            Some(st) => {
                if !building.is_declared_subtype(st) {
                    return Vec::new();
                }
                pack.features
                    .iter()
                    .filter(|f| f.allows_subtype(st))
                    .collect()
            }
        }
    }

    /// String-keyed variant for boundary callers; an unrecognized
    /// building key fails soft to an empty list.
    pub fn available_features_by_key(
        &self,
        building: &str,
        subtype: Option<&str>,
    ) -> Vec<&FeatureEntry> {
        match BuildingCategory::parse(building) {
            Some(b) => self.available_features(b, subtype),
            None => Vec::new(),
        }
    }

    /// Unit cost for a feature, resolved in priority order: the
    /// subtype-specific cost, then a flat cost per square foot, then a
    /// flat lump-sum cost. Non-finite table values never resolve.
    ///
    /// `None` means "cost unknown" — callers must not substitute zero.
    pub fn feature_cost(
        &self,
        building: BuildingCategory,
        feature_id: &str,
        subtype: Option<&str>,
    ) -> Option<f64> {
        let pack = self.packs.get(&building)?;
        let feature = pack.features.iter().find(|f| f.id == feature_id)?;

        if let Some(st) = subtype {
            if let Some(&cost) = feature.cost_per_sf_by_subtype.get(st) {
                if cost.is_finite() {
                    return Some(cost);
                }
            }
        }
        if let Some(cost) = feature.cost_per_sf.filter(|c| c.is_finite()) {
            return Some(cost);
        }
        feature.cost.filter(|c| c.is_finite())
    }

    /// String-keyed variant of [`feature_cost`](Self::feature_cost).
    pub fn feature_cost_by_key(
        &self,
        building: &str,
        feature_id: &str,
        subtype: Option<&str>,
    ) -> Option<f64> {
        self.feature_cost(BuildingCategory::parse(building)?, feature_id, subtype)
    }
}
