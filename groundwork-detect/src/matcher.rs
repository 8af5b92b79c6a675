//! Feature detection — accumulates a deduplicated feature set per
//! description.

use groundwork_core::{BuildingCategory, FxHashMap, FxHashSet};

use super::loader::CompiledRulePack;

/// Detects special features (and, via `classifier`, subtypes) implied by
/// free-text project descriptions.
///
/// Holds compiled rule packs per building category. Detection is pure
/// and synchronous over immutable tables; the detector can be shared
/// freely across threads.
pub struct FeatureDetector {
    pub(crate) packs: FxHashMap<BuildingCategory, CompiledRulePack>,
}

impl FeatureDetector {
    /// Build a detector from compiled packs. Later packs (custom
    /// overrides) replace earlier ones for the same building wholesale.
    pub fn from_packs(packs: Vec<CompiledRulePack>) -> Self {
        let mut map = FxHashMap::default();
        for pack in packs {
            map.insert(pack.building, pack);
        }
        Self { packs: map }
    }

    /// The compiled pack for a building, if one loaded.
    pub fn pack(&self, building: BuildingCategory) -> Option<&CompiledRulePack> {
        self.packs.get(&building)
    }

    /// Feature ids implied by `text`, deduplicated, in first-triggered
    /// order. Every rule is evaluated independently — rule order is not
    /// priority, and a feature id appears at most once no matter how
    /// many of its patterns hit.
    ///
    /// Empty when no rule matches, the text is empty, or the building
    /// has no rule pack. Never errors.
    pub fn detect_feature_ids(&self, building: BuildingCategory, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let Some(pack) = self.packs.get(&building) else {
            return Vec::new();
        };

        let mut seen = FxHashSet::default();
        let mut detected = Vec::new();
        for rule in &pack.feature_rules {
            if rule.matches(text) && seen.insert(rule.id.as_str()) {
                detected.push(rule.id.clone());
            }
        }
        detected
    }

    /// String-keyed variant; an unrecognized building key fails soft to
    /// an empty list.
    pub fn detect_feature_ids_by_key(&self, building: &str, text: &str) -> Vec<String> {
        match BuildingCategory::parse(building) {
            Some(b) => self.detect_feature_ids(b, text),
            None => Vec::new(),
        }
    }
}
