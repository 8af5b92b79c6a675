//! Subtype classification — first matching rule in declared priority
//! order wins.

use groundwork_core::BuildingCategory;

use super::matcher::FeatureDetector;

impl FeatureDetector {
    /// Classify the building subtype implied by `text`.
    ///
    /// Walks the pack's subtype rules in declared order and returns the
    /// first match. The declared order is a maintained invariant: more
    /// specific phrasings come before generic ones, so "community
    /// college" wins over "college" and there is no tie-break beyond
    /// list position.
    ///
    /// `None` when nothing matches, the text is empty, or the category
    /// declares no subtype rules.
    pub fn detect_subtype(&self, building: BuildingCategory, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }
        let pack = self.packs.get(&building)?;
        pack.subtype_rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.id.as_str())
    }

    /// String-keyed variant; an unrecognized building key fails soft to
    /// `None`.
    pub fn detect_subtype_by_key(&self, building: &str, text: &str) -> Option<&str> {
        self.detect_subtype(BuildingCategory::parse(building)?, text)
    }
}
