//! Detection robustness properties.

use std::sync::OnceLock;

use groundwork_core::BuildingCategory;
use groundwork_detect::{FeatureDetector, RulePackRegistry};
use proptest::prelude::*;

static DETECTOR: OnceLock<FeatureDetector> = OnceLock::new();

fn detector() -> &'static FeatureDetector {
    DETECTOR.get_or_init(|| RulePackRegistry::with_builtins().into_detector())
}

proptest! {
    #[test]
    fn detection_never_panics_on_arbitrary_text(text in "\\PC{0,300}") {
        for building in BuildingCategory::ALL {
            let ids = detector().detect_feature_ids(building, &text);
            // The result is always deduplicated.
            let unique: std::collections::HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            let _ = detector().detect_subtype(building, &text);
        }
    }

    #[test]
    fn detection_is_deterministic(text in "\\PC{0,300}") {
        let first = detector().detect_feature_ids(BuildingCategory::Restaurant, &text);
        let second = detector().detect_feature_ids(BuildingCategory::Restaurant, &text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn detected_subtype_is_always_declared(text in "\\PC{0,300}") {
        for building in BuildingCategory::ALL {
            if let Some(subtype) = detector().detect_subtype(building, &text) {
                prop_assert!(building.is_declared_subtype(subtype));
            }
        }
    }

    #[test]
    fn appending_text_never_removes_detections(text in "\\PC{0,150}") {
        // Detection accumulates a set over independent rules, so adding
        // more text can only add features.
        let base = detector().detect_feature_ids(BuildingCategory::Restaurant, &text);
        let extended = format!("{text} plus a drive-thru");
        let more = detector().detect_feature_ids(BuildingCategory::Restaurant, &extended);
        for id in &base {
            prop_assert!(more.contains(id), "{} lost after append", id);
        }
        prop_assert!(more.iter().any(|id| id == "drive_thru"));
    }
}
