//! Keyword feature detection and subtype classification contracts.

use groundwork_core::{BuildingCategory, GroundworkErrorCode, PackFilter};
use groundwork_detect::{FeatureDetector, RulePackRegistry};

fn detector() -> FeatureDetector {
    RulePackRegistry::with_builtins().into_detector()
}

// ---- Feature detection ----

#[test]
fn phrase_order_does_not_affect_detected_set() {
    let d = detector();
    let a = d.detect_feature_ids(
        BuildingCategory::Restaurant,
        "A new location with a drive-thru and outdoor seating.",
    );
    let b = d.detect_feature_ids(
        BuildingCategory::Restaurant,
        "Outdoor seating plus a drive thru lane.",
    );
    for ids in [&a, &b] {
        assert!(ids.iter().any(|id| id == "drive_thru"), "missing drive_thru in {ids:?}");
        assert!(
            ids.iter().any(|id| id == "outdoor_seating"),
            "missing outdoor_seating in {ids:?}"
        );
    }
}

#[test]
fn hyphen_and_space_variants_hit_the_same_rule() {
    let d = detector();
    for text in ["drive-thru", "drive thru", "drive through", "DRIVE-THROUGH"] {
        let ids = d.detect_feature_ids(BuildingCategory::Restaurant, text);
        assert_eq!(ids, vec!["drive_thru".to_string()], "variant {text:?}");
    }
}

#[test]
fn detection_is_case_insensitive() {
    let d = detector();
    let ids = d.detect_feature_ids(BuildingCategory::Restaurant, "WINE CELLAR on the lower level");
    assert_eq!(ids, vec!["wine_cellar".to_string()]);
}

#[test]
fn feature_ids_are_deduplicated() {
    let d = detector();
    let ids = d.detect_feature_ids(
        BuildingCategory::Restaurant,
        "drive-thru lane with a drive through pickup window",
    );
    assert_eq!(ids.iter().filter(|id| *id == "drive_thru").count(), 1);
}

#[test]
fn results_come_back_in_rule_declaration_order() {
    // The result is a set; ordering follows the pack's rule order, not
    // phrase position in the sentence.
    let d = detector();
    let ids = d.detect_feature_ids(
        BuildingCategory::Restaurant,
        "outdoor seating wraps the building and a drive-thru serves the north side",
    );
    assert_eq!(ids, vec!["drive_thru".to_string(), "outdoor_seating".to_string()]);
}

#[test]
fn empty_text_detects_nothing() {
    let d = detector();
    for building in BuildingCategory::ALL {
        assert!(d.detect_feature_ids(building, "").is_empty());
    }
}

#[test]
fn unrelated_text_detects_nothing() {
    let d = detector();
    assert!(d
        .detect_feature_ids(BuildingCategory::Restaurant, "A simple shell building.")
        .is_empty());
}

#[test]
fn detection_by_key_fails_soft_on_unknown_building() {
    let d = detector();
    assert!(d.detect_feature_ids_by_key("warehouse", "drive-thru").is_empty());
    assert_eq!(d.detect_subtype_by_key("warehouse", "library"), None);
}

#[test]
fn healthcare_descriptions_detect_clinical_features() {
    let d = detector();
    let ids = d.detect_feature_ids(
        BuildingCategory::Healthcare,
        "Outpatient clinic with an MRI suite, radiology, and a pharmacy.",
    );
    assert!(ids.iter().any(|id| id == "mri_suite"));
    assert!(ids.iter().any(|id| id == "imaging_suite"));
    assert!(ids.iter().any(|id| id == "pharmacy"));
}

// ---- Subtype classification ----

#[test]
fn community_college_wins_over_university() {
    let d = detector();
    assert_eq!(
        d.detect_subtype(BuildingCategory::Educational, "community college campus"),
        Some("community_college")
    );
}

#[test]
fn campus_alone_classifies_as_university() {
    let d = detector();
    assert_eq!(
        d.detect_subtype(BuildingCategory::Educational, "a 40-acre campus expansion"),
        Some("university")
    );
}

#[test]
fn junior_high_classifies_as_middle_school() {
    // "junior high school" contains "high school"; the middle_school
    // rule is declared earlier so it wins.
    let d = detector();
    assert_eq!(
        d.detect_subtype(BuildingCategory::Educational, "junior high school addition"),
        Some("middle_school")
    );
}

#[test]
fn library_description_classifies_as_library() {
    let d = detector();
    assert_eq!(
        d.detect_subtype(
            BuildingCategory::Civic,
            "new central public library with maker space"
        ),
        Some("library")
    );
}

#[test]
fn courthouse_law_library_classifies_as_courthouse() {
    let d = detector();
    assert_eq!(
        d.detect_subtype(BuildingCategory::Civic, "courthouse with a law library"),
        Some("courthouse")
    );
}

#[test]
fn unmatched_text_classifies_as_none() {
    let d = detector();
    assert_eq!(
        d.detect_subtype(BuildingCategory::Educational, "a two-story building"),
        None
    );
    assert_eq!(d.detect_subtype(BuildingCategory::Educational, ""), None);
}

#[test]
fn categories_without_subtype_rules_return_none() {
    let d = detector();
    assert_eq!(
        d.detect_subtype(BuildingCategory::Restaurant, "fine dining restaurant"),
        None
    );
}

#[test]
fn detected_subtypes_are_declared() {
    let d = detector();
    let samples = [
        (BuildingCategory::Educational, "new elementary school"),
        (BuildingCategory::Educational, "university research building"),
        (BuildingCategory::Civic, "downtown fire station"),
        (BuildingCategory::Civic, "county courthouse"),
    ];
    for (building, text) in samples {
        let subtype = d.detect_subtype(building, text).unwrap();
        assert!(
            building.is_declared_subtype(subtype),
            "{building}: {subtype} not declared"
        );
    }
}

// ---- Registry & config ----

#[test]
fn builtin_packs_all_load() {
    let registry = RulePackRegistry::with_builtins();
    assert_eq!(registry.diagnostics().builtin_packs_loaded, 8);
    assert_eq!(registry.diagnostics().rules_skipped, 0);
    assert!(registry.rule_count() > 0);
    assert!(registry.diagnostics().summary().contains("8 packs"));
}

#[test]
fn disabled_pack_is_not_loaded() {
    let filter = PackFilter {
        disabled_packs: vec!["restaurant".to_string()],
        enabled_only: None,
    };
    let registry = RulePackRegistry::with_builtins_filtered(Some(&filter));
    assert_eq!(registry.diagnostics().builtin_packs_skipped, 1);

    let d = registry.into_detector();
    assert!(d.detect_feature_ids(BuildingCategory::Restaurant, "drive-thru").is_empty());
}

#[test]
fn enabled_only_restricts_loading() {
    let filter = PackFilter {
        disabled_packs: Vec::new(),
        enabled_only: Some(vec!["civic".to_string()]),
    };
    let registry = RulePackRegistry::with_builtins_filtered(Some(&filter));
    assert_eq!(registry.pack_count(), 1);
}

#[test]
fn custom_pack_replaces_builtin_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("restaurant.toml"),
        r#"
[pack]
building = "restaurant"
version = "2.0.0"

[[feature_rules]]
feature = "ghost_kitchen"
keywords = ["ghost kitchen", "delivery-only"]
"#,
    )
    .unwrap();

    let registry = RulePackRegistry::with_builtins_and_custom(dir.path());
    assert_eq!(registry.diagnostics().custom_packs_loaded, 1);

    let d = registry.into_detector();
    assert_eq!(
        d.detect_feature_ids(BuildingCategory::Restaurant, "ghost kitchen concept"),
        vec!["ghost_kitchen".to_string()]
    );
    // The built-in restaurant rules are gone — the override is wholesale.
    assert!(d.detect_feature_ids(BuildingCategory::Restaurant, "drive-thru").is_empty());
}

#[test]
fn malformed_custom_pack_is_skipped_with_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.toml"), "[[feature_rules").unwrap();

    let registry = RulePackRegistry::with_builtins_and_custom(dir.path());
    assert_eq!(registry.diagnostics().custom_packs_skipped, 1);

    let d = registry.into_detector();
    assert_eq!(
        d.detect_feature_ids(BuildingCategory::Restaurant, "drive-thru"),
        vec!["drive_thru".to_string()]
    );
}

#[test]
fn invalid_regex_in_pack_is_a_typed_load_error() {
    let toml_str = r#"
[pack]
building = "restaurant"

[[feature_rules]]
feature = "broken"
patterns = ['[']
"#;
    let err = RulePackRegistry::load_single(toml_str).unwrap_err();
    assert_eq!(err.error_code(), "PACK_INVALID_PATTERN");
}
