//! Catalog pivot and lookup contracts.

use groundwork_catalog::{CatalogRegistry, FeatureCatalog};
use groundwork_core::{BuildingCategory, PackFilter};

fn catalog() -> FeatureCatalog {
    CatalogRegistry::with_builtins().into_catalog()
}

// ---- Subtype filtering ----

#[test]
fn features_respect_allowed_subtypes() {
    let catalog = catalog();
    for building in BuildingCategory::ALL {
        for &subtype in building.subtypes() {
            for feature in catalog.available_features(building, Some(subtype)) {
                assert!(
                    feature.allows_subtype(subtype),
                    "{building}/{subtype} returned {} outside its allowed subtypes",
                    feature.id
                );
            }
        }
    }
}

#[test]
fn unknown_subtype_yields_no_features() {
    let catalog = catalog();
    for building in BuildingCategory::ALL {
        assert!(
            catalog
                .available_features(building, Some("not_a_real_subtype"))
                .is_empty(),
            "{building} returned features for an undeclared subtype"
        );
    }
}

#[test]
fn unknown_building_key_yields_no_features() {
    let catalog = catalog();
    assert!(catalog.available_features_by_key("warehouse", None).is_empty());
    assert!(catalog.available_features_by_key("", None).is_empty());
}

#[test]
fn omitted_subtype_returns_the_full_building_catalog() {
    let catalog = catalog();
    let all = catalog.available_features(BuildingCategory::Restaurant, None);
    let quick = catalog.available_features(BuildingCategory::Restaurant, Some("quick_service"));
    assert!(all.len() > quick.len());
    assert!(all.iter().any(|f| f.id == "wine_cellar"));
    assert!(!quick.iter().any(|f| f.id == "wine_cellar"));
}

#[test]
fn unrestricted_features_appear_for_every_subtype() {
    // grease_interceptor carries only a flat cost, so it is valid for
    // all restaurant subtypes.
    let catalog = catalog();
    for &subtype in BuildingCategory::Restaurant.subtypes() {
        let features = catalog.available_features(BuildingCategory::Restaurant, Some(subtype));
        assert!(
            features.iter().any(|f| f.id == "grease_interceptor"),
            "grease_interceptor missing for {subtype}"
        );
    }
}

// ---- Cost resolution ----

#[test]
fn drive_thru_cost_is_subtype_specific() {
    let catalog = catalog();
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "drive_thru", Some("quick_service")),
        Some(40.0)
    );
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "drive_thru", Some("fine_dining")),
        None
    );
}

#[test]
fn unknown_cost_is_none_never_zero() {
    let catalog = catalog();
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "no_such_feature", None),
        None
    );
    assert_eq!(catalog.feature_cost_by_key("warehouse", "drive_thru", None), None);

    // Sweep every feature/subtype pair: a resolved cost is never an
    // exact zero standing in for "unknown".
    for building in BuildingCategory::ALL {
        for feature in catalog.available_features(building, None) {
            for &subtype in building.subtypes() {
                if let Some(cost) = catalog.feature_cost(building, &feature.id, Some(subtype)) {
                    assert!(cost > 0.0, "{building}/{}/{subtype} resolved to {cost}", feature.id);
                }
            }
        }
    }
}

#[test]
fn flat_costs_resolve_when_no_subtype_cost_applies() {
    let catalog = catalog();
    // porte_cochere carries only a flat cost per square foot.
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Hospitality, "porte_cochere", Some("resort")),
        Some(9.0)
    );
    // grease_interceptor carries only a lump-sum cost.
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "grease_interceptor", None),
        Some(25000.0)
    );
}

#[test]
fn mri_suite_prices_differ_by_subtype() {
    let catalog = catalog();
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Healthcare, "mri_suite", Some("hospital")),
        Some(150.0)
    );
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Healthcare, "mri_suite", Some("imaging_center")),
        Some(130.0)
    );
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Healthcare, "mri_suite", Some("urgent_care")),
        None
    );
}

// ---- Determinism ----

#[test]
fn repeated_builds_yield_identical_ordering() {
    let first: Vec<String> = catalog()
        .available_features(BuildingCategory::Restaurant, None)
        .iter()
        .map(|f| f.id.clone())
        .collect();
    let second: Vec<String> = catalog()
        .available_features(BuildingCategory::Restaurant, None)
        .iter()
        .map(|f| f.id.clone())
        .collect();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0] < w[1]), "features not sorted by id");
}

#[test]
fn allowed_subtypes_follow_declared_order() {
    // outdoor_seating appears under every restaurant subtype; its
    // allowed_subtypes must come back in declared order, not
    // lexicographic order.
    let catalog = catalog();
    let features = catalog.available_features(BuildingCategory::Restaurant, None);
    let outdoor = features.iter().find(|f| f.id == "outdoor_seating").unwrap();
    assert_eq!(
        outdoor.allowed_subtypes.as_slice(),
        BuildingCategory::Restaurant.subtypes()
    );
}

// ---- Metadata fallback ----

#[test]
fn missing_metadata_falls_back_to_title_cased_id() {
    // market_pantry ships without a [features] entry.
    let catalog = catalog();
    let features =
        catalog.available_features(BuildingCategory::Hospitality, Some("select_service_hotel"));
    let pantry = features.iter().find(|f| f.id == "market_pantry").unwrap();
    assert_eq!(pantry.display_name, "Market Pantry");
    assert!(!pantry.description.is_empty());
}

// ---- Pack-level validation ----

#[test]
fn undeclared_subtype_tables_are_dropped_with_diagnostics() {
    let toml_str = r#"
[catalog]
building = "restaurant"

[subtype_costs.quick_service]
drive_thru = 40.0

[subtype_costs.ghost_kitchen]
commissary = 12.0
"#;
    let pack = CatalogRegistry::load_single(toml_str).unwrap();
    assert_eq!(pack.dropped_subtype_tables, 1);
    assert!(pack.features.iter().all(|f| f.id != "commissary"));
    assert!(pack.features.iter().any(|f| f.id == "drive_thru"));
}

#[test]
fn unknown_building_pack_is_rejected() {
    let toml_str = r#"
[catalog]
building = "warehouse"
"#;
    assert!(CatalogRegistry::load_single(toml_str).is_err());
}

#[test]
fn non_finite_costs_never_resolve() {
    let toml_str = r#"
[catalog]
building = "restaurant"

[subtype_costs.quick_service]
drive_thru = inf
"#;
    let pack = CatalogRegistry::load_single(toml_str).unwrap();
    let catalog = FeatureCatalog::from_packs(vec![pack]);
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "drive_thru", Some("quick_service")),
        None
    );
}

// ---- Registry filtering and custom packs ----

#[test]
fn disabled_pack_is_excluded() {
    let filter = PackFilter {
        disabled_packs: vec!["restaurant".to_string()],
        enabled_only: None,
    };
    let registry = CatalogRegistry::with_builtins_filtered(Some(&filter));
    assert_eq!(registry.pack_count(), 7);
    assert_eq!(registry.diagnostics().builtin_packs_skipped, 1);

    let catalog = registry.into_catalog();
    assert!(catalog.available_features(BuildingCategory::Restaurant, None).is_empty());
}

#[test]
fn enabled_only_restricts_loading() {
    let filter = PackFilter {
        disabled_packs: Vec::new(),
        enabled_only: Some(vec!["civic".to_string()]),
    };
    let registry = CatalogRegistry::with_builtins_filtered(Some(&filter));
    assert_eq!(registry.pack_count(), 1);
}

#[test]
fn custom_pack_overrides_builtin() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("restaurant.toml"),
        r#"
[catalog]
building = "restaurant"
version = "2.0.0"

[subtype_costs.quick_service]
drive_thru = 55.0
"#,
    )
    .unwrap();

    let registry = CatalogRegistry::with_builtins_and_custom(dir.path());
    assert_eq!(registry.diagnostics().custom_packs_loaded, 1);

    let catalog = registry.into_catalog();
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "drive_thru", Some("quick_service")),
        Some(55.0)
    );
    // The override replaces the built-in pack wholesale.
    assert!(catalog
        .available_features(BuildingCategory::Restaurant, None)
        .iter()
        .all(|f| f.id == "drive_thru"));
}

#[test]
fn malformed_custom_pack_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.toml"), "not valid toml [").unwrap();

    let registry = CatalogRegistry::with_builtins_and_custom(dir.path());
    assert_eq!(registry.diagnostics().custom_packs_skipped, 1);

    // Built-ins are unaffected.
    let catalog = registry.into_catalog();
    assert_eq!(
        catalog.feature_cost(BuildingCategory::Restaurant, "drive_thru", Some("quick_service")),
        Some(40.0)
    );
}

#[test]
fn diagnostics_summary_reports_pack_counts() {
    let registry = CatalogRegistry::with_builtins();
    assert_eq!(registry.diagnostics().builtin_packs_loaded, 8);
    let summary = registry.diagnostics().summary();
    assert!(summary.contains("8 packs"));
}
