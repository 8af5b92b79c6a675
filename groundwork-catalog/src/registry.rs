//! Catalog pack registry — loads built-in packs + user custom packs.
//!
//! Built-in packs are embedded at compile time via `include_str!`.
//! Custom packs are loaded from a caller-supplied directory at runtime
//! and replace the built-in pack for the same building wholesale.

use std::path::Path;

use groundwork_core::config::PackFilter;
use groundwork_core::errors::PackError;

use super::catalog::FeatureCatalog;
use super::diagnostics::CatalogDiagnostics;
use super::loader::{self, CompiledCatalogPack};

/// Registry of all loaded catalog packs.
pub struct CatalogRegistry {
    packs: Vec<CompiledCatalogPack>,
    diag: CatalogDiagnostics,
}

impl CatalogRegistry {
    /// Create registry with only built-in packs.
    pub fn with_builtins() -> Self {
        Self::with_builtins_filtered(None)
    }

    /// Create registry with built-in packs, applying optional filter.
    pub fn with_builtins_filtered(filter: Option<&PackFilter>) -> Self {
        let mut packs = Vec::new();
        let mut diag = CatalogDiagnostics::default();

        // Load each built-in pack. If any fails to parse, log and skip.
        for (name, toml_str) in builtin_packs() {
            if let Some(f) = filter {
                if f.is_disabled(name) {
                    diag.builtin_packs_skipped += 1;
                    continue;
                }
            }
            match loader::load_from_str(toml_str) {
                Ok(pack) => {
                    diag.features_compiled += pack.features.len();
                    diag.subtype_tables_dropped += pack.dropped_subtype_tables;
                    diag.builtin_packs_loaded += 1;
                    if let Some(ref ver) = pack.version {
                        diag.pack_versions
                            .insert(pack.building.as_str().to_string(), ver.clone());
                    }
                    packs.push(pack);
                }
                Err(e) => {
                    tracing::warn!(pack = name, error = %e, "failed to load built-in catalog pack");
                    diag.builtin_packs_skipped += 1;
                }
            }
        }

        Self { packs, diag }
    }

    /// Create registry with built-in packs + custom packs from a directory.
    pub fn with_builtins_and_custom(custom_dir: &Path) -> Self {
        Self::with_builtins_and_custom_filtered(custom_dir, None)
    }

    /// Create registry with built-in + custom packs, applying optional filter.
    pub fn with_builtins_and_custom_filtered(
        custom_dir: &Path,
        filter: Option<&PackFilter>,
    ) -> Self {
        let mut registry = Self::with_builtins_filtered(filter);

        // Sorted for deterministic override order when a directory holds
        // more than one pack for the same building.
        for path in custom_pack_paths(custom_dir) {
            match loader::load_from_file(&path) {
                Ok(pack) => {
                    registry.diag.features_compiled += pack.features.len();
                    registry.diag.subtype_tables_dropped += pack.dropped_subtype_tables;
                    registry.diag.custom_packs_loaded += 1;
                    if let Some(ref ver) = pack.version {
                        registry
                            .diag
                            .pack_versions
                            .insert(pack.building.as_str().to_string(), ver.clone());
                    }
                    registry.packs.push(pack);
                }
                Err(e) => {
                    tracing::warn!(
                        pack = %path.display(),
                        error = %e,
                        "failed to load custom catalog pack"
                    );
                    registry.diag.custom_packs_skipped += 1;
                }
            }
        }

        registry
    }

    /// Load a single pack from a TOML string (for testing).
    pub fn load_single(toml_str: &str) -> Result<CompiledCatalogPack, PackError> {
        loader::load_from_str(toml_str)
    }

    /// Number of loaded packs.
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Total feature count across all packs.
    pub fn feature_count(&self) -> usize {
        self.packs.iter().map(|p| p.features.len()).sum()
    }

    /// Get load-time diagnostics.
    pub fn diagnostics(&self) -> &CatalogDiagnostics {
        &self.diag
    }

    /// Consume the registry and build the immutable lookup catalog.
    pub fn into_catalog(self) -> FeatureCatalog {
        FeatureCatalog::from_packs(self.packs)
    }
}

fn custom_pack_paths(custom_dir: &Path) -> Vec<std::path::PathBuf> {
    let mut paths = Vec::new();
    if custom_dir.is_dir() {
        if let Ok(entries) = std::fs::read_dir(custom_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    paths.push(path);
                }
            }
        }
    }
    paths.sort();
    paths
}

/// Built-in catalog packs embedded at compile time.
fn builtin_packs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("restaurant", include_str!("packs/restaurant.toml")),
        ("hospitality", include_str!("packs/hospitality.toml")),
        ("retail", include_str!("packs/retail.toml")),
        ("office", include_str!("packs/office.toml")),
        ("educational", include_str!("packs/educational.toml")),
        ("civic", include_str!("packs/civic.toml")),
        ("specialty", include_str!("packs/specialty.toml")),
        ("healthcare", include_str!("packs/healthcare.toml")),
    ]
}
