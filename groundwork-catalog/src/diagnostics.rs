//! Catalog diagnostics — load metrics.

use std::collections::HashMap;

/// Aggregated diagnostics from catalog pack loading.
#[derive(Debug, Clone, Default)]
pub struct CatalogDiagnostics {
    pub builtin_packs_loaded: usize,
    pub builtin_packs_skipped: usize,
    pub custom_packs_loaded: usize,
    pub custom_packs_skipped: usize,
    pub features_compiled: usize,
    pub subtype_tables_dropped: usize,
    pub pack_versions: HashMap<String, String>,
}

impl CatalogDiagnostics {
    /// Merge another diagnostics into this one (additive).
    pub fn merge(&mut self, other: &CatalogDiagnostics) {
        self.builtin_packs_loaded += other.builtin_packs_loaded;
        self.builtin_packs_skipped += other.builtin_packs_skipped;
        self.custom_packs_loaded += other.custom_packs_loaded;
        self.custom_packs_skipped += other.custom_packs_skipped;
        self.features_compiled += other.features_compiled;
        self.subtype_tables_dropped += other.subtype_tables_dropped;
        for (k, v) in &other.pack_versions {
            self.pack_versions.entry(k.clone()).or_insert_with(|| v.clone());
        }
    }

    /// Format a one-line load summary.
    pub fn summary(&self) -> String {
        format!(
            "[groundwork-catalog] {} packs ({} builtin, {} custom), {} features, \
             {} subtype tables dropped",
            self.builtin_packs_loaded + self.custom_packs_loaded,
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.features_compiled,
            self.subtype_tables_dropped,
        )
    }
}
