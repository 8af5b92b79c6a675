//! Detection diagnostics — load metrics.

use std::collections::HashMap;

/// Aggregated diagnostics from rule pack loading.
#[derive(Debug, Clone, Default)]
pub struct DetectDiagnostics {
    pub builtin_packs_loaded: usize,
    pub builtin_packs_skipped: usize,
    pub custom_packs_loaded: usize,
    pub custom_packs_skipped: usize,
    pub rules_compiled: usize,
    pub patterns_compiled: usize,
    pub rules_skipped: usize,
    pub pack_versions: HashMap<String, String>,
}

impl DetectDiagnostics {
    /// Merge another diagnostics into this one (additive).
    pub fn merge(&mut self, other: &DetectDiagnostics) {
        self.builtin_packs_loaded += other.builtin_packs_loaded;
        self.builtin_packs_skipped += other.builtin_packs_skipped;
        self.custom_packs_loaded += other.custom_packs_loaded;
        self.custom_packs_skipped += other.custom_packs_skipped;
        self.rules_compiled += other.rules_compiled;
        self.patterns_compiled += other.patterns_compiled;
        self.rules_skipped += other.rules_skipped;
        for (k, v) in &other.pack_versions {
            self.pack_versions.entry(k.clone()).or_insert_with(|| v.clone());
        }
    }

    /// Format a one-line load summary.
    pub fn summary(&self) -> String {
        format!(
            "[groundwork-detect] {} packs ({} builtin, {} custom), {} rules, \
             {} patterns, {} rules skipped",
            self.builtin_packs_loaded + self.custom_packs_loaded,
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.rules_compiled,
            self.patterns_compiled,
            self.rules_skipped,
        )
    }
}
