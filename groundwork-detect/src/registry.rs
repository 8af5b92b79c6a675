//! Rule pack registry — loads built-in packs + user custom packs.
//!
//! Built-in packs are embedded at compile time via `include_str!`.
//! Custom packs are loaded from a caller-supplied directory at runtime
//! and replace the built-in pack for the same building wholesale.

use std::path::Path;

use groundwork_core::config::PackFilter;
use groundwork_core::errors::PackError;

use super::diagnostics::DetectDiagnostics;
use super::loader::{self, CompiledRulePack};
use super::matcher::FeatureDetector;

/// Registry of all loaded rule packs.
pub struct RulePackRegistry {
    packs: Vec<CompiledRulePack>,
    diag: DetectDiagnostics,
}

impl RulePackRegistry {
    /// Create registry with only built-in packs.
    pub fn with_builtins() -> Self {
        Self::with_builtins_filtered(None)
    }

    /// Create registry with built-in packs, applying optional filter.
    pub fn with_builtins_filtered(filter: Option<&PackFilter>) -> Self {
        let mut packs = Vec::new();
        let mut diag = DetectDiagnostics::default();

        // Load each built-in pack. If any fails to compile, log and skip.
        for (name, toml_str) in builtin_packs() {
            if let Some(f) = filter {
                if f.is_disabled(name) {
                    diag.builtin_packs_skipped += 1;
                    continue;
                }
            }
            match loader::load_from_str(toml_str) {
                Ok(pack) => {
                    diag.rules_compiled += pack.feature_rules.len() + pack.subtype_rules.len();
                    diag.patterns_compiled += pack.pattern_count;
                    diag.rules_skipped += pack.rules_skipped;
                    diag.builtin_packs_loaded += 1;
                    if let Some(ref ver) = pack.version {
                        diag.pack_versions
                            .insert(pack.building.as_str().to_string(), ver.clone());
                    }
                    packs.push(pack);
                }
                Err(e) => {
                    tracing::warn!(pack = name, error = %e, "failed to load built-in rule pack");
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
                    registry.diag.rules_compiled +=
                        pack.feature_rules.len() + pack.subtype_rules.len();
                    registry.diag.patterns_compiled += pack.pattern_count;
                    registry.diag.rules_skipped += pack.rules_skipped;
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
                        "failed to load custom rule pack"
                    );
                    registry.diag.custom_packs_skipped += 1;
                }
            }
        }

        registry
    }

    /// Load a single pack from a TOML string (for testing).
    pub fn load_single(toml_str: &str) -> Result<CompiledRulePack, PackError> {
        loader::load_from_str(toml_str)
    }

    /// Number of loaded packs.
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Total rule count across all packs.
    pub fn rule_count(&self) -> usize {
        self.packs
            .iter()
            .map(|p| p.feature_rules.len() + p.subtype_rules.len())
            .sum()
    }

    /// Get load-time diagnostics.
    pub fn diagnostics(&self) -> &DetectDiagnostics {
        &self.diag
    }

    /// Consume the registry and build the immutable detector.
    pub fn into_detector(self) -> FeatureDetector {
        FeatureDetector::from_packs(self.packs)
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

/// Built-in rule packs embedded at compile time.
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
