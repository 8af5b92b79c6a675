//! Pack filtering configuration.

use serde::{Deserialize, Serialize};

/// Configuration for pack filtering, shared by the catalog and detection
/// registries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackFilter {
    /// Pack names to disable (excluded from loading).
    pub disabled_packs: Vec<String>,
    /// If set, only these pack names are loaded.
    pub enabled_only: Option<Vec<String>>,
}

impl PackFilter {
    /// Check if a pack should be skipped under this filter.
    pub fn is_disabled(&self, name: &str) -> bool {
        if let Some(ref enabled) = self.enabled_only {
            return !enabled.iter().any(|e| e == name);
        }
        self.disabled_packs.iter().any(|d| d == name)
    }
}
