//! TOML parsing → CompiledRulePack.
//!
//! Keyword lists compile into one ascii-case-insensitive Aho-Corasick
//! automaton per rule; regex patterns compile case-insensitively with a
//! RegexSet fast path. All compilation happens once, at load time.

use std::path::Path;

use aho_corasick::AhoCorasick;
use groundwork_core::errors::PackError;
use groundwork_core::BuildingCategory;
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use super::types::RulePackSpec;

/// A single detection rule compiled for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Feature or subtype id this rule emits.
    pub id: String,
    /// Case-insensitive keyword automaton (absent when the rule declares
    /// no keywords).
    keywords: Option<AhoCorasick>,
    /// Case-insensitive regex patterns.
    patterns: Vec<Regex>,
    /// RegexSet fast path over `patterns` (built when there is more than
    /// one pattern).
    pattern_set: Option<RegexSet>,
}

impl CompiledRule {
    fn compile(id: &str, keywords: &[String], patterns: &[String]) -> Result<Self, PackError> {
        let keyword_ac = if keywords.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(keywords)
                    .map_err(|e| PackError::InvalidPattern {
                        rule: id.to_string(),
                        pattern: keywords.join(", "),
                        message: e.to_string(),
                    })?,
            )
        };

        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| PackError::InvalidPattern {
                    rule: id.to_string(),
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            compiled.push(re);
        }
        let pattern_set = if patterns.len() > 1 {
            RegexSetBuilder::new(patterns)
                .case_insensitive(true)
                .build()
                .ok()
        } else {
            None
        };

        Ok(Self {
            id: id.to_string(),
            keywords: keyword_ac,
            patterns: compiled,
            pattern_set,
        })
    }

    /// True if any keyword or pattern matches the text.
    pub fn matches(&self, text: &str) -> bool {
        if let Some(ref ac) = self.keywords {
            if ac.is_match(text) {
                return true;
            }
        }
        if let Some(ref set) = self.pattern_set {
            return set.is_match(text);
        }
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// A rule pack compiled for matching.
#[derive(Debug, Clone)]
pub struct CompiledRulePack {
    pub building: BuildingCategory,
    pub version: Option<String>,
    /// Feature rules in pack order.
    pub feature_rules: Vec<CompiledRule>,
    /// Subtype rules in declared priority order — first match wins.
    pub subtype_rules: Vec<CompiledRule>,
    /// Total keywords + regex patterns compiled across all rules.
    pub pattern_count: usize,
    /// Rules dropped for declaring no keywords and no patterns.
    pub rules_skipped: usize,
}

/// Parse and compile a rule pack from a TOML string.
pub fn load_from_str(toml_str: &str) -> Result<CompiledRulePack, PackError> {
    let spec: RulePackSpec = toml::from_str(toml_str).map_err(|e| PackError::Parse {
        message: e.to_string(),
    })?;
    compile(spec)
}

/// Parse and compile a rule pack from a TOML file.
pub fn load_from_file(path: &Path) -> Result<CompiledRulePack, PackError> {
    let toml_str = std::fs::read_to_string(path).map_err(|e| PackError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_from_str(&toml_str)
}

fn compile(spec: RulePackSpec) -> Result<CompiledRulePack, PackError> {
    let building = BuildingCategory::parse(&spec.pack.building).ok_or_else(|| {
        PackError::UnknownBuilding {
            key: spec.pack.building.clone(),
        }
    })?;

    let mut pattern_count = 0;
    let mut rules_skipped = 0;

    let mut feature_rules = Vec::with_capacity(spec.feature_rules.len());
    for rule in &spec.feature_rules {
        if rule.keywords.is_empty() && rule.patterns.is_empty() {
            tracing::warn!(
                pack = %spec.pack.building,
                rule = %rule.feature,
                "dropping rule with no keywords or patterns"
            );
            rules_skipped += 1;
            continue;
        }
        pattern_count += rule.keywords.len() + rule.patterns.len();
        feature_rules.push(CompiledRule::compile(&rule.feature, &rule.keywords, &rule.patterns)?);
    }

    let mut subtype_rules = Vec::with_capacity(spec.subtype_rules.len());
    for rule in &spec.subtype_rules {
        if rule.keywords.is_empty() && rule.patterns.is_empty() {
            tracing::warn!(
                pack = %spec.pack.building,
                rule = %rule.subtype,
                "dropping rule with no keywords or patterns"
            );
            rules_skipped += 1;
            continue;
        }
        pattern_count += rule.keywords.len() + rule.patterns.len();
        subtype_rules.push(CompiledRule::compile(&rule.subtype, &rule.keywords, &rule.patterns)?);
    }

    Ok(CompiledRulePack {
        building,
        version: spec.pack.version,
        feature_rules,
        subtype_rules,
        pattern_count,
        rules_skipped,
    })
}
