//! Construction schedule normalization and provenance labeling.

use groundwork_core::BuildingCategory;
use serde::{Deserialize, Serialize};

/// Provenance of a construction schedule.
///
/// The UI must surface this flag verbatim: "Subtype schedule" when the
/// timeline came from a subtype profile, "Building-type baseline" when
/// it fell back to the generic building-type curve. The exact strings
/// are a truth-in-labeling contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSource {
    Subtype,
    BuildingType,
}

impl ScheduleSource {
    /// Verbatim UI label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subtype => "Subtype schedule",
            Self::BuildingType => "Building-type baseline",
        }
    }

    /// Parse the wire value; unknown values yield `None` so the caller
    /// can fail soft to the building-type baseline.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "subtype" => Some(Self::Subtype),
            "building_type" => Some(Self::BuildingType),
            _ => None,
        }
    }
}

/// Normalized construction schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub building_type: Option<BuildingCategory>,
    pub subtype: Option<String>,
    pub source: ScheduleSource,
    /// Reported total, or the extent of the phases when unreported.
    pub total_months: f64,
    pub phases: Vec<SchedulePhase>,
}

/// One normalized schedule phase.
#[derive(Debug, Clone)]
pub struct SchedulePhase {
    pub id: String,
    pub label: String,
    pub start_month: f64,
    pub duration_months: f64,
}
