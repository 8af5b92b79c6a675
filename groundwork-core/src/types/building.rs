//! Building taxonomy — categories and their declared subtype enumerations.
//!
//! A building category selects which cost pack and detection rule pack
//! apply. Subtype lists are declared in a fixed order; catalog
//! `allowed_subtypes` lists preserve that order, so it is part of the
//! public contract, not an implementation detail.

use serde::{Deserialize, Serialize};

/// Top-level project category (e.g. healthcare, retail, office).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingCategory {
    Restaurant,
    Hospitality,
    Retail,
    Office,
    Educational,
    Civic,
    Specialty,
    Healthcare,
}

impl BuildingCategory {
    /// Every category, in declared order.
    pub const ALL: [BuildingCategory; 8] = [
        BuildingCategory::Restaurant,
        BuildingCategory::Hospitality,
        BuildingCategory::Retail,
        BuildingCategory::Office,
        BuildingCategory::Educational,
        BuildingCategory::Civic,
        BuildingCategory::Specialty,
        BuildingCategory::Healthcare,
    ];

    /// Stable machine key, used in pack files and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Hospitality => "hospitality",
            Self::Retail => "retail",
            Self::Office => "office",
            Self::Educational => "educational",
            Self::Civic => "civic",
            Self::Specialty => "specialty",
            Self::Healthcare => "healthcare",
        }
    }

    /// Lenient parse of a machine key. Unknown keys yield `None` so
    /// boundary callers fail soft on unexpected payload data.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "restaurant" => Some(Self::Restaurant),
            "hospitality" => Some(Self::Hospitality),
            "retail" => Some(Self::Retail),
            "office" => Some(Self::Office),
            "educational" => Some(Self::Educational),
            "civic" => Some(Self::Civic),
            "specialty" => Some(Self::Specialty),
            "healthcare" => Some(Self::Healthcare),
            _ => None,
        }
    }

    /// Declared subtype enumeration, in declared order.
    pub fn subtypes(&self) -> &'static [&'static str] {
        match self {
            Self::Restaurant => &["quick_service", "fast_casual", "casual_dining", "fine_dining"],
            Self::Hospitality => &[
                "limited_service_hotel",
                "select_service_hotel",
                "full_service_hotel",
                "resort",
            ],
            Self::Retail => &["strip_center", "big_box", "grocery", "standalone_retail"],
            Self::Office => &["class_a", "class_b", "medical_office", "flex_office"],
            Self::Educational => &[
                "elementary_school",
                "middle_school",
                "high_school",
                "community_college",
                "university",
            ],
            Self::Civic => &[
                "library",
                "courthouse",
                "city_hall",
                "community_center",
                "fire_station",
            ],
            Self::Specialty => &["self_storage", "car_wash", "fitness_center", "data_center"],
            Self::Healthcare => &["hospital", "outpatient_clinic", "urgent_care", "imaging_center"],
        }
    }

    /// Whether `subtype` is one of this category's declared subtypes.
    pub fn is_declared_subtype(&self, subtype: &str) -> bool {
        self.subtypes().contains(&subtype)
    }
}

impl std::fmt::Display for BuildingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
