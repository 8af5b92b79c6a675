//! Raw wire types for the backend estimate payload.
//!
//! These types accept the wire's looseness verbatim: every field is
//! optional, and fields that have shipped in more than one shape are
//! untagged unions. `normalize` turns this into the strict view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level estimate payload returned by the pricing engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatePayload {
    pub calculations: Option<Calculations>,
    /// Echo of the parsed intake input; backend-owned, passed through.
    pub parsed_input: Option<Value>,
}

/// The calculations block of an estimate payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Calculations {
    pub construction_costs: Option<ConstructionCostsRaw>,
    pub trade_breakdown: Option<TradeBreakdownRaw>,
    pub construction_schedule: Option<ConstructionScheduleRaw>,
    pub dealshield_scenarios: Option<DealShieldScenariosRaw>,
    pub scope_items: Vec<ScopeItemRaw>,
}

/// Construction cost block as sent by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionCostsRaw {
    pub base_cost_per_sf: Option<f64>,
    pub regional_multiplier: Option<f64>,
    pub class_multiplier: Option<f64>,
    pub final_cost_per_sf: Option<f64>,
    pub construction_total: Option<f64>,
    pub equipment_total: Option<f64>,
    pub special_features_total: Option<f64>,
    pub special_features_breakdown: Vec<SpecialFeatureLineRaw>,
    pub cost_build_up: Vec<CostBuildUpLineRaw>,
}

/// One special-feature line in the cost breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialFeatureLineRaw {
    pub id: Option<String>,
    pub label: Option<String>,
    pub cost_per_sf: Option<f64>,
    pub total_cost: Option<f64>,
}

/// One cost build-up line: either an additive per-SF value or a
/// multiplier; the backend sets exactly one of the two fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostBuildUpLineRaw {
    pub label: Option<String>,
    pub value_per_sf: Option<f64>,
    pub multiplier: Option<f64>,
}

/// The trade breakdown has shipped as both an object keyed by trade and
/// an array of named lines; accept both shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TradeBreakdownRaw {
    Lines(Vec<TradeLineRaw>),
    Map(BTreeMap<String, f64>),
}

/// One trade line in the array shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeLineRaw {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub percent_of_construction: Option<f64>,
}

/// Construction schedule block as sent by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionScheduleRaw {
    pub building_type: Option<String>,
    pub subtype: Option<String>,
    /// "subtype" or "building_type".
    pub schedule_source: Option<String>,
    pub total_months: Option<f64>,
    pub phases: Vec<SchedulePhaseRaw>,
}

/// One schedule phase as sent by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulePhaseRaw {
    pub id: Option<String>,
    pub label: Option<String>,
    pub start_month: Option<f64>,
    pub duration_months: Option<f64>,
}

/// DealShield scenario block as sent by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DealShieldScenariosRaw {
    pub profile_id: Option<String>,
    pub scenarios: BTreeMap<String, ScenarioRaw>,
    pub provenance: Option<ProvenanceRaw>,
}

/// One scenario outcome. The analysis blobs are backend-owned and stay
/// opaque JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioRaw {
    pub totals: Option<BTreeMap<String, f64>>,
    pub revenue_analysis: Option<Value>,
    pub ownership_analysis: Option<Value>,
    pub return_metrics: Option<Value>,
}

/// Scenario provenance as sent by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceRaw {
    pub scenario_ids: Vec<String>,
    pub scenario_inputs: Option<Value>,
}

/// One scope item (a trade bucket and its systems).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeItemRaw {
    pub trade: Option<String>,
    pub systems: Vec<ScopeSystemRaw>,
}

/// One costed system within a scope item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSystemRaw {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub unit_cost: Option<f64>,
    pub total_cost: Option<f64>,
}
