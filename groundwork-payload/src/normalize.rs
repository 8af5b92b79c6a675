//! Boundary normalization — loose wire payload → strict estimate view.
//!
//! Only malformed payloads are errors. Missing fields inside a
//! well-formed payload become fallback defaults or `None`, never errors,
//! and missing costs stay `None` — callers must not substitute zero.

use std::collections::BTreeMap;

use groundwork_core::constants::DEFAULT_TRADE_SPLIT;
use groundwork_core::errors::PayloadError;
use groundwork_core::BuildingCategory;
use serde_json::Value;

use super::schedule::{Schedule, SchedulePhase, ScheduleSource};
use super::types::{
    Calculations, ConstructionCostsRaw, CostBuildUpLineRaw, DealShieldScenariosRaw,
    EstimatePayload, ScopeItemRaw, TradeBreakdownRaw,
};

/// Fully normalized estimate, ready for rendering.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub costs: ConstructionCosts,
    pub trades: TradeBreakdown,
    pub schedule: Option<Schedule>,
    pub scenarios: Option<DealShieldScenarios>,
    pub scope_items: Vec<ScopeItem>,
}

/// Strict construction-cost view. Absent costs stay `None`.
#[derive(Debug, Clone, Default)]
pub struct ConstructionCosts {
    pub base_cost_per_sf: Option<f64>,
    pub regional_multiplier: Option<f64>,
    pub class_multiplier: Option<f64>,
    pub final_cost_per_sf: Option<f64>,
    pub construction_total: Option<f64>,
    pub equipment_total: Option<f64>,
    pub special_features_total: Option<f64>,
    pub special_features: Vec<SpecialFeatureLine>,
    pub cost_build_up: Vec<CostBuildUpLine>,
}

/// One normalized special-feature cost line.
#[derive(Debug, Clone)]
pub struct SpecialFeatureLine {
    pub id: String,
    pub label: String,
    pub cost_per_sf: Option<f64>,
    pub total_cost: Option<f64>,
}

/// One normalized cost build-up line.
#[derive(Debug, Clone, PartialEq)]
pub enum CostBuildUpLine {
    /// Additive dollars per square foot.
    PerSf { label: String, value: f64 },
    /// Multiplicative adjustment.
    Multiplier { label: String, value: f64 },
}

/// Where the normalized trade split came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSource {
    /// The backend reported a breakdown.
    Reported,
    /// The backend omitted it; the assumed default split was applied.
    Assumed,
}

/// Normalized trade breakdown.
#[derive(Debug, Clone)]
pub struct TradeBreakdown {
    pub source: TradeSource,
    pub trades: Vec<TradeShare>,
}

/// One trade's share of the construction total.
#[derive(Debug, Clone)]
pub struct TradeShare {
    pub name: String,
    pub amount: Option<f64>,
    /// Share of the construction total, as a fraction (0..1).
    pub percent_of_construction: Option<f64>,
}

/// Normalized DealShield scenario set.
#[derive(Debug, Clone)]
pub struct DealShieldScenarios {
    pub profile_id: Option<String>,
    pub scenarios: BTreeMap<String, Scenario>,
    pub provenance: Provenance,
}

/// One normalized scenario outcome. Analysis blobs stay opaque JSON —
/// they are backend-owned and rendered as-is.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub totals: BTreeMap<String, f64>,
    pub revenue_analysis: Option<Value>,
    pub ownership_analysis: Option<Value>,
    pub return_metrics: Option<Value>,
}

/// Normalized scenario provenance.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    pub scenario_ids: Vec<String>,
    pub scenario_inputs: Option<Value>,
}

/// One normalized scope item.
#[derive(Debug, Clone)]
pub struct ScopeItem {
    pub trade: String,
    pub systems: Vec<ScopeSystem>,
}

/// One normalized costed system.
#[derive(Debug, Clone)]
pub struct ScopeSystem {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub unit_cost: Option<f64>,
    pub total_cost: Option<f64>,
}

/// Parse and normalize an estimate payload from raw JSON.
pub fn from_json(json: &str) -> Result<Estimate, PayloadError> {
    let payload: EstimatePayload = serde_json::from_str(json).map_err(|e| PayloadError::Json {
        message: e.to_string(),
    })?;
    normalize(&payload)
}

/// Normalize a parsed payload into the strict estimate view.
pub fn normalize(payload: &EstimatePayload) -> Result<Estimate, PayloadError> {
    let calc = payload
        .calculations
        .as_ref()
        .ok_or(PayloadError::MissingCalculations)?;

    let costs = calc
        .construction_costs
        .as_ref()
        .map(normalize_costs)
        .unwrap_or_default();
    let trades = normalize_trades(calc, costs.construction_total);
    let schedule = calc.construction_schedule.as_ref().map(normalize_schedule);
    let scenarios = calc.dealshield_scenarios.as_ref().map(normalize_scenarios);
    let scope_items = normalize_scope_items(&calc.scope_items);

    Ok(Estimate {
        costs,
        trades,
        schedule,
        scenarios,
        scope_items,
    })
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn normalize_costs(raw: &ConstructionCostsRaw) -> ConstructionCosts {
    let special_features = raw
        .special_features_breakdown
        .iter()
        .map(|line| SpecialFeatureLine {
            id: line
                .id
                .clone()
                .or_else(|| line.label.clone())
                .unwrap_or_default(),
            label: line
                .label
                .clone()
                .or_else(|| line.id.clone())
                .unwrap_or_default(),
            cost_per_sf: finite(line.cost_per_sf),
            total_cost: finite(line.total_cost),
        })
        .collect();

    ConstructionCosts {
        base_cost_per_sf: finite(raw.base_cost_per_sf),
        regional_multiplier: finite(raw.regional_multiplier),
        class_multiplier: finite(raw.class_multiplier),
        final_cost_per_sf: finite(raw.final_cost_per_sf),
        construction_total: finite(raw.construction_total),
        equipment_total: finite(raw.equipment_total),
        special_features_total: finite(raw.special_features_total),
        special_features,
        cost_build_up: normalize_build_up(&raw.cost_build_up),
    }
}

fn normalize_build_up(lines: &[CostBuildUpLineRaw]) -> Vec<CostBuildUpLine> {
    lines
        .iter()
        .filter_map(|line| {
            let label = line.label.clone()?;
            if let Some(value) = finite(line.value_per_sf) {
                Some(CostBuildUpLine::PerSf { label, value })
            } else {
                finite(line.multiplier).map(|value| CostBuildUpLine::Multiplier { label, value })
            }
        })
        .collect()
}

fn normalize_trades(calc: &Calculations, construction_total: Option<f64>) -> TradeBreakdown {
    match &calc.trade_breakdown {
        Some(TradeBreakdownRaw::Lines(lines)) => TradeBreakdown {
            source: TradeSource::Reported,
            trades: lines
                .iter()
                .map(|line| TradeShare {
                    name: line.name.clone().unwrap_or_else(|| "unknown".to_string()),
                    amount: finite(line.amount),
                    percent_of_construction: finite(line.percent_of_construction),
                })
                .collect(),
        },
        Some(TradeBreakdownRaw::Map(map)) => TradeBreakdown {
            source: TradeSource::Reported,
            trades: map
                .iter()
                .map(|(name, &amount)| TradeShare {
                    name: name.clone(),
                    amount: finite(Some(amount)),
                    percent_of_construction: construction_total
                        .filter(|total| *total > 0.0)
                        .map(|total| amount / total),
                })
                .collect(),
        },
        // No breakdown reported: apply the assumed split and say so.
        None => TradeBreakdown {
            source: TradeSource::Assumed,
            trades: DEFAULT_TRADE_SPLIT
                .iter()
                .map(|&(name, pct)| TradeShare {
                    name: name.to_string(),
                    amount: construction_total.map(|total| total * pct),
                    percent_of_construction: Some(pct),
                })
                .collect(),
        },
    }
}

fn normalize_schedule(raw: &super::types::ConstructionScheduleRaw) -> Schedule {
    let phases: Vec<SchedulePhase> = raw
        .phases
        .iter()
        .map(|phase| SchedulePhase {
            id: phase
                .id
                .clone()
                .or_else(|| phase.label.clone())
                .unwrap_or_default(),
            label: phase
                .label
                .clone()
                .or_else(|| phase.id.clone())
                .unwrap_or_default(),
            start_month: finite(phase.start_month).unwrap_or(0.0),
            duration_months: finite(phase.duration_months).unwrap_or(0.0),
        })
        .collect();

    let total_months = finite(raw.total_months).unwrap_or_else(|| {
        phases
            .iter()
            .map(|p| p.start_month + p.duration_months)
            .fold(0.0, f64::max)
    });

    Schedule {
        building_type: raw.building_type.as_deref().and_then(BuildingCategory::parse),
        subtype: raw.subtype.clone(),
        source: raw
            .schedule_source
            .as_deref()
            .and_then(ScheduleSource::parse)
            .unwrap_or(ScheduleSource::BuildingType),
        total_months,
        phases,
    }
}

fn normalize_scenarios(raw: &DealShieldScenariosRaw) -> DealShieldScenarios {
    let scenarios = raw
        .scenarios
        .iter()
        .map(|(key, sc)| {
            (
                key.clone(),
                Scenario {
                    totals: sc.totals.clone().unwrap_or_default(),
                    revenue_analysis: sc.revenue_analysis.clone(),
                    ownership_analysis: sc.ownership_analysis.clone(),
                    return_metrics: sc.return_metrics.clone(),
                },
            )
        })
        .collect();

    let provenance = raw
        .provenance
        .as_ref()
        .map(|p| Provenance {
            scenario_ids: p.scenario_ids.clone(),
            scenario_inputs: p.scenario_inputs.clone(),
        })
        .unwrap_or_default();

    DealShieldScenarios {
        profile_id: raw.profile_id.clone(),
        scenarios,
        provenance,
    }
}

fn normalize_scope_items(raw: &[ScopeItemRaw]) -> Vec<ScopeItem> {
    raw.iter()
        .map(|item| ScopeItem {
            trade: item.trade.clone().unwrap_or_else(|| "general".to_string()),
            systems: item
                .systems
                .iter()
                .map(|sys| ScopeSystem {
                    name: sys.name.clone().unwrap_or_default(),
                    quantity: finite(sys.quantity),
                    unit: sys.unit.clone(),
                    unit_cost: finite(sys.unit_cost),
                    total_cost: finite(sys.total_cost),
                })
                .collect(),
        })
        .collect()
}
