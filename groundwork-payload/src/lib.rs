//! Backend estimate payload — loose wire types and boundary normalization.
//!
//! The pricing engine's JSON contract is loosely typed and evolves;
//! fields go missing and some have shipped in more than one shape. This
//! crate accepts that looseness exactly once, at the boundary, and hands
//! rendering layers a strict view. Missing costs stay `None` — callers
//! must not substitute zero.
//!
//! Architecture:
//! - `types.rs` — raw serde wire types (multi-shape unions, Option-heavy)
//! - `schedule.rs` — schedule provenance and normalized schedule types
//! - `normalize.rs` — the single normalization step

pub mod normalize;
pub mod schedule;
pub mod types;

pub use normalize::{
    from_json, normalize, ConstructionCosts, CostBuildUpLine, DealShieldScenarios, Estimate,
    Provenance, Scenario, ScopeItem, ScopeSystem, SpecialFeatureLine, TradeBreakdown, TradeShare,
    TradeSource,
};
pub use schedule::{Schedule, SchedulePhase, ScheduleSource};
pub use types::EstimatePayload;
