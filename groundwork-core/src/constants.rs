//! Compiled-in constants shared across the workspace.

/// Assumed trade split applied when the backend omits a trade breakdown,
/// as a fraction of the construction total per trade.
///
/// Presentation-layer convenience only — never business truth. The
/// fractions must sum to 1.0.
pub const DEFAULT_TRADE_SPLIT: [(&str, f64); 5] = [
    ("structural", 0.22),
    ("mechanical", 0.25),
    ("electrical", 0.15),
    ("plumbing", 0.12),
    ("finishes", 0.26),
];
