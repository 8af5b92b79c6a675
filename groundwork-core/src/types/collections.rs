//! Collection type aliases shared across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
