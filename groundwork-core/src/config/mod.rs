//! Configuration types.

pub mod pack_filter;

pub use pack_filter::PackFilter;
