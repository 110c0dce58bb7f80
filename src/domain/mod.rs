//! Domain modules organized as vertical slices.
//!
//! - `rate` — wire types, validation, conversion and the rate sub-client
//! - `chart` — axis domain and per-locale chart projection

pub mod chart;
pub mod rate;
