//! Per-tab content screens.
//!
//! One module per tab; each exposes a `render(frame, area, data, ctx)`
//! function that composes the shared widgets for that tab.

pub mod behavior;
pub mod distribution;
pub mod market;
pub mod popular;
