//! Plan configuration caching for the Vendiva platform.
//!
//! Memoizes the slow-changing global settings and phase-level rows behind a
//! shared TTL, and derives per-phase values (commission, group gain, reward
//! credits, display names, currency mapping) with explicit fallback chains.

pub mod cache;

mod prelude;

pub use cache::{DEFAULT_LEVEL_CAPACITY, NowFn, PlanService, SETTINGS_CACHE_TTL_SECS};

// vim: ts=4
