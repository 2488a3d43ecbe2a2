//! Site-mode configuration for the Vendiva admin console.
//!
//! Resolves partial persisted per-mode rows into one complete, internally
//! consistent configuration (exactly one active mode, normalized fields,
//! compiled-in defaults), and turns partial admin updates back into
//! normalized rows.

pub mod resolver;
pub mod schema;
pub mod types;

mod prelude;

pub use resolver::SiteModeService;
pub use types::{SiteModeConfiguration, SiteModeSettings, UpdateSiteModeConfiguration};

// vim: ts=4
