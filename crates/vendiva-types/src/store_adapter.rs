//! Adapter boundary for the row store backing the admin console.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::plan::{AppSettings, PhaseLevel};
use crate::prelude::*;
use crate::site_mode::SiteModeRow;

/// A Vendiva store adapter
///
/// Implementations wrap the row store that owns the site-mode, app-settings
/// and phase-level tables. Timeout and retry policy belongs to the adapter;
/// callers treat every method as one opaque async call.
#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// Reads every persisted site-mode row (zero or more, possibly partial)
	async fn list_site_modes(&self) -> VdResult<Vec<SiteModeRow>>;

	/// Upserts the given rows in one batch, keyed by mode, and returns them
	/// as written (including the store-assigned `updated_at`). A failed call
	/// commits nothing.
	async fn upsert_site_modes(&self, rows: &[SiteModeRow]) -> VdResult<Vec<SiteModeRow>>;

	/// Reads the singleton app-settings row
	async fn read_app_settings(&self) -> VdResult<AppSettings>;

	/// Reads every phase-level row
	async fn list_phase_levels(&self) -> VdResult<Vec<PhaseLevel>>;
}

// vim: ts=4
