//! TTL cache over the plan configuration rows.
//!
//! Global app settings and phase levels change rarely but are read on nearly
//! every commerce request, so both are memoized behind one shared timestamp:
//! refreshing either entity resets the clock for both, keeping the two
//! loosely synchronized. A cache miss blocks the caller on one synchronous
//! store read; there is no background refresh and no stale-but-serving
//! state. Concurrent refreshes racing to repopulate the same value are
//! harmless, they all write the same externally-sourced snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use vendiva_types::plan::{AppSettings, PhaseLevel};
use vendiva_types::store_adapter::StoreAdapter;
use vendiva_types::text::Locale;

use crate::prelude::*;

/// How long a cached snapshot stays fresh
pub const SETTINGS_CACHE_TTL_SECS: i64 = 5 * 60; // 5 minutes

/// Tree capacity for levels without a configured capacity record
pub const DEFAULT_LEVEL_CAPACITY: u32 = 3;

// Historical phase-1 defaults, kept as observed in production data while the
// asymmetry (phase 1 special-cased, every other phase zero) awaits product
// confirmation. Do not generalize to other phases.
const LEGACY_PHASE1_REWARD_CREDIT_CENTS: i64 = 2500;
const LEGACY_PHASE1_FREE_PRODUCT_CENTS: i64 = 6500;

/// Injectable clock, lets tests drive TTL expiry deterministically
pub type NowFn = Arc<dyn Fn() -> Timestamp + Send + Sync>;

#[derive(Debug, Default)]
struct PlanCacheState {
	app_settings: Option<Arc<AppSettings>>,
	phase_levels: Option<Arc<[PhaseLevel]>>,
	refreshed_at: Timestamp,
}

/// Cached view over the plan configuration with derived accessors
///
/// Caching here is advisory, never a correctness requirement: a miss always
/// falls through to the store, and errors from the store propagate to the
/// caller instead of serving stale data.
pub struct PlanService {
	store: Arc<dyn StoreAdapter>,
	ttl_secs: i64,
	now: NowFn,
	state: parking_lot::RwLock<PlanCacheState>,
}

impl PlanService {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self::with_clock(store, SETTINGS_CACHE_TTL_SECS, Arc::new(Timestamp::now))
	}

	/// Service with an explicit TTL and clock
	pub fn with_clock(store: Arc<dyn StoreAdapter>, ttl_secs: i64, now: NowFn) -> Self {
		Self { store, ttl_secs, now, state: parking_lot::RwLock::new(PlanCacheState::default()) }
	}

	fn is_fresh(&self, refreshed_at: Timestamp) -> bool {
		(self.now)().0 - refreshed_at.0 < self.ttl_secs
	}

	/// Cached global settings; refreshes from the store when the snapshot is
	/// absent or has outlived the TTL
	pub async fn get_app_settings(&self) -> VdResult<Arc<AppSettings>> {
		{
			let state = self.state.read();
			if let Some(settings) = &state.app_settings {
				if self.is_fresh(state.refreshed_at) {
					return Ok(settings.clone());
				}
			}
		}

		let settings = Arc::new(self.store.read_app_settings().await?);
		let mut state = self.state.write();
		state.app_settings = Some(settings.clone());
		state.refreshed_at = (self.now)();
		debug!("App settings cache refreshed");
		Ok(settings)
	}

	/// Cached phase levels; same refresh rule as [`Self::get_app_settings`]
	pub async fn get_phase_levels(&self) -> VdResult<Arc<[PhaseLevel]>> {
		{
			let state = self.state.read();
			if let Some(levels) = &state.phase_levels {
				if self.is_fresh(state.refreshed_at) {
					return Ok(levels.clone());
				}
			}
		}

		let levels: Arc<[PhaseLevel]> = self.store.list_phase_levels().await?.into();
		let mut state = self.state.write();
		state.phase_levels = Some(levels.clone());
		state.refreshed_at = (self.now)();
		debug!("Phase level cache refreshed ({} levels)", levels.len());
		Ok(levels)
	}

	/// Drops both cached entities so the next access refreshes. Must be
	/// called by any code path that mutates the underlying rows.
	pub fn invalidate(&self) {
		let mut state = self.state.write();
		state.app_settings = None;
		state.phase_levels = None;
		state.refreshed_at = Timestamp::default();
		debug!("Plan settings cache invalidated");
	}

	// Derived accessors //
	//*******************//

	/// Commission rate for a phase; phases without a configured rate fall
	/// back to the global e-commerce rate
	pub async fn commission_rate(&self, level: u32) -> VdResult<f64> {
		let levels = self.get_phase_levels().await?;
		if let Some(rate) = find_level(&levels, level).and_then(|row| row.commission_rate) {
			return Ok(rate);
		}
		Ok(self.get_app_settings().await?.ecommerce_commission_rate)
	}

	/// "Group gain" rate for a phase. Absence means zero; there is no global
	/// fallback for this one.
	pub async fn group_gain_rate(&self, level: u32) -> VdResult<f64> {
		let levels = self.get_phase_levels().await?;
		Ok(find_level(&levels, level).and_then(|row| row.group_gain_rate).unwrap_or(0.0))
	}

	/// Flat reward credit for a phase; un-configured phases pay nothing
	/// except phase 1, which keeps its historical constant
	pub async fn reward_credit_cents(&self, level: u32) -> VdResult<i64> {
		let levels = self.get_phase_levels().await?;
		Ok(find_level(&levels, level)
			.and_then(|row| row.reward_credit_cents)
			.unwrap_or(if level == 1 { LEGACY_PHASE1_REWARD_CREDIT_CENTS } else { 0 }))
	}

	/// Free-product value for a phase; same phase-1 asymmetry as
	/// [`Self::reward_credit_cents`]
	pub async fn free_product_value_cents(&self, level: u32) -> VdResult<i64> {
		let levels = self.get_phase_levels().await?;
		Ok(find_level(&levels, level)
			.and_then(|row| row.free_product_value_cents)
			.unwrap_or(if level == 1 { LEGACY_PHASE1_FREE_PRODUCT_CENTS } else { 0 }))
	}

	/// Localized display name for a phase, independent of the numeric
	/// fallbacks: configured name (locale, then en), else `"Phase {level}"`
	pub async fn phase_display_name(&self, level: u32, locale: Locale) -> VdResult<String> {
		let levels = self.get_phase_levels().await?;
		let name = find_level(&levels, level)
			.and_then(|row| row.name.as_ref())
			.and_then(|name| name.resolve(locale))
			.map(str::to_string);
		Ok(name.unwrap_or_else(|| format!("Phase {level}")))
	}

	/// Currency for a country code, looked up in the flattened
	/// country-to-currency map; unmapped countries use the default currency
	pub async fn currency_for_country(&self, country: &str) -> VdResult<Box<str>> {
		let settings = self.get_app_settings().await?;
		let country = country.trim().to_ascii_uppercase();
		let map = country_currency_map(&settings);
		Ok(map.get(country.as_str()).cloned().unwrap_or_else(|| settings.default_currency.clone()))
	}

	/// Maximum direct members under a node at the given tree level
	pub async fn max_members_for_level(&self, level: u32) -> VdResult<u32> {
		let settings = self.get_app_settings().await?;
		Ok(settings
			.level_capacities
			.iter()
			.find(|cap| cap.level == level)
			.map_or(DEFAULT_LEVEL_CAPACITY, |cap| cap.max_members))
	}
}

fn find_level(levels: &[PhaseLevel], level: u32) -> Option<&PhaseLevel> {
	levels.iter().find(|row| row.level == level)
}

/// Flattens the configured currencies into one country-to-code map,
/// upper-cased; the first currency claiming a country wins
fn country_currency_map(settings: &AppSettings) -> HashMap<String, Box<str>> {
	let mut map = HashMap::new();
	for currency in &settings.currencies {
		for country in currency.countries.iter() {
			map.entry(country.trim().to_ascii_uppercase())
				.or_insert_with(|| currency.code.clone());
		}
	}
	map
}


// vim: ts=4
