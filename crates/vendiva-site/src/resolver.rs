//! Site-mode configuration resolution.
//!
//! The resolver turns whatever rows happen to be persisted (none, partial,
//! or stale) into one complete `SiteModeConfiguration`, and turns partial
//! update payloads back into normalized rows. Merging always runs submitted
//! or stored values over the compiled-in defaults, field by field; lists are
//! replaced wholesale, never element-merged. The stored `is_active` flags
//! are only an input: the resolved active mode is recomputed on every read
//! and stamped onto the entries, so the view is the single source of truth.

use std::sync::Arc;

use vendiva_types::site_mode::{
	BackgroundMode, BrandingSettings, ComingSoonSettings, CountdownSettings, CountdownStyle,
	DEFAULT_OVERLAY_OPACITY, SiteMode, SiteModeRow,
};
use vendiva_types::store_adapter::StoreAdapter;
use vendiva_types::text::TextValue;

use crate::prelude::*;
use crate::schema::{
	clamp_countdown, clamp_opacity, default_settings_for, normalize_gradient, normalize_opt_str,
	normalize_server_prefix, normalize_social_links, sanitize_coming_soon, sanitize_social_links,
};
use crate::types::{
	ComingSoonPatch, SiteModeAppearance, SiteModeConfiguration, SiteModePatch, SiteModeSeo,
	SiteModeSettings, UpdateSiteModeConfiguration,
};

// SiteModeService //
//*****************//

/// Resolver over the persisted site-mode rows
#[derive(Clone, Debug)]
pub struct SiteModeService {
	store: Arc<dyn StoreAdapter>,
}

impl SiteModeService {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self { store }
	}

	/// Resolves the complete configuration from whatever rows are persisted.
	/// On store failure the error propagates; callers that must never block
	/// the admin UI fall back to [`SiteModeConfiguration::default_configuration`].
	pub async fn get_configuration(&self) -> VdResult<SiteModeConfiguration> {
		let rows = self.store.list_site_modes().await?;
		debug!("Resolved site mode configuration from {} stored rows", rows.len());
		Ok(resolve_configuration(&rows))
	}

	/// The currently active mode, without building the full configuration
	pub async fn active_mode(&self) -> VdResult<SiteMode> {
		let rows = self.store.list_site_modes().await?;
		Ok(active_mode_of(&rows))
	}

	/// Validates and applies a partial update: each persistable mode's patch
	/// is merged over that mode's defaults, normalized, and written as one
	/// row, all rows in a single batched upsert. Returns the configuration
	/// resolved from the rows that were actually written.
	pub async fn update_configuration(
		&self,
		input: &UpdateSiteModeConfiguration,
	) -> VdResult<SiteModeConfiguration> {
		validate_update(input)?;
		let rows: Vec<SiteModeRow> = SiteMode::PERSISTABLE
			.iter()
			.map(|&mode| {
				let patch = input.modes.iter().find(|patch| patch.mode == mode);
				let mut settings = apply_patch(mode, patch);
				settings.is_active = mode == input.active_mode;
				settings.to_row()
			})
			.collect();
		let written = self.store.upsert_site_modes(&rows).await?;
		info!("Site mode configuration updated, active mode: {}", input.active_mode);
		Ok(resolve_configuration(&written))
	}

	/// Clears every mode's active flag while keeping its settings, returning
	/// the site to normal operation. Equivalent to an update with
	/// `active_mode = none`.
	pub async fn deactivate(&self, mode: SiteMode) -> VdResult<SiteModeConfiguration> {
		let rows = self.store.list_site_modes().await?;
		let cleared: Vec<SiteModeRow> = SiteMode::PERSISTABLE
			.iter()
			.map(|&m| {
				let row = rows.iter().find(|row| row.mode == m);
				let mut settings = merge_row(m, row);
				settings.is_active = false;
				settings.to_row()
			})
			.collect();
		let written = self.store.upsert_site_modes(&cleared).await?;
		info!("Site mode deactivated: {}", mode);
		Ok(resolve_configuration(&written))
	}
}

// Resolution //
//************//

/// The active mode according to the stored flags: the first persistable mode
/// in stable order with a truthy flag, else `none`
fn active_mode_of(rows: &[SiteModeRow]) -> SiteMode {
	SiteMode::PERSISTABLE
		.into_iter()
		.find(|&mode| rows.iter().any(|row| row.mode == mode && row.is_active))
		.unwrap_or(SiteMode::None)
}

fn resolve_configuration(rows: &[SiteModeRow]) -> SiteModeConfiguration {
	let active_mode = active_mode_of(rows);
	let modes = SiteMode::ALL
		.iter()
		.map(|&mode| {
			// Stray rows for the synthetic none mode carry no content
			let row = if mode.is_persistable() { rows.iter().find(|row| row.mode == mode) } else { None };
			let mut settings = merge_row(mode, row);
			settings.is_active = mode == active_mode;
			settings
		})
		.collect();
	SiteModeConfiguration { active_mode, modes }
}

fn merge_required_text(value: Option<TextValue>, default: TextValue) -> TextValue {
	value.and_then(TextValue::normalized).unwrap_or(default)
}

fn merge_opt_text(value: Option<TextValue>) -> Option<TextValue> {
	value.and_then(TextValue::normalized)
}

/// Deep-merges a stored row over the mode's defaults. Every field is run
/// through its normalizer so legacy rows read back canonical.
fn merge_row(mode: SiteMode, row: Option<&SiteModeRow>) -> SiteModeSettings {
	let defaults = default_settings_for(mode);
	let Some(row) = row else { return defaults };
	SiteModeSettings {
		mode,
		is_active: row.is_active,
		seo: SiteModeSeo {
			title: merge_required_text(row.seo_title.clone(), defaults.seo.title),
			description: merge_required_text(row.seo_description.clone(), defaults.seo.description),
			keywords: merge_required_text(row.seo_keywords.clone(), defaults.seo.keywords),
			og_title: merge_opt_text(row.og_title.clone()),
			og_description: merge_opt_text(row.og_description.clone()),
			og_image: merge_opt_text(row.og_image.clone()),
			twitter_title: merge_opt_text(row.twitter_title.clone()),
			twitter_description: merge_opt_text(row.twitter_description.clone()),
			twitter_image: merge_opt_text(row.twitter_image.clone()),
		},
		appearance: SiteModeAppearance {
			background_image_url: normalize_opt_str(row.background_image_url.as_deref()),
			background_overlay_opacity: row
				.background_overlay_opacity
				.map_or(DEFAULT_OVERLAY_OPACITY, |v| v.min(100)),
			social_links: row.social_links.clone().map(sanitize_social_links).unwrap_or_default(),
		},
		mailchimp_enabled: row.mailchimp_enabled.unwrap_or(false),
		mailchimp_audience_id: normalize_opt_str(row.mailchimp_audience_id.as_deref()),
		mailchimp_server_prefix: row
			.mailchimp_server_prefix
			.as_deref()
			.and_then(normalize_server_prefix),
		coming_soon: row.coming_soon.clone().map_or(defaults.coming_soon, sanitize_coming_soon),
		updated_at: row.updated_at,
	}
}

/// Deep-merges a submitted patch over the mode's defaults, running every
/// field through its normalizer. `is_active` is left for the caller; the
/// timestamp is left unset, the store assigns it on write.
fn apply_patch(mode: SiteMode, patch: Option<&SiteModePatch>) -> SiteModeSettings {
	let defaults = default_settings_for(mode);
	let Some(patch) = patch else { return defaults };
	let seo = patch.seo.clone().unwrap_or_default();
	let appearance = patch.appearance.clone().unwrap_or_default();
	SiteModeSettings {
		mode,
		is_active: false,
		seo: SiteModeSeo {
			title: merge_required_text(seo.title, defaults.seo.title),
			description: merge_required_text(seo.description, defaults.seo.description),
			keywords: merge_required_text(seo.keywords, defaults.seo.keywords),
			og_title: merge_opt_text(seo.og_title),
			og_description: merge_opt_text(seo.og_description),
			og_image: merge_opt_text(seo.og_image),
			twitter_title: merge_opt_text(seo.twitter_title),
			twitter_description: merge_opt_text(seo.twitter_description),
			twitter_image: merge_opt_text(seo.twitter_image),
		},
		appearance: SiteModeAppearance {
			background_image_url: normalize_opt_str(appearance.background_image_url.as_deref()),
			background_overlay_opacity: appearance
				.background_overlay_opacity
				.map_or(DEFAULT_OVERLAY_OPACITY, clamp_opacity),
			social_links: appearance
				.social_links
				.as_deref()
				.map(normalize_social_links)
				.unwrap_or_default(),
		},
		mailchimp_enabled: patch.mailchimp_enabled.unwrap_or(false),
		mailchimp_audience_id: normalize_opt_str(patch.mailchimp_audience_id.as_deref()),
		mailchimp_server_prefix: patch
			.mailchimp_server_prefix
			.as_deref()
			.and_then(normalize_server_prefix),
		coming_soon: merge_coming_soon(patch.coming_soon.as_ref(), defaults.coming_soon),
		updated_at: None,
	}
}

fn merge_coming_soon(patch: Option<&ComingSoonPatch>, defaults: ComingSoonSettings) -> ComingSoonSettings {
	let Some(patch) = patch else { return defaults };
	let countdown = patch.countdown.clone().unwrap_or_default();
	let branding = patch.branding.clone().unwrap_or_default();
	ComingSoonSettings {
		headline: normalize_opt_str(patch.headline.as_deref()),
		subheadline: normalize_opt_str(patch.subheadline.as_deref()),
		countdown: CountdownSettings {
			is_enabled: countdown.is_enabled.unwrap_or(false),
			style: countdown.style.as_deref().map(CountdownStyle::parse).unwrap_or_default(),
			label: normalize_opt_str(countdown.label.as_deref()),
			numeric_value: countdown.numeric_value.map(clamp_countdown),
			target_at: countdown.target_at.as_deref().and_then(Timestamp::parse_iso),
		},
		branding: BrandingSettings {
			logo_url: normalize_opt_str(branding.logo_url.as_deref()),
			background_mode: branding
				.background_mode
				.as_deref()
				.map(BackgroundMode::parse)
				.unwrap_or_default(),
			background_image_url: normalize_opt_str(branding.background_image_url.as_deref()),
			gradient_colors: branding
				.gradient_colors
				.as_deref()
				.map(normalize_gradient)
				.unwrap_or(defaults.branding.gradient_colors),
		},
	}
}

// Validation //
//************//

/// Rejects structurally invalid update payloads before anything is written
fn validate_update(input: &UpdateSiteModeConfiguration) -> VdResult<()> {
	let mut seen: Vec<SiteMode> = Vec::new();
	for (idx, patch) in input.modes.iter().enumerate() {
		let path = format!("modes[{idx}].mode");
		if !patch.mode.is_persistable() {
			return Err(Error::validation(path, "mode 'none' cannot carry settings"));
		}
		if seen.contains(&patch.mode) {
			return Err(Error::validation(
				path,
				format!("duplicate entry for mode '{}'", patch.mode),
			));
		}
		seen.push(patch.mode);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_active_mode_follows_stable_order() {
		let mut maintenance = SiteModeRow::new(SiteMode::Maintenance);
		maintenance.is_active = true;
		let mut coming_soon = SiteModeRow::new(SiteMode::ComingSoon);
		coming_soon.is_active = true;

		// Both flagged (bad data): the first persistable mode wins
		assert_eq!(active_mode_of(&[coming_soon.clone(), maintenance]), SiteMode::Maintenance);
		assert_eq!(active_mode_of(&[coming_soon]), SiteMode::ComingSoon);
		assert_eq!(active_mode_of(&[SiteModeRow::new(SiteMode::Maintenance)]), SiteMode::None);
		assert_eq!(active_mode_of(&[]), SiteMode::None);
	}

	#[test]
	fn test_stored_none_row_is_ignored() {
		let mut row = SiteModeRow::new(SiteMode::None);
		row.is_active = true;
		row.seo_title = Some(TextValue::plain("Sneaky"));

		let config = resolve_configuration(&[row]);
		assert_eq!(config.active_mode, SiteMode::None);
		assert_eq!(config.modes[0].seo.title, SiteModeSeo::default_for(SiteMode::None).title);
	}

	#[test]
	fn test_merge_row_fills_gaps_from_defaults() {
		let mut row = SiteModeRow::new(SiteMode::Maintenance);
		row.seo_title = Some(TextValue::plain("  Down for maintenance  "));

		let merged = merge_row(SiteMode::Maintenance, Some(&row));
		assert_eq!(merged.seo.title, TextValue::plain("Down for maintenance"));
		assert_eq!(
			merged.seo.description,
			SiteModeSeo::default_for(SiteMode::Maintenance).description
		);
		assert_eq!(merged.appearance.background_overlay_opacity, DEFAULT_OVERLAY_OPACITY);
		assert_eq!(merged.coming_soon, ComingSoonSettings::default());
	}

	#[test]
	fn test_apply_patch_without_patch_is_all_defaults() {
		let settings = apply_patch(SiteMode::ComingSoon, None);
		assert_eq!(settings.seo, SiteModeSeo::default_for(SiteMode::ComingSoon));
		assert!(!settings.mailchimp_enabled);
		assert_eq!(settings.updated_at, None);
	}

	#[test]
	fn test_validate_rejects_none_mode_entry() {
		let input = UpdateSiteModeConfiguration {
			active_mode: SiteMode::Maintenance,
			modes: vec![SiteModePatch { mode: SiteMode::None, ..Default::default() }],
		};
		match validate_update(&input) {
			Err(Error::ValidationError { path, .. }) => assert_eq!(&*path, "modes[0].mode"),
			other => panic!("expected validation error, got {other:?}"),
		}
	}

	#[test]
	fn test_validate_rejects_duplicate_mode_entries() {
		let input = UpdateSiteModeConfiguration {
			active_mode: SiteMode::ComingSoon,
			modes: vec![
				SiteModePatch { mode: SiteMode::ComingSoon, ..Default::default() },
				SiteModePatch { mode: SiteMode::ComingSoon, ..Default::default() },
			],
		};
		match validate_update(&input) {
			Err(Error::ValidationError { path, .. }) => assert_eq!(&*path, "modes[1].mode"),
			other => panic!("expected validation error, got {other:?}"),
		}
	}
}

// vim: ts=4
