//! Resolved site-mode configuration types and the update input shapes.
//!
//! `SiteModeConfiguration` is a view: it is rebuilt on every read and never
//! stored as one blob. The update input mirrors it with everything optional
//! and raw strings wherever a field passes through a normalizer.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use vendiva_types::site_mode::{
	ComingSoonSettings, DEFAULT_OVERLAY_OPACITY, SiteMode, SiteModeRow, SocialLink,
};
use vendiva_types::text::TextValue;
use vendiva_types::types::{deserialize_timestamp_iso_opt, serialize_timestamp_iso_opt};

use crate::prelude::*;

// Resolved configuration //
//************************//

/// SEO fields of one mode; the three core fields are always present
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteModeSeo {
	pub title: TextValue,
	pub description: TextValue,
	pub keywords: TextValue,
	pub og_title: Option<TextValue>,
	pub og_description: Option<TextValue>,
	pub og_image: Option<TextValue>,
	pub twitter_title: Option<TextValue>,
	pub twitter_description: Option<TextValue>,
	pub twitter_image: Option<TextValue>,
}

/// Appearance fields of one mode
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteModeAppearance {
	pub background_image_url: Option<Box<str>>,
	pub background_overlay_opacity: u8,
	pub social_links: Vec<SocialLink>,
}

impl Default for SiteModeAppearance {
	fn default() -> Self {
		Self {
			background_image_url: None,
			background_overlay_opacity: DEFAULT_OVERLAY_OPACITY,
			social_links: Vec::new(),
		}
	}
}

/// One mode's complete resolved settings
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteModeSettings {
	pub mode: SiteMode,
	pub is_active: bool,
	pub seo: SiteModeSeo,
	pub appearance: SiteModeAppearance,
	pub mailchimp_enabled: bool,
	pub mailchimp_audience_id: Option<Box<str>>,
	pub mailchimp_server_prefix: Option<Box<str>>,
	pub coming_soon: ComingSoonSettings,
	#[serde(
		default,
		serialize_with = "serialize_timestamp_iso_opt",
		deserialize_with = "deserialize_timestamp_iso_opt"
	)]
	pub updated_at: Option<Timestamp>,
}

/// The complete configuration: one entry per mode, exactly one active
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteModeConfiguration {
	pub active_mode: SiteMode,
	pub modes: Vec<SiteModeSettings>,
}

impl SiteModeSettings {
	/// Flattens resolved settings into the persisted column layout
	pub fn to_row(&self) -> SiteModeRow {
		SiteModeRow {
			mode: self.mode,
			is_active: self.is_active,
			seo_title: Some(self.seo.title.clone()),
			seo_description: Some(self.seo.description.clone()),
			seo_keywords: Some(self.seo.keywords.clone()),
			og_title: self.seo.og_title.clone(),
			og_description: self.seo.og_description.clone(),
			og_image: self.seo.og_image.clone(),
			twitter_title: self.seo.twitter_title.clone(),
			twitter_description: self.seo.twitter_description.clone(),
			twitter_image: self.seo.twitter_image.clone(),
			background_image_url: self.appearance.background_image_url.clone(),
			background_overlay_opacity: Some(self.appearance.background_overlay_opacity),
			social_links: Some(self.appearance.social_links.clone()),
			mailchimp_enabled: Some(self.mailchimp_enabled),
			mailchimp_audience_id: self.mailchimp_audience_id.clone(),
			mailchimp_server_prefix: self.mailchimp_server_prefix.clone(),
			coming_soon: Some(self.coming_soon.clone()),
			updated_at: self.updated_at,
		}
	}

	fn to_patch(&self) -> SiteModePatch {
		SiteModePatch {
			mode: self.mode,
			seo: Some(SeoPatch {
				title: Some(self.seo.title.clone()),
				description: Some(self.seo.description.clone()),
				keywords: Some(self.seo.keywords.clone()),
				og_title: self.seo.og_title.clone(),
				og_description: self.seo.og_description.clone(),
				og_image: self.seo.og_image.clone(),
				twitter_title: self.seo.twitter_title.clone(),
				twitter_description: self.seo.twitter_description.clone(),
				twitter_image: self.seo.twitter_image.clone(),
			}),
			appearance: Some(AppearancePatch {
				background_image_url: self.appearance.background_image_url.clone(),
				background_overlay_opacity: Some(i64::from(
					self.appearance.background_overlay_opacity,
				)),
				social_links: Some(
					self.appearance
						.social_links
						.iter()
						.map(|link| SocialLinkInput {
							platform: link.platform.as_str().into(),
							url: link.url.clone(),
						})
						.collect(),
				),
			}),
			mailchimp_enabled: Some(self.mailchimp_enabled),
			mailchimp_audience_id: self.mailchimp_audience_id.clone(),
			mailchimp_server_prefix: self.mailchimp_server_prefix.clone(),
			coming_soon: Some(ComingSoonPatch {
				headline: self.coming_soon.headline.clone(),
				subheadline: self.coming_soon.subheadline.clone(),
				countdown: Some(CountdownPatch {
					is_enabled: Some(self.coming_soon.countdown.is_enabled),
					style: Some(self.coming_soon.countdown.style.as_str().into()),
					label: self.coming_soon.countdown.label.clone(),
					numeric_value: self.coming_soon.countdown.numeric_value.map(i64::from),
					target_at: self
						.coming_soon
						.countdown
						.target_at
						.and_then(Timestamp::to_iso)
						.map(String::into_boxed_str),
				}),
				branding: Some(BrandingPatch {
					logo_url: self.coming_soon.branding.logo_url.clone(),
					background_mode: Some(self.coming_soon.branding.background_mode.as_str().into()),
					background_image_url: self.coming_soon.branding.background_image_url.clone(),
					gradient_colors: Some(self.coming_soon.branding.gradient_colors.clone()),
				}),
			}),
		}
	}
}

impl SiteModeConfiguration {
	/// Projects a resolved configuration back into the update-payload shape.
	/// Feeding the projection to `update_configuration` is a no-op.
	pub fn to_update(&self) -> UpdateSiteModeConfiguration {
		UpdateSiteModeConfiguration {
			active_mode: self.active_mode,
			modes: self
				.modes
				.iter()
				.filter(|settings| settings.mode.is_persistable())
				.map(SiteModeSettings::to_patch)
				.collect(),
		}
	}
}

// Update input //
//**************//

/// Partial update payload for the whole configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSiteModeConfiguration {
	pub active_mode: SiteMode,
	pub modes: Vec<SiteModePatch>,
}

/// Partial settings for one persistable mode; absent fields fall back to the
/// compiled-in defaults
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteModePatch {
	pub mode: SiteMode,
	pub seo: Option<SeoPatch>,
	pub appearance: Option<AppearancePatch>,
	pub mailchimp_enabled: Option<bool>,
	pub mailchimp_audience_id: Option<Box<str>>,
	pub mailchimp_server_prefix: Option<Box<str>>,
	pub coming_soon: Option<ComingSoonPatch>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoPatch {
	pub title: Option<TextValue>,
	pub description: Option<TextValue>,
	pub keywords: Option<TextValue>,
	pub og_title: Option<TextValue>,
	pub og_description: Option<TextValue>,
	pub og_image: Option<TextValue>,
	pub twitter_title: Option<TextValue>,
	pub twitter_description: Option<TextValue>,
	pub twitter_image: Option<TextValue>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearancePatch {
	pub background_image_url: Option<Box<str>>,
	/// Unbounded on input; clamped into [0, 100] on write
	pub background_overlay_opacity: Option<i64>,
	pub social_links: Option<Vec<SocialLinkInput>>,
}

/// A social link as submitted; the platform tag still needs alias resolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialLinkInput {
	pub platform: Box<str>,
	pub url: Box<str>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComingSoonPatch {
	pub headline: Option<Box<str>>,
	pub subheadline: Option<Box<str>>,
	pub countdown: Option<CountdownPatch>,
	pub branding: Option<BrandingPatch>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownPatch {
	pub is_enabled: Option<bool>,
	/// `numeric` or `date`; anything else falls back to `numeric`
	pub style: Option<Box<str>>,
	pub label: Option<Box<str>>,
	/// Clamped into [0, 999999] on write
	pub numeric_value: Option<i64>,
	/// ISO-8601; unparsable values are dropped
	pub target_at: Option<Box<str>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingPatch {
	pub logo_url: Option<Box<str>>,
	/// `image` or `gradient`; anything else falls back to `gradient`
	pub background_mode: Option<Box<str>>,
	pub background_image_url: Option<Box<str>>,
	pub gradient_colors: Option<Vec<Box<str>>>,
}

// vim: ts=4
