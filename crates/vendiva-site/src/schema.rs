//! Compiled-in defaults and total normalizers for site-mode settings.
//!
//! Every function here is total: malformed admin input degrades to a
//! documented fallback value instead of failing the save. Callers never
//! have to handle a normalization error.

use itertools::Itertools;
use url::Url;

use vendiva_types::site_mode::{
	BrandingSettings, ComingSoonSettings, CountdownSettings, DEFAULT_GRADIENT_COLORS,
	DEFAULT_OVERLAY_OPACITY, MAX_COUNTDOWN_VALUE, MAX_GRADIENT_COLORS, MAX_SOCIAL_LINKS,
	MIN_GRADIENT_COLORS, SiteMode, SocialLink, SocialPlatform,
};
use vendiva_types::text::TextValue;

use crate::prelude::*;
use crate::types::{
	SiteModeAppearance, SiteModeConfiguration, SiteModeSeo, SiteModeSettings, SocialLinkInput,
};

// Defaults //
//**********//

impl SiteModeSeo {
	/// Mode-specific copy defaults
	pub fn default_for(mode: SiteMode) -> Self {
		let (title, description, keywords) = match mode {
			SiteMode::None => (
				"Vendiva",
				"Shop, share, and grow with the Vendiva community.",
				"vendiva, shop, community",
			),
			SiteMode::Maintenance => (
				"We'll be right back",
				"Vendiva is down for scheduled maintenance. Check back shortly.",
				"vendiva, maintenance",
			),
			SiteMode::ComingSoon => (
				"Something big is coming",
				"Vendiva is launching soon. Sign up to be the first to know.",
				"vendiva, launch, coming soon",
			),
		};
		Self {
			title: TextValue::plain(title),
			description: TextValue::plain(description),
			keywords: TextValue::plain(keywords),
			og_title: None,
			og_description: None,
			og_image: None,
			twitter_title: None,
			twitter_description: None,
			twitter_image: None,
		}
	}
}

/// Fully-defaulted settings for one mode
pub fn default_settings_for(mode: SiteMode) -> SiteModeSettings {
	SiteModeSettings {
		mode,
		is_active: mode == SiteMode::None,
		seo: SiteModeSeo::default_for(mode),
		appearance: SiteModeAppearance::default(),
		mailchimp_enabled: false,
		mailchimp_audience_id: None,
		mailchimp_server_prefix: None,
		coming_soon: ComingSoonSettings::default(),
		updated_at: None,
	}
}

impl SiteModeConfiguration {
	/// The pure in-memory configuration used when nothing is persisted yet.
	/// Callers also fall back to this when the store cannot be read.
	pub fn default_configuration() -> Self {
		Self {
			active_mode: SiteMode::None,
			modes: SiteMode::ALL.iter().map(|&mode| default_settings_for(mode)).collect(),
		}
	}
}

// Normalizers //
//*************//

/// Canonicalizes a hex color: accepts 3- or 6-digit hex with or without `#`,
/// expands and lower-cases. Empty string on anything unparsable.
pub fn normalize_hex_color(raw: &str) -> String {
	let digits = raw.trim().trim_start_matches('#');
	let expanded: String = match digits.len() {
		3 => digits.chars().flat_map(|c| [c, c]).collect(),
		6 => digits.into(),
		_ => return String::new(),
	};
	if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
		return String::new();
	}
	format!("#{}", expanded.to_ascii_lowercase())
}

/// Canonicalizes a gradient stop list: normalizes each color, drops
/// unparsable ones, caps the length, and pads short lists from the default
/// stops so the result never drops below the minimum.
pub fn normalize_gradient(colors: &[Box<str>]) -> Vec<Box<str>> {
	let mut stops: Vec<Box<str>> = colors
		.iter()
		.map(|c| normalize_hex_color(c))
		.filter(|c| !c.is_empty())
		.map(String::into_boxed_str)
		.take(MAX_GRADIENT_COLORS)
		.collect();
	for fallback in DEFAULT_GRADIENT_COLORS {
		if stops.len() >= MIN_GRADIENT_COLORS {
			break;
		}
		if !stops.iter().any(|s| &**s == fallback) {
			stops.push(fallback.into());
		}
	}
	stops
}

fn is_valid_link_url(raw: &str) -> bool {
	Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Resolves submitted social links against the platform alias table; links
/// with an unknown platform tag are dropped
pub fn normalize_social_links(links: &[SocialLinkInput]) -> Vec<SocialLink> {
	let resolved = links.iter().filter_map(|link| {
		let Some(platform) = SocialPlatform::resolve(&link.platform) else {
			debug!("Dropping social link with unknown platform: {:?}", link.platform);
			return None;
		};
		Some(SocialLink { platform, url: link.url.clone() })
	});
	sanitize_social_links(resolved)
}

/// Re-validates already-typed social links: trims URLs, drops ones that are
/// not absolute http(s) URLs, keeps the first link per platform, caps the
/// list length
pub fn sanitize_social_links(links: impl IntoIterator<Item = SocialLink>) -> Vec<SocialLink> {
	links
		.into_iter()
		.map(|link| SocialLink { platform: link.platform, url: link.url.trim().into() })
		.filter(|link| is_valid_link_url(&link.url))
		.unique_by(|link| link.platform)
		.take(MAX_SOCIAL_LINKS)
		.collect()
}

/// Trims an optional string; empty and whitespace-only values become `None`
pub fn normalize_opt_str(raw: Option<&str>) -> Option<Box<str>> {
	let trimmed = raw?.trim();
	if trimmed.is_empty() { None } else { Some(trimmed.into()) }
}

/// Canonicalizes a Mailchimp server prefix ("us21" shape: letters then
/// digits, lower-case). Anything else is dropped.
pub fn normalize_server_prefix(raw: &str) -> Option<Box<str>> {
	let prefix = raw.trim().to_ascii_lowercase();
	let split = prefix.find(|c: char| c.is_ascii_digit()).unwrap_or(prefix.len());
	let (letters, digits) = prefix.split_at(split);
	if letters.is_empty()
		|| digits.is_empty()
		|| !letters.chars().all(|c| c.is_ascii_lowercase())
		|| !digits.chars().all(|c| c.is_ascii_digit())
	{
		return None;
	}
	Some(prefix.into())
}

/// Clamps an overlay opacity into [0, 100]
pub fn clamp_opacity(value: i64) -> u8 {
	value.clamp(0, 100) as u8
}

/// Clamps a countdown value into [0, 999999]
pub fn clamp_countdown(value: i64) -> u32 {
	value.clamp(0, i64::from(MAX_COUNTDOWN_VALUE)) as u32
}

/// Re-normalizes a stored coming-soon blob. Stored blobs predating a rule
/// change (or written by hand) come out identical to freshly-submitted ones.
pub fn sanitize_coming_soon(blob: ComingSoonSettings) -> ComingSoonSettings {
	ComingSoonSettings {
		headline: normalize_opt_str(blob.headline.as_deref()),
		subheadline: normalize_opt_str(blob.subheadline.as_deref()),
		countdown: CountdownSettings {
			is_enabled: blob.countdown.is_enabled,
			style: blob.countdown.style,
			label: normalize_opt_str(blob.countdown.label.as_deref()),
			numeric_value: blob.countdown.numeric_value.map(|v| v.min(MAX_COUNTDOWN_VALUE)),
			target_at: blob.countdown.target_at,
		},
		branding: BrandingSettings {
			logo_url: normalize_opt_str(blob.branding.logo_url.as_deref()),
			background_mode: blob.branding.background_mode,
			background_image_url: normalize_opt_str(blob.branding.background_image_url.as_deref()),
			gradient_colors: normalize_gradient(&blob.branding.gradient_colors),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn boxed(colors: &[&str]) -> Vec<Box<str>> {
		colors.iter().map(|c| (*c).into()).collect()
	}

	#[test]
	fn test_hex_color_normalization() {
		assert_eq!(normalize_hex_color("#ABC"), "#aabbcc");
		assert_eq!(normalize_hex_color("4f46e5"), "#4f46e5");
		assert_eq!(normalize_hex_color("  #7C3AED  "), "#7c3aed");
		assert_eq!(normalize_hex_color("#zzz"), "");
		assert_eq!(normalize_hex_color("#12"), "");
		assert_eq!(normalize_hex_color(""), "");
	}

	#[test]
	fn test_gradient_pads_to_minimum() {
		assert_eq!(normalize_gradient(&[]), boxed(&DEFAULT_GRADIENT_COLORS));
		assert_eq!(normalize_gradient(&boxed(&["#111"])), boxed(&["#111111", "#4f46e5"]));
		// A lone default stop is padded with the other default, not itself
		assert_eq!(normalize_gradient(&boxed(&["#4f46e5"])), boxed(&DEFAULT_GRADIENT_COLORS));
	}

	#[test]
	fn test_gradient_caps_and_drops_unparsable() {
		let colors = boxed(&["#111111", "bogus", "#222222", "#333333", "#444444", "#555555", "#666666"]);
		let normalized = normalize_gradient(&colors);
		assert_eq!(normalized.len(), MAX_GRADIENT_COLORS);
		assert_eq!(&*normalized[0], "#111111");
		assert!(!normalized.iter().any(|c| &**c == "bogus"));
	}

	#[test]
	fn test_gradient_normalization_is_a_fixed_point() {
		let once = normalize_gradient(&boxed(&["ABC", "", "#7C3AED"]));
		assert_eq!(normalize_gradient(&once), once);
	}

	#[test]
	fn test_social_links_resolve_dedup_and_cap() {
		let links: Vec<SocialLinkInput> = [
			("ig", "https://instagram.com/vendiva"),
			("myspace", "https://myspace.com/vendiva"),
			("instagram", "https://instagram.com/other"),
			("FB", " https://facebook.com/vendiva "),
			("twitter", "not a url"),
			("yt", "ftp://youtube.com/vendiva"),
		]
		.iter()
		.map(|(platform, url)| SocialLinkInput { platform: (*platform).into(), url: (*url).into() })
		.collect();

		let normalized = normalize_social_links(&links);
		assert_eq!(normalized.len(), 2);
		assert_eq!(normalized[0].platform, SocialPlatform::Instagram);
		assert_eq!(&*normalized[0].url, "https://instagram.com/vendiva");
		assert_eq!(normalized[1].platform, SocialPlatform::Facebook);
		assert_eq!(&*normalized[1].url, "https://facebook.com/vendiva");
	}

	#[test]
	fn test_social_links_cap_at_maximum() {
		let platforms =
			["facebook", "instagram", "twitter", "youtube", "tiktok", "linkedin", "telegram", "whatsapp"];
		let links: Vec<SocialLinkInput> = platforms
			.iter()
			.map(|p| SocialLinkInput { platform: (*p).into(), url: format!("https://{p}.com/v").into() })
			.collect();
		assert!(normalize_social_links(&links).len() <= MAX_SOCIAL_LINKS);
	}

	#[test]
	fn test_server_prefix_normalization() {
		assert_eq!(normalize_server_prefix(" US21 ").as_deref(), Some("us21"));
		assert_eq!(normalize_server_prefix("us1").as_deref(), Some("us1"));
		assert_eq!(normalize_server_prefix("21us"), None);
		assert_eq!(normalize_server_prefix("us"), None);
		assert_eq!(normalize_server_prefix("us-21"), None);
		assert_eq!(normalize_server_prefix(""), None);
	}

	#[test]
	fn test_clamping() {
		assert_eq!(clamp_opacity(150), 100);
		assert_eq!(clamp_opacity(-10), 0);
		assert_eq!(clamp_opacity(90), 90);
		assert_eq!(clamp_countdown(5_000_000), MAX_COUNTDOWN_VALUE);
		assert_eq!(clamp_countdown(-1), 0);
	}

	#[test]
	fn test_default_configuration_shape() {
		let config = SiteModeConfiguration::default_configuration();
		assert_eq!(config.active_mode, SiteMode::None);
		assert_eq!(config.modes.len(), SiteMode::ALL.len());
		assert_eq!(config.modes.iter().filter(|m| m.is_active).count(), 1);
		assert!(config.modes[0].is_active);
		assert_eq!(config.modes[1].appearance.background_overlay_opacity, DEFAULT_OVERLAY_OPACITY);
	}

	#[test]
	fn test_mode_specific_seo_defaults() {
		let maintenance = SiteModeSeo::default_for(SiteMode::Maintenance);
		let coming_soon = SiteModeSeo::default_for(SiteMode::ComingSoon);
		assert_ne!(maintenance.title, coming_soon.title);
		assert_eq!(maintenance.og_title, None);
	}
}

// vim: ts=4
