//! Site-mode vocabulary and the persisted row layout.
//!
//! One row per mode in the site-mode settings table; the coming-soon bundle
//! is stored as a JSON blob in its own column. Rows are partial by design,
//! the resolver in `vendiva-site` fills the gaps from compiled-in defaults.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::text::TextValue;
use crate::types::{Timestamp, deserialize_timestamp_iso_opt, serialize_timestamp_iso_opt};

/// Upper bound on stored social links per mode
pub const MAX_SOCIAL_LINKS: usize = 10;

/// Gradient stop count bounds; short lists are padded from the defaults
pub const MIN_GRADIENT_COLORS: usize = 2;
pub const MAX_GRADIENT_COLORS: usize = 5;

/// Fallback gradient stops, indigo to violet
pub const DEFAULT_GRADIENT_COLORS: [&str; 2] = ["#4f46e5", "#7c3aed"];

/// Overlay opacity (percent) used when none is configured
pub const DEFAULT_OVERLAY_OPACITY: u8 = 90;

/// Upper bound of the coming-soon countdown value
pub const MAX_COUNTDOWN_VALUE: u32 = 999_999;

// SiteMode //
//**********//

/// Site-wide visibility mode. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteMode {
	/// Normal operation, no gate page. Synthetic: never persisted.
	#[default]
	None,
	Maintenance,
	ComingSoon,
}

impl SiteMode {
	/// All modes in stable presentation order
	pub const ALL: [SiteMode; 3] = [SiteMode::None, SiteMode::Maintenance, SiteMode::ComingSoon];

	/// Modes with a backing row
	pub const PERSISTABLE: [SiteMode; 2] = [SiteMode::Maintenance, SiteMode::ComingSoon];

	pub fn as_str(self) -> &'static str {
		match self {
			SiteMode::None => "none",
			SiteMode::Maintenance => "maintenance",
			SiteMode::ComingSoon => "coming_soon",
		}
	}

	pub fn is_persistable(self) -> bool {
		!matches!(self, SiteMode::None)
	}
}

impl std::fmt::Display for SiteMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

// Social links //
//**************//

/// Closed set of recognized social platforms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
	Facebook,
	Instagram,
	Twitter,
	Youtube,
	Tiktok,
	Linkedin,
	Telegram,
	Whatsapp,
}

impl SocialPlatform {
	/// Case- and punctuation-insensitive alias lookup. `None` means the raw
	/// tag is unknown and the caller must drop the link.
	pub fn resolve(raw: &str) -> Option<Self> {
		let tag: String =
			raw.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect();
		match tag.as_str() {
			"facebook" | "fb" => Some(Self::Facebook),
			"instagram" | "ig" | "insta" => Some(Self::Instagram),
			"twitter" | "x" => Some(Self::Twitter),
			"youtube" | "yt" => Some(Self::Youtube),
			"tiktok" | "tt" => Some(Self::Tiktok),
			"linkedin" | "li" => Some(Self::Linkedin),
			"telegram" | "tg" => Some(Self::Telegram),
			"whatsapp" | "wa" => Some(Self::Whatsapp),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Facebook => "facebook",
			Self::Instagram => "instagram",
			Self::Twitter => "twitter",
			Self::Youtube => "youtube",
			Self::Tiktok => "tiktok",
			Self::Linkedin => "linkedin",
			Self::Telegram => "telegram",
			Self::Whatsapp => "whatsapp",
		}
	}
}

/// A resolved social link
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
	pub platform: SocialPlatform,
	pub url: Box<str>,
}

// Coming-soon settings //
//**********************//

/// How the coming-soon countdown renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownStyle {
	#[default]
	Numeric,
	Date,
}

impl CountdownStyle {
	/// Lenient parse; unknown styles fall back to the default
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"date" => CountdownStyle::Date,
			_ => CountdownStyle::Numeric,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			CountdownStyle::Numeric => "numeric",
			CountdownStyle::Date => "date",
		}
	}
}

/// Background treatment of the coming-soon page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundMode {
	Image,
	#[default]
	Gradient,
}

impl BackgroundMode {
	/// Lenient parse; unknown modes fall back to the default
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"image" => BackgroundMode::Image,
			_ => BackgroundMode::Gradient,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			BackgroundMode::Image => "image",
			BackgroundMode::Gradient => "gradient",
		}
	}
}

/// Countdown block of the coming-soon page
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownSettings {
	pub is_enabled: bool,
	pub style: CountdownStyle,
	pub label: Option<Box<str>>,
	pub numeric_value: Option<u32>,
	#[serde(
		serialize_with = "serialize_timestamp_iso_opt",
		deserialize_with = "deserialize_timestamp_iso_opt"
	)]
	pub target_at: Option<Timestamp>,
}

/// Branding block of the coming-soon page
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingSettings {
	pub logo_url: Option<Box<str>>,
	pub background_mode: BackgroundMode,
	pub background_image_url: Option<Box<str>>,
	pub gradient_colors: Vec<Box<str>>,
}

impl Default for BrandingSettings {
	fn default() -> Self {
		Self {
			logo_url: None,
			background_mode: BackgroundMode::default(),
			background_image_url: None,
			gradient_colors: DEFAULT_GRADIENT_COLORS.iter().map(|c| (*c).into()).collect(),
		}
	}
}

/// Coming-soon settings, stored as a JSON blob in the mode row
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComingSoonSettings {
	pub headline: Option<Box<str>>,
	pub subheadline: Option<Box<str>>,
	pub countdown: CountdownSettings,
	pub branding: BrandingSettings,
}

// SiteModeRow //
//*************//

/// One persisted row of the site-mode settings table. Every column except
/// the mode key is optional; absent columns resolve to defaults.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteModeRow {
	pub mode: SiteMode,
	pub is_active: bool,
	pub seo_title: Option<TextValue>,
	pub seo_description: Option<TextValue>,
	pub seo_keywords: Option<TextValue>,
	pub og_title: Option<TextValue>,
	pub og_description: Option<TextValue>,
	pub og_image: Option<TextValue>,
	pub twitter_title: Option<TextValue>,
	pub twitter_description: Option<TextValue>,
	pub twitter_image: Option<TextValue>,
	pub background_image_url: Option<Box<str>>,
	pub background_overlay_opacity: Option<u8>,
	pub social_links: Option<Vec<SocialLink>>,
	pub mailchimp_enabled: Option<bool>,
	pub mailchimp_audience_id: Option<Box<str>>,
	pub mailchimp_server_prefix: Option<Box<str>>,
	pub coming_soon: Option<ComingSoonSettings>,
	#[serde(
		serialize_with = "serialize_timestamp_iso_opt",
		deserialize_with = "deserialize_timestamp_iso_opt"
	)]
	pub updated_at: Option<Timestamp>,
}

impl SiteModeRow {
	/// An empty row for the given mode
	pub fn new(mode: SiteMode) -> Self {
		Self { mode, ..Self::default() }
	}
}


// vim: ts=4
