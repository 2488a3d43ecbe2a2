//! Multilingual text values.
//!
//! Admin-entered copy starts life as a plain string and is promoted to a
//! per-locale `{en, es}` map on the first locale-specific edit. The promotion
//! is one-way; the write path collapses a map back to a plain string only
//! when both locales hold the same value.

use serde::{Deserialize, Serialize};

/// Locales supported by the admin console
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Es,
}

impl Locale {
	pub fn as_str(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Es => "es",
		}
	}
}

/// Per-locale slots of a localized value. An empty slot means "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
	#[serde(default)]
	pub en: Box<str>,
	#[serde(default)]
	pub es: Box<str>,
}

/// A text value that is either a plain string or localized per locale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
	Plain(Box<str>),
	Localized(LocalizedText),
}

impl TextValue {
	pub fn plain(value: impl Into<Box<str>>) -> Self {
		TextValue::Plain(value.into())
	}

	pub fn localized(en: impl Into<Box<str>>, es: impl Into<Box<str>>) -> Self {
		TextValue::Localized(LocalizedText { en: en.into(), es: es.into() })
	}

	/// Sets one locale's slot, promoting a plain value to a localized map on
	/// the first locale-specific edit. The pre-promotion plain string seeds
	/// the `en` slot; the other slot starts empty. Later edits only touch the
	/// targeted slot.
	pub fn with_locale(self, locale: Locale, value: impl Into<Box<str>>) -> Self {
		let mut slots = match self {
			TextValue::Plain(s) => LocalizedText { en: s, es: "".into() },
			TextValue::Localized(slots) => slots,
		};
		match locale {
			Locale::En => slots.en = value.into(),
			Locale::Es => slots.es = value.into(),
		}
		TextValue::Localized(slots)
	}

	/// Reads the value for a locale: the locale's slot, else `en`, else the
	/// plain string. Empty slots count as unset.
	pub fn resolve(&self, locale: Locale) -> Option<&str> {
		match self {
			TextValue::Plain(s) => non_empty(s),
			TextValue::Localized(slots) => match locale {
				Locale::En => non_empty(&slots.en),
				Locale::Es => non_empty(&slots.es).or_else(|| non_empty(&slots.en)),
			},
		}
	}

	/// Canonicalizes for persistence: trims every slot, collapses a map whose
	/// slots are equal to a plain value, and collapses an all-empty value to
	/// `None`. Normalizing an already normalized value is a no-op.
	pub fn normalized(self) -> Option<TextValue> {
		match self {
			TextValue::Plain(s) => {
				let s = s.trim();
				if s.is_empty() { None } else { Some(TextValue::Plain(s.into())) }
			}
			TextValue::Localized(slots) => {
				let en = slots.en.trim();
				let es = slots.es.trim();
				match (en.is_empty(), es.is_empty()) {
					(true, true) => None,
					_ if en == es => Some(TextValue::Plain(en.into())),
					_ => Some(TextValue::localized(en, es)),
				}
			}
		}
	}
}

fn non_empty(s: &str) -> Option<&str> {
	if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_promotion_seeds_en_with_plain_value() {
		let value = TextValue::plain("Hello").with_locale(Locale::Es, "Hola");
		assert_eq!(value, TextValue::localized("Hello", "Hola"));
	}

	#[test]
	fn test_promotion_on_en_edit_leaves_es_empty() {
		let value = TextValue::plain("Hello").with_locale(Locale::En, "Hi");
		assert_eq!(value, TextValue::localized("Hi", ""));
	}

	#[test]
	fn test_later_edits_touch_only_target_slot() {
		let value = TextValue::localized("Hello", "Hola").with_locale(Locale::Es, "Buenas");
		assert_eq!(value, TextValue::localized("Hello", "Buenas"));
	}

	#[test]
	fn test_collapse_equal_slots_to_plain() {
		let value = TextValue::localized("Launching Soon", "Launching Soon");
		assert_eq!(value.normalized(), Some(TextValue::plain("Launching Soon")));
	}

	#[test]
	fn test_collapse_empty_to_none() {
		assert_eq!(TextValue::localized("", "  ").normalized(), None);
		assert_eq!(TextValue::plain("   ").normalized(), None);
	}

	#[test]
	fn test_normalized_trims_slots() {
		let value = TextValue::localized(" Hello ", "Hola\t");
		assert_eq!(value.normalized(), Some(TextValue::localized("Hello", "Hola")));
	}

	#[test]
	fn test_normalized_is_a_fixed_point() {
		let samples = [
			TextValue::plain("  Launching Soon "),
			TextValue::localized("Hello", "Hola"),
			TextValue::localized("Same", "Same"),
			TextValue::localized("Only en", ""),
		];
		for sample in samples {
			let once = sample.normalized();
			let twice = once.clone().and_then(TextValue::normalized);
			assert_eq!(once, twice);
		}
	}

	#[test]
	fn test_resolve_falls_back_to_en() {
		let value = TextValue::localized("Hello", "");
		assert_eq!(value.resolve(Locale::Es), Some("Hello"));
		assert_eq!(value.resolve(Locale::En), Some("Hello"));
		assert_eq!(TextValue::plain("Hi").resolve(Locale::Es), Some("Hi"));
		assert_eq!(TextValue::plain("").resolve(Locale::En), None);
	}

	#[test]
	fn test_serde_shapes() {
		let plain: TextValue = serde_json::from_str("\"Hello\"").unwrap();
		assert_eq!(plain, TextValue::plain("Hello"));

		let localized: TextValue = serde_json::from_str(r#"{"en":"Hello","es":"Hola"}"#).unwrap();
		assert_eq!(localized, TextValue::localized("Hello", "Hola"));

		// A one-key map decodes with the other slot empty
		let partial: TextValue = serde_json::from_str(r#"{"es":"Hola"}"#).unwrap();
		assert_eq!(partial, TextValue::localized("", "Hola"));

		// Maps always serialize both keys
		let json = serde_json::to_string(&TextValue::localized("Hello", "")).unwrap();
		assert_eq!(json, r#"{"en":"Hello","es":""}"#);
	}
}

// vim: ts=4
