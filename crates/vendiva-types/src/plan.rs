//! Program plan configuration rows: global app settings and phase levels.
//!
//! Both tables are owned by the commerce backend; this crate only mirrors
//! their shape. Rates are percentages, monetary amounts are integer cents.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::text::TextValue;

/// How many direct members fit under a node at one tree level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelCapacity {
	pub level: u32,
	pub max_members: u32,
}

/// A configured currency and the countries it applies to
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyInfo {
	pub code: Box<str>,
	pub countries: Box<[Box<str>]>,
}

/// Global application settings (singleton row)
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
	pub ecommerce_commission_rate: f64,
	pub default_currency: Box<str>,
	pub currencies: Vec<CurrencyInfo>,
	pub level_capacities: Vec<LevelCapacity>,
}

impl Default for AppSettings {
	fn default() -> Self {
		Self {
			ecommerce_commission_rate: 0.0,
			default_currency: "USD".into(),
			currencies: Vec::new(),
			level_capacities: Vec::new(),
		}
	}
}

/// One row per program phase. Columns are nullable in the store; consumers
/// apply their own fallback chain for missing values.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhaseLevel {
	pub level: u32,
	pub name: Option<TextValue>,
	pub commission_rate: Option<f64>,
	pub group_gain_rate: Option<f64>,
	pub reward_credit_cents: Option<i64>,
	pub free_product_value_cents: Option<i64>,
}


// vim: ts=4
