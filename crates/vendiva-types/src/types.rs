//! Common types used throughout the Vendiva platform.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//

/// Unix timestamp in seconds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	/// Current time
	pub fn now() -> Self {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(res.as_secs() as i64)
	}

	/// This timestamp shifted by the given number of seconds
	pub fn add_seconds(self, secs: i64) -> Self {
		Timestamp(self.0 + secs)
	}

	/// Parses an RFC 3339 / ISO-8601 string; `None` on anything unparsable
	pub fn parse_iso(raw: &str) -> Option<Self> {
		DateTime::parse_from_rfc3339(raw.trim()).ok().map(|dt| Timestamp(dt.timestamp()))
	}

	/// Formats as an RFC 3339 string in UTC; `None` when out of chrono's range
	pub fn to_iso(self) -> Option<String> {
		DateTime::<Utc>::from_timestamp(self.0, 0)
			.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

/// Serializes a timestamp as an ISO string; epoch seconds when out of range
pub fn serialize_timestamp_iso<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	match ts.to_iso() {
		Some(iso) => serializer.serialize_str(&iso),
		None => serializer.serialize_i64(ts.0),
	}
}

/// Optional variant of [`serialize_timestamp_iso`]
pub fn serialize_timestamp_iso_opt<S>(
	ts: &Option<Timestamp>,
	serializer: S,
) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	match ts {
		Some(ts) => serialize_timestamp_iso(ts, serializer),
		None => serializer.serialize_none(),
	}
}

/// Accepts null, epoch seconds or an ISO string. Unparsable strings decode as
/// `None` so one bad stored value cannot fail a whole row.
pub fn deserialize_timestamp_iso_opt<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Int(i64),
		Str(String),
	}

	match Option::<Raw>::deserialize(deserializer)? {
		None => Ok(None),
		Some(Raw::Int(secs)) => Ok(Some(Timestamp(secs))),
		Some(Raw::Str(s)) => Ok(Timestamp::parse_iso(&s)),
	}
}


// vim: ts=4
