//! Error types shared across the Vendiva crates.

pub type VdResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Requested row or entity does not exist
	NotFound,
	/// Persistence failure: store unreachable or write rejected
	DbError,
	/// Write input violated the configuration schema; `path` names the
	/// offending field (e.g. `modes[1].mode`)
	ValidationError { path: Box<str>, message: Box<str> },
	/// Unexpected internal state
	Internal(String),
}

impl Error {
	/// Builds a validation error pointing at a field path
	pub fn validation(path: impl Into<Box<str>>, message: impl Into<Box<str>>) -> Self {
		Self::ValidationError { path: path.into(), message: message.into() }
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::ValidationError { path, message } => {
				write!(f, "validation failed at {}: {}", path, message)
			}
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validation_display_includes_path() {
		let err = Error::validation("modes[1].mode", "duplicate entry");
		assert_eq!(err.to_string(), "validation failed at modes[1].mode: duplicate entry");
	}
}

// vim: ts=4
