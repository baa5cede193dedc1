//! Error types for configuration parsing.

use ribbon_primitives::ParseError;
use thiserror::Error;

/// Errors that can occur when parsing or normalizing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A highlight names a color or attribute that does not parse.
	#[error("invalid highlight in {location}: {source}")]
	InvalidHighlight {
		/// Dotted path of the offending component or separator.
		location: String,
		/// The underlying parse failure.
		source: ParseError,
	},

	/// A separator list contains another list.
	#[error("nested separator list in {location}: list entries must be strings or {{ str, hl }} tables")]
	NestedSeparatorList {
		/// Dotted path of the offending separator.
		location: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
