use thiserror::Error;

/// Errors produced while parsing color and attribute strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// A color value is neither hex, a known name, nor `NONE`.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// A style attribute is not one the host understands.
	#[error("invalid highlight attribute: {0}")]
	InvalidAttribute(String),
}

/// Result type for primitive parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
