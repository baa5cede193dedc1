use thiserror::Error;

use crate::host::HostError;

/// Errors that escape statusline generation.
///
/// Configuration problems inside a single component (a failing provider, an
/// unparseable color) are logged and degraded in place; only host failures
/// abort the render.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The host rejected a buffer query or highlight registration.
	#[error(transparent)]
	Host(#[from] HostError),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
