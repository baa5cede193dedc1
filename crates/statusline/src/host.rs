//! The seam between the renderer and the editor that displays it.

use thiserror::Error;

use crate::highlight::HighlightGroup;

/// Snapshot of the buffer shown in the window being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferInfo {
	/// Buffer type (`terminal`, `help`, `nofile`, or empty for normal files).
	pub buftype: String,
	/// Detected file type.
	pub filetype: String,
	/// Display name of the buffer.
	pub name: String,
}

impl BufferInfo {
	pub fn new(buftype: impl Into<String>, filetype: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			buftype: buftype.into(),
			filetype: filetype.into(),
			name: name.into(),
		}
	}
}

/// Failures reported by a [`Host`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// Registering a highlight group failed.
	#[error("failed to define highlight group {name}: {reason}")]
	DefineHighlight {
		/// Group that was being registered.
		name: String,
		/// Host-provided description.
		reason: String,
	},

	/// Removing a highlight group failed.
	#[error("failed to clear highlight group {name}: {reason}")]
	ClearHighlight {
		/// Group that was being cleared.
		name: String,
		/// Host-provided description.
		reason: String,
	},

	/// The current buffer could not be inspected.
	#[error("buffer query failed: {0}")]
	Buffer(String),
}

/// Editor capabilities the renderer depends on.
///
/// Methods take `&self`; hosts that record state use interior mutability.
/// Rendering is single-threaded, so no `Sync` bound is required.
pub trait Host {
	/// Buffer type, file type and name of the buffer in the window being drawn.
	fn current_buffer(&self) -> Result<BufferInfo, HostError>;

	/// Registers (or overwrites) a highlight group with the display system.
	fn define_highlight(&self, group: &HighlightGroup) -> Result<(), HostError>;

	/// Removes a previously registered highlight group.
	fn clear_highlight(&self, name: &str) -> Result<(), HostError>;
}
