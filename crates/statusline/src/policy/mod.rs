//! Forced-inactive policy: buffers whose statusline always uses the inactive layout.

use rustc_hash::FxHashSet;

use crate::host::{BufferInfo, Host, HostError};

/// Buffer types, file types and buffer names that force the inactive layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForceInactive {
	pub buftypes: FxHashSet<String>,
	pub filetypes: FxHashSet<String>,
	pub bufnames: FxHashSet<String>,
}

impl ForceInactive {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn buftypes<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.buftypes.extend(values.into_iter().map(Into::into));
		self
	}

	pub fn filetypes<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.filetypes.extend(values.into_iter().map(Into::into));
		self
	}

	pub fn bufnames<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.bufnames.extend(values.into_iter().map(Into::into));
		self
	}

	pub fn is_empty(&self) -> bool {
		self.buftypes.is_empty() && self.filetypes.is_empty() && self.bufnames.is_empty()
	}

	/// True when any of the buffer's type, file type or name is listed.
	pub fn matches(&self, buffer: &BufferInfo) -> bool {
		self.buftypes.contains(&buffer.buftype)
			|| self.filetypes.contains(&buffer.filetype)
			|| self.bufnames.contains(&buffer.name)
	}

	/// Checks the host's current buffer. Nothing is cached between calls.
	pub fn is_forced_inactive(&self, host: &dyn Host) -> Result<bool, HostError> {
		Ok(self.matches(&host.current_buffer()?))
	}
}
