use ribbon_primitives::ParseError;
use tracing::warn;

use crate::field::Scope;
use crate::highlight::{DEFAULT_GROUP, HighlightGroup, HighlightResolver, HighlightSpec};
use crate::host::{Host, HostError};
use crate::provider::ProviderRegistry;
use crate::separator::SeparatorPresets;

/// Everything one render pass needs, borrowed for the duration of a redraw.
///
/// Component and separator rendering live in their own modules as methods
/// on this type.
pub struct Renderer<'a> {
	pub(crate) resolver: &'a mut HighlightResolver,
	pub(crate) host: &'a dyn Host,
	pub(crate) presets: &'a SeparatorPresets,
	pub(crate) providers: &'a ProviderRegistry,
	pub(crate) scope: Scope<'a>,
}

impl<'a> Renderer<'a> {
	pub fn new(
		resolver: &'a mut HighlightResolver,
		host: &'a dyn Host,
		presets: &'a SeparatorPresets,
		providers: &'a ProviderRegistry,
		scope: Scope<'a>,
	) -> Self {
		Self {
			resolver,
			host,
			presets,
			providers,
			scope,
		}
	}

	/// Resolves `spec` to a group name.
	///
	/// A spec that fails to parse degrades to [`DEFAULT_GROUP`] so one bad
	/// color never blanks the whole line; host failures still propagate.
	pub(crate) fn highlight(&mut self, spec: &HighlightSpec) -> Result<String, HostError> {
		match self.resolver.resolve_spec(spec) {
			Ok(group) => self.resolver.register(group, self.host),
			Err(error) => {
				warn!(?spec, %error, "invalid highlight, falling back to default group");
				Ok(DEFAULT_GROUP.to_string())
			}
		}
	}

	/// Registers an already resolved group, or degrades like [`highlight`](Self::highlight).
	pub(crate) fn register_or_default(&mut self, group: Result<HighlightGroup, ParseError>) -> Result<String, HostError> {
		match group {
			Ok(group) => self.resolver.register(group, self.host),
			Err(error) => {
				warn!(%error, "invalid color, falling back to default group");
				Ok(DEFAULT_GROUP.to_string())
			}
		}
	}
}
