//! Provider resolution: turning a component's `provider` into text.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::field::Scope;
use crate::highlight::HighlightSpec;
use crate::separator::Separators;

/// What a provider sees: the component after its other fields were evaluated.
///
/// Separators are passed as configured, not rendered.
#[derive(Debug, Clone, Copy)]
pub struct ProviderContext<'a> {
	pub enabled: bool,
	pub hl: &'a HighlightSpec,
	pub icon: Option<&'a str>,
	pub left_sep: &'a Separators,
	pub right_sep: &'a Separators,
	pub scope: &'a Scope<'a>,
}

/// Error returned by a provider that could not produce text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
	/// The provider has nothing to show.
	#[error("provider produced no text")]
	NoText,

	/// The provider's data source failed.
	#[error("provider failed: {0}")]
	Failed(String),
}

/// A text-producing function.
pub type ProviderFn = Arc<dyn Fn(&ProviderContext<'_>) -> Result<String, ProviderError> + Send + Sync>;

/// A component's provider, tagged at configuration time.
pub enum Provider {
	/// Shown verbatim.
	Literal(String),
	/// Name of an entry in the [`ProviderRegistry`].
	Lookup(String),
	/// Invoked directly.
	Dynamic(ProviderFn),
}

impl Provider {
	pub fn dynamic(f: impl Fn(&ProviderContext<'_>) -> Result<String, ProviderError> + Send + Sync + 'static) -> Self {
		Self::Dynamic(Arc::new(f))
	}
}

impl Default for Provider {
	fn default() -> Self {
		Self::Literal(String::new())
	}
}

impl Clone for Provider {
	fn clone(&self) -> Self {
		match self {
			Self::Literal(text) => Self::Literal(text.clone()),
			Self::Lookup(key) => Self::Lookup(key.clone()),
			Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
		}
	}
}

impl fmt::Debug for Provider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
			Self::Lookup(key) => f.debug_tuple("Lookup").field(key).finish(),
			Self::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

impl From<&str> for Provider {
	fn from(text: &str) -> Self {
		Self::Literal(text.to_string())
	}
}

/// Externally supplied providers, looked up by name.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
	providers: FxHashMap<String, ProviderFn>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `f` under `name`, replacing any previous entry.
	pub fn register(
		&mut self,
		name: impl Into<String>,
		f: impl Fn(&ProviderContext<'_>) -> Result<String, ProviderError> + Send + Sync + 'static,
	) -> &mut Self {
		self.providers.insert(name.into(), Arc::new(f));
		self
	}

	pub fn get(&self, name: &str) -> Option<&ProviderFn> {
		self.providers.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.providers.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Produces the text for `provider`.
	///
	/// An unregistered lookup key is shown as literal text.
	pub fn resolve<'p>(&self, provider: &'p Provider, ctx: &ProviderContext<'_>) -> Result<Cow<'p, str>, ProviderError> {
		match provider {
			Provider::Literal(text) => Ok(Cow::Borrowed(text)),
			Provider::Lookup(key) => match self.get(key) {
				Some(f) => f(ctx).map(Cow::Owned),
				None => {
					debug!(provider = %key, "unknown provider, rendering key as text");
					Ok(Cow::Borrowed(key))
				}
			},
			Provider::Dynamic(f) => f(ctx).map(Cow::Owned),
		}
	}
}

impl fmt::Debug for ProviderRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
		names.sort_unstable();
		f.debug_struct("ProviderRegistry").field("providers", &names).finish()
	}
}
