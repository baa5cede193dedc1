//! Fields that are either fixed at configuration time or computed per render.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::host::BufferInfo;

/// Focus state a statusline is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowState {
	Active,
	Inactive,
}

/// What a dynamic field can see while it is evaluated.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
	/// Buffer shown in the window being drawn.
	pub buffer: &'a BufferInfo,
	/// Effective state after the forced-inactive policy.
	pub state: WindowState,
}

/// Callback computing a field value on each render.
pub type Callback<T> = Arc<dyn Fn(&Scope<'_>) -> T + Send + Sync>;

/// A component field, tagged once at configuration time.
pub enum Field<T> {
	/// Value known up front.
	Literal(T),
	/// Value recomputed on every render.
	Dynamic(Callback<T>),
}

impl<T: Clone> Field<T> {
	pub fn dynamic(f: impl Fn(&Scope<'_>) -> T + Send + Sync + 'static) -> Self {
		Self::Dynamic(Arc::new(f))
	}

	/// Current value; literals are borrowed, callbacks are invoked.
	pub fn evaluate(&self, scope: &Scope<'_>) -> Cow<'_, T> {
		match self {
			Self::Literal(value) => Cow::Borrowed(value),
			Self::Dynamic(f) => Cow::Owned(f(scope)),
		}
	}
}

impl<T> From<T> for Field<T> {
	fn from(value: T) -> Self {
		Self::Literal(value)
	}
}

impl From<&str> for Field<String> {
	fn from(value: &str) -> Self {
		Self::Literal(value.to_string())
	}
}

impl<T> Clone for Field<T>
where
	T: Clone,
{
	fn clone(&self) -> Self {
		match self {
			Self::Literal(value) => Self::Literal(value.clone()),
			Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			Self::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}
