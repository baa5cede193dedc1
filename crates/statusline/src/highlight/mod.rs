//! Highlight group resolution and the per-session registration cache.

use ribbon_primitives::{Attributes, Color, ParseError};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::host::{Host, HostError};

/// Group used for empty highlight specs and for the trailing reset marker.
pub const DEFAULT_GROUP: &str = "RibbonDefault";

/// Prefix of every derived group name.
const DERIVED_PREFIX: &str = "Ribbon";

/// A highlight as written in configuration.
///
/// `fg` and `bg` are either literal colors or keys into the [`Palette`];
/// `style` is a comma-joined attribute list. Missing fields take the
/// palette defaults and `NONE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightSpec {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fg: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bg: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	/// Explicit group name; derived from the colors when absent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl HighlightSpec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fg(mut self, fg: impl Into<String>) -> Self {
		self.fg = Some(fg.into());
		self
	}

	pub fn bg(mut self, bg: impl Into<String>) -> Self {
		self.bg = Some(bg.into());
		self
	}

	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}

	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// True when no field is set; such specs map to [`DEFAULT_GROUP`].
	pub fn is_empty(&self) -> bool {
		self.fg.is_none() && self.bg.is_none() && self.style.is_none() && self.name.is_none()
	}
}

/// A fully resolved group, ready for the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighlightGroup {
	pub name: String,
	pub fg: Color,
	pub bg: Color,
	pub attrs: Attributes,
}

impl HighlightGroup {
	/// An anonymous group, named after its colors.
	pub fn new(fg: Color, bg: Color, attrs: Attributes) -> Self {
		Self {
			name: Self::derive_name(&fg, &bg, attrs),
			fg,
			bg,
			attrs,
		}
	}

	/// Deterministic name for an anonymous (fg, bg, attrs) triple.
	pub fn derive_name(fg: &Color, bg: &Color, attrs: Attributes) -> String {
		let fg = fg.to_string();
		let bg = bg.to_string();
		let style = attrs.to_string().replace(',', "_");
		format!(
			"{DERIVED_PREFIX}_{}_{}_{style}",
			fg.trim_start_matches('#'),
			bg.trim_start_matches('#')
		)
	}
}

/// The global color table plus the default foreground and background.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
	pub fg: Color,
	pub bg: Color,
	colors: FxHashMap<String, Color>,
}

impl Palette {
	pub fn new(fg: Color, bg: Color) -> Self {
		Self {
			fg,
			bg,
			colors: FxHashMap::default(),
		}
	}

	/// Adds or replaces a symbolic color.
	pub fn with_color(mut self, key: impl Into<String>, color: Color) -> Self {
		self.insert(key, color);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, color: Color) {
		self.colors.insert(key.into(), color);
	}

	pub fn get(&self, key: &str) -> Option<Color> {
		self.colors.get(key).cloned()
	}

	/// Resolves a color value, preferring the symbolic table over literal parsing.
	pub fn resolve_color(&self, value: &str) -> Result<Color, ParseError> {
		match self.get(value) {
			Some(color) => Ok(color),
			None => Color::parse(value),
		}
	}
}

/// Failures while turning a spec into a registered group.
#[derive(Debug, Error)]
pub enum HighlightError {
	/// The spec names a color or attribute that does not parse.
	#[error(transparent)]
	Spec(#[from] ParseError),

	/// The host refused the registration.
	#[error(transparent)]
	Host(#[from] HostError),
}

/// Maps highlight specs to registered group names.
///
/// One resolver lives for the whole editor session and is handed to every
/// render call. Each group name is registered with the host at most once;
/// when an explicit name is reused with different colors, the first
/// registration wins.
#[derive(Debug)]
pub struct HighlightResolver {
	palette: Palette,
	registered: FxHashSet<String>,
}

impl HighlightResolver {
	/// Creates the resolver and registers [`DEFAULT_GROUP`] from the palette defaults.
	pub fn new(palette: Palette, host: &dyn Host) -> Result<Self, HostError> {
		let mut resolver = Self {
			palette,
			registered: FxHashSet::default(),
		};
		resolver.register_default(host)?;
		Ok(resolver)
	}

	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Whether `name` has already been registered this session.
	pub fn is_registered(&self, name: &str) -> bool {
		self.registered.contains(name)
	}

	/// Number of groups registered this session, the default group included.
	pub fn registered_len(&self) -> usize {
		self.registered.len()
	}

	/// Fills defaults, substitutes palette keys and derives the name.
	///
	/// Pure: the spec is left untouched and nothing is registered.
	pub fn resolve_spec(&self, spec: &HighlightSpec) -> Result<HighlightGroup, ParseError> {
		if spec.is_empty() {
			return Ok(self.default_group());
		}

		let fg = match spec.fg.as_deref() {
			Some(value) => self.palette.resolve_color(value)?,
			None => self.palette.fg.clone(),
		};
		let bg = match spec.bg.as_deref() {
			Some(value) => self.palette.resolve_color(value)?,
			None => self.palette.bg.clone(),
		};
		let attrs = match spec.style.as_deref() {
			Some(value) => Attributes::parse(value)?,
			None => Attributes::empty(),
		};
		Ok(match &spec.name {
			Some(name) => HighlightGroup {
				name: name.clone(),
				fg,
				bg,
				attrs,
			},
			None => HighlightGroup::new(fg, bg, attrs),
		})
	}

	/// Registers `group` unless a group of that name already exists, returning its name.
	pub fn register(&mut self, group: HighlightGroup, host: &dyn Host) -> Result<String, HostError> {
		if !self.registered.contains(&group.name) {
			host.define_highlight(&group)?;
			trace!(name = %group.name, fg = %group.fg, bg = %group.bg, attrs = %group.attrs, "registered highlight group");
			self.registered.insert(group.name.clone());
		}
		Ok(group.name)
	}

	/// Resolves `spec` to a registered group name.
	pub fn resolve(&mut self, spec: &HighlightSpec, host: &dyn Host) -> Result<String, HighlightError> {
		let group = self.resolve_spec(spec)?;
		Ok(self.register(group, host)?)
	}

	/// Clears every group this session registered, then re-registers the default group.
	pub fn reset(&mut self, host: &dyn Host) -> Result<(), HostError> {
		let names: Vec<String> = self.registered.iter().cloned().collect();
		for name in names {
			host.clear_highlight(&name)?;
			self.registered.remove(&name);
		}
		self.register_default(host)
	}

	/// Swaps the color table. Registered groups are cleared since their colors may be stale.
	pub fn set_palette(&mut self, palette: Palette, host: &dyn Host) -> Result<(), HostError> {
		self.palette = palette;
		self.reset(host)
	}

	fn default_group(&self) -> HighlightGroup {
		HighlightGroup {
			name: DEFAULT_GROUP.to_string(),
			fg: self.palette.fg.clone(),
			bg: self.palette.bg.clone(),
			attrs: Attributes::empty(),
		}
	}

	fn register_default(&mut self, host: &dyn Host) -> Result<(), HostError> {
		let group = self.default_group();
		self.register(group, host).map(drop)
	}
}

#[cfg(test)]
mod tests;
