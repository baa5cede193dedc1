//! Separators framing a component.
//!
//! A separator bridges its component's background into the page background:
//! unless it carries its own highlight, it is drawn with the component's `bg`
//! as foreground over the default background.

use std::fmt;
use std::sync::Arc;

use ribbon_primitives::{Attributes, ParseError};
use rustc_hash::FxHashMap;

use crate::field::{Callback, Scope};
use crate::highlight::{HighlightGroup, HighlightSpec};
use crate::host::HostError;
use crate::markup::push_highlight;
use crate::render::Renderer;

/// A glyph (or preset key) with an optional highlight of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorSpec {
	pub text: String,
	pub hl: Option<HighlightSpec>,
}

impl SeparatorSpec {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			hl: None,
		}
	}

	pub fn with_hl(mut self, hl: HighlightSpec) -> Self {
		self.hl = Some(hl);
		self
	}
}

/// One separator, tagged at configuration time.
pub enum Separator {
	/// Glyph or preset key with the bridging highlight.
	Plain(String),
	/// Glyph or preset key with an explicit highlight.
	Styled(SeparatorSpec),
	/// Computed on every render.
	Dynamic(Callback<SeparatorSpec>),
}

impl Separator {
	pub fn dynamic(f: impl Fn(&Scope<'_>) -> SeparatorSpec + Send + Sync + 'static) -> Self {
		Self::Dynamic(Arc::new(f))
	}
}

impl Clone for Separator {
	fn clone(&self) -> Self {
		match self {
			Self::Plain(text) => Self::Plain(text.clone()),
			Self::Styled(spec) => Self::Styled(spec.clone()),
			Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
		}
	}
}

impl fmt::Debug for Separator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Plain(text) => f.debug_tuple("Plain").field(text).finish(),
			Self::Styled(spec) => f.debug_tuple("Styled").field(spec).finish(),
			Self::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

impl From<&str> for Separator {
	fn from(text: &str) -> Self {
		Self::Plain(text.to_string())
	}
}

impl From<SeparatorSpec> for Separator {
	fn from(spec: SeparatorSpec) -> Self {
		Self::Styled(spec)
	}
}

/// The separators on one side of a component, drawn in order.
///
/// A single separator is a one-element list; several make a multi-color chain.
#[derive(Debug, Clone, Default)]
pub struct Separators(Vec<Separator>);

impl Separators {
	pub fn none() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Separator> {
		self.0.iter()
	}
}

impl From<Separator> for Separators {
	fn from(sep: Separator) -> Self {
		Self(vec![sep])
	}
}

impl From<&str> for Separators {
	fn from(text: &str) -> Self {
		Separator::from(text).into()
	}
}

impl From<SeparatorSpec> for Separators {
	fn from(spec: SeparatorSpec) -> Self {
		Separator::from(spec).into()
	}
}

impl FromIterator<Separator> for Separators {
	fn from_iter<I: IntoIterator<Item = Separator>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Symbolic separator names mapped to glyphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorPresets(FxHashMap<String, String>);

impl SeparatorPresets {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: impl Into<String>, glyph: impl Into<String>) -> Self {
		self.insert(key, glyph);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, glyph: impl Into<String>) {
		self.0.insert(key.into(), glyph.into());
	}

	pub fn glyph(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}
}

impl Renderer<'_> {
	/// Renders every separator in `seps`, keyed off the owning component's background.
	pub fn render_separators(&mut self, seps: &Separators, parent_bg: Option<&str>) -> Result<String, HostError> {
		let mut out = String::new();
		for sep in seps.iter() {
			self.render_separator_into(&mut out, sep, parent_bg)?;
		}
		Ok(out)
	}

	fn render_separator_into(&mut self, out: &mut String, sep: &Separator, parent_bg: Option<&str>) -> Result<(), HostError> {
		match sep {
			Separator::Plain(text) => self.push_glyph(out, text, None, parent_bg),
			Separator::Styled(spec) => self.push_glyph(out, &spec.text, spec.hl.as_ref(), parent_bg),
			Separator::Dynamic(f) => {
				let spec = f(&self.scope);
				self.push_glyph(out, &spec.text, spec.hl.as_ref(), parent_bg)
			}
		}
	}

	fn push_glyph(
		&mut self,
		out: &mut String,
		text: &str,
		hl: Option<&HighlightSpec>,
		parent_bg: Option<&str>,
	) -> Result<(), HostError> {
		let group = match hl {
			Some(hl) => self.highlight(hl)?,
			None => {
				let bridge = self.bridge_group(parent_bg);
				self.register_or_default(bridge)?
			}
		};
		let presets = self.presets;
		push_highlight(out, &group);
		out.push_str(presets.glyph(text).unwrap_or(text));
		Ok(())
	}

	/// `{fg: parent_bg, bg: default_bg}`; a component without a background sits on the default one.
	///
	/// Only `parent_bg` goes through the palette. The default background is
	/// already a color and is used as is.
	fn bridge_group(&self, parent_bg: Option<&str>) -> Result<HighlightGroup, ParseError> {
		let palette = self.resolver.palette();
		let fg = match parent_bg {
			Some(bg) => palette.resolve_color(bg)?,
			None => palette.bg.clone(),
		};
		Ok(HighlightGroup::new(fg, palette.bg.clone(), Attributes::empty()))
	}
}
