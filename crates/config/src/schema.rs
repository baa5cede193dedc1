//! Serde shapes of the configuration as written.

use std::collections::BTreeMap;

use ribbon_primitives::Color;
use ribbon_statusline::HighlightSpec;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// `[colors]`: default foreground/background and the symbolic color table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
	pub fg: Option<Color>,
	pub bg: Option<Color>,
	pub table: BTreeMap<String, Color>,
}

/// `[force_inactive]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForceInactiveConfig {
	pub buftypes: Vec<String>,
	pub filetypes: Vec<String>,
	pub bufnames: Vec<String>,
}

/// `[components]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentsConfig {
	pub left: StateListsConfig,
	pub right: StateListsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateListsConfig {
	pub active: Vec<ComponentConfig>,
	pub inactive: Vec<ComponentConfig>,
}

/// One `[[components.<side>.<state>]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentConfig {
	pub provider: Option<ProviderConfig>,
	pub enabled: Option<bool>,
	pub icon: Option<String>,
	pub hl: Option<HighlightSpec>,
	pub left_sep: Option<SeparatorConfig>,
	pub right_sep: Option<SeparatorConfig>,
}

/// `provider = "name"` looks the name up; `provider = { text = "..." }` is always literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProviderConfig {
	Key(String),
	Text {
		text: String,
	},
}

/// A separator field: one entry or a list of entries.
///
/// Lists are tried first so that an array is never read as a single entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeparatorConfig {
	Chain(Vec<SeparatorEntry>),
	One(SeparatorEntry),
}

/// A single separator as written.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeparatorEntry {
	Text(String),
	Styled(StyledSeparator),
	/// An array inside a list; rejected during normalization.
	Nested(Vec<IgnoredAny>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyledSeparator {
	pub str: String,
	#[serde(default)]
	pub hl: Option<HighlightSpec>,
}
