//! Declarative configuration for the ribbon statusline.
//!
//! Configuration is plain data deserialized with serde; [`Config::parse`]
//! reads it from TOML:
//!
//! ```toml
//! [colors]
//! fg = "#d0d0d0"
//! bg = "#1f1f23"
//!
//! [colors.table]
//! skyblue = "#7eb6e6"
//!
//! [separators]
//! slant_right = ""
//!
//! [force_inactive]
//! filetypes = ["NvimTree", "packer"]
//! buftypes = ["terminal"]
//!
//! [[components.left.active]]
//! provider = "vi_mode"
//! hl = { fg = "black", bg = "skyblue", style = "bold" }
//! right_sep = "slant_right"
//!
//! [[components.right.active]]
//! provider = { text = "utf-8" }
//! left_sep = [" ", { str = "vertical_bar", hl = { fg = "skyblue" } }]
//! ```
//!
//! [`Config::into_statusline`] normalizes the raw values into the typed
//! [`Statusline`] once: string providers registered in the supplied
//! [`ProviderRegistry`] become lookups, everything else literal text, and every
//! highlight is checked against the color table. Dynamic fields are only
//! reachable through the builder API of `ribbon-statusline`.

pub mod error;
mod normalize;
pub mod schema;

use std::collections::BTreeMap;
use std::mem;

pub use error::{ConfigError, Result};
use ribbon_statusline::{ForceInactive, Palette, ProviderRegistry, SeparatorPresets, Statusline};
pub use schema::{
	ColorsConfig, ComponentConfig, ComponentsConfig, ForceInactiveConfig, ProviderConfig, SeparatorConfig,
	SeparatorEntry, StateListsConfig, StyledSeparator,
};
use serde::Deserialize;

/// Parsed statusline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Default colors and the symbolic color table.
	pub colors: ColorsConfig,
	/// Separator presets: symbolic name to glyph.
	pub separators: BTreeMap<String, String>,
	/// Buffers that always get the inactive layout.
	pub force_inactive: ForceInactiveConfig,
	/// Component lists per side and window state.
	pub components: ComponentsConfig,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Merge another config into this one.
	///
	/// Colors, presets and forced-inactive rules are combined with `other`
	/// winning on conflicts; each non-empty component list in `other` replaces
	/// the corresponding list here.
	pub fn merge(&mut self, other: Config) {
		if other.colors.fg.is_some() {
			self.colors.fg = other.colors.fg;
		}
		if other.colors.bg.is_some() {
			self.colors.bg = other.colors.bg;
		}
		self.colors.table.extend(other.colors.table);
		self.separators.extend(other.separators);

		self.force_inactive.buftypes.extend(other.force_inactive.buftypes);
		self.force_inactive.filetypes.extend(other.force_inactive.filetypes);
		self.force_inactive.bufnames.extend(other.force_inactive.bufnames);

		let mut other_components = other.components;
		for (mine, theirs) in [
			(&mut self.components.left.active, &mut other_components.left.active),
			(&mut self.components.left.inactive, &mut other_components.left.inactive),
			(&mut self.components.right.active, &mut other_components.right.active),
			(&mut self.components.right.inactive, &mut other_components.right.inactive),
		] {
			if !theirs.is_empty() {
				*mine = mem::take(theirs);
			}
		}
	}

	/// The color table, with `NONE` for unset defaults.
	pub fn palette(&self) -> Palette {
		let mut palette = Palette::new(
			self.colors.fg.clone().unwrap_or_default(),
			self.colors.bg.clone().unwrap_or_default(),
		);
		for (key, color) in &self.colors.table {
			palette.insert(key.clone(), color.clone());
		}
		palette
	}

	pub fn presets(&self) -> SeparatorPresets {
		let mut presets = SeparatorPresets::new();
		for (key, glyph) in &self.separators {
			presets.insert(key.clone(), glyph.clone());
		}
		presets
	}

	pub fn force_inactive(&self) -> ForceInactive {
		ForceInactive::new()
			.buftypes(self.force_inactive.buftypes.iter().cloned())
			.filetypes(self.force_inactive.filetypes.iter().cloned())
			.bufnames(self.force_inactive.bufnames.iter().cloned())
	}

	/// Normalizes the configuration into a [`Statusline`] using `providers`.
	pub fn into_statusline(self, providers: ProviderRegistry) -> Result<Statusline> {
		let palette = self.palette();
		let presets = self.presets();
		let force_inactive = self.force_inactive();
		let components = normalize::components(self.components, &palette, &providers)?;

		Ok(Statusline::new(components)
			.with_force_inactive(force_inactive)
			.with_presets(presets)
			.with_providers(providers))
	}
}
