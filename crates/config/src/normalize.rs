//! Turns raw configuration into the statusline's tagged field types.

use ribbon_primitives::Attributes;
use ribbon_statusline::{
	Component, ComponentSets, Field, HighlightSpec, Palette, Provider, ProviderRegistry, Separator, SeparatorSpec,
	Separators, StateLists,
};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::schema::{
	ComponentConfig, ComponentsConfig, ProviderConfig, SeparatorConfig, SeparatorEntry, StateListsConfig,
};

pub(crate) fn components(
	raw: ComponentsConfig,
	palette: &Palette,
	providers: &ProviderRegistry,
) -> Result<ComponentSets> {
	Ok(ComponentSets {
		left: state_lists(raw.left, "components.left", palette, providers)?,
		right: state_lists(raw.right, "components.right", palette, providers)?,
	})
}

fn state_lists(
	raw: StateListsConfig,
	prefix: &str,
	palette: &Palette,
	providers: &ProviderRegistry,
) -> Result<StateLists> {
	Ok(StateLists {
		active: list(raw.active, &format!("{prefix}.active"), palette, providers)?,
		inactive: list(raw.inactive, &format!("{prefix}.inactive"), palette, providers)?,
	})
}

fn list(
	raw: Vec<ComponentConfig>,
	prefix: &str,
	palette: &Palette,
	providers: &ProviderRegistry,
) -> Result<Vec<Component>> {
	raw.into_iter()
		.enumerate()
		.map(|(i, c)| component(c, &format!("{prefix}[{i}]"), palette, providers))
		.collect()
}

fn component(raw: ComponentConfig, location: &str, palette: &Palette, providers: &ProviderRegistry) -> Result<Component> {
	if let Some(hl) = &raw.hl {
		check_highlight(hl, location, palette)?;
	}

	Ok(Component {
		provider: provider(raw.provider, providers),
		enabled: Field::Literal(raw.enabled.unwrap_or(true)),
		icon: raw.icon.map(Field::Literal),
		hl: raw.hl.map(Field::Literal),
		left_sep: separators(raw.left_sep, &format!("{location}.left_sep"), palette)?,
		right_sep: separators(raw.right_sep, &format!("{location}.right_sep"), palette)?,
	})
}

fn provider(raw: Option<ProviderConfig>, providers: &ProviderRegistry) -> Provider {
	match raw {
		None => Provider::default(),
		Some(ProviderConfig::Text { text }) => Provider::Literal(text),
		Some(ProviderConfig::Key(key)) if providers.contains(&key) => Provider::Lookup(key),
		Some(ProviderConfig::Key(key)) => {
			debug!(provider = %key, "no provider registered under this name, using it as text");
			Provider::Literal(key)
		}
	}
}

fn separators(raw: Option<SeparatorConfig>, location: &str, palette: &Palette) -> Result<Separators> {
	match raw {
		None => Ok(Separators::none()),
		Some(SeparatorConfig::One(entry)) => Ok(separator(entry, location, palette)?.into()),
		Some(SeparatorConfig::Chain(entries)) => entries
			.into_iter()
			.enumerate()
			.map(|(i, entry)| separator(entry, &format!("{location}[{i}]"), palette))
			.collect(),
	}
}

fn separator(entry: SeparatorEntry, location: &str, palette: &Palette) -> Result<Separator> {
	match entry {
		SeparatorEntry::Text(text) => Ok(Separator::Plain(text)),
		SeparatorEntry::Styled(styled) => {
			let mut spec = SeparatorSpec::new(styled.str);
			if let Some(hl) = styled.hl {
				check_highlight(&hl, location, palette)?;
				spec = spec.with_hl(hl);
			}
			Ok(Separator::Styled(spec))
		}
		SeparatorEntry::Nested(_) => Err(ConfigError::NestedSeparatorList {
			location: location.to_string(),
		}),
	}
}

/// Fails early on colors and attributes the resolver would reject at render time.
fn check_highlight(hl: &HighlightSpec, location: &str, palette: &Palette) -> Result<()> {
	let invalid = |source| ConfigError::InvalidHighlight {
		location: location.to_string(),
		source,
	};

	for color in [&hl.fg, &hl.bg].into_iter().flatten() {
		palette.resolve_color(color).map_err(invalid)?;
	}
	if let Some(style) = &hl.style {
		Attributes::parse(style).map_err(invalid)?;
	}
	Ok(())
}
