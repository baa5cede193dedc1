//! Statusline components and their rendering.

use tracing::warn;

use crate::field::{Field, Scope};
use crate::highlight::HighlightSpec;
use crate::host::HostError;
use crate::markup::push_highlight;
use crate::provider::{Provider, ProviderContext};
use crate::render::Renderer;
use crate::separator::Separators;

/// One cell of the statusline.
///
/// Every field but `provider` is optional: components are enabled by
/// default, have no icon, use the default highlight and draw no separators.
#[derive(Debug, Clone)]
pub struct Component {
	pub provider: Provider,
	pub enabled: Field<bool>,
	pub icon: Option<Field<String>>,
	pub hl: Option<Field<HighlightSpec>>,
	pub left_sep: Separators,
	pub right_sep: Separators,
}

impl Default for Component {
	fn default() -> Self {
		Self::new(Provider::default())
	}
}

impl Component {
	pub fn new(provider: impl Into<Provider>) -> Self {
		Self {
			provider: provider.into(),
			enabled: Field::Literal(true),
			icon: None,
			hl: None,
			left_sep: Separators::none(),
			right_sep: Separators::none(),
		}
	}

	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = Field::Literal(enabled);
		self
	}

	pub fn enabled_when(mut self, f: impl Fn(&Scope<'_>) -> bool + Send + Sync + 'static) -> Self {
		self.enabled = Field::dynamic(f);
		self
	}

	pub fn icon(mut self, icon: impl Into<Field<String>>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn hl(mut self, hl: HighlightSpec) -> Self {
		self.hl = Some(Field::Literal(hl));
		self
	}

	pub fn hl_when(mut self, f: impl Fn(&Scope<'_>) -> HighlightSpec + Send + Sync + 'static) -> Self {
		self.hl = Some(Field::dynamic(f));
		self
	}

	pub fn left_sep(mut self, sep: impl Into<Separators>) -> Self {
		self.left_sep = sep.into();
		self
	}

	pub fn right_sep(mut self, sep: impl Into<Separators>) -> Self {
		self.right_sep = sep.into();
		self
	}
}

impl Renderer<'_> {
	/// Renders `component` as `left_sep + marker + text + right_sep`.
	///
	/// A disabled component renders as the empty string. A provider error is
	/// logged and the component is drawn with empty text.
	pub fn render_component(&mut self, component: &Component) -> Result<String, HostError> {
		let scope = self.scope;

		let enabled = *component.enabled.evaluate(&scope);
		if !enabled {
			return Ok(String::new());
		}

		let default_hl = HighlightSpec::default();
		let hl = component.hl.as_ref().map(|hl| hl.evaluate(&scope));
		let hl: &HighlightSpec = hl.as_deref().unwrap_or(&default_hl);
		let icon = component.icon.as_ref().map(|icon| icon.evaluate(&scope));

		let parent_bg = hl.bg.as_deref();
		let left = self.render_separators(&component.left_sep, parent_bg)?;
		let right = self.render_separators(&component.right_sep, parent_bg)?;

		let ctx = ProviderContext {
			enabled,
			hl,
			icon: icon.as_deref().map(String::as_str),
			left_sep: &component.left_sep,
			right_sep: &component.right_sep,
			scope: &scope,
		};
		let providers = self.providers;
		let text = providers.resolve(&component.provider, &ctx).unwrap_or_else(|error| {
			warn!(provider = ?component.provider, %error, "provider did not produce text");
			"".into()
		});

		let group = self.highlight(hl)?;

		let mut out = String::with_capacity(left.len() + group.len() + text.len() + right.len() + 3);
		out.push_str(&left);
		push_highlight(&mut out, &group);
		out.push_str(&text);
		out.push_str(&right);
		Ok(out)
	}
}

#[cfg(test)]
mod tests;
