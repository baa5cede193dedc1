//! Statusline assembly for a window.

use crate::component::Component;
use crate::error::Result;
use crate::field::{Scope, WindowState};
use crate::highlight::{DEFAULT_GROUP, HighlightResolver};
use crate::host::{BufferInfo, Host};
use crate::markup::{FLEX_GAP, push_highlight};
use crate::policy::ForceInactive;
use crate::provider::ProviderRegistry;
use crate::render::Renderer;
use crate::separator::SeparatorPresets;

/// Components of one side of the line, per window state.
#[derive(Debug, Clone, Default)]
pub struct StateLists {
	pub active: Vec<Component>,
	pub inactive: Vec<Component>,
}

impl StateLists {
	pub fn get(&self, state: WindowState) -> &[Component] {
		match state {
			WindowState::Active => &self.active,
			WindowState::Inactive => &self.inactive,
		}
	}
}

/// Left and right component groups.
#[derive(Debug, Clone, Default)]
pub struct ComponentSets {
	pub left: StateLists,
	pub right: StateLists,
}

impl ComponentSets {
	pub fn left(&self, state: WindowState) -> &[Component] {
		self.left.get(state)
	}

	pub fn right(&self, state: WindowState) -> &[Component] {
		self.right.get(state)
	}
}

/// A configured statusline.
///
/// Read-only during rendering; the only state touched by [`generate`](Self::generate)
/// is the resolver's registration cache.
#[derive(Debug, Clone, Default)]
pub struct Statusline {
	pub components: ComponentSets,
	pub force_inactive: ForceInactive,
	pub presets: SeparatorPresets,
	pub providers: ProviderRegistry,
}

impl Statusline {
	pub fn new(components: ComponentSets) -> Self {
		Self {
			components,
			..Self::default()
		}
	}

	pub fn with_force_inactive(mut self, force_inactive: ForceInactive) -> Self {
		self.force_inactive = force_inactive;
		self
	}

	pub fn with_presets(mut self, presets: SeparatorPresets) -> Self {
		self.presets = presets;
		self
	}

	pub fn with_providers(mut self, providers: ProviderRegistry) -> Self {
		self.providers = providers;
		self
	}

	/// Active only when the window has focus and the buffer is not forced inactive.
	pub fn state_for(&self, buffer: &BufferInfo, is_window_active: bool) -> WindowState {
		if is_window_active && !self.force_inactive.matches(buffer) {
			WindowState::Active
		} else {
			WindowState::Inactive
		}
	}

	/// Renders the full line: left group, flex gap, right group, default marker.
	pub fn generate(&self, resolver: &mut HighlightResolver, host: &dyn Host, is_window_active: bool) -> Result<String> {
		let buffer = host.current_buffer()?;
		let state = self.state_for(&buffer, is_window_active);
		let scope = Scope { buffer: &buffer, state };
		let mut renderer = Renderer::new(resolver, host, &self.presets, &self.providers, scope);

		let mut out = String::new();
		for component in self.components.left(state) {
			out.push_str(&renderer.render_component(component)?);
		}
		out.push_str(FLEX_GAP);
		for component in self.components.right(state) {
			out.push_str(&renderer.render_component(component)?);
		}
		push_highlight(&mut out, DEFAULT_GROUP);
		Ok(out)
	}
}
