//! In-memory [`Host`] for tests.

use std::cell::{Cell, RefCell};

use crate::field::{Scope, WindowState};
use crate::highlight::{HighlightGroup, HighlightResolver, HighlightSpec, Palette};
use crate::host::{BufferInfo, Host, HostError};
use crate::provider::ProviderRegistry;
use crate::render::Renderer;
use crate::separator::SeparatorPresets;

/// Host that records every call and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingHost {
	buffer: RefCell<BufferInfo>,
	defined: RefCell<Vec<HighlightGroup>>,
	cleared: RefCell<Vec<String>>,
	fail_define: Cell<bool>,
	fail_buffer: Cell<bool>,
}

impl RecordingHost {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_buffer(buffer: BufferInfo) -> Self {
		Self {
			buffer: RefCell::new(buffer),
			..Self::default()
		}
	}

	pub fn set_buffer(&self, buffer: BufferInfo) {
		*self.buffer.borrow_mut() = buffer;
	}

	/// Makes subsequent `define_highlight` calls fail.
	pub fn fail_defines(&self, fail: bool) {
		self.fail_define.set(fail);
	}

	/// Makes subsequent `current_buffer` calls fail.
	pub fn fail_buffer(&self, fail: bool) {
		self.fail_buffer.set(fail);
	}

	/// Every group registered so far, in call order.
	pub fn defined(&self) -> Vec<HighlightGroup> {
		self.defined.borrow().clone()
	}

	/// Number of registrations recorded for `name`.
	pub fn define_count(&self, name: &str) -> usize {
		self.defined.borrow().iter().filter(|g| g.name == name).count()
	}

	pub fn cleared(&self) -> Vec<String> {
		self.cleared.borrow().clone()
	}
}

impl Host for RecordingHost {
	fn current_buffer(&self) -> Result<BufferInfo, HostError> {
		if self.fail_buffer.get() {
			return Err(HostError::Buffer("no current buffer".into()));
		}
		Ok(self.buffer.borrow().clone())
	}

	fn define_highlight(&self, group: &HighlightGroup) -> Result<(), HostError> {
		if self.fail_define.get() {
			return Err(HostError::DefineHighlight {
				name: group.name.clone(),
				reason: "rejected by test host".into(),
			});
		}
		self.defined.borrow_mut().push(group.clone());
		Ok(())
	}

	fn clear_highlight(&self, name: &str) -> Result<(), HostError> {
		self.cleared.borrow_mut().push(name.to_string());
		Ok(())
	}
}

/// A [`RecordingHost`] bundled with the state one render pass borrows.
#[derive(Debug)]
pub struct Harness {
	pub host: RecordingHost,
	pub resolver: HighlightResolver,
	pub presets: SeparatorPresets,
	pub providers: ProviderRegistry,
	pub buffer: BufferInfo,
	pub state: WindowState,
}

impl Harness {
	/// Panics if the recording host rejects the default group, which it never does.
	pub fn new(palette: Palette, presets: SeparatorPresets, providers: ProviderRegistry) -> Self {
		let host = RecordingHost::new();
		let resolver = HighlightResolver::new(palette, &host).unwrap_or_else(|e| panic!("{e}"));
		Self {
			host,
			resolver,
			presets,
			providers,
			buffer: BufferInfo::default(),
			state: WindowState::Active,
		}
	}

	pub fn renderer(&mut self) -> Renderer<'_> {
		let scope = Scope {
			buffer: &self.buffer,
			state: self.state,
		};
		Renderer::new(&mut self.resolver, &self.host, &self.presets, &self.providers, scope)
	}

	/// Group name `spec` resolves to, registering it if needed.
	pub fn group(&mut self, spec: &HighlightSpec) -> String {
		self.resolver.resolve(spec, &self.host).unwrap_or_else(|e| panic!("{e}"))
	}
}
