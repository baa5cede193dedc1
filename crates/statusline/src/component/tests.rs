use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use ribbon_primitives::Color;

use super::*;
use crate::field::WindowState;
use crate::highlight::Palette;
use crate::provider::{ProviderError, ProviderRegistry};
use crate::separator::{Separator, SeparatorPresets, SeparatorSpec};
use crate::testing::Harness;

fn harness() -> Harness {
	let palette = Palette::new(Color::White, Color::Black)
		.with_color("skyblue", Color::Rgb(0x7b, 0xb6, 0xe6))
		.with_color("oceanblue", Color::Rgb(0x00, 0x57, 0xae));
	let presets = SeparatorPresets::new().with("vertical_bar", "┃").with("slant_right", "\u{e0bc}");
	let mut providers = ProviderRegistry::new();
	providers
		.register("file_type", |ctx| Ok(ctx.scope.buffer.filetype.clone()))
		.register("icon_echo", |ctx| Ok(ctx.icon.unwrap_or("-").to_string()))
		.register("broken", |_| Err(ProviderError::Failed("git unavailable".into())));
	Harness::new(palette, presets, providers)
}

fn render(h: &mut Harness, component: &Component) -> String {
	h.renderer().render_component(component).unwrap()
}

#[test]
fn disabled_component_renders_nothing() {
	let mut h = harness();
	let component = Component::new(" NORMAL ")
		.enabled(false)
		.hl(HighlightSpec::new().fg("skyblue").style("bold"))
		.left_sep("vertical_bar")
		.right_sep(" ");

	assert_eq!(render(&mut h, &component), "");
	assert_eq!(h.resolver.registered_len(), 1);
}

#[test]
fn disabled_component_never_calls_its_provider() {
	let mut h = harness();
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&calls);
	let component = Component::new(Provider::dynamic(move |_| {
		seen.fetch_add(1, Ordering::SeqCst);
		Ok("x".into())
	}))
	.enabled_when(|scope| scope.buffer.filetype == "rust");

	assert_eq!(render(&mut h, &component), "");
	assert_eq!(calls.load(Ordering::SeqCst), 0);

	h.buffer.filetype = "rust".into();
	assert_eq!(render(&mut h, &component), "%#RibbonDefault#x");
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn bare_component_uses_default_group() {
	let mut h = harness();
	assert_eq!(render(&mut h, &Component::new("text")), "%#RibbonDefault#text");
}

#[test]
fn full_component_concatenates_in_order() {
	let mut h = harness();
	h.buffer.filetype = "lua".into();
	let component = Component::new(Provider::Lookup("file_type".into()))
		.hl(HighlightSpec::new().fg("white").bg("oceanblue").style("bold"))
		.left_sep("slant_right")
		.right_sep(" ");

	let sep_group = h.group(&HighlightSpec::new().fg("oceanblue").bg("black"));
	let body_group = h.group(&HighlightSpec::new().fg("white").bg("#0057ae").style("bold"));

	assert_eq!(
		render(&mut h, &component),
		format!("%#{sep_group}#\u{e0bc}%#{body_group}#lua%#{sep_group}# ")
	);
}

#[test]
fn both_separators_key_off_the_component_background() {
	let mut h = harness();
	let component = Component::new("x").hl(HighlightSpec::new().bg("skyblue")).left_sep("<").right_sep(">");

	assert_eq!(
		render(&mut h, &component),
		"%#Ribbon_7bb6e6_black_NONE#<%#Ribbon_white_7bb6e6_NONE#x%#Ribbon_7bb6e6_black_NONE#>"
	);
}

#[test]
fn provider_receives_evaluated_icon() {
	let mut h = harness();
	let component = Component::new(Provider::Lookup("icon_echo".into())).icon(Field::dynamic(|scope| {
		match scope.state {
			WindowState::Active => "●".to_string(),
			WindowState::Inactive => "○".to_string(),
		}
	}));

	assert_eq!(render(&mut h, &component), "%#RibbonDefault#●");
	h.state = WindowState::Inactive;
	assert_eq!(render(&mut h, &component), "%#RibbonDefault#○");
}

#[test]
fn provider_receives_raw_separator_specs() {
	let mut h = harness();
	let chain: Separators = [Separator::from("slant_right"), Separator::from(SeparatorSpec::new(" "))]
		.into_iter()
		.collect();
	let component = Component::new(Provider::dynamic(|ctx| {
		let kinds: Vec<&str> = ctx
			.left_sep
			.iter()
			.map(|sep| match sep {
				Separator::Plain(text) => text.as_str(),
				Separator::Styled(_) => "styled",
				Separator::Dynamic(_) => "dynamic",
			})
			.collect();
		Ok(kinds.join(","))
	}))
	.left_sep(chain);

	let out = render(&mut h, &component);
	assert!(out.ends_with("%#RibbonDefault#slant_right,styled"), "{out}");
}

#[test]
fn dynamic_highlight_is_evaluated_per_render() {
	let mut h = harness();
	let component = Component::new("m").hl_when(|scope| match scope.state {
		WindowState::Active => HighlightSpec::new().fg("skyblue"),
		WindowState::Inactive => HighlightSpec::new().fg("oceanblue"),
	});

	assert_eq!(render(&mut h, &component), "%#Ribbon_7bb6e6_black_NONE#m");
	h.state = WindowState::Inactive;
	assert_eq!(render(&mut h, &component), "%#Ribbon_0057ae_black_NONE#m");
}

#[test]
fn failing_provider_keeps_highlight_and_separators() {
	let mut h = harness();
	let component = Component::new(Provider::Lookup("broken".into()))
		.hl(HighlightSpec::new().named("GitBranch"))
		.right_sep("vertical_bar");

	assert_eq!(render(&mut h, &component), "%#GitBranch#%#Ribbon_black_black_NONE#┃");
}

#[test]
fn invalid_highlight_degrades_to_default_group() {
	let mut h = harness();
	let component = Component::new("x").hl(HighlightSpec::new().fg("chartreuse-ish"));
	assert_eq!(render(&mut h, &component), "%#RibbonDefault#x");
}

#[test]
fn host_failure_is_propagated() {
	let mut h = harness();
	h.host.fail_defines(true);
	let component = Component::new("x").hl(HighlightSpec::new().fg("skyblue"));

	let err = h.renderer().render_component(&component).unwrap_err();
	assert!(matches!(err, HostError::DefineHighlight { .. }));
}
