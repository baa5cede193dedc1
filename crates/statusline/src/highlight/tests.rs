use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ribbon_primitives::{Attributes, Color, ParseError};

use super::*;
use crate::testing::RecordingHost;

fn palette() -> Palette {
	Palette::new(Color::Rgb(0xd8, 0xde, 0xe9), Color::Rgb(0x1e, 0x1e, 0x1e))
		.with_color("skyblue", Color::Rgb(0x7b, 0xb6, 0xe6))
		.with_color("red", Color::Rgb(0xec, 0x5f, 0x67))
}

fn resolver(host: &RecordingHost) -> HighlightResolver {
	HighlightResolver::new(palette(), host).unwrap()
}

#[test]
fn default_group_is_registered_up_front() {
	let host = RecordingHost::new();
	let resolver = resolver(&host);

	assert!(resolver.is_registered(DEFAULT_GROUP));
	assert_eq!(
		host.defined(),
		vec![HighlightGroup {
			name: DEFAULT_GROUP.into(),
			fg: Color::Rgb(0xd8, 0xde, 0xe9),
			bg: Color::Rgb(0x1e, 0x1e, 0x1e),
			attrs: Attributes::empty(),
		}]
	);
}

#[test]
fn empty_spec_maps_to_default_group() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);

	assert_eq!(resolver.resolve(&HighlightSpec::new(), &host).unwrap(), DEFAULT_GROUP);
	assert_eq!(host.define_count(DEFAULT_GROUP), 1);
}

#[test]
fn missing_fields_take_palette_defaults() {
	let host = RecordingHost::new();
	let resolver = resolver(&host);

	let group = resolver.resolve_spec(&HighlightSpec::new().style("bold")).unwrap();
	assert_eq!(group.fg, Color::Rgb(0xd8, 0xde, 0xe9));
	assert_eq!(group.bg, Color::Rgb(0x1e, 0x1e, 0x1e));
	assert_eq!(group.name, "Ribbon_d8dee9_1e1e1e_bold");
}

#[test]
fn derived_name_strips_hash_and_commas() {
	let host = RecordingHost::new();
	let resolver = resolver(&host);

	let spec = HighlightSpec::new().fg("#FFFFFF").bg("NONE").style("bold,italic");
	let group = resolver.resolve_spec(&spec).unwrap();
	assert_eq!(group.name, "Ribbon_ffffff_NONE_bold_italic");
}

#[test]
fn repeated_resolution_registers_once() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);
	let spec = HighlightSpec::new().fg("skyblue").bg("#000000");

	let first = resolver.resolve(&spec, &host).unwrap();
	let second = resolver.resolve(&spec, &host).unwrap();

	assert_eq!(first, second);
	assert_eq!(host.define_count(&first), 1);
}

#[test]
fn symbolic_and_literal_colors_share_a_group() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);

	let symbolic = resolver.resolve(&HighlightSpec::new().fg("skyblue"), &host).unwrap();
	let literal = resolver.resolve(&HighlightSpec::new().fg("#7BB6E6"), &host).unwrap();

	assert_eq!(symbolic, literal);
	assert_eq!(host.define_count(&symbolic), 1);
}

#[test]
fn palette_keys_shadow_named_colors() {
	let host = RecordingHost::new();
	let resolver = resolver(&host);

	let group = resolver.resolve_spec(&HighlightSpec::new().fg("red")).unwrap();
	assert_eq!(group.fg, Color::Rgb(0xec, 0x5f, 0x67));
}

#[test]
fn resolution_leaves_spec_untouched() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);
	let spec = HighlightSpec::new().fg("skyblue");
	let before = spec.clone();

	resolver.resolve(&spec, &host).unwrap();
	assert_eq!(spec, before);
}

#[test]
fn explicit_name_is_kept_and_first_registration_wins() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);

	let a = resolver.resolve(&HighlightSpec::new().fg("red").named("GitBranch"), &host).unwrap();
	let b = resolver.resolve(&HighlightSpec::new().fg("skyblue").named("GitBranch"), &host).unwrap();

	assert_eq!(a, "GitBranch");
	assert_eq!(b, "GitBranch");
	let groups: Vec<_> = host.defined().into_iter().filter(|g| g.name == "GitBranch").collect();
	assert_eq!(groups.len(), 1);
	assert_eq!(groups[0].fg, Color::Rgb(0xec, 0x5f, 0x67));
}

#[test]
fn unknown_color_is_a_spec_error() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);

	let err = resolver.resolve(&HighlightSpec::new().fg("#12345"), &host).unwrap_err();
	assert!(matches!(err, HighlightError::Spec(ParseError::InvalidColor(ref c)) if c == "#12345"));
}

#[test]
fn host_color_names_are_passed_through() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);

	let name = resolver.resolve(&HighlightSpec::new().fg("Orange").bg("NvimDarkGrey2"), &host).unwrap();
	assert_eq!(name, "Ribbon_orange_nvimdarkgrey2_NONE");

	let group = host.defined().pop().unwrap();
	assert_eq!(group.fg, Color::Named("orange".into()));
	assert_eq!(group.bg, Color::Named("nvimdarkgrey2".into()));
}

#[test]
fn host_failure_propagates_and_is_not_cached() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);
	let spec = HighlightSpec::new().fg("skyblue");

	host.fail_defines(true);
	let err = resolver.resolve(&spec, &host).unwrap_err();
	assert!(matches!(err, HighlightError::Host(HostError::DefineHighlight { .. })));

	host.fail_defines(false);
	let name = resolver.resolve(&spec, &host).unwrap();
	assert_eq!(host.define_count(&name), 1);
}

#[test]
fn reset_clears_host_and_restores_default() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);
	let name = resolver.resolve(&HighlightSpec::new().fg("skyblue"), &host).unwrap();

	resolver.reset(&host).unwrap();

	let mut cleared = host.cleared();
	cleared.sort();
	let mut expected = vec![DEFAULT_GROUP.to_string(), name.clone()];
	expected.sort();
	assert_eq!(cleared, expected);
	assert!(resolver.is_registered(DEFAULT_GROUP));
	assert!(!resolver.is_registered(&name));
	assert_eq!(resolver.registered_len(), 1);
}

#[test]
fn set_palette_reregisters_default_with_new_colors() {
	let host = RecordingHost::new();
	let mut resolver = resolver(&host);

	resolver.set_palette(Palette::new(Color::White, Color::Black), &host).unwrap();

	let defaults: Vec<_> = host.defined().into_iter().filter(|g| g.name == DEFAULT_GROUP).collect();
	assert_eq!(defaults.len(), 2);
	assert_eq!(defaults[1].fg, Color::White);
	assert_eq!(defaults[1].bg, Color::Black);
}

proptest! {
	#[test]
	fn equal_triples_yield_one_group(r: u8, g: u8, b: u8, bold: bool) {
		let host = RecordingHost::new();
		let mut resolver = resolver(&host);
		let style = if bold { "bold" } else { "NONE" };
		let spec = HighlightSpec::new().fg(format!("#{r:02X}{g:02X}{b:02X}")).style(style);
		let lower = HighlightSpec::new().fg(format!("#{r:02x}{g:02x}{b:02x}")).style(style);

		let first = resolver.resolve(&spec, &host).unwrap();
		let second = resolver.resolve(&lower, &host).unwrap();

		prop_assert_eq!(&first, &second);
		prop_assert_eq!(host.define_count(&first), 1);
	}
}
