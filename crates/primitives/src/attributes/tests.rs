use super::Attributes;
use crate::ParseError;

#[test]
fn none_and_blank_are_empty() {
	assert_eq!(Attributes::parse("NONE").unwrap(), Attributes::empty());
	assert_eq!(Attributes::parse("").unwrap(), Attributes::empty());
	assert_eq!(Attributes::empty().to_string(), "NONE");
}

#[test]
fn comma_joined_list() {
	assert_eq!(Attributes::parse("bold,italic").unwrap(), Attributes::BOLD | Attributes::ITALIC);
	assert_eq!(Attributes::parse(" bold , reverse ").unwrap(), Attributes::BOLD | Attributes::REVERSE);
}

#[test]
fn display_order_is_fixed() {
	let a = Attributes::parse("italic,bold").unwrap();
	let b = Attributes::parse("bold,italic").unwrap();
	assert_eq!(a.to_string(), "bold,italic");
	assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn unknown_attribute_is_rejected() {
	assert_eq!(Attributes::parse("bold,sparkle"), Err(ParseError::InvalidAttribute("sparkle".into())));
}
