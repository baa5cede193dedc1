use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseError, Result};

bitflags! {
	/// Text attributes of a highlight group.
	///
	/// Written as a comma-joined list (`bold,italic`); the empty set is `NONE`.
	#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Attributes: u16 {
		const BOLD          = 1 << 0;
		const ITALIC        = 1 << 1;
		const UNDERLINE     = 1 << 2;
		const UNDERCURL     = 1 << 3;
		const UNDERDOUBLE   = 1 << 4;
		const UNDERDOTTED   = 1 << 5;
		const UNDERDASHED   = 1 << 6;
		const STRIKETHROUGH = 1 << 7;
		const REVERSE       = 1 << 8;
		const STANDOUT      = 1 << 9;
		const NOCOMBINE     = 1 << 10;
	}
}

/// Canonical spelling of each attribute, in output order.
const NAMES: &[(Attributes, &str)] = &[
	(Attributes::BOLD, "bold"),
	(Attributes::ITALIC, "italic"),
	(Attributes::UNDERLINE, "underline"),
	(Attributes::UNDERCURL, "undercurl"),
	(Attributes::UNDERDOUBLE, "underdouble"),
	(Attributes::UNDERDOTTED, "underdotted"),
	(Attributes::UNDERDASHED, "underdashed"),
	(Attributes::STRIKETHROUGH, "strikethrough"),
	(Attributes::REVERSE, "reverse"),
	(Attributes::STANDOUT, "standout"),
	(Attributes::NOCOMBINE, "nocombine"),
];

impl Attributes {
	/// Parse a comma-joined attribute list. Blank input and `NONE` yield the empty set.
	pub fn parse(value: &str) -> Result<Self> {
		let mut attrs = Self::empty();

		for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
			let normalized = part.to_lowercase().replace(['-', '_'], "");
			attrs |= match normalized.as_str() {
				"none" => Self::empty(),
				"bold" => Self::BOLD,
				"italic" => Self::ITALIC,
				"underline" | "underlined" => Self::UNDERLINE,
				"undercurl" => Self::UNDERCURL,
				"underdouble" => Self::UNDERDOUBLE,
				"underdotted" => Self::UNDERDOTTED,
				"underdashed" => Self::UNDERDASHED,
				"strikethrough" | "crossedout" => Self::STRIKETHROUGH,
				"reverse" | "inverse" | "reversed" => Self::REVERSE,
				"standout" => Self::STANDOUT,
				"nocombine" => Self::NOCOMBINE,
				_ => return Err(ParseError::InvalidAttribute(part.to_string())),
			};
		}

		Ok(attrs)
	}
}

impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("NONE");
		}

		let mut first = true;
		for (flag, name) in NAMES {
			if self.contains(*flag) {
				if !first {
					f.write_str(",")?;
				}
				f.write_str(name)?;
				first = false;
			}
		}
		Ok(())
	}
}

impl FromStr for Attributes {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl Serialize for Attributes {
	fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Attributes {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests;
