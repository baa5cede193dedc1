use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseError, Result};

/// A highlight color as the host display system understands it.
///
/// The [`Display`](fmt::Display) form is canonical: hex colors print as
/// lowercase `#rrggbb`, named colors as their lowercase name, and
/// [`Color::None`] as `NONE`. Highlight group names are derived from it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Color {
	/// Transparent; leaves the host's own color in place.
	#[default]
	None,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	Gray,
	DarkGray,
	LightRed,
	LightGreen,
	LightYellow,
	LightBlue,
	LightMagenta,
	LightCyan,
	White,
	/// 24-bit color.
	Rgb(u8, u8, u8),
	/// Any other color name, passed to the host as written (lowercased).
	Named(String),
}

impl Color {
	/// Parse a color value from a string.
	///
	/// Supports hex (`#RGB`, `#RRGGBB`), the terminal color names, and
	/// `NONE`/`reset`/`default`. Other identifiers (`orange`, `NvimDarkGrey2`)
	/// become [`Color::Named`] and are left for the host to interpret.
	pub fn parse(value: &str) -> Result<Self> {
		let value = value.trim();

		if let Some(hex) = value.strip_prefix('#') {
			return parse_hex(hex);
		}

		parse_named(value)
	}

	fn name(&self) -> Option<&str> {
		Some(match self {
			Self::None => "NONE",
			Self::Black => "black",
			Self::Red => "red",
			Self::Green => "green",
			Self::Yellow => "yellow",
			Self::Blue => "blue",
			Self::Magenta => "magenta",
			Self::Cyan => "cyan",
			Self::Gray => "gray",
			Self::DarkGray => "darkgray",
			Self::LightRed => "lightred",
			Self::LightGreen => "lightgreen",
			Self::LightYellow => "lightyellow",
			Self::LightBlue => "lightblue",
			Self::LightMagenta => "lightmagenta",
			Self::LightCyan => "lightcyan",
			Self::White => "white",
			Self::Named(name) => name.as_str(),
			Self::Rgb(..) => return None,
		})
	}
}

fn parse_hex(hex: &str) -> Result<Color> {
	let err = || ParseError::InvalidColor(format!("#{hex}"));
	if !hex.is_ascii() {
		return Err(err());
	}

	match hex.len() {
		3 => {
			let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| err())?;
			let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| err())?;
			let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| err())?;
			Ok(Color::Rgb(r, g, b))
		}
		6 => {
			let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
			let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
			let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
			Ok(Color::Rgb(r, g, b))
		}
		_ => Err(err()),
	}
}

fn parse_named(name: &str) -> Result<Color> {
	let normalized = name.to_lowercase().replace(['-', '_'], "");

	match normalized.as_str() {
		"none" | "reset" | "default" => Ok(Color::None),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"darkgray" | "darkgrey" => Ok(Color::DarkGray),
		"lightred" => Ok(Color::LightRed),
		"lightgreen" => Ok(Color::LightGreen),
		"lightyellow" => Ok(Color::LightYellow),
		"lightblue" => Ok(Color::LightBlue),
		"lightmagenta" => Ok(Color::LightMagenta),
		"lightcyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		_ if is_identifier(name) => Ok(Color::Named(name.to_ascii_lowercase())),
		_ => Err(ParseError::InvalidColor(name.to_string())),
	}
}

/// Host color names double as parts of group names, so they must be identifiers.
fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic()) && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
			named => f.write_str(named.name().unwrap_or_default()),
		}
	}
}

impl FromStr for Color {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}
