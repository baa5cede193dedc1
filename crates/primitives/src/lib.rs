//! Typed colors and text attributes shared by the statusline renderer and its configuration.

/// Comma-joined highlight attributes (`bold,italic`, `NONE`).
pub mod attributes;
/// Foreground/background color values.
pub mod color;
/// Parse failures for colors and attributes.
pub mod error;

pub use attributes::Attributes;
pub use color::Color;
pub use error::{ParseError, Result};
