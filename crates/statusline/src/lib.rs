//! Statusline rendering pipeline.
//!
//! A [`Statusline`] holds left and right component lists for the active and
//! inactive window states. On every redraw the host calls
//! [`Statusline::generate`], which evaluates each [`Component`], resolves its
//! highlight through the session's [`HighlightResolver`], frames it with
//! separators, and joins everything into one markup string:
//!
//! ```text
//! <left components>%=<right components>%#RibbonDefault#
//! ```
//!
//! Highlight markers use the `%#Group#` form and `%=` marks the flexible gap
//! the host stretches to fill the window width.

pub mod component;
pub mod error;
pub mod field;
pub mod generator;
pub mod highlight;
pub mod host;
pub mod markup;
pub mod policy;
pub mod provider;
mod render;
pub mod separator;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use component::Component;
pub use error::{RenderError, Result};
pub use field::{Callback, Field, Scope, WindowState};
pub use generator::{ComponentSets, StateLists, Statusline};
pub use highlight::{DEFAULT_GROUP, HighlightError, HighlightGroup, HighlightResolver, HighlightSpec, Palette};
pub use host::{BufferInfo, Host, HostError};
pub use policy::ForceInactive;
pub use provider::{Provider, ProviderContext, ProviderError, ProviderFn, ProviderRegistry};
pub use render::Renderer;
pub use ribbon_primitives::{Attributes, Color};
pub use separator::{Separator, SeparatorPresets, SeparatorSpec, Separators};
