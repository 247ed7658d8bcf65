//! Core domain types, outline parsing, and deck theming
//! for automated slide deck generation.

pub mod error;
pub mod outline;
pub mod theme;
pub mod types;

pub use error::{Error, Result};
pub use outline::OutlineParser;
pub use theme::{Color, DeckTheme};
pub use types::{BodyLine, BodyLineKind, SearchHit, SlideRecord};
