//! Terminal presentation.
//!
//! - [`theme`] - colors and the plain (no-color) fallback
//! - [`icons`] - pass/fail status glyphs
//! - [`spinner`] - progress spinner shown while fetching

pub mod icons;
pub mod spinner;
pub mod theme;

pub use icons::StatusKind;
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, LaunchTheme};
