//! The legend ("help") overlay.

pub mod draw;
mod overlay;
mod visibility;

pub use draw::LegendGroup;
pub use overlay::{HELP_MARKER_CLASS, HelpOverlay, MarkerTarget};
pub use visibility::Visibility;
