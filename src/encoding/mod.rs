//! The encoding registry: scales that turn data into visual properties.

mod color;
mod registry;
pub mod scale;
pub mod split;

pub use color::{Color, ParseColorError};
pub use registry::EncodingRegistry;
pub use split::{Point, Span, SplitEdge};
