//! The graph renderer: trust datasets in, scenes out.

mod layout;
mod model;
mod rank;
mod renderer;

pub use layout::TICK;
pub use model::{InteractionRecord, PeerRecord, TrustDataset};
pub use renderer::{GraphRenderer, HIT_RADIUS, public_key_label};
