pub mod help_overlay;
mod paint;
pub mod trust_graph;
pub mod window;
