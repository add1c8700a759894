use crate::config::VisualConfig;

use super::color::Color;
use super::scale::{ColorScale, RankScale};
use super::split::SplitEdge;

/// The scales shared by the graph renderer and the legend overlay.
///
/// Built once from a [`VisualConfig`] and never mutated; hand out clones of
/// one `Rc<EncodingRegistry>` so both renderers read the same instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodingRegistry {
	config: VisualConfig,
	node_color: ColorScale,
	node_radius: RankScale,
	edge_width: RankScale,
}

impl EncodingRegistry {
	/// Freezes `config` and derives the scales from it.
	pub fn new(config: VisualConfig) -> Self {
		let [d0, d1] = config.node.color.domain;
		let [low, high] = config.node.color.range;
		let circle = &config.node.circle;
		Self {
			node_color: ColorScale::new((d0, d1), (low, high)),
			node_radius: RankScale::new(circle.min_radius, circle.max_radius),
			edge_width: RankScale::new(config.link.stroke_width_min, config.link.stroke_width_max),
			config,
		}
	}

	/// The configuration the scales were derived from.
	pub fn config(&self) -> &VisualConfig {
		&self.config
	}

	/// Fill color for a balance score; out-of-range balances clamp.
	pub fn node_color(&self, balance: f64) -> Color {
		self.node_color.at(balance)
	}

	/// Color of a perfectly even balance.
	pub fn midpoint_color(&self) -> Color {
		self.node_color(0.5)
	}

	/// Radius of the node at `rank` among `total` nodes.
	pub fn node_radius(&self, rank: usize, total: usize) -> f64 {
		self.node_radius.at(rank, total)
	}

	/// Largest node radius.
	pub fn max_radius(&self) -> f64 {
		self.node_radius.max
	}

	/// Stroke width of the edge at `rank` among `total` edges.
	pub fn edge_width(&self, rank: usize, total: usize) -> f64 {
		self.edge_width.at(rank, total)
	}

	/// Mean of the edge width bounds.
	pub fn average_edge_width(&self) -> f64 {
		self.edge_width.average()
	}

	/// Largest edge width.
	pub fn max_edge_width(&self) -> f64 {
		self.edge_width.max
	}

	/// Splits an edge of `length` at `ratio` with the configured divider gap.
	pub fn split(&self, length: f64, ratio: f64) -> SplitEdge {
		SplitEdge::new(length, ratio, self.config.help.edges.dividing_width)
	}

	/// Color of both halves of an edge.
	pub fn link_color(&self) -> Color {
		self.config.link.color
	}
}

impl Default for EncodingRegistry {
	fn default() -> Self {
		Self::new(VisualConfig::default())
	}
}
