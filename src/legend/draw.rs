//! Legend samples, one row per encoded property.
//!
//! Every shape is computed through the [`EncodingRegistry`] the graph uses,
//! so the legend cannot drift from what the graph draws. Rows start at the
//! origin; [`Scene::bounds`] gives the canvas size a row needs.

use crate::config::RankBy;
use crate::encoding::{EncodingRegistry, Point};
use crate::graph::public_key_label;
use crate::scene::{Scene, TextAlign};

/// Space between neighbouring samples.
pub const GUTTER: f64 = 12.0;
/// Margin around a row.
pub const PADDING: f64 = 2.0;
/// Id drawn in the text-in-circle sample.
pub const SAMPLE_PUBLIC_KEY: &str = "4f1a9c2e7b30d6";

/// The five legend rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegendGroup {
	/// One node with its public key label inside.
	TextInCircle,
	/// Node color across the balance domain.
	Color,
	/// Node size across the rank domain.
	Size,
	/// Edge width across the rank domain.
	Width,
	/// Edge split across the ratio domain.
	Split,
}

impl LegendGroup {
	/// Every group, in display order.
	pub const ALL: [Self; 5] = [
		Self::TextInCircle,
		Self::Color,
		Self::Size,
		Self::Width,
		Self::Split,
	];

	/// Stable identifier for element ids and classes.
	pub fn key(self) -> &'static str {
		match self {
			Self::TextInCircle => "text",
			Self::Color => "color",
			Self::Size => "size",
			Self::Width => "width",
			Self::Split => "split",
		}
	}

	/// Short description shown beside the row, worded after the registry's
	/// configuration.
	pub fn title(self, registry: &EncodingRegistry) -> String {
		match self {
			Self::TextInCircle => "Peer, labelled with the start of its public key".to_owned(),
			Self::Color => "Node color: balance, lowest to highest".to_owned(),
			Self::Size => match registry.config().graph.rank_by {
				RankBy::Balance => "Node size: rank by balance".to_owned(),
				RankBy::Volume => "Node size: rank by interaction volume".to_owned(),
			},
			Self::Width => "Edge width: rank by exchanged volume".to_owned(),
			Self::Split => "Edge split: share given by each side".to_owned(),
		}
	}
}

/// Builds the scene for `group`.
pub fn draw_group(registry: &EncodingRegistry, group: LegendGroup) -> Scene {
	match group {
		LegendGroup::TextInCircle => text_in_circle(registry),
		LegendGroup::Color => color_row(registry),
		LegendGroup::Size => size_row(registry),
		LegendGroup::Width => width_row(registry),
		LegendGroup::Split => split_row(registry),
	}
}

/// Balance shown by sample `i` of `count`; a lone sample shows the midpoint.
pub fn sample_balance(i: usize, count: usize) -> f64 {
	if count <= 1 { 0.5 } else { i as f64 / (count - 1) as f64 }
}

/// Split ratio shown by sample `i` of `count`, strictly inside (0, 1).
pub fn sample_ratio(i: usize, count: usize) -> f64 {
	(i + 1) as f64 / (count + 1) as f64
}

fn text_in_circle(registry: &EncodingRegistry) -> Scene {
	let mut scene = Scene::new();
	let radius = registry.max_radius();
	let center = Point::new(PADDING + radius, PADDING + radius);
	scene.circle(center, radius, registry.midpoint_color());
	scene.text(
		center,
		public_key_label(SAMPLE_PUBLIC_KEY),
		&registry.config().node.public_key_label,
		TextAlign::Center,
	);
	scene
}

/// Centers of `count` evenly spaced node samples.
fn node_slots(registry: &EncodingRegistry, count: usize) -> impl Iterator<Item = Point> {
	let radius = registry.max_radius();
	let slot = 2.0 * radius + GUTTER;
	(0..count).map(move |i| Point::new(PADDING + radius + i as f64 * slot, PADDING + radius))
}

fn caption(registry: &EncodingRegistry, scene: &mut Scene, at: Point, text: String) {
	let label = &registry.config().help.label;
	scene.text(at, text, &label.style(), TextAlign::Center);
}

fn color_row(registry: &EncodingRegistry) -> Scene {
	let mut scene = Scene::new();
	let count = registry.config().help.nodes.number_of_nodes;
	let (radius, offset) = (registry.max_radius(), registry.config().help.label.offset_y);
	for (i, center) in node_slots(registry, count).enumerate() {
		let balance = sample_balance(i, count);
		scene.circle(center, radius, registry.node_color(balance));
		let below = Point::new(center.x, center.y + radius + offset);
		caption(registry, &mut scene, below, format!("{:.0}%", balance * 100.0));
	}
	scene
}

fn size_row(registry: &EncodingRegistry) -> Scene {
	let mut scene = Scene::new();
	let count = registry.config().help.nodes.number_of_nodes;
	let (max_radius, offset) = (registry.max_radius(), registry.config().help.label.offset_y);
	let color = registry.midpoint_color();
	for (i, center) in node_slots(registry, count).enumerate() {
		scene.circle(center, registry.node_radius(i, count), color);
		// captions line up under the largest circle
		let below = Point::new(center.x, center.y + max_radius + offset);
		caption(registry, &mut scene, below, format!("rank {}", i + 1));
	}
	scene
}

/// Start points of `count` evenly spaced edge samples.
fn edge_slots(registry: &EncodingRegistry, count: usize) -> impl Iterator<Item = Point> {
	let length = registry.config().help.edges.edge_length;
	let y = PADDING + registry.max_edge_width() / 2.0;
	(0..count).map(move |i| Point::new(PADDING + i as f64 * (length + GUTTER), y))
}

fn edge_row(registry: &EncodingRegistry, sample: impl Fn(usize, usize) -> (f64, f64, String)) -> Scene {
	let mut scene = Scene::new();
	let edges = &registry.config().help.edges;
	let (count, length) = (edges.number_of_edges, edges.edge_length);
	let offset = registry.config().help.label.offset_y;
	let half_max = registry.max_edge_width() / 2.0;

	for (i, start) in edge_slots(registry, count).enumerate() {
		let (width, ratio, text) = sample(i, count);
		let end = Point::new(start.x + length, start.y);
		for (from, to) in registry.split(length, ratio).along(start, end) {
			scene.line(from, to, width, registry.link_color());
		}
		let below = Point::new(start.x + length / 2.0, start.y + half_max + offset);
		caption(registry, &mut scene, below, text);
	}
	scene
}

fn width_row(registry: &EncodingRegistry) -> Scene {
	edge_row(registry, |i, count| {
		(registry.edge_width(i, count), 0.5, format!("rank {}", i + 1))
	})
}

fn split_row(registry: &EncodingRegistry) -> Scene {
	let width = registry.average_edge_width();
	edge_row(registry, |i, count| {
		let ratio = sample_ratio(i, count);
		(width, ratio, format!("{:.0}/{:.0}", ratio * 100.0, (1.0 - ratio) * 100.0))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::VisualConfig;
	use crate::encoding::Color;
	use crate::scene::DrawCommand;

	fn registry() -> EncodingRegistry {
		EncodingRegistry::default()
	}

	fn with_counts(nodes: usize, edges: usize) -> EncodingRegistry {
		let mut config = VisualConfig::default();
		config.help.nodes.number_of_nodes = nodes;
		config.help.edges.number_of_edges = edges;
		EncodingRegistry::new(config)
	}

	#[test]
	fn text_sample_uses_midpoint_and_max_radius() {
		let registry = registry();
		let scene = draw_group(&registry, LegendGroup::TextInCircle);
		let (center, radius, fill) = scene.circles().next().unwrap();
		assert_eq!(radius, 25.0);
		assert_eq!(fill, registry.node_color(0.5));
		assert_eq!(scene.texts().next(), Some((center, "4f1a9c")));
	}

	#[test]
	fn color_row_spans_balance_domain() {
		let registry = registry();
		let scene = draw_group(&registry, LegendGroup::Color);
		let fills: Vec<_> = scene.circles().map(|(_, _, c)| c).collect();
		let expected: Vec<_> =
			[0.0, 0.25, 0.5, 0.75, 1.0].into_iter().map(|b| registry.node_color(b)).collect();
		assert_eq!(fills, expected);

		let captions: Vec<_> = scene.texts().map(|(_, t)| t).collect();
		assert_eq!(captions, vec!["0%", "25%", "50%", "75%", "100%"]);
	}

	#[test]
	fn samples_are_evenly_spaced_with_captions_below() {
		let scene = draw_group(&registry(), LegendGroup::Color);
		let xs: Vec<f64> = scene.circles().map(|(c, _, _)| c.x).collect();
		let gaps: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
		assert!(gaps.iter().all(|g| *g == 2.0 * 25.0 + GUTTER));

		for ((center, radius, _), (at, _)) in scene.circles().zip(scene.texts()) {
			assert_eq!(at.x, center.x);
			assert_eq!(at.y, center.y + radius + 14.0);
		}
	}

	#[test]
	fn size_row_uses_rank_radii_and_one_color() {
		let registry = registry();
		let scene = draw_group(&registry, LegendGroup::Size);
		let radii: Vec<f64> = scene.circles().map(|(_, r, _)| r).collect();
		assert_eq!(radii, vec![5.0, 10.0, 15.0, 20.0, 25.0]);
		assert!(scene.circles().all(|(_, _, c)| c == registry.midpoint_color()));
	}

	#[test]
	fn width_row_splits_each_edge_evenly() {
		let registry = registry();
		let scene = draw_group(&registry, LegendGroup::Width);
		let lines: Vec<_> = scene.lines().collect();
		assert_eq!(lines.len(), 10);
		for (i, pair) in lines.chunks(2).enumerate() {
			let (given, taken) = (pair[0], pair[1]);
			assert_eq!(given.2, registry.edge_width(i, 5));
			assert_eq!(given.1.x - given.0.x, 48.0);
			assert_eq!(taken.1.x - taken.0.x, 48.0);
		}
	}

	#[test]
	fn split_row_spreads_ratios_at_constant_width() {
		let registry = registry();
		let scene = draw_group(&registry, LegendGroup::Split);
		let lines: Vec<_> = scene.lines().collect();
		assert!(lines.iter().all(|(_, _, w)| *w == 4.5));

		let givens: Vec<f64> = lines.chunks(2).map(|pair| pair[0].1.x - pair[0].0.x).collect();
		assert!(givens.windows(2).all(|w| w[0] < w[1]));
		let captions: Vec<_> = scene.texts().map(|(_, t)| t).collect();
		assert_eq!(captions[0], "17/83");
		assert_eq!(captions[4], "83/17");
	}

	#[test]
	fn degenerate_counts_do_not_divide_by_zero() {
		let registry = with_counts(1, 1);
		let color = draw_group(&registry, LegendGroup::Color);
		assert_eq!(color.circles().next().map(|(_, _, c)| c), Some(registry.node_color(0.5)));
		let size = draw_group(&registry, LegendGroup::Size);
		assert_eq!(size.circles().next().map(|(_, r, _)| r), Some(5.0));
		let width = draw_group(&registry, LegendGroup::Width);
		assert_eq!(width.lines().next().map(|(_, _, w)| w), Some(1.0));
		let split = draw_group(&registry, LegendGroup::Split);
		assert_eq!(split.lines().count(), 2);

		let empty = with_counts(0, 0);
		for group in [LegendGroup::Color, LegendGroup::Size, LegendGroup::Width, LegendGroup::Split] {
			assert!(draw_group(&empty, group).is_empty());
		}
	}

	#[test]
	fn every_group_has_a_key() {
		let keys: Vec<_> = LegendGroup::ALL.iter().map(|g| g.key()).collect();
		assert_eq!(keys, vec!["text", "color", "size", "width", "split"]);
		assert!(matches!(
			draw_group(&registry(), LegendGroup::TextInCircle).commands()[0],
			DrawCommand::Circle { .. }
		));
	}

	fn ranked_by(rank_by: RankBy) -> EncodingRegistry {
		let mut config = VisualConfig::default();
		config.graph.rank_by = rank_by;
		EncodingRegistry::new(config)
	}

	#[test]
	fn size_title_follows_rank_by() {
		let by_balance = LegendGroup::Size.title(&ranked_by(RankBy::Balance));
		assert!(by_balance.contains("balance"));
		assert!(!by_balance.contains("volume"));

		let by_volume = LegendGroup::Size.title(&ranked_by(RankBy::Volume));
		assert!(by_volume.contains("volume"));
	}

	#[test]
	fn color_title_names_no_colors() {
		let mut config = VisualConfig::default();
		config.node.color.range = [Color::rgb(0, 0, 0xff), Color::rgb(0xff, 0xff, 0)];
		let title = LegendGroup::Color.title(&EncodingRegistry::new(config)).to_lowercase();
		for name in ["red", "green", "blue", "yellow"] {
			assert!(!title.contains(name), "{title}");
		}
	}
}
