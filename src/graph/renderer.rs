use std::rc::Rc;

use log::{debug, info, warn};

use crate::encoding::{Color, EncodingRegistry, Point};
use crate::error::DataError;
use crate::scene::{Scene, TextAlign};

use super::layout::TrustLayout;
use super::model::{TrustDataset, ValidGraph};
use super::rank::{edge_ranks, peer_ranks};

/// Smallest grab radius for hit testing, in world units.
pub const HIT_RADIUS: f64 = 8.0;
const LABEL_CHARS: usize = 6;

/// Short form of a public key for drawing inside a node.
pub fn public_key_label(id: &str) -> String {
	id.chars().take(LABEL_CHARS).collect()
}

#[derive(Clone, Debug, PartialEq)]
struct EncodedNode {
	id: String,
	label: String,
	radius: f64,
	color: Color,
}

#[derive(Clone, Debug, PartialEq)]
struct EncodedEdge {
	a: usize,
	b: usize,
	width: f64,
	ratio: f64,
}

/// Everything derived from the last accepted dataset.
struct Frame {
	nodes: Vec<EncodedNode>,
	edges: Vec<EncodedEdge>,
	layout: TrustLayout,
}

/// Turns trust datasets into scenes using the shared encoding registry.
///
/// The last successful [`render`](Self::render) wins: its scene replaces the
/// previous one wholesale, and a failed render leaves the previous scene in
/// place.
pub struct GraphRenderer {
	registry: Rc<EncodingRegistry>,
	frame: Option<Frame>,
	scene: Scene,
}

impl GraphRenderer {
	/// A renderer with nothing drawn yet.
	pub fn new(registry: Rc<EncodingRegistry>) -> Self {
		Self {
			registry,
			frame: None,
			scene: Scene::new(),
		}
	}

	/// The registry shared with the legend.
	pub fn registry(&self) -> &Rc<EncodingRegistry> {
		&self.registry
	}

	/// Node fill for `balance`, as drawn by this renderer.
	pub fn node_color(&self, balance: f64) -> Color {
		self.registry.node_color(balance)
	}

	/// Validates, encodes and lays out `data`, then commits a fresh scene.
	pub fn render(&mut self, data: &TrustDataset) -> Result<&Scene, DataError> {
		let graph = ValidGraph::from_dataset(data)?;
		if graph.clamped > 0 {
			warn!("clamped {} balance/ratio values into [0, 1]", graph.clamped);
		}

		let registry = &self.registry;
		let config = registry.config();
		let (peer_count, edge_count) = (graph.peers.len(), graph.edges.len());

		let nodes: Vec<EncodedNode> = peer_ranks(&graph, config.graph.rank_by)
			.into_iter()
			.zip(&graph.peers)
			.map(|(rank, peer)| EncodedNode {
				id: peer.id.clone(),
				label: public_key_label(&peer.id),
				radius: registry.node_radius(rank, peer_count),
				color: registry.node_color(peer.balance),
			})
			.collect();

		let edges: Vec<EncodedEdge> = edge_ranks(&graph)
			.into_iter()
			.zip(&graph.edges)
			.map(|(rank, edge)| EncodedEdge {
				a: edge.a,
				b: edge.b,
				width: registry.edge_width(rank, edge_count),
				ratio: edge.ratio,
			})
			.collect();

		let mut layout = TrustLayout::new(&graph);
		layout.settle(config.graph.settle_ticks);

		let frame = Frame {
			nodes,
			edges,
			layout,
		};
		let scene = draw(registry, &frame);

		// commit
		self.frame = Some(frame);
		self.scene = scene;
		info!("rendered {} peers and {} interactions", peer_count, edge_count);
		Ok(&self.scene)
	}

	/// The last committed scene.
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	/// Advances the layout by `dt` seconds and redraws.
	pub fn tick(&mut self, dt: f32) {
		if let Some(frame) = self.frame.as_mut() {
			frame.layout.tick(dt);
		}
		self.redraw();
	}

	/// Rebuilds the scene from the current layout positions.
	pub fn redraw(&mut self) {
		if let Some(frame) = &self.frame {
			self.scene = draw(&self.registry, frame);
		}
	}

	/// Top-most peer under the world-space point `at`.
	pub fn node_at(&self, at: Point) -> Option<usize> {
		let frame = self.frame.as_ref()?;
		frame
			.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(i, node)| {
				let p = frame.layout.position(*i);
				let (dx, dy) = (p.x - at.x, p.y - at.y);
				(dx * dx + dy * dy).sqrt() <= node.radius.max(HIT_RADIUS)
			})
			.map(|(i, _)| i)
	}

	/// World-space position of peer `i`.
	pub fn position(&self, i: usize) -> Option<Point> {
		let frame = self.frame.as_ref()?;
		(i < frame.nodes.len()).then(|| frame.layout.position(i))
	}

	/// Id of peer `i` in the current frame.
	pub fn peer_id(&self, i: usize) -> Option<&str> {
		self.frame.as_ref()?.nodes.get(i).map(|node| node.id.as_str())
	}

	/// Pins peer `i` at `at` and redraws.
	pub fn pin_node(&mut self, i: usize, at: Point) {
		if let Some(frame) = self.frame.as_mut() {
			frame.layout.pin(i, at);
		}
		self.redraw();
	}

	/// Releases a pinned peer back to the simulation.
	pub fn release_node(&mut self, i: usize) {
		if let Some(frame) = self.frame.as_mut() {
			debug!("releasing node {}", i);
			frame.layout.release(i);
		}
	}
}

fn draw(registry: &EncodingRegistry, frame: &Frame) -> Scene {
	let mut scene = Scene::new();
	let positions = frame.layout.positions();

	for edge in &frame.edges {
		let (pa, pb) = (positions[edge.a], positions[edge.b]);
		let (ra, rb) = (frame.nodes[edge.a].radius, frame.nodes[edge.b].radius);
		let (dx, dy) = (pb.x - pa.x, pb.y - pa.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		// run from rim to rim so the split reads against the visible length
		let (ux, uy) = (dx / dist, dy / dist);
		let start = Point::new(pa.x + ux * ra, pa.y + uy * ra);
		let length = (dist - ra - rb).max(0.0);
		let end = Point::new(start.x + ux * length, start.y + uy * length);

		for (from, to) in registry.split(length, edge.ratio).along(start, end) {
			scene.line(from, to, edge.width, registry.link_color());
		}
	}

	for (node, &center) in frame.nodes.iter().zip(positions) {
		scene.circle(center, node.radius, node.color);
	}

	let style = &registry.config().node.public_key_label;
	for (node, &center) in frame.nodes.iter().zip(positions) {
		scene.text(center, node.label.as_str(), style, TextAlign::Center);
	}
	scene
}
