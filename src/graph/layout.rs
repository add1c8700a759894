use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::encoding::Point;

use super::model::ValidGraph;

/// Fixed simulation step, one 60 Hz frame.
pub const TICK: f32 = 0.016;
const SEED_RADIUS: f64 = 100.0;

/// Force-directed placement of the peers, in world coordinates around the
/// origin. The simulation has no randomness: the same graph seeded the same
/// way settles to the same positions.
pub struct TrustLayout {
	graph: ForceGraph<usize, ()>,
	nodes: Vec<DefaultNodeIdx>,
	positions: Vec<Point>,
}

impl TrustLayout {
	/// Seeds peers evenly on a circle and wires their interactions.
	pub fn new(graph: &ValidGraph) -> Self {
		let mut sim = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let count = graph.peers.len().max(1) as f64;
		let mut nodes = Vec::with_capacity(graph.peers.len());
		let mut positions = Vec::with_capacity(graph.peers.len());
		for i in 0..graph.peers.len() {
			let angle = (i as f64) * 2.0 * PI / count;
			let (x, y) = (SEED_RADIUS * angle.cos(), SEED_RADIUS * angle.sin());
			nodes.push(sim.add_node(NodeData {
				x: x as f32,
				y: y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: i,
			}));
			positions.push(Point::new(x, y));
		}

		for edge in &graph.edges {
			if edge.a != edge.b {
				sim.add_edge(nodes[edge.a], nodes[edge.b], EdgeData::default());
			}
		}

		Self {
			graph: sim,
			nodes,
			positions,
		}
	}

	/// Advances the simulation `steps` fixed ticks.
	pub fn settle(&mut self, steps: usize) {
		for _ in 0..steps {
			self.graph.update(TICK);
		}
		self.sync();
	}

	/// Advances the simulation by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.sync();
	}

	/// Current position of peer `i`.
	pub fn position(&self, i: usize) -> Point {
		self.positions[i]
	}

	/// Positions indexed like the peers.
	pub fn positions(&self) -> &[Point] {
		&self.positions
	}

	/// Holds peer `i` at `at` until released.
	pub fn pin(&mut self, i: usize, at: Point) {
		let Some(&idx) = self.nodes.get(i) else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = at.x as f32;
				node.data.y = at.y as f32;
				node.data.is_anchor = true;
			}
		});
		self.positions[i] = at;
	}

	/// Lets peer `i` move with the simulation again.
	pub fn release(&mut self, i: usize) {
		let Some(&idx) = self.nodes.get(i) else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = false;
			}
		});
	}

	fn sync(&mut self) {
		let positions = &mut self.positions;
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			// a diverged simulation keeps the last good position
			if x.is_finite() && y.is_finite() {
				positions[node.data.user_data] = Point::new(x, y);
			}
		});
	}
}
