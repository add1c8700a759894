use std::rc::Rc;

use crate::encoding::{EncodingRegistry, Point};
use crate::graph::GraphRenderer;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub start: Point,
	pub node_start: Point,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start: Point,
	pub transform_start: Point,
}

/// Interactive view over a [`GraphRenderer`]: pan, zoom, drag and hover.
pub struct TrustGraphState {
	pub renderer: GraphRenderer,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: Option<usize>,
	pub width: f64,
	pub height: f64,
}

impl TrustGraphState {
	pub fn new(registry: Rc<EncodingRegistry>, width: f64, height: f64) -> Self {
		Self {
			renderer: GraphRenderer::new(registry),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: None,
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Point {
		Point::new(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		self.renderer.node_at(self.screen_to_graph(sx, sy))
	}

	pub fn press(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.node_at_position(x, y) {
			self.drag = DragState {
				active: true,
				node: Some(idx),
				start: Point::new(x, y),
				node_start: self.renderer.position(idx).unwrap_or_default(),
			};
		} else {
			self.pan = PanState {
				active: true,
				start: Point::new(x, y),
				transform_start: Point::new(self.transform.x, self.transform.y),
			};
		}
	}

	pub fn moved(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			self.hover = self.node_at_position(x, y);
		}

		if self.drag.active {
			if let Some(idx) = self.drag.node {
				let (dx, dy) = (
					(x - self.drag.start.x) / self.transform.k,
					(y - self.drag.start.y) / self.transform.k,
				);
				let at = Point::new(self.drag.node_start.x + dx, self.drag.node_start.y + dy);
				self.renderer.pin_node(idx, at);
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start.x + (x - self.pan.start.x);
			self.transform.y = self.pan.transform_start.y + (y - self.pan.start.y);
		}
	}

	/// Ends a drag; the dragged node stays where it was dropped.
	pub fn release(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
	}

	/// Hands a pinned node back to the simulation.
	pub fn unpin_at(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.node_at_position(x, y) {
			self.renderer.release_node(idx);
		}
	}

	pub fn leave(&mut self) {
		self.release();
		self.hover = None;
	}

	pub fn zoom(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.renderer.tick(dt);
	}

	pub fn hovered_peer(&self) -> Option<&str> {
		self.hover.and_then(|idx| self.renderer.peer_id(idx))
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{TICK, TrustDataset};

	fn state() -> TrustGraphState {
		let mut state = TrustGraphState::new(Rc::new(EncodingRegistry::default()), 800.0, 600.0);
		let data = TrustDataset::from_json(
			r#"{"peers": [{"id": "aa", "balance": 0.2}, {"id": "bb", "balance": 0.8}],
			"edges": [{"a": "aa", "b": "bb", "volumeRank": 3, "splitRatio": 0.5}]}"#,
		)
		.unwrap();
		state.renderer.render(&data).unwrap();
		state
	}

	fn on_screen(state: &TrustGraphState, i: usize) -> (f64, f64) {
		let p = state.renderer.position(i).unwrap();
		(
			p.x * state.transform.k + state.transform.x,
			p.y * state.transform.k + state.transform.y,
		)
	}

	#[test]
	fn dragged_peer_stays_put_while_the_rest_moves() {
		let mut state = state();
		let (x, y) = on_screen(&state, 0);
		state.press(x, y);
		state.moved(x + 400.0, y);
		state.release();

		let pinned = state.renderer.position(0).unwrap();
		let other = state.renderer.position(1).unwrap();
		state.tick(TICK);

		let after = state.renderer.position(0).unwrap();
		assert!((after.x - pinned.x).abs() < 1e-3 && (after.y - pinned.y).abs() < 1e-3);
		assert_ne!(state.renderer.position(1), Some(other));
		assert_eq!(state.renderer.scene().circles().count(), 2);
	}
}
