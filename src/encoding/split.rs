//! Split-ratio edge geometry shared by the graph and the legend.
//!
//! A logical edge of length `L` split at ratio `r` with divider gap `G` is
//! drawn as two collinear spans: `[0, L*r - G/2]` and `[L*r + G/2, L]`.
//! Spans never have negative length.

/// A 1D interval along an edge, measured from the edge start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
	/// Offset of the first point.
	pub start: f64,
	/// Offset of the last point.
	pub end: f64,
}

impl Span {
	/// Length of the span; always `>= 0`.
	pub fn len(&self) -> f64 {
		self.end - self.start
	}

	/// Whether the span collapsed to a point.
	pub fn is_empty(&self) -> bool {
		self.len() <= 0.0
	}
}

/// A point on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Builds a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// The two halves of a split edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitEdge {
	/// Segment owned by the first endpoint ("given").
	pub given: Span,
	/// Segment owned by the second endpoint ("taken").
	pub taken: Span,
}

impl SplitEdge {
	/// Splits an edge of `length` at `ratio` leaving a `gap` between halves.
	///
	/// `ratio` is clamped to [0, 1]; NaN counts as an even split.
	pub fn new(length: f64, ratio: f64, gap: f64) -> Self {
		let length = length.max(0.0);
		let ratio = if ratio.is_nan() { 0.5 } else { ratio.clamp(0.0, 1.0) };
		let half_gap = gap.max(0.0) / 2.0;
		let pivot = length * ratio;

		let given_end = (pivot - half_gap).max(0.0);
		let taken_start = (pivot + half_gap).min(length);
		Self {
			given: Span {
				start: 0.0,
				end: given_end,
			},
			taken: Span {
				start: taken_start,
				end: length,
			},
		}
	}

	/// Projects both spans onto the segment `from -> to`.
	pub fn along(&self, from: Point, to: Point) -> [(Point, Point); 2] {
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		let (ux, uy) = if dist < 1e-9 { (0.0, 0.0) } else { (dx / dist, dy / dist) };
		let at = |offset: f64| Point::new(from.x + ux * offset, from.y + uy * offset);
		[
			(at(self.given.start), at(self.given.end)),
			(at(self.taken.start), at(self.taken.end)),
		]
	}
}
