//! Draw commands for a 2D vector canvas.
//!
//! Renderers build a complete [`Scene`] and hand it over in one piece, so a
//! failed or superseded render never leaves half a frame behind.

use crate::config::TextStyle;
use crate::encoding::{Color, Point};

/// Horizontal anchoring of a text command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
	/// Text starts at the anchor.
	#[default]
	Start,
	/// Text is centered on the anchor, horizontally and vertically.
	Center,
}

/// A single shape.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// Filled circle.
	Circle {
		/// Center.
		center: Point,
		/// Radius.
		radius: f64,
		/// Fill.
		fill: Color,
	},
	/// Straight stroke with butt caps.
	Line {
		/// Start point.
		from: Point,
		/// End point.
		to: Point,
		/// Stroke width.
		width: f64,
		/// Stroke color.
		stroke: Color,
	},
	/// A text run.
	Text {
		/// Anchor point.
		at: Point,
		/// Content.
		text: String,
		/// Typography.
		style: TextStyle,
		/// Anchoring.
		align: TextAlign,
	},
}

/// An ordered list of draw commands with the extent they cover.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	commands: Vec<DrawCommand>,
	width: f64,
	height: f64,
}

impl Scene {
	/// Empty scene.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a circle.
	pub fn circle(&mut self, center: Point, radius: f64, fill: Color) {
		self.grow(center.x + radius, center.y + radius);
		self.commands.push(DrawCommand::Circle {
			center,
			radius,
			fill,
		});
	}

	/// Appends a line.
	pub fn line(&mut self, from: Point, to: Point, width: f64, stroke: Color) {
		self.grow(from.x.max(to.x), from.y.max(to.y) + width / 2.0);
		self.commands.push(DrawCommand::Line {
			from,
			to,
			width,
			stroke,
		});
	}

	/// Appends a text run.
	pub fn text(&mut self, at: Point, text: impl Into<String>, style: &TextStyle, align: TextAlign) {
		self.grow(at.x, at.y + style.font_size);
		self.commands.push(DrawCommand::Text {
			at,
			text: text.into(),
			style: style.clone(),
			align,
		});
	}

	/// Commands in paint order.
	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	/// Whether nothing will be drawn.
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Right and bottom extent of the drawn shapes, measured from the origin.
	///
	/// Text width is unknown until paint time; callers leave a margin for it.
	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Circles in paint order.
	pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Color)> + '_ {
		self.commands.iter().filter_map(|cmd| match cmd {
			DrawCommand::Circle {
				center,
				radius,
				fill,
			} => Some((*center, *radius, *fill)),
			_ => None,
		})
	}

	/// Lines in paint order.
	pub fn lines(&self) -> impl Iterator<Item = (Point, Point, f64)> + '_ {
		self.commands.iter().filter_map(|cmd| match cmd {
			DrawCommand::Line {
				from,
				to,
				width,
				..
			} => Some((*from, *to, *width)),
			_ => None,
		})
	}

	/// Text runs in paint order.
	pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
		self.commands.iter().filter_map(|cmd| match cmd {
			DrawCommand::Text {
				at,
				text,
				..
			} => Some((*at, text.as_str())),
			_ => None,
		})
	}

	fn grow(&mut self, x: f64, y: f64) {
		self.width = self.width.max(x);
		self.height = self.height.max(y);
	}
}
