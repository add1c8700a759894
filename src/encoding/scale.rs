//! Domain to range mappings used by the encoding registry.
//!
//! Every scale is total: inputs outside the domain are clamped, never
//! rejected, so slightly out-of-bound upstream estimates still render.

use super::color::Color;

/// Linear map from a numeric domain onto a numeric range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	/// Input interval, `(low, high)`.
	pub domain: (f64, f64),
	/// Output interval, `(low, high)`.
	pub range: (f64, f64),
}

impl LinearScale {
	/// Builds a scale over `domain` onto `range`.
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// Position of `x` inside the domain as a fraction in [0, 1].
	///
	/// A collapsed domain yields 0; NaN yields 0.
	pub fn normalize(&self, x: f64) -> f64 {
		let (d0, d1) = self.domain;
		let span = d1 - d0;
		if span == 0.0 || !span.is_finite() || x.is_nan() {
			return 0.0;
		}
		((x - d0) / span).clamp(0.0, 1.0)
	}

	/// Maps `x`, clamped to the domain, onto the range.
	pub fn apply(&self, x: f64) -> f64 {
		let (r0, r1) = self.range;
		r0 + (r1 - r0) * self.normalize(x)
	}
}

/// Linear scale over the rank domain `[0, count - 1]`.
///
/// Ranks rather than raw magnitudes drive size, so one outlier cannot
/// flatten everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankScale {
	/// Value for rank 0.
	pub min: f64,
	/// Value for rank `count - 1`.
	pub max: f64,
}

impl RankScale {
	/// Builds a rank scale between `min` and `max`.
	pub fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Value for `rank` out of `count` ranked items.
	///
	/// `count <= 1` has no spread and returns `min`.
	pub fn at(&self, rank: usize, count: usize) -> f64 {
		if count <= 1 {
			return self.min;
		}
		LinearScale::new((0.0, (count - 1) as f64), (self.min, self.max)).apply(rank as f64)
	}

	/// Midpoint of the range.
	pub fn average(&self) -> f64 {
		(self.min + self.max) / 2.0
	}
}

/// Two-stop color scale over a numeric domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
	/// Input interval, `(low, high)`.
	pub domain: (f64, f64),
	/// Colors at the low and high ends of the domain.
	pub range: (Color, Color),
}

impl ColorScale {
	/// Builds a color scale over `domain`.
	pub fn new(domain: (f64, f64), range: (Color, Color)) -> Self {
		Self { domain, range }
	}

	/// Color for `x`, clamped to the domain.
	pub fn at(&self, x: f64) -> Color {
		let t = LinearScale::new(self.domain, (0.0, 1.0)).normalize(x);
		self.range.0.lerp(self.range.1, t)
	}
}
