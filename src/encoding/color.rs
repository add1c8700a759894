use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque sRGB color, written as `#rrggbb` for the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Builds a color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Channel-wise linear interpolation, `t` clamped to [0, 1].
	pub fn lerp(self, other: Color, t: f64) -> Color {
		let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
		let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
		Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
	}

	/// CSS `rgba()` string with the given alpha.
	pub fn with_alpha(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Rejected color literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid color `{}`, expected #rgb or #rrggbb", self.0)
	}
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
	type Err = ParseColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = || ParseColorError(s.to_string());
		let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(err());
		}
		let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16);
		match hex.len() {
			3 => {
				let (r, g, b) = (channel(0, 1), channel(1, 1), channel(2, 1));
				match (r, g, b) {
					(Ok(r), Ok(g), Ok(b)) => Ok(Color::rgb(r * 17, g * 17, b * 17)),
					_ => Err(err()),
				}
			}
			6 => match (channel(0, 2), channel(2, 2), channel(4, 2)) {
				(Ok(r), Ok(g), Ok(b)) => Ok(Color::rgb(r, g, b)),
				_ => Err(err()),
			},
			_ => Err(err()),
		}
	}
}

impl TryFrom<String> for Color {
	type Error = ParseColorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_short_and_long_hex() {
		assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
		assert_eq!("#1a1a2e".parse::<Color>().unwrap(), Color::rgb(0x1a, 0x1a, 0x2e));
		assert!("1a1a2e".parse::<Color>().is_err());
		assert!("#12345".parse::<Color>().is_err());
		assert!("#ggg".parse::<Color>().is_err());
	}

	#[test]
	fn lerp_hits_endpoints_and_clamps() {
		let (lo, hi) = (Color::rgb(0, 0, 0), Color::rgb(200, 100, 50));
		assert_eq!(lo.lerp(hi, 0.0), lo);
		assert_eq!(lo.lerp(hi, 1.0), hi);
		assert_eq!(lo.lerp(hi, 0.5), Color::rgb(100, 50, 25));
		assert_eq!(lo.lerp(hi, 7.0), hi);
		assert_eq!(lo.lerp(hi, -1.0), lo);
	}

	#[test]
	fn displays_as_css_hex() {
		assert_eq!(Color::rgb(0x43, 0xa0, 0x47).to_string(), "#43a047");
		assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.5), "rgba(1, 2, 3, 0.5)");
	}
}
