//! # Configuration Module.
//!
//! The visual configuration read once at start-up. Keys mirror the JSON
//! document (`node.circle.minRadius`, `help.edges.dividingWidth`, ...); every
//! key is optional and falls back to the built-in look.

use serde::{Deserialize, Serialize};

use crate::encoding::Color;
use crate::error::ConfigError;

/// Complete visual configuration for the graph and its legend.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualConfig {
	/// Node encodings.
	pub node: NodeConfig,
	/// Edge encodings.
	pub link: LinkConfig,
	/// Legend overlay settings.
	pub help: HelpConfig,
	/// Graph canvas settings.
	pub graph: GraphConfig,
}

/// `node.*`
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeConfig {
	/// `node.circle`
	pub circle: CircleConfig,
	/// `node.color`
	pub color: ColorConfig,
	/// `node.publicKeyLabel`
	pub public_key_label: TextStyle,
}

/// `node.circle.{minRadius,maxRadius}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CircleConfig {
	/// Radius of the lowest ranked node.
	pub min_radius: f64,
	/// Radius of the highest ranked node.
	pub max_radius: f64,
}

impl Default for CircleConfig {
	fn default() -> Self {
		Self {
			min_radius: 5.0,
			max_radius: 25.0,
		}
	}
}

/// `node.color.{domain,range}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorConfig {
	/// Balance interval mapped onto the colors.
	pub domain: [f64; 2],
	/// Low-balance and high-balance colors.
	pub range: [Color; 2],
}

impl Default for ColorConfig {
	fn default() -> Self {
		Self {
			domain: [0.0, 1.0],
			range: [Color::rgb(0xe5, 0x39, 0x35), Color::rgb(0x43, 0xa0, 0x47)],
		}
	}
}

/// Typography for canvas text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
	/// Fill color.
	pub color: Color,
	/// CSS font family.
	pub font_family: String,
	/// Size in pixels.
	pub font_size: f64,
	/// CSS font weight (`normal`, `bold`, `600`, ...).
	pub font_weight: String,
}

impl TextStyle {
	/// CSS shorthand for the canvas `font` property.
	pub fn css_font(&self) -> String {
		format!("{} {}px {}", self.font_weight, self.font_size, self.font_family)
	}
}

impl Default for TextStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(0xff, 0xff, 0xff),
			font_family: "sans-serif".into(),
			font_size: 10.0,
			font_weight: "bold".into(),
		}
	}
}

/// `link.{color,strokeWidthMin,strokeWidthMax}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkConfig {
	/// Stroke color of both edge halves.
	pub color: Color,
	/// Width of the lowest ranked edge.
	pub stroke_width_min: f64,
	/// Width of the highest ranked edge.
	pub stroke_width_max: f64,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			color: Color::rgb(0x64, 0xb4, 0xff),
			stroke_width_min: 1.0,
			stroke_width_max: 8.0,
		}
	}
}

/// `help.*`
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpConfig {
	/// `help.page`
	pub page: HelpPageConfig,
	/// `help.label`
	pub label: HelpLabelConfig,
	/// `help.nodes`
	pub nodes: HelpNodesConfig,
	/// `help.edges`
	pub edges: HelpEdgesConfig,
}

/// `help.page.minWindowWidth`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpPageConfig {
	/// Viewports narrower than this force the overlay hidden.
	pub min_window_width: f64,
}

impl Default for HelpPageConfig {
	fn default() -> Self {
		Self {
			min_window_width: 720.0,
		}
	}
}

/// `help.label.{fontFamily,fontSize,fontWeight,color,offsetY}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpLabelConfig {
	/// Caption color.
	pub color: Color,
	/// CSS font family.
	pub font_family: String,
	/// Size in pixels.
	pub font_size: f64,
	/// CSS font weight.
	pub font_weight: String,
	/// Gap between a sample's lower edge and its caption.
	pub offset_y: f64,
}

impl HelpLabelConfig {
	/// Caption typography as a [`TextStyle`].
	pub fn style(&self) -> TextStyle {
		TextStyle {
			color: self.color,
			font_family: self.font_family.clone(),
			font_size: self.font_size,
			font_weight: self.font_weight.clone(),
		}
	}
}

impl Default for HelpLabelConfig {
	fn default() -> Self {
		Self {
			color: Color::rgb(0xcf, 0xd8, 0xdc),
			font_family: "sans-serif".into(),
			font_size: 12.0,
			font_weight: "normal".into(),
			offset_y: 14.0,
		}
	}
}

/// `help.nodes.numberOfNodes`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpNodesConfig {
	/// Circles in the color and size rows.
	pub number_of_nodes: usize,
}

impl Default for HelpNodesConfig {
	fn default() -> Self {
		Self { number_of_nodes: 5 }
	}
}

/// `help.edges.{numberOfEdges,edgeLength,dividingWidth}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpEdgesConfig {
	/// Segments in the width and split rows.
	pub number_of_edges: usize,
	/// Length of one sample edge.
	pub edge_length: f64,
	/// Gap between the two halves of a split edge, in the graph as well.
	pub dividing_width: f64,
}

impl Default for HelpEdgesConfig {
	fn default() -> Self {
		Self {
			number_of_edges: 5,
			edge_length: 100.0,
			dividing_width: 4.0,
		}
	}
}

/// What orders peers into the radius rank domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankBy {
	/// Rank peers by balance score.
	Balance,
	/// Rank peers by total volume of their interactions.
	#[default]
	Volume,
}

/// Upper bound on `graph.settleTicks`; every render runs that many steps.
pub const MAX_SETTLE_TICKS: usize = 2000;

/// `graph.{rankBy,settleTicks,background}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
	/// Ordering used for node radii.
	pub rank_by: RankBy,
	/// Fixed simulation steps run before the first frame.
	pub settle_ticks: usize,
	/// Canvas background.
	pub background: Color,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			rank_by: RankBy::Volume,
			settle_ticks: 120,
			background: Color::rgb(0x1a, 0x1a, 0x2e),
		}
	}
}

impl VisualConfig {
	/// Parses and validates a JSON configuration document.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: VisualConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects values no scale can sensibly use.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let circle = &self.node.circle;
		check_bounds("node.circle", circle.min_radius, circle.max_radius)?;
		check_bounds("link.strokeWidth", self.link.stroke_width_min, self.link.stroke_width_max)?;

		let [d0, d1] = self.node.color.domain;
		if !d0.is_finite() || !d1.is_finite() || d0 >= d1 {
			return Err(ConfigError::ValidationError(format!(
				"node.color.domain must be an increasing pair, got [{d0}, {d1}]"
			)));
		}

		let edges = &self.help.edges;
		if self.help.nodes.number_of_nodes == 0 || edges.number_of_edges == 0 {
			return Err(ConfigError::ValidationError(
				"help.nodes.numberOfNodes and help.edges.numberOfEdges must be at least 1".into(),
			));
		}
		if !(edges.edge_length > 0.0) || !(edges.dividing_width >= 0.0) {
			return Err(ConfigError::ValidationError(format!(
				"help.edges needs a positive edgeLength and non-negative dividingWidth, got {} and {}",
				edges.edge_length, edges.dividing_width
			)));
		}
		if !(self.node.public_key_label.font_size > 0.0) || !(self.help.label.font_size > 0.0) {
			return Err(ConfigError::ValidationError("font sizes must be positive".into()));
		}

		let min_width = self.help.page.min_window_width;
		if !min_width.is_finite() || min_width < 0.0 {
			return Err(ConfigError::ValidationError(format!(
				"help.page.minWindowWidth must be finite and non-negative, got {min_width}"
			)));
		}
		if !self.help.label.offset_y.is_finite() {
			return Err(ConfigError::ValidationError(format!(
				"help.label.offsetY must be finite, got {}",
				self.help.label.offset_y
			)));
		}
		if self.graph.settle_ticks > MAX_SETTLE_TICKS {
			return Err(ConfigError::ValidationError(format!(
				"graph.settleTicks must be at most {MAX_SETTLE_TICKS}, got {}",
				self.graph.settle_ticks
			)));
		}
		Ok(())
	}
}

fn check_bounds(key: &str, min: f64, max: f64) -> Result<(), ConfigError> {
	if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
		return Err(ConfigError::ValidationError(format!(
			"{key}: expected 0 <= min <= max, got min={min} max={max}"
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(VisualConfig::default().validate().is_ok());
	}

	#[test]
	fn partial_document_keeps_other_defaults() {
		let config = VisualConfig::from_json(
			r##"{
				"node": { "circle": { "minRadius": 3, "maxRadius": 12 } },
				"help": {
					"page": { "minWindowWidth": 500 },
					"label": { "fontSize": 9, "offsetY": 6 },
					"edges": { "dividingWidth": 2 }
				},
				"link": { "color": "#abc" }
			}"##,
		)
		.unwrap();

		assert_eq!(config.node.circle.min_radius, 3.0);
		assert_eq!(config.node.circle.max_radius, 12.0);
		assert_eq!(config.help.page.min_window_width, 500.0);
		assert_eq!(config.help.label.font_size, 9.0);
		assert_eq!(config.help.label.font_weight, "normal");
		assert_eq!(config.help.label.color, Color::rgb(0xcf, 0xd8, 0xdc));
		assert_eq!(config.help.label.offset_y, 6.0);
		assert_eq!(config.help.edges.dividing_width, 2.0);
		assert_eq!(config.help.edges.edge_length, 100.0);
		assert_eq!(config.link.color, Color::rgb(0xaa, 0xbb, 0xcc));
		assert_eq!(config.node.color, ColorConfig::default());
	}

	#[test]
	fn rejects_inverted_radius_bounds() {
		let err = VisualConfig::from_json(r#"{"node":{"circle":{"minRadius":30,"maxRadius":10}}}"#)
			.unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));
	}

	#[test]
	fn rejects_bad_color_literal() {
		let err = VisualConfig::from_json(r#"{"node":{"color":{"range":["red","green"]}}}"#)
			.unwrap_err();
		assert!(matches!(err, ConfigError::ParsingError(_)));
	}

	#[test]
	fn rejects_non_finite_help_geometry() {
		let mut config = VisualConfig::default();
		config.help.page.min_window_width = f64::NAN;
		assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

		let mut config = VisualConfig::default();
		config.help.page.min_window_width = f64::INFINITY;
		assert!(config.validate().is_err());

		let mut config = VisualConfig::default();
		config.help.label.offset_y = f64::NEG_INFINITY;
		assert!(config.validate().is_err());

		let err = VisualConfig::from_json(r#"{"help":{"page":{"minWindowWidth":-1}}}"#).unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));
	}

	#[test]
	fn caps_settle_ticks() {
		assert!(VisualConfig::from_json(r#"{"graph":{"settleTicks":2000}}"#).is_ok());
		let err = VisualConfig::from_json(r#"{"graph":{"settleTicks":100000000}}"#).unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));
	}

	#[test]
	fn parses_rank_by() {
		let config = VisualConfig::from_json(r#"{"graph":{"rankBy":"balance"}}"#).unwrap();
		assert_eq!(config.graph.rank_by, RankBy::Balance);
	}

	#[test]
	fn formats_css_font() {
		assert_eq!(TextStyle::default().css_font(), "bold 10px sans-serif");
	}
}
