//! # Error Module.
//!
//! Errors raised while loading configuration and while rendering datasets.

use thiserror::Error;

/// Problems with a peer/edge dataset handed to the graph renderer.
///
/// A render that fails with one of these leaves the previously committed
/// scene untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
	/// The peer set is empty.
	#[error("dataset contains no peers")]
	NoPeers,

	/// The same peer id appears more than once.
	#[error("duplicate peer id `{0}`")]
	DuplicatePeer(String),

	/// An edge references a peer id that is not in the peer set.
	#[error("edge {a} <-> {b} references unknown peer `{missing}`")]
	DanglingEdge {
		/// First endpoint of the offending edge.
		a: String,
		/// Second endpoint of the offending edge.
		b: String,
		/// The endpoint that could not be resolved.
		missing: String,
	},

	/// A balance, ratio or volume value is NaN or infinite.
	#[error("non-numeric {field} on `{owner}`")]
	NonNumeric {
		/// Which field carried the value.
		field: &'static str,
		/// The peer id or edge (`a <-> b`) owning the value.
		owner: String,
	},

	/// The dataset document does not have the expected shape.
	#[error("malformed dataset: {0}")]
	Malformed(String),
}

/// Problems with the visual configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
	/// The configuration document could not be parsed.
	#[error("ParsingError: {0}")]
	ParsingError(String),

	/// The configuration parsed but holds unusable values.
	#[error("ValidationError: {0}")]
	ValidationError(String),
}

impl From<serde_json::Error> for DataError {
	fn from(err: serde_json::Error) -> Self {
		DataError::Malformed(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		ConfigError::ParsingError(err.to_string())
	}
}
