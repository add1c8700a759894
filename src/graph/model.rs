use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A peer and its externally computed balance score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeerRecord {
	/// Public-key-like identifier.
	pub id: String,
	/// Give/take ratio in [0, 1].
	pub balance: f64,
}

/// Historical bandwidth exchange between two peers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
	/// First endpoint; owns the "given" half of the edge.
	pub a: String,
	/// Second endpoint; owns the "taken" half.
	pub b: String,
	/// Exchange volume; only its order among edges matters.
	pub volume_rank: f64,
	/// Fraction of the edge assigned to `a`, in [0, 1].
	pub split_ratio: f64,
}

/// One snapshot from the trust-accounting collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustDataset {
	/// Peers to draw.
	pub peers: Vec<PeerRecord>,
	/// Interactions between them.
	#[serde(default)]
	pub edges: Vec<InteractionRecord>,
}

impl TrustDataset {
	/// Parses `{peers: [{id, balance}], edges: [{a, b, volumeRank, splitRatio}]}`.
	pub fn from_json(json: &str) -> Result<Self, DataError> {
		Ok(serde_json::from_str(json)?)
	}
}

/// A peer after validation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Peer {
	pub id: String,
	pub balance: f64,
}

/// An edge after validation, endpoints resolved to peer indices.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Edge {
	pub a: usize,
	pub b: usize,
	pub volume: f64,
	pub ratio: f64,
}

/// A dataset that passed validation, with values clamped into range.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ValidGraph {
	pub peers: Vec<Peer>,
	pub edges: Vec<Edge>,
	/// Number of balances and ratios pulled back into [0, 1].
	pub clamped: usize,
}

fn finite(value: f64, field: &'static str, owner: impl FnOnce() -> String) -> Result<f64, DataError> {
	if value.is_finite() {
		Ok(value)
	} else {
		Err(DataError::NonNumeric {
			field,
			owner: owner(),
		})
	}
}

fn clamp_unit(value: f64, clamped: &mut usize) -> f64 {
	if (0.0..=1.0).contains(&value) {
		value
	} else {
		*clamped += 1;
		value.clamp(0.0, 1.0)
	}
}

impl ValidGraph {
	/// Checks the whole dataset before anything is drawn.
	pub fn from_dataset(data: &TrustDataset) -> Result<Self, DataError> {
		if data.peers.is_empty() {
			return Err(DataError::NoPeers);
		}

		let mut clamped = 0;
		let mut index = HashMap::with_capacity(data.peers.len());
		let mut peers = Vec::with_capacity(data.peers.len());
		for record in &data.peers {
			if index.insert(record.id.as_str(), peers.len()).is_some() {
				return Err(DataError::DuplicatePeer(record.id.clone()));
			}
			let balance = finite(record.balance, "balance", || record.id.clone())?;
			peers.push(Peer {
				id: record.id.clone(),
				balance: clamp_unit(balance, &mut clamped),
			});
		}

		let mut edges = Vec::with_capacity(data.edges.len());
		for record in &data.edges {
			let resolve = |id: &String| {
				index.get(id.as_str()).copied().ok_or_else(|| DataError::DanglingEdge {
					a: record.a.clone(),
					b: record.b.clone(),
					missing: id.clone(),
				})
			};
			let (a, b) = (resolve(&record.a)?, resolve(&record.b)?);
			let owner = || format!("{} <-> {}", record.a, record.b);
			let volume = finite(record.volume_rank, "volumeRank", owner)?;
			let ratio = finite(record.split_ratio, "splitRatio", owner)?;
			edges.push(Edge {
				a,
				b,
				volume,
				ratio: clamp_unit(ratio, &mut clamped),
			});
		}

		Ok(Self {
			peers,
			edges,
			clamped,
		})
	}
}
