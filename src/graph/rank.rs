//! Positions of peers and edges within their sorted order.
//!
//! Ties break on peer ids, so the ranking is total and does not depend on the
//! order the collaborator listed things in.

use std::cmp::Ordering;

use crate::config::RankBy;

use super::model::ValidGraph;

fn by_value(a: f64, b: f64) -> Ordering {
	a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Inverts a sorted permutation: `ranks[item] = position`.
fn positions(order: &[usize]) -> Vec<usize> {
	let mut ranks = vec![0; order.len()];
	for (position, &item) in order.iter().enumerate() {
		ranks[item] = position;
	}
	ranks
}

/// Total interaction volume touching each peer.
pub(crate) fn peer_volumes(graph: &ValidGraph) -> Vec<f64> {
	let mut volumes = vec![0.0; graph.peers.len()];
	for edge in &graph.edges {
		volumes[edge.a] += edge.volume;
		if edge.b != edge.a {
			volumes[edge.b] += edge.volume;
		}
	}
	volumes
}

/// Rank of each peer, 0 for the smallest key.
pub(crate) fn peer_ranks(graph: &ValidGraph, rank_by: RankBy) -> Vec<usize> {
	let keys: Vec<f64> = match rank_by {
		RankBy::Balance => graph.peers.iter().map(|p| p.balance).collect(),
		RankBy::Volume => peer_volumes(graph),
	};
	let mut order: Vec<usize> = (0..graph.peers.len()).collect();
	order.sort_by(|&x, &y| {
		by_value(keys[x], keys[y]).then_with(|| graph.peers[x].id.cmp(&graph.peers[y].id))
	});
	positions(&order)
}

/// Rank of each edge by volume, 0 for the lightest.
pub(crate) fn edge_ranks(graph: &ValidGraph) -> Vec<usize> {
	let id = |i: usize| (&graph.peers[i].id, i);
	let mut order: Vec<usize> = (0..graph.edges.len()).collect();
	order.sort_by(|&x, &y| {
		let (ex, ey) = (&graph.edges[x], &graph.edges[y]);
		by_value(ex.volume, ey.volume)
			.then_with(|| id(ex.a).cmp(&id(ey.a)))
			.then_with(|| id(ex.b).cmp(&id(ey.b)))
			.then_with(|| x.cmp(&y))
	});
	positions(&order)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::model::{InteractionRecord, PeerRecord, TrustDataset};

	fn graph() -> ValidGraph {
		let peers = [("c", 0.9), ("a", 0.1), ("b", 0.5), ("d", 0.5)]
			.into_iter()
			.map(|(id, balance)| PeerRecord {
				id: id.into(),
				balance,
			})
			.collect();
		let edges = [("a", "b", 5.0), ("b", "c", 1.0), ("c", "d", 3.0)]
			.into_iter()
			.map(|(a, b, volume_rank)| InteractionRecord {
				a: a.into(),
				b: b.into(),
				volume_rank,
				split_ratio: 0.5,
			})
			.collect();
		ValidGraph::from_dataset(&TrustDataset { peers, edges }).unwrap()
	}

	#[test]
	fn ranks_by_balance_with_id_tiebreak() {
		// c=0.9, a=0.1, b=0.5, d=0.5 -> a, b, d, c
		assert_eq!(peer_ranks(&graph(), RankBy::Balance), vec![3, 0, 1, 2]);
	}

	#[test]
	fn ranks_by_incident_volume() {
		// volumes: c=4, a=5, b=6, d=3 -> d, c, a, b
		assert_eq!(peer_ranks(&graph(), RankBy::Volume), vec![1, 2, 3, 0]);
	}

	#[test]
	fn ranks_edges_by_volume() {
		assert_eq!(edge_ranks(&graph()), vec![2, 0, 1]);
	}

	#[test]
	fn ranks_are_a_permutation() {
		let mut ranks = peer_ranks(&graph(), RankBy::Volume);
		ranks.sort();
		assert_eq!(ranks, vec![0, 1, 2, 3]);
	}
}
