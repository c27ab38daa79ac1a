//! Proximity edges between laid-out nodes.

use super::types::{Edge, SkillNode};

/// Nodes closer than this (in layout units) are connected.
pub const PROXIMITY_THRESHOLD: f64 = 25.0;

/// Connect every pair of nodes closer than [`PROXIMITY_THRESHOLD`]. Each
/// unordered pair is visited once, earlier node first.
pub fn build_edges(nodes: &[SkillNode]) -> Vec<Edge> {
	let mut edges = Vec::new();
	for (a, from) in nodes.iter().enumerate() {
		for (b, to) in nodes.iter().enumerate().skip(a + 1) {
			if distance(from, to) < PROXIMITY_THRESHOLD {
				edges.push(Edge::between(nodes, a, b));
			}
		}
	}
	edges
}

/// Euclidean distance between two node positions.
pub fn distance(from: &SkillNode, to: &SkillNode) -> f64 {
	(from.x - to.x).hypot(from.y - to.y)
}
