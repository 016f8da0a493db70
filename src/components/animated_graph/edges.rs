//! Proximity edges between nodes.

use super::store::Node;

/// A connection between two nodes closer than the connection distance.
///
/// Edges are rebuilt from positions every frame; `a < b` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Index of the first node.
	pub a: usize,
	/// Index of the second node, always greater than `a`.
	pub b: usize,
	/// Pair distance measured when the edge was built.
	pub distance: f64,
}

/// Replace `edges` with every pair of `nodes` strictly closer than `threshold`.
pub fn rebuild(nodes: &[Node], threshold: f64, edges: &mut Vec<Edge>) {
	edges.clear();
	for (a, first) in nodes.iter().enumerate() {
		for (offset, second) in nodes[a + 1..].iter().enumerate() {
			let distance = first.distance_to(second);
			if distance < threshold {
				edges.push(Edge {
					a,
					b: a + 1 + offset,
					distance,
				});
			}
		}
	}
}
