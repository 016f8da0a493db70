//! Node records and their owning store.

/// One simulated point.
///
/// Position and velocity change every tick; `radius` and the rest position are
/// fixed when the node is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity, before `animation_speed` is applied.
	pub vx: f64,
	/// Vertical velocity, before `animation_speed` is applied.
	pub vy: f64,
	radius: f64,
	rest_x: f64,
	rest_y: f64,
}

impl Node {
	/// Create a node resting at its starting position.
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			rest_x: x,
			rest_y: y,
		}
	}

	/// Drawn radius, also the wall margin.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Attractor used by the push effect to pull the node back.
	pub fn rest_position(&self) -> (f64, f64) {
		(self.rest_x, self.rest_y)
	}

	/// Current `(x, y)`.
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Euclidean distance between the two current positions.
	pub fn distance_to(&self, other: &Node) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Owns every node of one simulation instance.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
	nodes: Vec<Node>,
}

impl NodeStore {
	/// Store over an existing node set.
	pub fn new(nodes: Vec<Node>) -> Self {
		Self { nodes }
	}

	/// Drop every node and install a freshly sampled set.
	pub fn replace(&mut self, nodes: Vec<Node>) {
		self.nodes = nodes;
	}

	/// Read-only view of every node.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Mutable access for the physics step.
	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
		self.nodes.iter_mut()
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
