//! Simulation parameters and their JSON form.

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_COLOR: &str = "rgb(76, 181, 174)";

/// Pointer interaction mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverEffect {
	/// Brighten nodes and edges near the pointer at draw time.
	#[default]
	Highlight,
	/// Push nodes away from the pointer with an elastic return to rest.
	Push,
	/// Ignore the pointer.
	None,
}

impl fmt::Display for HoverEffect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Highlight => "highlight",
			Self::Push => "push",
			Self::None => "none",
		})
	}
}

/// Every tunable of one simulation instance.
///
/// Sizes, distances and widths are in simulation units, where the unit square
/// maps onto the largest centered square of the canvas. Deserializes from
/// camelCase JSON in which every key is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
	/// Run physics and the frame loop. When off, one static frame is drawn.
	pub enable_animations: bool,
	/// Nodes to sample. Zero or negative means an empty graph.
	pub num_nodes: i32,
	/// Smallest node radius.
	pub min_node_size: f64,
	/// Largest node radius.
	pub max_node_size: f64,
	/// CSS color for node fills.
	pub node_color: String,
	/// Base node alpha.
	pub node_opacity: f64,
	/// Pairs closer than this are connected.
	pub connection_distance: f64,
	/// CSS color for edges.
	pub line_color: String,
	/// Alpha of a zero-length edge; longer edges fade linearly to nothing.
	pub line_opacity: f64,
	/// Edge width.
	pub line_width: f64,
	/// Per-frame multiplier on node velocity.
	pub animation_speed: f64,
	/// Scale of the random initial velocity.
	pub velocity_factor: f64,
	/// Floor on the initial speed.
	pub min_velocity: f64,
	/// Pointer interaction mode.
	pub hover_effect: HoverEffect,
	/// Edge alpha right under the pointer (highlight mode).
	pub hover_line_opacity: f64,
	/// Edge width right under the pointer (highlight mode).
	pub hover_line_width: f64,
	/// Node alpha right under the pointer (highlight mode).
	pub hover_node_opacity: f64,
	/// Reach of the push effect.
	pub push_radius: f64,
	/// How hard nodes inside the radius are pushed.
	pub push_strength: f64,
	/// Pull back toward the rest position.
	pub push_elasticity: f64,
	/// Velocity retained per frame while pushed or returning.
	pub push_dampening: f64,
	/// Accepted and carried, but no physics consumes it.
	pub repulsion_field: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			enable_animations: true,
			num_nodes: 24,
			min_node_size: 0.008,
			max_node_size: 0.015,
			node_color: DEFAULT_COLOR.into(),
			node_opacity: 0.6,
			connection_distance: 0.3,
			line_color: DEFAULT_COLOR.into(),
			line_opacity: 0.6,
			line_width: 0.004,
			animation_speed: 0.012,
			velocity_factor: 0.01,
			min_velocity: 0.001,
			hover_effect: HoverEffect::Highlight,
			hover_line_opacity: 0.8,
			hover_line_width: 0.002,
			hover_node_opacity: 1.0,
			push_radius: 0.3,
			push_strength: 0.5,
			push_elasticity: 0.05,
			push_dampening: 0.8,
			repulsion_field: 0.2,
		}
	}
}

impl SimulationConfig {
	/// Parse a (possibly partial) camelCase JSON object. Missing keys take defaults.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Number of nodes to sample; non-positive counts mean no nodes.
	pub fn node_count(&self) -> usize {
		self.num_nodes.max(0) as usize
	}

	/// Whether swapping to `other` invalidates the current node layout.
	pub fn needs_resample(&self, other: &Self) -> bool {
		self.num_nodes != other.num_nodes
			|| self.min_node_size != other.min_node_size
			|| self.max_node_size != other.max_node_size
	}

	/// Copy with every non-finite number replaced by its default.
	pub fn sanitized(mut self) -> Self {
		let d = Self::default();
		for (value, fallback) in [
			(&mut self.min_node_size, d.min_node_size),
			(&mut self.max_node_size, d.max_node_size),
			(&mut self.node_opacity, d.node_opacity),
			(&mut self.connection_distance, d.connection_distance),
			(&mut self.line_opacity, d.line_opacity),
			(&mut self.line_width, d.line_width),
			(&mut self.animation_speed, d.animation_speed),
			(&mut self.velocity_factor, d.velocity_factor),
			(&mut self.min_velocity, d.min_velocity),
			(&mut self.hover_line_opacity, d.hover_line_opacity),
			(&mut self.hover_line_width, d.hover_line_width),
			(&mut self.hover_node_opacity, d.hover_node_opacity),
			(&mut self.push_radius, d.push_radius),
			(&mut self.push_strength, d.push_strength),
			(&mut self.push_elasticity, d.push_elasticity),
			(&mut self.push_dampening, d.push_dampening),
			(&mut self.repulsion_field, d.repulsion_field),
		] {
			if !value.is_finite() {
				*value = fallback;
			}
		}
		self
	}
}
