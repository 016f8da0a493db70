//! Painting a graph state onto a canvas.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::config::{HoverEffect, SimulationConfig};
use super::scale::Viewport;
use super::state::GraphState;
use super::types::Pointer;

/// Radius around the pointer within which the highlight effect fades in.
pub const HIGHLIGHT_RADIUS: f64 = 0.2;

/// Drawing surface the renderer paints onto, in device pixels.
pub trait Painter {
	/// Erase the whole surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Stroke a straight segment.
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64, alpha: f64);
	/// Fill a disc.
	fn circle(&mut self, center: (f64, f64), radius: f64, color: &str, alpha: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64, alpha: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.set_global_alpha(alpha);
		self.stroke();
	}

	fn circle(&mut self, center: (f64, f64), radius: f64, color: &str, alpha: f64) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, TAU);
		self.set_fill_style_str(color);
		self.set_global_alpha(alpha);
		self.fill();
	}
}

/// Edge paint parameters; `width` is in simulation units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
	/// Alpha in `[0, 1]`.
	pub opacity: f64,
	/// Line width.
	pub width: f64,
}

/// Linear 1 → 0 falloff from the pointer out to [`HIGHLIGHT_RADIUS`].
pub fn highlight_intensity(distance: f64) -> f64 {
	(1.0 - distance / HIGHLIGHT_RADIUS).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
	from + (to - from) * t
}

fn pointer_intensity(config: &SimulationConfig, pointer: Option<Pointer>, at: (f64, f64)) -> f64 {
	match (config.hover_effect, pointer) {
		(HoverEffect::Highlight, Some(p)) => highlight_intensity(p.distance_to(at)),
		_ => 0.0,
	}
}

/// Style of an edge of length `distance` whose midpoint is `midpoint`.
pub fn edge_stroke(
	config: &SimulationConfig,
	distance: f64,
	midpoint: (f64, f64),
	pointer: Option<Pointer>,
) -> Stroke {
	let opacity = (1.0 - distance / config.connection_distance).max(0.0) * config.line_opacity;
	let t = pointer_intensity(config, pointer, midpoint);
	Stroke {
		opacity: lerp(opacity, config.hover_line_opacity, t),
		width: lerp(config.line_width, config.hover_line_width, t),
	}
}

/// Alpha of a node at `position`.
pub fn node_opacity(config: &SimulationConfig, position: (f64, f64), pointer: Option<Pointer>) -> f64 {
	let t = pointer_intensity(config, pointer, position);
	lerp(config.node_opacity, config.hover_node_opacity, t)
}

/// Paint edges, then nodes on top. A zero-sized surface is left untouched.
pub fn render(state: &GraphState, painter: &mut impl Painter) {
	let (width, height) = state.size();
	let view = Viewport::fit(width, height);
	if view.is_empty() {
		return;
	}
	painter.clear(width, height);
	draw_edges(state, &view, painter);
	draw_nodes(state, &view, painter);
}

fn draw_edges(state: &GraphState, view: &Viewport, painter: &mut impl Painter) {
	let (config, nodes, pointer) = (state.config(), state.nodes(), state.pointer());

	for edge in state.edges() {
		let (Some(a), Some(b)) = (nodes.get(edge.a), nodes.get(edge.b)) else {
			continue;
		};
		let midpoint = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
		let stroke = edge_stroke(config, edge.distance, midpoint, pointer);
		painter.line(
			view.to_pixels(a.x, a.y),
			view.to_pixels(b.x, b.y),
			&config.line_color,
			stroke.width * view.scale,
			stroke.opacity,
		);
	}
}

fn draw_nodes(state: &GraphState, view: &Viewport, painter: &mut impl Painter) {
	let (config, pointer) = (state.config(), state.pointer());

	for node in state.nodes() {
		painter.circle(
			view.to_pixels(node.x, node.y),
			node.radius() * view.scale,
			&config.node_color,
			node_opacity(config, node.position(), pointer),
		);
	}
}
