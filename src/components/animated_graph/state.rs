//! Per-instance simulation state and the frame step.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::SimulationConfig;
use super::edges::{self, Edge};
use super::physics;
use super::render::{self, Painter};
use super::sampler;
use super::scale::Viewport;
use super::store::{Node, NodeStore};
use super::types::Pointer;

/// Everything one mounted graph owns: the active config snapshot, the nodes,
/// this frame's edges, the pointer and the canvas size in device pixels.
pub struct GraphState {
	config: SimulationConfig,
	store: NodeStore,
	edges: Vec<Edge>,
	pointer: Option<Pointer>,
	width: f64,
	height: f64,
	rng: StdRng,
}

impl GraphState {
	/// Fresh state with nodes sampled from `seed`. The size starts at zero
	/// until the first [`resize`](Self::resize).
	pub fn new(config: SimulationConfig, seed: u64) -> Self {
		let mut state = Self {
			config: config.sanitized(),
			store: NodeStore::default(),
			edges: Vec::new(),
			pointer: None,
			width: 0.0,
			height: 0.0,
			rng: StdRng::seed_from_u64(seed),
		};
		state.resample();
		state
	}

	/// State over a fixed node set, bypassing the sampler.
	pub fn with_nodes(config: SimulationConfig, nodes: Vec<Node>) -> Self {
		let config = config.sanitized();
		let mut edges = Vec::new();
		edges::rebuild(&nodes, config.connection_distance, &mut edges);
		Self {
			config,
			store: NodeStore::new(nodes),
			edges,
			pointer: None,
			width: 0.0,
			height: 0.0,
			rng: StdRng::seed_from_u64(0),
		}
	}

	/// The active, sanitized config snapshot.
	pub fn config(&self) -> &SimulationConfig {
		&self.config
	}

	/// Current node positions.
	pub fn nodes(&self) -> &[Node] {
		self.store.nodes()
	}

	/// Edges as of the last rebuild.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Last pointer position in simulation units, if one was seen.
	pub fn pointer(&self) -> Option<Pointer> {
		self.pointer
	}

	/// Canvas size in device pixels.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Letterbox mapping for the current size.
	pub fn viewport(&self) -> Viewport {
		Viewport::fit(self.width, self.height)
	}

	/// Install a new config snapshot. Returns whether the nodes were resampled.
	pub fn set_config(&mut self, config: SimulationConfig) -> bool {
		let config = config.sanitized();
		let resample = self.config.needs_resample(&config);
		self.config = config;
		if resample {
			self.resample();
		}
		resample
	}

	/// Replace every node with a fresh layout for the current config.
	pub fn resample(&mut self) {
		let nodes = sampler::spawn_nodes(&mut self.rng, &self.config);
		debug!("sampled {} nodes", nodes.len());
		self.store.replace(nodes);
		edges::rebuild(self.store.nodes(), self.config.connection_distance, &mut self.edges);
	}

	/// Record where the pointer is; `None` forgets it.
	pub fn set_pointer(&mut self, pointer: Option<Pointer>) {
		self.pointer = pointer;
	}

	/// Set the canvas size in device pixels.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// One simulation tick: move the nodes (when animating), then rebuild edges.
	pub fn advance(&mut self) {
		if self.config.enable_animations {
			physics::step(&mut self.store, &self.config, self.pointer);
		}
		edges::rebuild(self.store.nodes(), self.config.connection_distance, &mut self.edges);
	}

	/// A whole frame: advance, then paint. Nothing happens while the surface
	/// has no area.
	pub fn frame(&mut self, painter: &mut impl Painter) {
		if self.viewport().is_empty() {
			return;
		}
		self.advance();
		render::render(self, painter);
	}
}
