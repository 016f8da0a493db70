//! Per-frame node motion: drift, wall bounces and the push effect.

use super::config::{HoverEffect, SimulationConfig};
use super::store::{Node, NodeStore};
use super::types::Pointer;

/// Below this pointer distance a node has no push direction.
const MIN_PUSH_DISTANCE: f64 = 1e-9;

/// Advance every node by one frame.
pub fn step(store: &mut NodeStore, config: &SimulationConfig, pointer: Option<Pointer>) {
	for node in store.iter_mut() {
		node.x += node.vx * config.animation_speed;
		node.y += node.vy * config.animation_speed;
		reflect(node);
		if config.hover_effect == HoverEffect::Push {
			push(node, config, pointer);
		}
	}
}

/// Clamp into `[radius, 1 - radius]` and point the velocity back inside.
fn reflect(node: &mut Node) {
	let lo = node.radius();
	let hi = (1.0 - lo).max(lo);

	if node.x < lo {
		node.x = lo;
		node.vx = node.vx.abs();
	} else if node.x > hi {
		node.x = hi;
		node.vx = -node.vx.abs();
	}

	if node.y < lo {
		node.y = lo;
		node.vy = node.vy.abs();
	} else if node.y > hi {
		node.y = hi;
		node.vy = -node.vy.abs();
	}
}

/// Elastic pull toward the rest position, displaced away from a nearby pointer.
fn push(node: &mut Node, config: &SimulationConfig, pointer: Option<Pointer>) {
	let (rest_x, rest_y) = node.rest_position();
	let (mut target_x, mut target_y) = (rest_x, rest_y);

	if let Some(p) = pointer {
		let (dx, dy) = (node.x - p.x, node.y - p.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < config.push_radius && distance > MIN_PUSH_DISTANCE {
			let falloff = distance / config.push_radius;
			let force = (1.0 - falloff * falloff) * config.push_strength;
			target_x += dx / distance * force;
			target_y += dy / distance * force;
		}
	}

	node.vx = (node.vx + (target_x - node.x) * config.push_elasticity) * config.push_dampening;
	node.vy = (node.vy + (target_y - node.y) * config.push_elasticity) * config.push_dampening;
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::animated_graph::sampler;

	fn single(node: Node) -> NodeStore {
		NodeStore::new(vec![node])
	}

	#[test]
	fn nodes_stay_inside_their_padding() {
		let config = SimulationConfig {
			num_nodes: 40,
			animation_speed: 1.0,
			velocity_factor: 0.05,
			..Default::default()
		};
		let mut rng = StdRng::seed_from_u64(5);
		let mut store = NodeStore::new(sampler::spawn_nodes(&mut rng, &config));
		for tick in 0..2000 {
			let pointer = Some(Pointer::new((tick % 100) as f64 / 100.0, 0.5));
			step(&mut store, &config, pointer);
			for node in store.nodes() {
				let (lo, hi) = (node.radius(), 1.0 - node.radius());
				assert!((lo..=hi).contains(&node.x), "x={} at tick {tick}", node.x);
				assert!((lo..=hi).contains(&node.y), "y={} at tick {tick}", node.y);
			}
		}
	}

	#[test]
	fn push_mode_keeps_nodes_inside() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::Push,
			push_strength: 2.0,
			push_elasticity: 0.5,
			push_dampening: 0.99,
			animation_speed: 1.0,
			..Default::default()
		};
		let mut store = single(Node::new(0.05, 0.05, 0.0, 0.0, 0.02));
		for _ in 0..500 {
			step(&mut store, &config, Some(Pointer::new(0.5, 0.5)));
			let node = &store.nodes()[0];
			assert!(node.x >= 0.02 && node.x <= 0.98);
			assert!(node.y >= 0.02 && node.y <= 0.98);
		}
	}

	#[test]
	fn left_wall_bounce_points_velocity_right() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::None,
			animation_speed: 1.0,
			..Default::default()
		};
		let mut store = single(Node::new(0.02, 0.5, -0.05, 0.0, 0.01));
		step(&mut store, &config, None);
		let node = &store.nodes()[0];
		assert_eq!(node.x, 0.01);
		assert!(node.vx >= 0.0);
		assert_eq!(node.vx, 0.05);
	}

	#[test]
	fn bottom_wall_bounce_points_velocity_up() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::None,
			animation_speed: 1.0,
			..Default::default()
		};
		let mut store = single(Node::new(0.5, 0.98, 0.0, 0.05, 0.01));
		step(&mut store, &config, None);
		let node = &store.nodes()[0];
		assert_eq!(node.y, 0.99);
		assert_eq!(node.vy, -0.05);
	}

	#[test]
	fn drift_without_push_keeps_speed() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::Highlight,
			animation_speed: 0.5,
			..Default::default()
		};
		let mut store = single(Node::new(0.5, 0.5, 0.02, -0.01, 0.01));
		step(&mut store, &config, Some(Pointer::new(0.5, 0.5)));
		let node = &store.nodes()[0];
		assert!((node.x - 0.51).abs() < 1e-12);
		assert!((node.y - 0.495).abs() < 1e-12);
		assert_eq!((node.vx, node.vy), (0.02, -0.01));
	}

	#[test]
	fn push_settles_at_rest_when_pointer_is_far() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::Push,
			..Default::default()
		};
		let mut node = Node::new(0.4, 0.6, 0.0, 0.0, 0.01);
		node.x = 0.7;
		node.y = 0.3;
		node.vx = 0.03;
		node.vy = -0.02;
		let mut store = single(node);
		let far = Some(Pointer::new(5.0, 5.0));
		for _ in 0..3000 {
			step(&mut store, &config, far);
		}
		let node = &store.nodes()[0];
		assert!((node.x - 0.4).abs() < 1e-3, "x={}", node.x);
		assert!((node.y - 0.6).abs() < 1e-3, "y={}", node.y);
		assert!(node.vx.abs() < 1e-4 && node.vy.abs() < 1e-4);
	}

	#[test]
	fn pointer_inside_radius_pushes_node_away() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::Push,
			animation_speed: 0.0,
			..Default::default()
		};
		let mut store = single(Node::new(0.5, 0.5, 0.0, 0.0, 0.01));
		step(&mut store, &config, Some(Pointer::new(0.45, 0.5)));
		let node = &store.nodes()[0];
		// force = (1 - (0.05 / 0.3)^2) * 0.5, target x = 0.5 + force
		let force = (1.0 - (0.05f64 / 0.3).powi(2)) * 0.5;
		let expected = force * 0.05 * 0.8;
		assert!((node.vx - expected).abs() < 1e-12);
		assert_eq!(node.vy, 0.0);
	}

	#[test]
	fn pointer_on_top_of_node_stays_finite() {
		let config = SimulationConfig {
			hover_effect: HoverEffect::Push,
			..Default::default()
		};
		let mut store = single(Node::new(0.5, 0.5, 0.0, 0.0, 0.01));
		for _ in 0..10 {
			let (x, y) = store.nodes()[0].position();
			step(&mut store, &config, Some(Pointer::new(x, y)));
		}
		let node = &store.nodes()[0];
		assert!(node.x.is_finite() && node.y.is_finite());
		assert!(node.vx.is_finite() && node.vy.is_finite());
	}
}
