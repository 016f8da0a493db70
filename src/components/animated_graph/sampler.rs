//! Initial node placement.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::SimulationConfig;
use super::store::Node;

/// Center of the sampling disk, on both axes.
pub const CENTER: f64 = 0.5;
/// Radius of the sampling disk. It overhangs the unit square, so candidates
/// are clamped back inside.
pub const DISK_RADIUS: f64 = 0.6;
/// Minimum distance wanted between sampled points.
pub const MIN_SPACING: f64 = 0.08;
/// Draws per point before the spacing rule gives up.
pub const MAX_ATTEMPTS: usize = 50;

/// Uniform-area sample from the layout disk.
fn disk_point<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
	let radius = rng.r#gen::<f64>().sqrt() * DISK_RADIUS;
	let angle = rng.r#gen::<f64>() * TAU;
	(CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

fn is_clear(placed: &[(f64, f64)], (x, y): (f64, f64)) -> bool {
	placed.iter().all(|&(px, py)| {
		let (dx, dy) = (x - px, y - py);
		(dx * dx + dy * dy).sqrt() >= MIN_SPACING
	})
}

/// Rejection-sample `count` points at least [`MIN_SPACING`] apart.
///
/// A point that finds no free spot within [`MAX_ATTEMPTS`] draws keeps its
/// last candidate, so the layout may overlap but sampling always terminates.
pub fn sample_positions<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<(f64, f64)> {
	let mut placed = Vec::with_capacity(count);
	for _ in 0..count {
		let mut candidate = disk_point(rng);
		for _ in 1..MAX_ATTEMPTS {
			if is_clear(&placed, candidate) {
				break;
			}
			candidate = disk_point(rng);
		}
		placed.push(candidate);
	}
	placed
}

/// Build a fresh node set for `config`: spaced positions, a random heading
/// and a speed of at least `min_velocity`, and a size within the size range.
pub fn spawn_nodes<R: Rng + ?Sized>(rng: &mut R, config: &SimulationConfig) -> Vec<Node> {
	sample_positions(rng, config.node_count())
		.into_iter()
		.map(|(x, y)| {
			let heading = rng.r#gen::<f64>() * TAU;
			let speed = config
				.min_velocity
				.max(rng.r#gen::<f64>() * config.velocity_factor);
			let size = config.min_node_size
				+ rng.r#gen::<f64>() * (config.max_node_size - config.min_node_size);
			Node::new(x, y, heading.cos() * speed, heading.sin() * speed, size)
		})
		.collect()
}
