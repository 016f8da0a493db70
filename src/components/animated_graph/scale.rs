//! Mapping between the unit simulation square and canvas pixels.

/// Isotropic letterbox fit of the unit square into a `width` x `height` surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Pixels per simulation unit.
	pub scale: f64,
	/// Left margin in pixels.
	pub offset_x: f64,
	/// Top margin in pixels.
	pub offset_y: f64,
}

impl Viewport {
	/// The largest centered square inside the surface.
	pub fn fit(width: f64, height: f64) -> Self {
		let scale = width.min(height).max(0.0);
		Self {
			scale,
			offset_x: (width - scale) / 2.0,
			offset_y: (height - scale) / 2.0,
		}
	}

	/// Nothing can be drawn into a zero-sized surface.
	pub fn is_empty(&self) -> bool {
		self.scale.is_nan() || self.scale <= 0.0
	}

	/// Simulation coordinates to surface pixels.
	pub fn to_pixels(&self, x: f64, y: f64) -> (f64, f64) {
		(self.offset_x + x * self.scale, self.offset_y + y * self.scale)
	}

	/// Inverse of [`Viewport::to_pixels`]; `None` for an empty viewport.
	pub fn to_simulation(&self, px: f64, py: f64) -> Option<(f64, f64)> {
		if self.is_empty() {
			return None;
		}
		Some((
			(px - self.offset_x) / self.scale,
			(py - self.offset_y) / self.scale,
		))
	}
}

/// Backing-store size for a canvas laid out at `css_width` x `css_height`.
pub fn device_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
	let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
		pixel_ratio
	} else {
		1.0
	};
	(
		(css_width.max(0.0) * ratio).round() as u32,
		(css_height.max(0.0) * ratio).round() as u32,
	)
}
