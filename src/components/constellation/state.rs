use std::collections::HashSet;

use super::compute::Constellation;

/// Side of the normalized layout square.
pub const LAYOUT_SIZE: f64 = 100.0;

/// Uniform fit of the layout square into the canvas, centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Viewport {
	pub fn fit(width: f64, height: f64) -> Self {
		let k = width.min(height) / LAYOUT_SIZE;
		Self {
			x: (width - LAYOUT_SIZE * k) / 2.0,
			y: (height - LAYOUT_SIZE * k) / 2.0,
			k,
		}
	}

	pub fn to_screen(&self, lx: f64, ly: f64) -> (f64, f64) {
		(self.x + lx * self.k, self.y + ly * self.k)
	}

	pub fn to_layout(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Everything the render loop needs between frames.
pub struct ConstellationState {
	pub constellation: Constellation,
	pub hover: HoverState,
	pub viewport: Viewport,
	pub width: f64,
	pub height: f64,
	/// Seconds since the current constellation was laid out.
	pub reveal_time: f64,
	/// Seconds since the component started, drives the center rings.
	pub clock: f64,
}

impl ConstellationState {
	pub fn new(constellation: Constellation, width: f64, height: f64) -> Self {
		Self {
			constellation,
			hover: HoverState::default(),
			viewport: Viewport::fit(width, height),
			width,
			height,
			reveal_time: 0.0,
			clock: 0.0,
		}
	}

	/// Swap in a freshly computed constellation and restart its reveal.
	pub fn replace(&mut self, constellation: Constellation) {
		self.constellation = constellation;
		self.hover = HoverState::default();
		self.reveal_time = 0.0;
	}

	/// Nearest node whose glow contains the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (lx, ly) = self.viewport.to_layout(sx, sy);
		self.constellation
			.nodes
			.iter()
			.enumerate()
			.filter(|(i, _)| self.node_reveal(*i) > 0.0)
			.map(|(i, node)| (i, (node.x - lx).hypot(node.y - ly), glow_radius(node.size)))
			.filter(|(_, dist, reach)| dist < reach)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the outgoing highlight around while it fades
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			self.hover.neighbors.extend(self.constellation.neighbors(idx));
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.is_hovered(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// CSS cursor for the canvas: a pointer while a node is under it.
	pub fn cursor(&self) -> &'static str {
		if self.hover.node.is_some() {
			"pointer"
		} else {
			"default"
		}
	}

	/// Edge `i` fades in over a second, one every 50 ms.
	pub fn edge_reveal(&self, i: usize) -> f64 {
		progress(self.reveal_time, 0.05 * i as f64, 1.0)
	}

	/// Node `i` pops in after the first half second.
	pub fn node_reveal(&self, i: usize) -> f64 {
		progress(self.reveal_time, 0.5 + 0.05 * i as f64, 0.5)
	}

	pub fn label_reveal(&self, i: usize) -> f64 {
		progress(self.reveal_time, 0.8 + 0.03 * i as f64, 0.5)
	}

	pub fn tick(&mut self, dt: f64) {
		self.reveal_time += dt;
		self.clock += dt;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.viewport = Viewport::fit(width, height);
	}
}

/// Radius of the soft halo drawn behind a node of `size`.
pub fn glow_radius(size: f64) -> f64 {
	size * 1.5
}

fn progress(now: f64, delay: f64, duration: f64) -> f64 {
	((now - delay) / duration).clamp(0.0, 1.0)
}
