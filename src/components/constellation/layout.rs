//! Circular node placement with proficiency-scaled radius and random jitter.

use std::f64::consts::PI;

use super::types::{SkillNode, SkillRecord};

/// Center of the normalized layout square.
pub const CENTER: f64 = 50.0;
/// Radius of a level-0 skill.
pub const BASE_RADIUS: f64 = 30.0;
/// Extra radius gained at level 100.
pub const RADIUS_SPAN: f64 = 20.0;
/// Full width of the jitter interval, centered on zero.
pub const JITTER: f64 = 15.0;
/// Horizontal plotting margin.
pub const X_RANGE: (f64, f64) = (10.0, 90.0);
/// Vertical plotting margin.
pub const Y_RANGE: (f64, f64) = (15.0, 85.0);
/// Node size at level 0.
pub const BASE_SIZE: f64 = 4.0;
/// Extra size gained at level 100.
pub const SIZE_SPAN: f64 = 8.0;

/// Source of uniform draws in `[0, 1)` used for jitter.
pub trait RandomSource {
	/// Next uniform draw.
	fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
	fn next_unit(&mut self) -> f64 {
		self()
	}
}

/// `Math.random()` of the hosting browser. Only usable on wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
	fn next_unit(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Always 0.5, which cancels the jitter entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Midpoint;

impl RandomSource for Midpoint {
	fn next_unit(&mut self) -> f64 {
		0.5
	}
}

/// Node size for a proficiency level, in `[4, 12]`.
pub fn node_size(level: u8) -> f64 {
	BASE_SIZE + fraction(level) * SIZE_SPAN
}

/// Distance from the center before jitter, in `[30, 50]`.
pub fn orbit_radius(level: u8) -> f64 {
	BASE_RADIUS + fraction(level) * RADIUS_SPAN
}

fn fraction(level: u8) -> f64 {
	f64::from(level) / 100.0
}

fn jitter(rng: &mut impl RandomSource) -> f64 {
	(rng.next_unit() - 0.5) * JITTER
}

/// Lay out `skills` evenly around the center by index, one node per record,
/// preserving order. Each node draws its x jitter, then its y jitter.
pub fn layout_skills(skills: &[SkillRecord], rng: &mut impl RandomSource) -> Vec<SkillNode> {
	if skills.is_empty() {
		return Vec::new();
	}
	let n = skills.len() as f64;

	skills
		.iter()
		.enumerate()
		.map(|(i, skill)| {
			let angle = (i as f64 / n) * 2.0 * PI;
			let radius = orbit_radius(skill.level);
			let x = CENTER + angle.cos() * radius + jitter(rng);
			let y = CENTER + angle.sin() * radius + jitter(rng);

			SkillNode {
				id: skill.name,
				x: x.clamp(X_RANGE.0, X_RANGE.1),
				y: y.clamp(Y_RANGE.0, Y_RANGE.1),
				size: node_size(skill.level),
				color: skill.category.color(),
				category: skill.category,
				level: skill.level,
			}
		})
		.collect()
}
