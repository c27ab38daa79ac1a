//! Falling-glyph background drawn behind the page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::canvas::{context_2d, viewport_size};
use super::constellation::{BrowserRandom, RandomSource};
use crate::error::CanvasError;

/// Glyph cell size in pixels; also the column width.
pub const FONT_SIZE: f64 = 14.0;
/// Milliseconds between frames.
pub const FRAME_MS: i32 = 50;
/// A column past the bottom restarts when a draw exceeds this.
const RESET_ODDS: f64 = 0.975;

const GLYPHS: &str = "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン<>{}[]|/\\+=";

/// Brightness tier of a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
	/// Rare highlight.
	Bright,
	/// Base green.
	Normal,
	/// Most glyphs.
	Dim,
}

impl Shade {
	fn from_draw(brightness: f64) -> Self {
		if brightness > 0.95 {
			Shade::Bright
		} else if brightness > 0.8 {
			Shade::Normal
		} else {
			Shade::Dim
		}
	}

	/// Fill color for the tier.
	pub fn color(self) -> &'static str {
		match self {
			Shade::Bright => "hsl(85, 100%, 70%)",
			Shade::Normal => "hsl(85, 100%, 50%)",
			Shade::Dim => "hsl(85, 100%, 30%)",
		}
	}
}

/// One glyph to draw this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
	/// Character to draw.
	pub ch: char,
	/// Left edge in pixels.
	pub x: f64,
	/// Baseline in pixels.
	pub y: f64,
	/// Brightness tier.
	pub shade: Shade,
}

/// Drop position (in glyph rows) of every column.
pub struct RainState {
	glyphs: Vec<char>,
	drops: Vec<u32>,
	height: f64,
}

impl RainState {
	/// Columns for a canvas `width` wide, all starting at the top.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			glyphs: GLYPHS.chars().collect(),
			drops: vec![1; column_count(width)],
			height,
		}
	}

	/// Number of glyph columns.
	pub fn columns(&self) -> usize {
		self.drops.len()
	}

	/// Current row of every column.
	pub fn drops(&self) -> &[u32] {
		&self.drops
	}

	/// Existing columns keep falling; new ones start at the top.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.drops.resize(column_count(width), 1);
		self.height = height;
	}

	/// Advance every column one row, returning the glyphs to draw.
	pub fn step(&mut self, rng: &mut impl RandomSource) -> Vec<Glyph> {
		let mut out = Vec::with_capacity(self.drops.len());
		for (i, drop) in self.drops.iter_mut().enumerate() {
			let pick = (rng.next_unit() * self.glyphs.len() as f64) as usize;
			let ch = self.glyphs[pick.min(self.glyphs.len() - 1)];
			let (x, y) = (i as f64 * FONT_SIZE, f64::from(*drop) * FONT_SIZE);
			let shade = Shade::from_draw(rng.next_unit());
			out.push(Glyph { ch, x, y, shade });

			if y > self.height && rng.next_unit() > RESET_ODDS {
				*drop = 0;
			}
			*drop += 1;
		}
		out
	}
}

fn column_count(width: f64) -> usize {
	(width / FONT_SIZE).floor().max(0.0) as usize
}

fn start(canvas: &HtmlCanvasElement) -> Result<i32, CanvasError> {
	let window: Window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(canvas)?;
	let state = Rc::new(RefCell::new(RainState::new(w, h)));

	let canvas = canvas.clone();
	let draw = Closure::<dyn FnMut()>::new(move || {
		let mut rain = state.borrow_mut();
		if let Some((nw, nh)) = web_sys::window().and_then(|win| viewport_size(&win).ok()) {
			if nw as u32 != canvas.width() || nh as u32 != canvas.height() {
				canvas.set_width(nw as u32);
				canvas.set_height(nh as u32);
				rain.resize(nw, nh);
			}
		}

		ctx.set_fill_style_str("rgba(5, 8, 12, 0.05)");
		ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
		ctx.set_font(&format!("{FONT_SIZE}px 'Fira Code', monospace"));
		let mut buf = [0u8; 4];
		for glyph in rain.step(&mut BrowserRandom) {
			ctx.set_fill_style_str(glyph.shade.color());
			let _ = ctx.fill_text(glyph.ch.encode_utf8(&mut buf), glyph.x, glyph.y);
		}
	});
	let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
		draw.as_ref().unchecked_ref(),
		FRAME_MS,
	)?;
	// lives as long as the page; the interval is cleared on unmount
	draw.forget();
	Ok(handle)
}

/// Full-viewport matrix rain, fixed behind the content.
#[component]
pub fn MatrixRain(#[prop(default = 0.05)] opacity: f64) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		match start(&canvas) {
			Ok(handle) => on_cleanup(move || {
				if let Some(window) = web_sys::window() {
					window.clear_interval_with_handle(handle);
				}
			}),
			Err(err) => error!("matrix rain disabled: {err}"),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="matrix-rain"
			style:opacity=opacity.to_string()
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Replays `draws` in order, then repeats the last one.
	fn scripted(draws: Vec<f64>) -> impl FnMut() -> f64 {
		let mut i = 0;
		move || {
			let d = draws[i.min(draws.len() - 1)];
			i += 1;
			d
		}
	}

	#[test]
	fn one_column_per_glyph_width() {
		let rain = RainState::new(140.0, 100.0);
		assert_eq!(rain.columns(), 10);
		assert!(rain.drops().iter().all(|&d| d == 1));
		assert_eq!(RainState::new(13.0, 100.0).columns(), 0);
	}

	#[test]
	fn step_emits_a_glyph_per_column_and_advances() {
		let mut rain = RainState::new(42.0, 1000.0);
		let glyphs = rain.step(&mut || 0.0);
		assert_eq!(glyphs.len(), 3);
		assert_eq!(glyphs[2].x, 28.0);
		assert_eq!(glyphs[0].y, 14.0);
		assert_eq!(glyphs[0].ch, '0');
		assert_eq!(glyphs[0].shade, Shade::Dim);
		assert_eq!(rain.drops(), [2, 2, 2]);
	}

	#[test]
	fn top_draw_picks_last_glyph_and_bright_shade() {
		let mut rain = RainState::new(14.0, 1000.0);
		let glyphs = rain.step(&mut || 0.999_999);
		assert_eq!(glyphs[0].ch, '=');
		assert_eq!(glyphs[0].shade, Shade::Bright);
	}

	#[test]
	fn column_past_bottom_resets_on_lucky_draw() {
		let mut rain = RainState::new(14.0, 10.0);
		// y = 14 > 10: glyph, shade, then a reset draw above the odds
		rain.step(&mut scripted(vec![0.0, 0.0, 0.99]));
		assert_eq!(rain.drops(), [1]);

		// unlucky draw keeps falling
		rain.step(&mut scripted(vec![0.0, 0.0, 0.5]));
		assert_eq!(rain.drops(), [2]);
	}

	#[test]
	fn column_on_screen_never_resets() {
		let mut rain = RainState::new(14.0, 1000.0);
		for _ in 0..5 {
			rain.step(&mut || 0.99);
		}
		assert_eq!(rain.drops(), [6]);
	}

	#[test]
	fn resize_keeps_existing_columns() {
		let mut rain = RainState::new(28.0, 100.0);
		rain.step(&mut || 0.5);
		rain.resize(56.0, 100.0);
		assert_eq!(rain.drops(), [2, 2, 1, 1]);
		rain.resize(14.0, 100.0);
		assert_eq!(rain.drops(), [2]);
	}
}
