//! Browser plumbing shared by the canvas components.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::CanvasError;

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| CanvasError::ContextUnavailable)
}

/// Inner size of the browser window in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), CanvasError> {
	Ok((
		window.inner_width()?.as_f64().unwrap_or_default(),
		window.inner_height()?.as_f64().unwrap_or_default(),
	))
}
