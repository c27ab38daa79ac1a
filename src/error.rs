//! Error types shared by the constellation core and the canvas components.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A filter or category id that does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill category `{0}`")]
pub struct ParseFilterError(pub String);

/// A skill dataset that breaks the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
	/// Proficiency above 100%.
	#[error("skill `{name}` has level {level}, expected 0..=100")]
	LevelOutOfRange {
		/// Offending skill.
		name: &'static str,
		/// Level as stored.
		level: u8,
	},
	/// Two records share a name, so node ids would collide.
	#[error("skill `{0}` appears more than once")]
	DuplicateName(&'static str),
}

/// Failure to obtain what a canvas component needs from the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
	/// No global `window` (not running in a browser).
	#[error("no global window")]
	NoWindow,
	/// `getContext("2d")` returned null or a non-2d context.
	#[error("2d canvas context unavailable")]
	ContextUnavailable,
	/// Any other exception thrown by a DOM call.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for CanvasError {
	fn from(value: JsValue) -> Self {
		CanvasError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
