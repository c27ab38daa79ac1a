//! Page components.

mod canvas;
pub mod constellation;
pub mod matrix_rain;
