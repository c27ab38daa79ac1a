use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ConstellationState, glow_radius};

const EDGE_RGB: &str = "163, 255, 0";
const LABEL_RGB: &str = "148, 163, 184";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Spring-like overshoot for nodes popping in.
fn ease_out_back(t: f64) -> f64 {
	let c = 1.70158;
	1.0 + (c + 1.0) * (t - 1.0).powi(3) + c * (t - 1.0).powi(2)
}

pub fn render(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.viewport.x, state.viewport.y);
	let _ = ctx.scale(state.viewport.k, state.viewport.k);
	draw_rings(state, ctx);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_labels(state, ctx);
}

fn draw_rings(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let k = state.viewport.k;
	let rings = [
		(16.0, 2.0 * PI / 60.0, "rgba(163, 255, 0, 0.2)"),
		(12.0, -2.0 * PI / 45.0, "rgba(255, 51, 204, 0.2)"),
	];
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0 / k),
		&JsValue::from_f64(4.0 / k),
	));
	ctx.set_line_width(1.0 / k);
	for (radius, speed, color) in rings {
		ctx.set_stroke_style_str(color);
		ctx.begin_path();
		let start = state.clock * speed;
		let _ = ctx.arc(50.0, 50.0, radius, start, start + 2.0 * PI);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_edges(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let nodes = &state.constellation.nodes;
	let t = ease_out_cubic(state.hover.highlight_t);
	let base_width = 1.0 / state.viewport.k;

	for (i, edge) in state.constellation.edges.iter().enumerate() {
		let reveal = state.edge_reveal(i);
		if reveal <= 0.0 {
			continue;
		}
		let (from, to) = (&nodes[edge.a], &nodes[edge.b]);
		let is_highlighted = state.is_hovered(edge.a) || state.is_hovered(edge.b);

		// t=0: every edge at 0.3, t=1: hovered edges at 0.8, others at 0.08
		let (alpha, width) = if is_highlighted {
			(0.3 + 0.5 * t, base_width * (1.0 + t))
		} else {
			(0.3 - 0.22 * t, base_width)
		};

		ctx.set_stroke_style_str(&format!("rgba({EDGE_RGB}, {})", alpha * reveal));
		ctx.set_line_width(width);
		// draw the line growing from its first endpoint
		let eased = ease_out_cubic(reveal);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(
			from.x + (to.x - from.x) * eased,
			from.y + (to.y - from.y) * eased,
		);
		ctx.stroke();
	}
}

fn draw_nodes(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);

	for (i, node) in state.constellation.nodes.iter().enumerate() {
		let reveal = state.node_reveal(i);
		if reveal <= 0.0 {
			continue;
		}
		let scale = ease_out_back(reveal);
		let hovered = state.is_hovered(i);
		let dimmed = state.has_active_highlight() && !state.is_highlighted(i);

		let (glow, glow_alpha, core) = if hovered {
			(
				glow_radius(node.size) + 0.5 * node.size * t,
				0.1 + 0.2 * t,
				node.size * (0.5 + 0.2 * t),
			)
		} else {
			(glow_radius(node.size), 0.1, node.size / 2.0)
		};
		let alpha = if dimmed { reveal * (1.0 - 0.5 * t) } else { reveal };

		ctx.set_fill_style_str(node.color);
		ctx.set_global_alpha(glow_alpha * alpha);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, glow * scale, 0.0, 2.0 * PI);
		ctx.fill();

		ctx.set_global_alpha(alpha);
		if hovered && t > 0.01 {
			ctx.set_shadow_color(node.color);
			ctx.set_shadow_blur(10.0 * t);
		}
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, core * scale, 0.0, 2.0 * PI);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
	}
	ctx.set_global_alpha(1.0);
}

/// Labels are drawn in screen space so text stays crisp at any scale.
fn draw_labels(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let any_hovered = state.has_active_highlight();

	ctx.set_font("12px 'Fira Code', monospace");
	ctx.set_text_align("center");
	for (i, node) in state.constellation.nodes.iter().enumerate() {
		let reveal = state.label_reveal(i);
		if reveal <= 0.0 {
			continue;
		}
		let hovered = state.is_hovered(i);
		let alpha = if !any_hovered || hovered {
			reveal
		} else {
			reveal * (1.0 - 0.7 * t)
		};
		let (x, y) = state.viewport.to_screen(node.x, node.y);
		let lift = (1.0 - reveal) * 10.0;

		ctx.set_global_alpha(alpha);
		if hovered && t > 0.01 {
			ctx.set_fill_style_str(node.color);
			ctx.set_font(&format!("{}px 'Fira Code', monospace", 12.0 * (1.0 + 0.1 * t)));
		} else {
			ctx.set_fill_style_str(&format!("rgb({LABEL_RGB})"));
		}
		let offset = glow_radius(node.size) * 0.5 * state.viewport.k + 10.0;
		let _ = ctx.fill_text(node.id, x, y - offset + lift);
		ctx.set_font("12px 'Fira Code', monospace");
	}
	ctx.set_global_alpha(1.0);
}
