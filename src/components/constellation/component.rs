use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::compute::Constellation;
use super::layout::BrowserRandom;
use super::render;
use super::state::ConstellationState;
use super::types::CategoryFilter;
use crate::components::canvas::context_2d;
use crate::error::CanvasError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Canvas size from explicit props, falling back to the parent's box.
fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(450.0)
		}),
	)
}

fn pointer(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Id of the pending animation frame, or a stop mark once the canvas is gone.
#[derive(Clone, Debug, Default)]
struct FrameSlot(Arc<AtomicI32>);

const STOPPED: i32 = -1;

impl FrameSlot {
	/// Remember the latest frame request. Ignored after `stop`.
	fn record(&self, id: i32) -> bool {
		self.0
			.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
				(cur != STOPPED).then_some(id)
			})
			.is_ok()
	}

	fn is_stopped(&self) -> bool {
		self.0.load(Ordering::SeqCst) == STOPPED
	}

	/// Mark the loop stopped, returning the frame still pending, if any.
	fn stop(&self) -> Option<i32> {
		let pending = self.0.swap(STOPPED, Ordering::SeqCst);
		(pending > 0).then_some(pending)
	}
}

/// Sets up the canvas, the first layout and the animation loop. Returns the
/// teardown to run when the canvas unmounts.
fn start(
	canvas: &HtmlCanvasElement,
	filter: CategoryFilter,
	size: (Option<f64>, Option<f64>),
	state: &Rc<RefCell<Option<ConstellationState>>>,
	animate: &FrameCallback,
) -> Result<impl FnOnce() + Send + Sync + 'static, CanvasError> {
	let window: Window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = measure(canvas, size.0, size.1);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(canvas)?;

	*state.borrow_mut() = Some(ConstellationState::new(
		Constellation::compute(filter, &mut BrowserRandom),
		w,
		h,
	));

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	let resize = window_event_listener(ev::resize, move |_| {
		let (nw, nh) = measure(&canvas_resize, size.0, size.1);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(nw, nh);
		}
	});

	let frame = FrameSlot::default();
	let (state_anim, animate_inner, frame_anim) =
		(state.clone(), Rc::downgrade(animate), frame.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if frame_anim.is_stopped() {
			return;
		}
		if let Some(ref mut s) = *state_anim.borrow_mut() {
			s.tick(0.016);
			render::render(s, &ctx);
		}
		let (Some(animate), Some(win)) = (animate_inner.upgrade(), web_sys::window()) else {
			return;
		};
		if let Some(ref cb) = *animate.borrow() {
			if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_anim.record(id);
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		frame.record(window.request_animation_frame(cb.as_ref().unchecked_ref())?);
	}

	Ok(move || {
		if let (Some(id), Some(win)) = (frame.stop(), web_sys::window()) {
			let _ = win.cancel_animation_frame(id);
		}
		resize.remove();
	})
}

/// Interactive skill constellation. The layout is recomputed from scratch
/// whenever `filter` changes.
#[component]
pub fn SkillConstellation(
	#[prop(into)] filter: Signal<CategoryFilter>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ConstellationState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let (state_init, state_filter) = (state.clone(), state.clone());
	let (cursor, set_cursor) = signal("default");

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match start(
			&canvas,
			filter.get_untracked(),
			(width, height),
			&state_init,
			&animate,
		) {
			Ok(teardown) => on_cleanup(teardown),
			Err(err) => error!("skill constellation disabled: {err}"),
		}
	});

	// The first layout happens in `start`; only later changes recompute here.
	Effect::new(move |prev: Option<CategoryFilter>| {
		let current = filter.get();
		if prev.is_some_and(|p| p != current) {
			info!("skill filter changed to `{current}`");
			if let Some(ref mut s) = *state_filter.borrow_mut() {
				s.replace(Constellation::compute(current, &mut BrowserRandom));
			}
		}
		current
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
			set_cursor.set(s.cursor());
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
			set_cursor.set(s.cursor());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-constellation-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style=move || {
				format!("display: block; width: 100%; height: 100%; cursor: {};", cursor.get())
			}
		/>
	}
}
