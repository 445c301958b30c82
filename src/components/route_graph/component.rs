use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::graph::Graph;
use super::render::{self, Selection};
use super::state::{RouteGraphState, RunSummary};

/// Longest frame gap fed to playback, so a backgrounded tab resumes at the
/// normal pace instead of replaying a burst of steps.
const MAX_FRAME_DT: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	Run,
	Reset,
}

#[component]
pub fn RouteGraphCanvas(
	graph: Graph,
	#[prop(into)] selection: Signal<Selection>,
	#[prop(into)] exploration_color: Signal<String>,
	#[prop(into)] path_color: Signal<String>,
	#[prop(into)] command: Signal<Option<Command>>,
	summary: RwSignal<RunSummary>,
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(RouteGraphState::new(graph, width, height)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let state_sel = state.clone();
	Effect::new(move |_| {
		let selection = selection.get();
		state_sel.borrow_mut().select(selection);
	});

	let state_style = state.clone();
	Effect::new(move |_| {
		let (exploration, path) = (exploration_color.get(), path_color.get());
		state_style.borrow_mut().set_style(&exploration, &path);
	});

	let state_cmd = state.clone();
	Effect::new(move |_| {
		let Some(command) = command.get() else {
			return;
		};
		let mut s = state_cmd.borrow_mut();
		match command {
			Command::Run => {
				let Selection {
					source: Some(source),
					target: Some(target),
				} = selection.get_untracked()
				else {
					warn!("run requested without both endpoints selected");
					return;
				};
				if let Err(e) = s.run(source, target) {
					error!("route {} -> {} not started: {}", source, target, e);
				}
			}
			Command::Reset => s.reset(),
		}
	});

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("2d canvas context unavailable");
			return;
		};

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let mut last = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last) / 1000.0).clamp(0.0, MAX_FRAME_DT);
			last = now;

			let next = {
				let mut s = state_anim.borrow_mut();
				s.tick(dt);
				render::paint(&s.scene(), &ctx);
				s.summary()
			};
			if summary.get_untracked() != next {
				summary.set(next);
			}

			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(window) = web_sys::window() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="route-graph-canvas"
			style="display: block; max-width: 100%; height: auto;"
		/>
	}
}
