use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, MouseEvent, Window};

use super::browser::{FrameLoop, WindowListener};
use super::config::SimulationConfig;
use super::driver::FrameDriver;
use super::render;
use super::scale::{self, Viewport};
use super::state::GraphState;
use super::types::Pointer;

/// One mounted graph: the canvas it paints, its simulation, its frame loop and
/// its window listeners. Dropping it unmounts.
pub struct GraphInstance {
	window: Window,
	canvas: HtmlCanvasElement,
	container: Element,
	context: CanvasRenderingContext2d,
	state: Rc<RefCell<GraphState>>,
	driver: FrameDriver,
	frame_loop: Option<FrameLoop>,
	listeners: Vec<WindowListener>,
}

impl GraphInstance {
	/// Size the canvas to `container`, sample nodes, draw the first frame and
	/// start animating if `config` asks for it. `None` when there is no
	/// window or 2D context to draw with.
	pub fn mount(canvas: HtmlCanvasElement, container: Element, config: SimulationConfig) -> Option<Self> {
		let Some(window) = web_sys::window() else {
			warn!("no window, graph not mounted");
			return None;
		};
		let context = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(context) = context else {
			warn!("canvas has no 2d context, graph not mounted");
			return None;
		};

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let mut graph = Self {
			window,
			canvas,
			container,
			context,
			state: Rc::new(RefCell::new(GraphState::new(config, seed))),
			driver: FrameDriver::new(),
			frame_loop: None,
			listeners: Vec::new(),
		};

		fit_canvas(&graph.window, &graph.canvas, &graph.container, &graph.state);
		graph.listen();
		graph.driver.ready();
		graph.draw();
		{
			let state = graph.state.borrow();
			let (width, height) = state.size();
			info!("graph mounted: {} nodes on {width}x{height}", state.nodes().len());
		}
		graph.sync_loop();
		Some(graph)
	}

	/// Swap the config snapshot. Count or size changes resample the layout;
	/// anything else shows up on the next frame.
	pub fn reconfigure(&mut self, config: SimulationConfig) {
		if self.driver.is_torn_down() {
			return;
		}
		let resampled = self.state.borrow_mut().set_config(config);
		debug!("graph reconfigured (resampled: {resampled})");
		self.sync_loop();
		if !self.driver.is_running() {
			self.draw();
		}
	}

	/// Borrow the simulation, for inspection between frames.
	pub fn state(&self) -> Ref<'_, GraphState> {
		self.state.borrow()
	}

	/// Cancel the pending frame and release every listener.
	pub fn unmount(&mut self) {
		if self.driver.is_torn_down() {
			return;
		}
		self.driver.teardown();
		self.frame_loop = None;
		self.listeners.clear();
		debug!("graph unmounted");
	}

	fn draw(&mut self) {
		self.state.borrow_mut().frame(&mut self.context);
	}

	/// Start or stop the frame loop to match `enable_animations`.
	fn sync_loop(&mut self) {
		let animate = self.state.borrow().config().enable_animations;
		if animate && !self.driver.is_running() {
			let Some(token) = self.driver.start() else {
				return;
			};
			let (state, mut context) = (self.state.clone(), self.context.clone());
			self.frame_loop = FrameLoop::start(self.window.clone(), token, move || {
				state.borrow_mut().frame(&mut context);
			});
			if self.frame_loop.is_none() {
				self.driver.stop();
			}
		} else if !animate && self.driver.stop() {
			self.frame_loop = None;
		}
	}

	fn listen(&mut self) {
		let (window, canvas, container, state, mut context) = (
			self.window.clone(),
			self.canvas.clone(),
			self.container.clone(),
			self.state.clone(),
			self.context.clone(),
		);
		let on_resize = move |_: Event| {
			fit_canvas(&window, &canvas, &container, &state);
			// resizing clears the canvas; repaint without advancing
			render::render(&state.borrow(), &mut context);
		};

		let (canvas, state) = (self.canvas.clone(), self.state.clone());
		let on_pointer = move |event: Event| {
			let Some(event) = event.dyn_ref::<MouseEvent>() else {
				return;
			};
			let rect = canvas.get_bounding_client_rect();
			let view = Viewport::fit(rect.width(), rect.height());
			if let Some((x, y)) = view.to_simulation(
				event.client_x() as f64 - rect.left(),
				event.client_y() as f64 - rect.top(),
			) {
				state.borrow_mut().set_pointer(Some(Pointer::new(x, y)));
			}
		};

		self.listeners
			.extend(WindowListener::new(&self.window, "resize", on_resize));
		self.listeners
			.extend(WindowListener::new(&self.window, "mousemove", on_pointer));
	}
}

impl Drop for GraphInstance {
	fn drop(&mut self) {
		self.unmount();
	}
}

/// Match the canvas backing store to the container at the device pixel ratio.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement, container: &Element, state: &RefCell<GraphState>) {
	let rect = container.get_bounding_client_rect();
	let (width, height) = scale::device_size(rect.width(), rect.height(), window.device_pixel_ratio());
	canvas.set_width(width);
	canvas.set_height(height);
	let style = canvas.style();
	let _ = style.set_property("width", &format!("{}px", rect.width()));
	let _ = style.set_property("height", &format!("{}px", rect.height()));
	state.borrow_mut().resize(width as f64, height as f64);
	debug!("canvas sized to {width}x{height}");
}
