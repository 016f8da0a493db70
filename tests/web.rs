//! Browser-side checks: painting into a real 2D context, the mount/unmount
//! cycle and pointer mapping through real window events.
#![cfg(target_arch = "wasm32")]

use animated_graph_nodes::components::animated_graph::render;
use animated_graph_nodes::components::animated_graph::store::Node;
use animated_graph_nodes::components::animated_graph::{
	AnimatedGraphNodes, GraphInstance, GraphState, HoverEffect, SimulationConfig,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
	CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, HtmlElement, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn attach_canvas(width: u32, height: u32) -> (Element, HtmlCanvasElement) {
	let document = web_sys::window().unwrap().document().unwrap();
	let container = document.create_element("div").unwrap();
	container
		.set_attribute("style", &format!("width: {width}px; height: {height}px;"))
		.unwrap();
	let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
	container.append_child(&canvas).unwrap();
	document.body().unwrap().append_child(&container).unwrap();
	(container, canvas)
}

/// Resolves on the animation frame after the current one was requested.
async fn next_frame() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window().unwrap().request_animation_frame(&resolve).unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn move_pointer(client_x: f64, client_y: f64) {
	let init = MouseEventInit::new();
	init.set_client_x(client_x.round() as i32);
	init.set_client_y(client_y.round() as i32);
	let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
	web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn context(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
	canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn node_is_painted_at_its_letterboxed_position() {
	let (_, canvas) = attach_canvas(200, 100);
	canvas.set_width(200);
	canvas.set_height(100);
	let mut ctx = context(&canvas);

	let config = SimulationConfig {
		node_color: "rgb(255, 0, 0)".into(),
		node_opacity: 1.0,
		hover_effect: HoverEffect::None,
		..Default::default()
	};
	let mut state = GraphState::with_nodes(config, vec![Node::new(0.5, 0.5, 0.0, 0.0, 0.1)]);
	state.resize(200.0, 100.0);
	render::render(&state, &mut ctx);

	let center = ctx.get_image_data(100.0, 50.0, 1.0, 1.0).unwrap().data();
	assert_eq!(center[0], 255);
	assert_eq!(center[3], 255);
	// left letterbox band stays clear
	let band = ctx.get_image_data(10.0, 50.0, 1.0, 1.0).unwrap().data();
	assert_eq!(band[3], 0);
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_and_unmount_is_idempotent() {
	let (container, canvas) = attach_canvas(240, 120);
	let config = SimulationConfig {
		enable_animations: false,
		..Default::default()
	};
	let mut graph = GraphInstance::mount(canvas.clone(), container, config).unwrap();
	assert!(canvas.width() >= 240);
	assert!(canvas.height() >= 120);

	graph.reconfigure(SimulationConfig {
		num_nodes: 5,
		..Default::default()
	});
	graph.unmount();
	graph.unmount();
}

#[wasm_bindgen_test]
async fn unmounted_graph_ignores_frames_and_window_events() {
	let (container, canvas) = attach_canvas(160, 160);
	let mut graph = GraphInstance::mount(canvas, container.clone(), SimulationConfig::default()).unwrap();
	let start = graph.state().nodes().to_vec();
	for _ in 0..3 {
		next_frame().await;
	}
	assert_ne!(graph.state().nodes(), &start[..], "running graph did not move");

	graph.unmount();
	let (nodes, pointer, size) = {
		let state = graph.state();
		(state.nodes().to_vec(), state.pointer(), state.size())
	};

	container
		.set_attribute("style", "width: 320px; height: 80px;")
		.unwrap();
	let rect = container.get_bounding_client_rect();
	move_pointer(rect.left() + 10.0, rect.top() + 10.0);
	web_sys::window()
		.unwrap()
		.dispatch_event(&Event::new("resize").unwrap())
		.unwrap();
	for _ in 0..3 {
		next_frame().await;
	}

	let state = graph.state();
	assert_eq!(state.nodes(), &nodes[..]);
	assert_eq!(state.pointer(), pointer);
	assert_eq!(state.size(), size);
}

#[wasm_bindgen_test]
fn pointer_maps_through_the_letterbox() {
	let (container, canvas) = attach_canvas(200, 100);
	let config = SimulationConfig {
		enable_animations: false,
		..Default::default()
	};
	let graph = GraphInstance::mount(canvas.clone(), container, config).unwrap();
	assert!(graph.state().pointer().is_none());

	// 50px letterbox on the left, then a quarter of the 100px square
	let rect = canvas.get_bounding_client_rect();
	move_pointer(rect.left() + 50.0 + 25.0, rect.top() + 50.0);

	let pointer = graph.state().pointer().expect("pointer recorded");
	assert!((pointer.x - 0.25).abs() < 0.02, "x = {}", pointer.x);
	assert!((pointer.y - 0.5).abs() < 0.02, "y = {}", pointer.y);
}

#[wasm_bindgen_test]
async fn component_falls_back_to_default_config() {
	let document = web_sys::window().unwrap().document().unwrap();
	let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
	host.set_attribute("style", "width: 120px; height: 120px;").unwrap();
	document.body().unwrap().append_child(&host).unwrap();

	let handle = leptos::mount::mount_to(host.clone(), || view! { <AnimatedGraphNodes /> });
	next_frame().await;
	next_frame().await;

	let canvas: HtmlCanvasElement = host
		.query_selector("canvas")
		.unwrap()
		.expect("component rendered a canvas")
		.dyn_into()
		.unwrap();
	assert!(canvas.width() >= 120);
	assert!(canvas.height() >= 120);
	drop(handle);
}
