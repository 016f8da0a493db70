use leptos::prelude::*;

use super::config::SimulationConfig;
use super::instance::GraphInstance;

const CONTAINER_STYLE: &str =
	"width: 100%; height: 100%; position: relative; overflow: hidden; aspect-ratio: 1 / 1;";
const CANVAS_STYLE: &str = "position: absolute; inset: 0; width: 100%; height: 100%; display: block;";

/// Animated proximity graph filling its parent.
///
/// Replacing `config` reconfigures the running graph in place; the frame loop
/// and window listeners are released when the component is unmounted.
#[component]
pub fn AnimatedGraphNodes(
	/// Simulation parameters. Defaults to [`SimulationConfig::default`].
	#[prop(optional, into)]
	config: Option<Signal<SimulationConfig>>,
	/// Extra classes for the container element.
	#[prop(optional, into)]
	class: String,
) -> impl IntoView {
	let config = config.unwrap_or_else(|| Signal::derive(SimulationConfig::default));
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let graph = StoredValue::new_local(None::<GraphInstance>);

	Effect::new(move |_| {
		let config = config.get();
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		graph.update_value(|slot| {
			if let Some(instance) = slot.as_mut() {
				instance.reconfigure(config);
			} else {
				*slot = GraphInstance::mount(canvas, container.into(), config);
			}
		});
	});

	on_cleanup(move || {
		graph.try_update_value(|slot| {
			if let Some(mut instance) = slot.take() {
				instance.unmount();
			}
		});
	});

	view! {
		<div node_ref=container_ref class=class style=CONTAINER_STYLE>
			<canvas node_ref=canvas_ref class="animated-graph-canvas" style=CANVAS_STYLE />
		</div>
	}
}
