use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use crate::components::animated_graph::{AnimatedGraphNodes, PRESETS, Preset};

/// One preset: a live preview, its description and its copyable config.
#[component]
fn PresetCard(preset: &'static Preset, selected: RwSignal<Option<&'static str>>) -> impl IntoView {
	let config = preset.config();
	let snippet = preset.snippet();
	let (show_config, set_show_config) = signal(false);
	let (copied, set_copied) = signal(false);
	let copy_snippet = {
		let snippet = snippet.clone();
		move |ev: web_sys::MouseEvent| {
			ev.stop_propagation();
			let Some(window) = web_sys::window() else {
				warn!("no window, nothing copied");
				return;
			};
			// the returned promise only reports permission failures
			let _ = window.navigator().clipboard().write_text(&snippet);
			set_copied.set(true);
			set_timeout(move || set_copied.set(false), Duration::from_secs(2));
		}
	};
	let toggle_selected = move |_: web_sys::MouseEvent| {
		selected.update(|current| {
			*current = if *current == Some(preset.id) {
				None
			} else {
				Some(preset.id)
			}
		})
	};

	view! {
		<article
			class="preset-card"
			class:selected=move || selected.get() == Some(preset.id)
			on:click=toggle_selected
		>
			<div class="preset-preview">
				<AnimatedGraphNodes config=Signal::derive(move || config.clone()) />
			</div>
			<h2>{preset.title}</h2>
			<p class="description">{preset.description}</p>
			<button on:click=move |ev| {
				ev.stop_propagation();
				set_show_config.update(|shown| *shown = !*shown);
			}>
				{move || if show_config.get() { "Hide Config" } else { "View Config" }}
			</button>
			<Show when=move || show_config.get()>
				<div class="preset-config">
					<button class="copy" on:click=copy_snippet.clone()>
						{move || if copied.get() { "Copied!" } else { "Copy" }}
					</button>
					<pre>
						<code>{snippet.clone()}</code>
					</pre>
				</div>
			</Show>
		</article>
	}
}

/// Preset gallery; clicking a card shows it enlarged above the grid.
#[component]
pub fn Home() -> impl IntoView {
	let selected = RwSignal::new(None::<&'static str>);

	let featured = move || {
		selected.get().and_then(Preset::find).map(|preset| {
			let config = preset.config();
			view! {
				<section class="featured">
					<div class="featured-preview">
						<AnimatedGraphNodes config=Signal::derive(move || config.clone()) />
					</div>
					<h2>{preset.title}</h2>
					<p class="description">{preset.description}</p>
				</section>
			}
		})
	};

	view! {
		<main class="gallery">
			<h1>"Animated Graph Nodes"</h1>
			<p class="subtitle">
				"Animated node graphs with different configurations. Click a preview to enlarge it."
			</p>
			{featured}
			<div class="preset-grid">
				{PRESETS
					.iter()
					.map(|preset| view! { <PresetCard preset=preset selected=selected /> })
					.collect_view()}
			</div>
		</main>
	}
}
