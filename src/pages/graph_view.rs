use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api;
use crate::components::graph_canvas::GraphCanvas;
use crate::graph::elements;

/// Graph page: renders one stored graph and appends nodes to it.
///
/// Owns the element list as reactive state, seeded with the placeholder
/// pair. A full load replaces the list; an add extends it incrementally.
/// Any store failure leaves the list exactly as it was.
#[component]
pub fn GraphView() -> impl IntoView {
	let query = use_query_map();
	let graph_id = Memo::new(move |_| query.get().get("graphId").unwrap_or_default());

	let graph_elements = RwSignal::new(elements::placeholder_elements());

	// Full load on mount and on every graphId change. A superseded fetch is
	// not aborted; a late resolution can overwrite newer state.
	Effect::new(move |_| {
		let id = graph_id.get();
		spawn_local(async move {
			if let Some(graph) = api::get_graph(&id).await {
				graph_elements.set(elements::elements_from_graph(&graph));
			}
		});
	});

	let on_add = move |_| {
		let Some(label) = prompt("Enter the node name") else {
			return;
		};
		let id = graph_id.get_untracked();
		spawn_local(async move {
			let created = api::add_node(&id, &label).await;
			graph_elements.set(elements::insert_node(&graph_elements.get_untracked(), created));
		});
	};

	let navigate = use_navigate();

	view! {
		<div class="page">
			<h1 class="home-link" on:click=move |_| navigate("/", NavigateOptions::default())>
				"Graph Management"
			</h1>
			<p>"Graph ID: " {move || graph_id.get()}</p>
			<div>
				<button on:click=on_add>"Add"</button>
			</div>
			<div class="graph-canvas-frame">
				<GraphCanvas elements=graph_elements height=Some(400.0) />
			</div>
		</div>
	}
}

// Empty input and a dismissed dialog both mean "no node".
fn prompt(message: &str) -> Option<String> {
	let value = web_sys::window()?.prompt_with_message(message).ok()??;
	(!value.is_empty()).then_some(value)
}
