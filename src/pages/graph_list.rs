use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api;

/// Browse page: every stored graph id as a clickable list entry.
#[component]
pub fn GraphList() -> impl IntoView {
	let graphs = RwSignal::new(Vec::<String>::new());

	Effect::new(move |_| {
		spawn_local(async move {
			graphs.set(api::list_graphs().await);
		});
	});

	let navigate = use_navigate();
	let navigate_home = navigate.clone();

	view! {
		<div class="page">
			<h1 class="home-link" on:click=move |_| navigate_home("/", NavigateOptions::default())>
				"Graph Management"
			</h1>
			{move || {
				let items = graphs.get();
				if items.is_empty() {
					view! { <p>"No graphs stored"</p> }.into_any()
				} else {
					let navigate = navigate.clone();
					view! {
						<ul class="graph-list">
							{items
								.into_iter()
								.map(|id| {
									let navigate = navigate.clone();
									let target = format!("/graph?graphId={id}");
									view! {
										<li on:click=move |_| navigate(
											&target,
											NavigateOptions::default(),
										)>{id}</li>
									}
								})
								.collect_view()}
						</ul>
					}
						.into_any()
				}
			}}
		</div>
	}
}
