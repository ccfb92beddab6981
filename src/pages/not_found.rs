use leptos::prelude::*;

/// 404 page for unmatched routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Page not found"</h1>
			<p>
				"Nothing lives at this address. "
				<a href="/">"Back to the graph list"</a>
			</p>
		</div>
	}
}
