use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="not-found">
			<h1>"Lost in space"</h1>
			<p>"This page drifted out of the constellation."</p>
			<a href="/">"Back home"</a>
		</section>
	}
}
