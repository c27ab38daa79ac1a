use leptos::prelude::*;

use crate::components::constellation::SkillsSection;
use crate::components::matrix_rain::MatrixRain;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="page">
			<MatrixRain opacity=0.03 />
			<main class="page-main">
				<SkillsSection />
			</main>
		</div>
	}
}
