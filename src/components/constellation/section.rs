use leptos::prelude::*;
use log::error;

use super::component::SkillConstellation;
use super::dataset::{self, SKILLS};
use super::types::{Category, CategoryFilter};

/// Skills shown per category card.
const CARD_SKILLS: usize = 5;

#[component]
fn FilterButton(
	filter: CategoryFilter,
	active: ReadSignal<CategoryFilter>,
	set_active: WriteSignal<CategoryFilter>,
) -> impl IntoView {
	view! {
		<button
			class="filter-button hoverable"
			class:active=move || active.get() == filter
			data-filter=filter.to_string()
			on:click=move |_| set_active.set(filter)
		>
			{filter.label()}
		</button>
	}
}

#[component]
fn SkillCard(category: Category) -> impl IntoView {
	view! {
		<div class="skill-card card-cyber">
			<h3>{category.label()}</h3>
			<ul class="skill-bars">
				{dataset::top_skills(category, CARD_SKILLS)
					.map(|skill| {
						view! {
							<li>
								<div class="skill-bar-header">
									<span>{skill.name}</span>
									<span class="skill-level">{format!("{}%", skill.level)}</span>
								</div>
								<div class="skill-bar-track">
									<div
										class="skill-bar-fill"
										style:width=format!("{}%", skill.level)
									/>
								</div>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

/// The skills section: filter buttons, the constellation and the per-category bars.
#[component]
pub fn SkillsSection() -> impl IntoView {
	if let Err(err) = dataset::validate(&SKILLS) {
		error!("skill dataset is inconsistent: {err}");
	}
	let (active, set_active) = signal(CategoryFilter::All);

	view! {
		<section id="skills" class="skills-section">
			<header class="section-header">
				<span class="eyebrow">"Technical Arsenal"</span>
				<h2>"My " <span class="text-gradient">"Skill Constellation"</span></h2>
				<p>
					"An interactive map of technologies I've mastered, from pixel-perfect frontends to robust backend systems."
				</p>
			</header>

			<nav class="filter-bar">
				{CategoryFilter::BUTTONS
					.into_iter()
					.map(|filter| {
						view! { <FilterButton filter=filter active=active set_active=set_active /> }
					})
					.collect_view()}
			</nav>

			<div class="constellation-frame card-cyber">
				<SkillConstellation filter=active />
			</div>

			<div class="skill-cards">
				{Category::ALL
					.into_iter()
					.map(|category| view! { <SkillCard category=category /> })
					.collect_view()}
			</div>
		</section>
	}
}
