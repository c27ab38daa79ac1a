//! Property-based tests for the constellation layout and edge builder.

use std::collections::HashSet;

use proptest::prelude::*;

use skill_constellation::components::constellation::dataset::SKILLS;
use skill_constellation::components::constellation::edges::{PROXIMITY_THRESHOLD, distance};
use skill_constellation::components::constellation::{
	Category, CategoryFilter, Constellation, Midpoint, SkillRecord, build_edges, layout_skills,
};

const NAMES: [&str; 24] = [
	"s00", "s01", "s02", "s03", "s04", "s05", "s06", "s07", "s08", "s09", "s10", "s11", "s12",
	"s13", "s14", "s15", "s16", "s17", "s18", "s19", "s20", "s21", "s22", "s23",
];

fn arb_category() -> impl Strategy<Value = Category> {
	prop_oneof![
		Just(Category::Frontend),
		Just(Category::Backend),
		Just(Category::Tools),
	]
}

fn arb_skills() -> impl Strategy<Value = Vec<SkillRecord>> {
	prop::collection::vec((0u8..=100, arb_category()), 0..NAMES.len()).prop_map(|records| {
		records
			.into_iter()
			.enumerate()
			.map(|(i, (level, category))| SkillRecord::new(NAMES[i], level, category))
			.collect()
	})
}

fn arb_draws() -> impl Strategy<Value = Vec<f64>> {
	prop::collection::vec(0.0f64..=1.0, 1..64)
}

/// Cycles through `draws` forever.
fn replay(draws: Vec<f64>) -> impl FnMut() -> f64 {
	let mut i = 0;
	move || {
		let d = draws[i % draws.len()];
		i += 1;
		d
	}
}

proptest! {
	#[test]
	fn layout_preserves_count_and_order(skills in arb_skills(), draws in arb_draws()) {
		let nodes = layout_skills(&skills, &mut replay(draws));
		prop_assert_eq!(nodes.len(), skills.len());
		for (node, skill) in nodes.iter().zip(&skills) {
			prop_assert_eq!(node.id, skill.name);
			prop_assert_eq!(node.category, skill.category);
			prop_assert_eq!(node.color, skill.category.color());
		}
	}

	#[test]
	fn nodes_stay_inside_margins(skills in arb_skills(), draws in arb_draws()) {
		for node in layout_skills(&skills, &mut replay(draws)) {
			prop_assert!((10.0..=90.0).contains(&node.x), "x = {}", node.x);
			prop_assert!((15.0..=85.0).contains(&node.y), "y = {}", node.y);
		}
	}

	#[test]
	fn size_grows_with_level(a in 0u8..=100, b in 0u8..=100, category in arb_category()) {
		prop_assume!(a < b);
		let skills = [SkillRecord::new("a", a, category), SkillRecord::new("b", b, category)];
		let nodes = layout_skills(&skills, &mut Midpoint);
		prop_assert!(nodes[0].size < nodes[1].size);
		prop_assert!((4.0..=12.0).contains(&nodes[0].size));
	}

	#[test]
	fn edges_are_exactly_the_close_pairs(skills in arb_skills(), draws in arb_draws()) {
		let nodes = layout_skills(&skills, &mut replay(draws));
		let edges = build_edges(&nodes);

		let pair = |a: &'static str, b: &'static str| (a.min(b), a.max(b));

		let mut seen = HashSet::new();
		for edge in &edges {
			let (a, b) = edge.ids();
			prop_assert_eq!((nodes[edge.a].id, nodes[edge.b].id), (a, b));
			prop_assert_ne!(a, b);
			prop_assert!(edge.a < edge.b);
			// no (a, b) and (b, a) twice
			prop_assert!(seen.insert(pair(a, b)));
		}

		for i in 0..nodes.len() {
			for j in i + 1..nodes.len() {
				let close = distance(&nodes[i], &nodes[j]) < PROXIMITY_THRESHOLD;
				prop_assert_eq!(close, seen.contains(&pair(nodes[i].id, nodes[j].id)));
			}
		}
	}

	#[test]
	fn recompute_matches_filter(filter in prop_oneof![
		Just(CategoryFilter::All),
		arb_category().prop_map(CategoryFilter::Only),
	], draws in arb_draws()) {
		let c = Constellation::compute(filter, &mut replay(draws));
		let expected: Vec<_> = SKILLS
			.iter()
			.filter(|s| filter.matches(s.category))
			.map(|s| s.name)
			.collect();
		prop_assert_eq!(c.nodes.iter().map(|n| n.id).collect::<Vec<_>>(), expected);
		prop_assert_eq!(c.filter, filter);
	}
}

#[test]
fn two_skill_scenario() {
	let skills = [
		SkillRecord::new("A", 100, Category::Frontend),
		SkillRecord::new("B", 0, Category::Backend),
	];
	let nodes = layout_skills(&skills, &mut Midpoint);
	assert!((nodes[0].x - 90.0).abs() < 1e-9 && (nodes[0].y - 50.0).abs() < 1e-9);
	assert!((nodes[1].x - 20.0).abs() < 1e-9 && (nodes[1].y - 50.0).abs() < 1e-9);
	assert!((distance(&nodes[0], &nodes[1]) - 70.0).abs() < 1e-9);
	assert!(build_edges(&nodes).is_empty());
}

#[test]
fn empty_inputs() {
	assert!(layout_skills(&[], &mut Midpoint).is_empty());
	assert!(build_edges(&[]).is_empty());
}
