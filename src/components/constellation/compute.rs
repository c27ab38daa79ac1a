//! The filter → layout → edges pipeline, rerun on every filter change.

use log::debug;

use super::dataset::SKILLS;
use super::edges::build_edges;
use super::layout::{RandomSource, layout_skills};
use super::types::{CategoryFilter, Edge, SkillNode, SkillRecord};

/// Nodes and edges for one filter selection. Rebuilt, never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constellation {
	/// Filter the nodes were laid out under.
	pub filter: CategoryFilter,
	/// One node per matching skill, in dataset order.
	pub nodes: Vec<SkillNode>,
	/// Pairs of nodes closer than the proximity threshold.
	pub edges: Vec<Edge>,
}

impl Constellation {
	/// Lay out the built-in dataset under `filter`.
	pub fn compute(filter: CategoryFilter, rng: &mut impl RandomSource) -> Self {
		Self::from_skills(filter, &SKILLS, rng)
	}

	/// Lay out an arbitrary dataset under `filter`.
	pub fn from_skills(
		filter: CategoryFilter,
		skills: &[SkillRecord],
		rng: &mut impl RandomSource,
	) -> Self {
		let nodes = layout_skills(&filter.apply(skills), rng);
		let edges = build_edges(&nodes);
		debug!(
			"constellation for `{}`: {} nodes, {} edges",
			filter,
			nodes.len(),
			edges.len()
		);
		Self {
			filter,
			nodes,
			edges,
		}
	}

	/// Indices of the nodes sharing an edge with `idx`.
	pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
		self.edges.iter().filter_map(move |e| e.other(idx))
	}

	/// Index of the node with id `id`.
	pub fn position(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::constellation::layout::Midpoint;
	use crate::components::constellation::types::Category;

	#[test]
	fn compute_restricts_to_filter() {
		let c = Constellation::compute(CategoryFilter::Only(Category::Tools), &mut Midpoint);
		let ids: Vec<_> = c.nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids, ["Git", "Docker", "Vercel", "Figma"]);
		assert!(c.nodes.iter().all(|n| n.category == Category::Tools));
	}

	#[test]
	fn all_filter_lays_out_whole_dataset() {
		let c = Constellation::compute(CategoryFilter::All, &mut Midpoint);
		assert_eq!(c.nodes.len(), SKILLS.len());
		assert_eq!(c.position("Figma"), Some(17));
		for edge in &c.edges {
			let (a, b) = edge.ids();
			assert_eq!((c.nodes[edge.a].id, c.nodes[edge.b].id), (a, b));
			assert_ne!(a, b);
		}
	}

	#[test]
	fn two_skill_scenario_has_no_edge() {
		let skills = [
			SkillRecord::new("A", 100, Category::Frontend),
			SkillRecord::new("B", 0, Category::Backend),
		];
		let c = Constellation::from_skills(CategoryFilter::All, &skills, &mut Midpoint);
		assert_eq!(c.nodes.len(), 2);
		assert!(c.edges.is_empty());
	}

	#[test]
	fn neighbors_follow_edges() {
		let skills = [
			SkillRecord::new("A", 0, Category::Tools),
			SkillRecord::new("B", 0, Category::Tools),
			SkillRecord::new("C", 0, Category::Tools),
			SkillRecord::new("D", 0, Category::Tools),
			SkillRecord::new("E", 0, Category::Tools),
			SkillRecord::new("F", 0, Category::Tools),
			SkillRecord::new("G", 0, Category::Tools),
			SkillRecord::new("H", 0, Category::Tools),
		];
		// eight nodes on a radius-30 circle sit ~23 apart: only ring neighbors connect
		let c = Constellation::from_skills(CategoryFilter::All, &skills, &mut Midpoint);
		let mut around_a: Vec<_> = c.neighbors(0).collect();
		around_a.sort_unstable();
		assert_eq!(around_a, [1, 7]);
	}

	#[test]
	fn empty_filter_result() {
		let skills = [SkillRecord::new("A", 50, Category::Frontend)];
		let c = Constellation::from_skills(
			CategoryFilter::Only(Category::Backend),
			&skills,
			&mut Midpoint,
		);
		assert!(c.nodes.is_empty() && c.edges.is_empty());
	}
}
