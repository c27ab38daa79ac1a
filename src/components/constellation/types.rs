//! Skill records, categories, and the derived nodes and edges.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseFilterError;

/// Concrete skill category stored on every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Browser-side work.
	Frontend,
	/// Servers, databases and APIs.
	Backend,
	/// Tooling and platforms.
	Tools,
}

impl Category {
	/// All categories, in display order.
	pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Tools];

	/// Lowercase id used in filter buttons.
	pub fn id(self) -> &'static str {
		match self {
			Category::Frontend => "frontend",
			Category::Backend => "backend",
			Category::Tools => "tools",
		}
	}

	/// Human-readable name.
	pub fn label(self) -> &'static str {
		match self {
			Category::Frontend => "Frontend",
			Category::Backend => "Backend",
			Category::Tools => "Tools",
		}
	}

	/// Node color for this category.
	pub fn color(self) -> &'static str {
		match self {
			Category::Frontend => "hsl(180, 100%, 50%)",
			Category::Backend => "hsl(320, 100%, 60%)",
			Category::Tools => "hsl(85, 100%, 50%)",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

impl FromStr for Category {
	type Err = ParseFilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Category::ALL
			.into_iter()
			.find(|c| c.id() == s)
			.ok_or_else(|| ParseFilterError(s.to_owned()))
	}
}

/// Active category selection. `All` never appears on a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
	/// Every skill.
	#[default]
	All,
	/// Only skills of one category.
	Only(Category),
}

impl CategoryFilter {
	/// Filters in button order.
	pub const BUTTONS: [CategoryFilter; 4] = [
		CategoryFilter::All,
		CategoryFilter::Only(Category::Frontend),
		CategoryFilter::Only(Category::Backend),
		CategoryFilter::Only(Category::Tools),
	];

	/// Button label.
	pub fn label(self) -> &'static str {
		match self {
			CategoryFilter::All => "All Skills",
			CategoryFilter::Only(c) => c.label(),
		}
	}

	/// Whether `category` passes the filter.
	pub fn matches(self, category: Category) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Only(c) => c == category,
		}
	}

	/// The records passing the filter, in dataset order.
	pub fn apply(self, skills: &[SkillRecord]) -> Vec<SkillRecord> {
		skills
			.iter()
			.filter(|s| self.matches(s.category))
			.copied()
			.collect()
	}
}

impl fmt::Display for CategoryFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CategoryFilter::All => f.write_str("all"),
			CategoryFilter::Only(c) => c.fmt(f),
		}
	}
}

impl FromStr for CategoryFilter {
	type Err = ParseFilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == "all" {
			Ok(CategoryFilter::All)
		} else {
			s.parse().map(CategoryFilter::Only)
		}
	}
}

/// One skill of the fixed dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRecord {
	/// Unique name, also the node id.
	pub name: &'static str,
	/// Proficiency percentage, 0..=100.
	pub level: u8,
	/// Concrete category.
	pub category: Category,
}

impl SkillRecord {
	/// Shorthand used by the dataset table.
	pub const fn new(name: &'static str, level: u8, category: Category) -> Self {
		Self {
			name,
			level,
			category,
		}
	}
}

/// A laid-out skill in the normalized 100x100 space.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	/// Source skill name.
	pub id: &'static str,
	/// Horizontal position, within `[10, 90]`.
	pub x: f64,
	/// Vertical position, within `[15, 85]`.
	pub y: f64,
	/// Visual size, within `[4, 12]`.
	pub size: f64,
	/// CSS color of the category.
	pub color: &'static str,
	/// Category of the source skill.
	pub category: Category,
	/// Proficiency of the source skill.
	pub level: u8,
}

/// Unordered connection between two nodes.
///
/// Carries both endpoint ids, plus their positions `a < b` in the node
/// sequence it was built from so renderers can index without a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Id of the earlier node.
	pub from: &'static str,
	/// Id of the later node.
	pub to: &'static str,
	/// Position of `from` in the node sequence.
	pub a: usize,
	/// Position of `to` in the node sequence.
	pub b: usize,
}

impl Edge {
	/// Connect the nodes at positions `a < b` of `nodes`.
	pub fn between(nodes: &[SkillNode], a: usize, b: usize) -> Self {
		Self {
			from: nodes[a].id,
			to: nodes[b].id,
			a,
			b,
		}
	}

	/// Ids of both endpoints.
	pub fn ids(&self) -> (&'static str, &'static str) {
		(self.from, self.to)
	}

	/// Whether `idx` is one of the endpoints.
	pub fn touches(&self, idx: usize) -> bool {
		self.a == idx || self.b == idx
	}

	/// The endpoint opposite `idx`, if `idx` is an endpoint.
	pub fn other(&self, idx: usize) -> Option<usize> {
		if self.a == idx {
			Some(self.b)
		} else if self.b == idx {
			Some(self.a)
		} else {
			None
		}
	}
}
