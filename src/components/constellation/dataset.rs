//! The compile-time skill dataset.

use std::collections::HashSet;

use super::types::Category::{Backend, Frontend, Tools};
use super::types::{Category, SkillRecord};
use crate::error::DatasetError;

/// The fixed skill dataset, in display order.
pub static SKILLS: [SkillRecord; 18] = [
	SkillRecord::new("React.js", 95, Frontend),
	SkillRecord::new("Next.js", 92, Frontend),
	SkillRecord::new("TypeScript", 90, Frontend),
	SkillRecord::new("Tailwind CSS", 95, Frontend),
	SkillRecord::new("Redux", 85, Frontend),
	SkillRecord::new("SASS/SCSS", 88, Frontend),
	SkillRecord::new("Framer Motion", 85, Frontend),
	SkillRecord::new("Node.js", 90, Backend),
	SkillRecord::new("Express.js", 88, Backend),
	SkillRecord::new("PostgreSQL", 85, Backend),
	SkillRecord::new("MongoDB", 82, Backend),
	SkillRecord::new("GraphQL", 80, Backend),
	SkillRecord::new("REST APIs", 92, Backend),
	SkillRecord::new("Firebase", 78, Backend),
	SkillRecord::new("Git", 92, Tools),
	SkillRecord::new("Docker", 75, Tools),
	SkillRecord::new("Vercel", 90, Tools),
	SkillRecord::new("Figma", 80, Tools),
];

/// Check the record invariants: levels within 0..=100 and unique names.
pub fn validate(skills: &[SkillRecord]) -> Result<(), DatasetError> {
	let mut seen = HashSet::with_capacity(skills.len());
	for skill in skills {
		if skill.level > 100 {
			return Err(DatasetError::LevelOutOfRange {
				name: skill.name,
				level: skill.level,
			});
		}
		if !seen.insert(skill.name) {
			return Err(DatasetError::DuplicateName(skill.name));
		}
	}
	Ok(())
}

/// Up to `limit` skills of one category, in dataset order.
pub fn top_skills(category: Category, limit: usize) -> impl Iterator<Item = &'static SkillRecord> {
	SKILLS
		.iter()
		.filter(move |s| s.category == category)
		.take(limit)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_dataset_is_valid() {
		assert_eq!(validate(&SKILLS), Ok(()));
		assert_eq!(SKILLS.len(), 18);
	}

	#[test]
	fn rejects_out_of_range_level() {
		let skills = [SkillRecord::new("Rust", 101, Tools)];
		assert_eq!(
			validate(&skills),
			Err(DatasetError::LevelOutOfRange {
				name: "Rust",
				level: 101
			})
		);
	}

	#[test]
	fn rejects_duplicate_names() {
		let skills = [
			SkillRecord::new("Git", 92, Tools),
			SkillRecord::new("Git", 50, Backend),
		];
		assert_eq!(validate(&skills), Err(DatasetError::DuplicateName("Git")));
	}

	#[test]
	fn top_skills_caps_each_category() {
		let frontend: Vec<_> = top_skills(Frontend, 5).map(|s| s.name).collect();
		assert_eq!(
			frontend,
			["React.js", "Next.js", "TypeScript", "Tailwind CSS", "Redux"]
		);
		assert_eq!(top_skills(Tools, 5).count(), 4);
	}
}
