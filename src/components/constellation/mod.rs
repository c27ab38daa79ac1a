//! Skill constellation: circular layout of the skill dataset, proximity
//! edges, and the canvas that draws them.

mod component;
pub mod compute;
pub mod dataset;
pub mod edges;
pub mod layout;
mod render;
mod section;
mod state;
pub mod types;

pub use component::SkillConstellation;
pub use compute::Constellation;
pub use edges::build_edges;
pub use layout::{BrowserRandom, Midpoint, RandomSource, layout_skills};
pub use section::SkillsSection;
pub use types::{Category, CategoryFilter, Edge, SkillNode, SkillRecord};
