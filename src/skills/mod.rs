// Skills module.
// Infers a skill set from repository metadata and groups it for display.

pub mod categories;
pub mod classifier;

pub use categories::{SkillCategory, SkillGroup, categorize_skills, fallback_skill_groups};
pub use classifier::{derive_skill_set, format_skill_label, is_skill_topic};
