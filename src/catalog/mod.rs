// Catalog module for static portfolio content.
// Types, built-in content, and JSON loading.

pub mod content;
pub mod loader;
pub mod types;

pub use types::{Catalog, PersonalInfo, Project, ProjectKind, Record, SkillCategory, Socials};
