// Skill category expansion.
// Set of category names currently expanded in the skills tree.

use std::collections::HashSet;

use crate::catalog::SkillCategory;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedCategories {
    names: HashSet<String>,
}

impl ExpandedCategories {
    /// Start with every category in the catalog expanded.
    pub fn all(categories: &[SkillCategory]) -> Self {
        Self {
            names: categories.iter().map(|c| c.name.clone()).collect(),
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Collapse an expanded category or expand a collapsed one.
    pub fn toggle(&mut self, name: &str) {
        if !self.names.remove(name) {
            self.names.insert(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<SkillCategory> {
        ["Languages", "Backend", "Tools"]
            .iter()
            .map(|name| SkillCategory {
                name: name.to_string(),
                skills: vec![],
            })
            .collect()
    }

    #[test]
    fn test_all_expanded_at_start() {
        let expanded = ExpandedCategories::all(&categories());
        for name in ["Languages", "Backend", "Tools"] {
            assert!(expanded.is_expanded(name));
        }
        assert!(!expanded.is_expanded("Cooking"));
    }

    #[test]
    fn test_toggle_collapses_and_expands() {
        let mut expanded = ExpandedCategories::all(&categories());
        expanded.toggle("Tools");
        assert!(!expanded.is_expanded("Tools"));
        expanded.toggle("Tools");
        assert!(expanded.is_expanded("Tools"));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let original = ExpandedCategories::all(&categories());
        for name in ["Languages", "Backend", "Tools", "Unknown"] {
            let mut expanded = original.clone();
            expanded.toggle(name);
            assert_ne!(expanded, original);
            expanded.toggle(name);
            assert_eq!(expanded, original);
        }
    }
}
