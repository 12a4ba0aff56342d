// Project search.
// Case-insensitive substring filter over project titles and tech stacks.

use crate::catalog::Project;

/// Whether a project matches an already-lowercased query.
fn matches(project: &Project, query_lower: &str) -> bool {
    project.title.to_lowercase().contains(query_lower)
        || project
            .tech_stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(query_lower))
}

/// Filter projects by query, keeping catalog order. An empty query keeps all.
pub fn filter_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let query_lower = query.to_lowercase();
    projects
        .iter()
        .filter(|project| matches(project, &query_lower))
        .collect()
}

/// Search text plus whether the input currently has keyboard focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub input_active: bool,
}

impl SearchState {
    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character. Returns false if the query was empty.
    pub fn pop(&mut self) -> bool {
        self.query.pop().is_some()
    }
}
