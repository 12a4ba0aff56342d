// Catalog data types.
// Read-only portfolio content: projects, skills, history records, and services.

use serde::{Deserialize, Serialize};

/// Kind of project, shown as a badge and used to pick its glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectKind {
    System,
    Api,
    Mvc,
    Console,
    Other(String),
}

impl ProjectKind {
    pub fn tag(&self) -> &str {
        match self {
            ProjectKind::System => "System",
            ProjectKind::Api => "API",
            ProjectKind::Mvc => "MVC",
            ProjectKind::Console => "Console",
            ProjectKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ProjectKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "System" => ProjectKind::System,
            "API" => ProjectKind::Api,
            "MVC" => ProjectKind::Mvc,
            "Console" => ProjectKind::Console,
            _ => ProjectKind::Other(tag),
        }
    }
}

impl From<ProjectKind> for String {
    fn from(kind: ProjectKind) -> Self {
        kind.tag().to_string()
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub period: String,
}

impl Project {
    /// Whether the project link points at a source repository.
    pub fn links_to_source(&self) -> bool {
        self.link
            .as_deref()
            .is_some_and(|link| link.contains("github.com"))
    }
}

/// A named group of skills, shown as a collapsible tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// A dated history record (work, volunteering, education, or achievement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A service offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Icon key resolved by the presentation layer (e.g. "Server").
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Social profile links. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub codeforces: Option<String>,
    #[serde(default)]
    pub leetcode: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// Owner of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub headline: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub socials: Socials,
}

/// All static content the UI reads. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub work: Vec<Record>,
    #[serde(default)]
    pub volunteering: Vec<Record>,
    #[serde(default)]
    pub education: Vec<Record>,
    #[serde(default)]
    pub achievements: Vec<Record>,
    #[serde(default)]
    pub services: Vec<Service>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_kind_tags() {
        assert_eq!(ProjectKind::from("API".to_string()), ProjectKind::Api);
        assert_eq!(ProjectKind::from("MVC".to_string()), ProjectKind::Mvc);
        assert_eq!(
            ProjectKind::from("Desktop".to_string()),
            ProjectKind::Other("Desktop".to_string())
        );
        assert_eq!(ProjectKind::Console.tag(), "Console");
    }

    #[test]
    fn test_project_deserializes_from_type_field() {
        let json = r#"{
            "title": "Clinic API",
            "description": "Appointments backend",
            "type": "API",
            "techStack": ["C#", "SQL Server"],
            "period": "2024"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind, ProjectKind::Api);
        assert_eq!(project.tech_stack, vec!["C#", "SQL Server"]);
        assert!(project.link.is_none());
    }

    #[test]
    fn test_links_to_source() {
        let mut project = Project {
            title: "Shop".to_string(),
            description: String::new(),
            kind: ProjectKind::Mvc,
            tech_stack: vec![],
            link: Some("https://github.com/someone/shop".to_string()),
            period: "2023".to_string(),
        };
        assert!(project.links_to_source());

        project.link = Some("https://shop.example.com".to_string());
        assert!(!project.links_to_source());

        project.link = None;
        assert!(!project.links_to_source());
    }
}
