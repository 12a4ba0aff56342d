// Built-in portfolio content.
// Used when no catalog file is supplied.

use super::types::{
    Catalog, PersonalInfo, Project, ProjectKind, Record, Service, SkillCategory, Socials,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn record(role: &str, company: &str, period: &str, description: &[&str]) -> Record {
    Record {
        role: role.to_string(),
        company: company.to_string(),
        period: period.to_string(),
        description: strings(description),
        link: None,
    }
}

fn project(
    title: &str,
    kind: ProjectKind,
    period: &str,
    description: &str,
    tech_stack: &[&str],
    link: Option<&str>,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        kind,
        tech_stack: strings(tech_stack),
        link: link.map(str::to_string),
        period: period.to_string(),
    }
}

/// The compiled-in catalog.
pub fn builtin() -> Catalog {
    Catalog {
        personal: PersonalInfo {
            name: "Sam Carter".to_string(),
            title: "Backend Developer".to_string(),
            headline: "Builds scalable APIs and backend systems with .NET, focused on clean \
                       architecture, SQL performance, and problem solving."
                .to_string(),
            email: "sam.carter.dev@example.com".to_string(),
            phone: Some("+1 555 0100".to_string()),
            resume_url: Some("https://example.com/sam-carter/resume.pdf".to_string()),
            socials: Socials {
                github: Some("https://github.com/samcarter-dev".to_string()),
                linkedin: Some("https://www.linkedin.com/in/samcarter-dev".to_string()),
                codeforces: Some("https://codeforces.com/profile/samcarter".to_string()),
                leetcode: Some("https://leetcode.com/u/samcarter".to_string()),
                whatsapp: None,
            },
        },
        projects: vec![
            project(
                "Clinic Booking Platform",
                ProjectKind::System,
                "Jan 2025 - Present",
                "Multi-tenant appointment system with role-based access, reminders, and \
                 payment integration.",
                &[
                    "ASP.NET Core",
                    "Clean Architecture",
                    "CQRS",
                    "SQL Server",
                    "Redis",
                    "JWT",
                    "Payment Gateway",
                ],
                Some("https://github.com/samcarter-dev/clinic-booking"),
            ),
            project(
                "Inventory API",
                ProjectKind::Api,
                "2024",
                "REST API for warehouse stock tracking with audit history and webhooks.",
                &["C#", "Web API", "Entity Framework", "LINQ", "AutoMapper"],
                Some("https://github.com/samcarter-dev/inventory-api"),
            ),
            project(
                "Bookstore Portal",
                ProjectKind::Mvc,
                "2023",
                "Server-rendered storefront with cart, checkout, and admin dashboard.",
                &["ASP.NET MVC", "Bootstrap", "SQL Server", "Repository Pattern"],
                Some("https://bookstore.example.com"),
            ),
            project(
                "Contest Toolkit",
                ProjectKind::Console,
                "2022",
                "Command-line helpers for competitive programming practice and stress tests.",
                &["C++", "Python", "Git"],
                None,
            ),
        ],
        skills: vec![
            SkillCategory {
                name: "Languages".to_string(),
                skills: strings(&["C#", "C++", "Python", "SQL"]),
            },
            SkillCategory {
                name: "Backend".to_string(),
                skills: strings(&[
                    "ASP.NET Core",
                    "Entity Framework",
                    "Web API",
                    "Redis",
                    "Identity",
                ]),
            },
            SkillCategory {
                name: "Architecture".to_string(),
                skills: strings(&["Clean Architecture", "CQRS", "Design Patterns", "OOP"]),
            },
            SkillCategory {
                name: "Tools".to_string(),
                skills: strings(&["Git", "Docker", "Postman", "Azure DevOps"]),
            },
        ],
        work: vec![
            record(
                "Back-End Developer",
                "Northwind Labs",
                "Sep 2024 - Present",
                &[
                    "Designed and shipped public APIs consumed by web and mobile clients.",
                    "Cut p95 latency of reporting endpoints by rewriting hot SQL queries.",
                ],
            ),
            record(
                "Backend Intern",
                "Contoso Software",
                "Remote Internship",
                &["Built internal tooling around order processing."],
            ),
        ],
        volunteering: vec![record(
            "Backend Team Lead",
            "University Smart Team",
            "Oct 2023 - Aug 2024",
            &["Led a team of five building the student services backend."],
        )],
        education: vec![record(
            "B.Sc. Computer Science",
            "State University",
            "2020 - 2024",
            &["Graduated with honors."],
        )],
        achievements: vec![Record {
            link: Some("https://codeforces.com/profile/samcarter".to_string()),
            ..record(
                "Regional Finalist",
                "Collegiate Programming Contest",
                "2023",
                &["Placed in the top ten teams of the regional round."],
            )
        }],
        services: vec![
            Service {
                icon: "Server".to_string(),
                title: "Backend Development".to_string(),
                description: "Robust server-side applications and REST APIs.".to_string(),
                features: strings(&["ASP.NET Core APIs", "Authentication", "Background jobs"]),
            },
            Service {
                icon: "Database".to_string(),
                title: "Database Design".to_string(),
                description: "Schemas and queries that stay fast as data grows.".to_string(),
                features: strings(&["Normalization", "Indexing", "Query tuning"]),
            },
            Service {
                icon: "Shield".to_string(),
                title: "Security Hardening".to_string(),
                description: "Reviews and fixes for common web vulnerabilities.".to_string(),
                features: strings(&["JWT & OAuth", "Input validation", "Secrets handling"]),
            },
        ],
    }
}
