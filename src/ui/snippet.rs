// Code view for the project overlay.
// Renders a short C# listing shaped by the project's kind.

use ratatui::prelude::*;

use crate::catalog::{Project, ProjectKind};

const CONTROL: Color = Color::Rgb(0xc5, 0x86, 0xc0);
const KEYWORD: Color = Color::Rgb(0x56, 0x9c, 0xd6);
const TYPE: Color = Color::Rgb(0x4e, 0xc9, 0xb0);
const STRING: Color = Color::Rgb(0xce, 0x91, 0x78);
const COMMENT: Color = Color::Rgb(0x6a, 0x99, 0x55);
const FUNCTION: Color = Color::Rgb(0xdc, 0xdc, 0xaa);
const IDENT: Color = Color::Rgb(0x9c, 0xdc, 0xfe);
const NUMBER: Color = Color::Rgb(0xb5, 0xce, 0xa8);
const PLAIN: Color = Color::Rgb(0xd4, 0xd4, 0xd4);

fn t(text: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(color))
}

fn line(indent: usize, spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = vec![Span::raw(" ".repeat(indent * 4))];
    all.extend(spans);
    Line::from(all)
}

fn plain(indent: usize, text: &str) -> Line<'static> {
    line(indent, vec![t(text, PLAIN)])
}

/// First `n` characters of `text`.
fn head(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Route segment: lowercase, whitespace to dashes, at most 15 characters.
fn route_slug(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    head(&slug, 15)
}

/// Class name made of the title's ASCII letters.
fn class_name(title: &str) -> String {
    let letters: String = title.chars().filter(char::is_ascii_alphabetic).collect();
    format!("{}App", letters)
}

/// Syntax-colored listing for `project`.
pub fn code_lines(project: &Project) -> Vec<Line<'static>> {
    match project.kind {
        ProjectKind::Api | ProjectKind::System => controller(project),
        ProjectKind::Mvc => mvc_controller(project),
        _ => console_program(project),
    }
}

fn controller(project: &Project) -> Vec<Line<'static>> {
    let first_tech = project.tech_stack.first().cloned().unwrap_or_default();
    vec![
        line(0, vec![t("using", CONTROL), t(" Microsoft.AspNetCore.Mvc;", PLAIN)]),
        line(0, vec![t("using", CONTROL), t(" System.Threading.Tasks;", PLAIN)]),
        Line::from(""),
        line(0, vec![t("namespace", KEYWORD), t(" Portfolio.Controllers", PLAIN)]),
        plain(0, "{"),
        line(1, vec![t("[", PLAIN), t("ApiController", TYPE), t("]", PLAIN)]),
        line(
            1,
            vec![
                t("[", PLAIN),
                t("Route", TYPE),
                t("(", PLAIN),
                t("\"api/[controller]\"", STRING),
                t(")]", PLAIN),
            ],
        ),
        line(
            1,
            vec![
                t("public class", KEYWORD),
                t(" ProjectsController", TYPE),
                t(" : ", PLAIN),
                t("ControllerBase", TYPE),
            ],
        ),
        plain(1, "{"),
        line(2, vec![t("/// <summary>", COMMENT)]),
        line(2, vec![t(format!("/// Retrieves details for {}", project.title), COMMENT)]),
        line(2, vec![t("/// </summary>", COMMENT)]),
        line(
            2,
            vec![
                t("[", PLAIN),
                t("HttpGet", TYPE),
                t("(", PLAIN),
                t(format!("\"{}\"", route_slug(&project.title)), STRING),
                t(")]", PLAIN),
            ],
        ),
        line(
            2,
            vec![
                t("public async ", KEYWORD),
                t("Task", TYPE),
                t("<", PLAIN),
                t("IActionResult", TYPE),
                t("> ", PLAIN),
                t("GetProject", FUNCTION),
                t("(", PLAIN),
                t("int", KEYWORD),
                t(" id", IDENT),
                t(")", PLAIN),
            ],
        ),
        plain(2, "{"),
        line(3, vec![t("try", CONTROL)]),
        plain(3, "{"),
        line(
            4,
            vec![
                t("var", KEYWORD),
                t(" result", IDENT),
                t(" = ", PLAIN),
                t("await", CONTROL),
                t(" _service", IDENT),
                t(".", PLAIN),
                t("GetByIdAsync", FUNCTION),
                t("(", PLAIN),
                t("id", IDENT),
                t(");", PLAIN),
            ],
        ),
        line(
            4,
            vec![
                t("if", CONTROL),
                t(" (", PLAIN),
                t("result", IDENT),
                t(" == ", PLAIN),
                t("null", KEYWORD),
                t(") ", PLAIN),
                t("return ", CONTROL),
                t("NotFound", FUNCTION),
                t("();", PLAIN),
            ],
        ),
        Line::from(""),
        line(
            4,
            vec![
                t("return ", CONTROL),
                t("Ok", FUNCTION),
                t("(", PLAIN),
                t("new", KEYWORD),
                t(" {", PLAIN),
            ],
        ),
        line(
            5,
            vec![
                t("Id", IDENT),
                t(" = ", PLAIN),
                t("result", IDENT),
                t(".", PLAIN),
                t("Id", IDENT),
                t(",", PLAIN),
            ],
        ),
        line(
            5,
            vec![
                t("Name", IDENT),
                t(" = ", PLAIN),
                t(format!("\"{}...\"", head(&project.title, 10)), STRING),
                t(",", PLAIN),
            ],
        ),
        line(
            5,
            vec![
                t("Stack", IDENT),
                t(" = ", PLAIN),
                t("new", KEYWORD),
                t("[] { ", PLAIN),
                t(format!("\"{}\"", first_tech), STRING),
                t("... }", PLAIN),
            ],
        ),
        plain(4, "});"),
        plain(3, "}"),
        line(
            3,
            vec![
                t("catch", CONTROL),
                t(" (", PLAIN),
                t("Exception", TYPE),
                t(" ex", IDENT),
                t(")", PLAIN),
            ],
        ),
        plain(3, "{"),
        line(
            4,
            vec![
                t("_logger", IDENT),
                t(".", PLAIN),
                t("LogError", FUNCTION),
                t("(", PLAIN),
                t("ex", IDENT),
                t(", ", PLAIN),
                t("\"Error fetching project\"", STRING),
                t(");", PLAIN),
            ],
        ),
        line(
            4,
            vec![
                t("return ", CONTROL),
                t("StatusCode", FUNCTION),
                t("(", PLAIN),
                t("500", NUMBER),
                t(", ", PLAIN),
                t("ex", IDENT),
                t(".", PLAIN),
                t("Message", IDENT),
                t(");", PLAIN),
            ],
        ),
        plain(3, "}"),
        plain(2, "}"),
        plain(1, "}"),
        plain(0, "}"),
    ]
}

fn mvc_controller(project: &Project) -> Vec<Line<'static>> {
    vec![
        line(0, vec![t("using", CONTROL), t(" Microsoft.AspNetCore.Mvc;", PLAIN)]),
        line(0, vec![t("using", CONTROL), t(" Portfolio.Models;", PLAIN)]),
        Line::from(""),
        line(0, vec![t("namespace", KEYWORD), t(" Portfolio.Controllers", PLAIN)]),
        plain(0, "{"),
        line(
            1,
            vec![
                t("public class", KEYWORD),
                t(" HomeController", TYPE),
                t(" : ", PLAIN),
                t("Controller", TYPE),
            ],
        ),
        plain(1, "{"),
        line(2, vec![t("/// <summary>", COMMENT)]),
        line(
            2,
            vec![t(format!("/// Controller logic for {} View", project.title), COMMENT)],
        ),
        line(2, vec![t("/// </summary>", COMMENT)]),
        line(
            2,
            vec![
                t("private readonly ", KEYWORD),
                t("ILogger", TYPE),
                t("<", PLAIN),
                t("HomeController", TYPE),
                t("> ", PLAIN),
                t("_logger", IDENT),
                t(";", PLAIN),
            ],
        ),
        Line::from(""),
        line(
            2,
            vec![
                t("public ", KEYWORD),
                t("IActionResult ", TYPE),
                t("Index", FUNCTION),
                t("()", PLAIN),
            ],
        ),
        plain(2, "{"),
        line(
            3,
            vec![
                t("var", KEYWORD),
                t(" model", IDENT),
                t(" = ", PLAIN),
                t("new ", KEYWORD),
                t("ProjectViewModel", TYPE),
            ],
        ),
        plain(3, "{"),
        line(
            4,
            vec![
                t("Title", IDENT),
                t(" = ", PLAIN),
                t(format!("\"{}...\"", head(&project.title, 10)), STRING),
                t(",", PLAIN),
            ],
        ),
        line(4, vec![t("IsActive", IDENT), t(" = ", PLAIN), t("true", KEYWORD), t(",", PLAIN)]),
        line(
            4,
            vec![
                t("UpdatedAt", IDENT),
                t(" = ", PLAIN),
                t("DateTime", TYPE),
                t(".", PLAIN),
                t("UtcNow", IDENT),
            ],
        ),
        plain(3, "};"),
        line(
            3,
            vec![
                t("return ", CONTROL),
                t("View", FUNCTION),
                t("(", PLAIN),
                t("model", IDENT),
                t(");", PLAIN),
            ],
        ),
        plain(2, "}"),
        plain(1, "}"),
        plain(0, "}"),
    ]
}

fn console_program(project: &Project) -> Vec<Line<'static>> {
    vec![
        line(0, vec![t("using", CONTROL), t(" System;", PLAIN)]),
        line(0, vec![t("using", CONTROL), t(" System.Collections.Generic;", PLAIN)]),
        Line::from(""),
        line(0, vec![t("namespace", KEYWORD), t(" Portfolio.ConsoleApp", PLAIN)]),
        plain(0, "{"),
        line(1, vec![t("/// <summary>", COMMENT)]),
        line(1, vec![t(format!("/// Main entry point for {}", project.title), COMMENT)]),
        line(1, vec![t("/// </summary>", COMMENT)]),
        line(1, vec![t("internal class", KEYWORD), t(" Program", TYPE)]),
        plain(1, "{"),
        line(
            2,
            vec![
                t("static void ", KEYWORD),
                t("Main", FUNCTION),
                t("(", PLAIN),
                t("string", KEYWORD),
                t("[] ", PLAIN),
                t("args", IDENT),
                t(")", PLAIN),
            ],
        ),
        plain(2, "{"),
        line(
            3,
            vec![
                t("Console", TYPE),
                t(".", PLAIN),
                t("WriteLine", FUNCTION),
                t("(", PLAIN),
                t("\"Initializing System...\"", STRING),
                t(");", PLAIN),
            ],
        ),
        line(
            3,
            vec![t(format!("/* {}... */", head(&project.description, 30)), COMMENT)],
        ),
        line(
            3,
            vec![
                t("var", KEYWORD),
                t(" app", IDENT),
                t(" = ", PLAIN),
                t("new ", KEYWORD),
                t(class_name(&project.title), TYPE),
                t("();", PLAIN),
            ],
        ),
        line(
            3,
            vec![
                t("app", IDENT),
                t(".", PLAIN),
                t("Run", FUNCTION),
                t("(", PLAIN),
                t("args", IDENT),
                t(");", PLAIN),
            ],
        ),
        line(
            3,
            vec![t("Console", TYPE), t(".", PLAIN), t("ReadKey", FUNCTION), t("();", PLAIN)],
        ),
        plain(2, "}"),
        plain(1, "}"),
        plain(0, "}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn by_kind(kind: ProjectKind) -> Project {
        content::builtin()
            .projects
            .into_iter()
            .find(|p| p.kind == kind)
            .unwrap()
    }

    #[test]
    fn test_route_slug_and_class_name() {
        assert_eq!(route_slug("Clinic Booking Platform"), "clinic-booking-");
        assert_eq!(class_name("Contest Toolkit 2"), "ContestToolkitApp");
        assert_eq!(head("abc", 10), "abc");
    }

    #[test]
    fn test_listing_follows_kind() {
        let system = text(&code_lines(&by_kind(ProjectKind::System)));
        assert!(system.contains("public class ProjectsController : ControllerBase"));
        assert!(system.contains("[HttpGet(\"clinic-booking-\")]"));

        let mvc = text(&code_lines(&by_kind(ProjectKind::Mvc)));
        assert!(mvc.contains("HomeController : Controller"));
        assert!(mvc.contains("Controller logic for Bookstore Portal View"));

        let console = text(&code_lines(&by_kind(ProjectKind::Console)));
        assert!(console.contains("var app = new ContestToolkitApp();"));
        assert!(console.starts_with("using System;"));
    }

    #[test]
    fn test_unknown_kind_uses_console_listing() {
        let mut project = by_kind(ProjectKind::Api);
        project.kind = ProjectKind::Other("Desktop".to_string());
        assert!(text(&code_lines(&project)).contains("internal class Program"));
    }
}
