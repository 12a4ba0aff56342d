// Editor panes.
// Renders the content of the active document.

use ratatui::{prelude::*, widgets::*};

use crate::links::Social;
use crate::state::{Focus, Tab, Workbench};

use super::glyphs::{project_glyph, service_glyph, tech_glyph};

const ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xcc);
const MUTED: Color = Color::Rgb(0x85, 0x85, 0x85);

/// Number of techs shown per project before collapsing into `+N`.
const TECH_PREVIEW: usize = 6;

fn highlight() -> Style {
    Style::default()
        .bg(Color::Rgb(0x2a, 0x2d, 0x2e))
        .add_modifier(Modifier::BOLD)
}

fn pane_block(title: String, workbench: &Workbench) -> Block<'static> {
    let border = if workbench.focus == Focus::Editor {
        ACCENT
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

/// Draw the active document, or the placeholder when nothing is open.
pub fn draw_editor(frame: &mut Frame, workbench: &mut Workbench, area: Rect) {
    match workbench.tabs.active() {
        Some(Tab::Profile) => draw_profile(frame, workbench, area),
        Some(Tab::Projects) => draw_projects(frame, workbench, area),
        Some(Tab::Services) => draw_services(frame, workbench, area),
        Some(Tab::Experience) => draw_experience(frame, workbench, area),
        Some(Tab::Skills) => draw_skills(frame, workbench, area),
        None => draw_placeholder(frame, area),
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let top = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "Select a file from the explorer to view",
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" 1-5 ", Style::default().fg(Color::Yellow)),
        Span::styled("Open file   ", Style::default().fg(MUTED)),
        Span::styled(" / ", Style::default().fg(Color::Yellow)),
        Span::styled("Search", Style::default().fg(MUTED)),
    ]));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn draw_profile(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let personal = &workbench.catalog().personal;
    let key = Style::default().fg(Color::Yellow);
    let dim = Style::default().fg(MUTED);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                personal.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("● open to work", Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            format!(">_ {}", personal.title),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
    ];

    if !personal.headline.is_empty() {
        lines.push(Line::from(Span::styled(
            personal.headline.as_str(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("email  ", dim),
        Span::raw(personal.email.trim_start_matches("mailto:")),
    ]));
    if let Some(phone) = &personal.phone {
        lines.push(Line::from(vec![
            Span::styled("phone  ", dim),
            Span::raw(phone.as_str()),
        ]));
    }
    lines.push(Line::from(""));

    let mut actions = Vec::new();
    if personal.resume_url.is_some() {
        actions.push(Span::styled("[r]", key));
        actions.push(Span::raw(" Download CV   "));
    }
    actions.push(Span::styled("[m]", key));
    actions.push(Span::raw(" Contact Me"));
    lines.push(Line::from(actions));
    lines.push(Line::from(""));

    let mut social_spans = Vec::new();
    for social in Social::ALL {
        if social.profile(&personal.socials).is_some() {
            social_spans.push(Span::styled(format!("[{}]", social.key()), key));
            social_spans.push(Span::raw(format!(" {}  ", social.title())));
        }
    }
    if !social_spans.is_empty() {
        lines.push(Line::from(social_spans));
    }

    let text = Paragraph::new(lines)
        .block(pane_block(" Profile.md ".to_string(), workbench))
        .wrap(Wrap { trim: true })
        .scroll((workbench.scroll, 0));
    frame.render_widget(text, area);
}

fn draw_projects(frame: &mut Frame, workbench: &mut Workbench, area: Rect) {
    let query = workbench.search.query.clone();
    let projects = workbench.filtered_projects();

    // The search panel is hidden in the narrow layout, so echo the input here.
    let cursor = if workbench.search.input_active && !workbench.sidebar.is_visible() {
        "█"
    } else {
        ""
    };
    let title = if query.is_empty() && cursor.is_empty() {
        format!(" Projects.cs ({}) ", projects.len())
    } else {
        format!(" Projects.cs ({}) filter: {}{} ", projects.len(), query, cursor)
    };
    let block = pane_block(title, workbench);

    if projects.is_empty() {
        let text = Paragraph::new(format!("No projects match \"{}\"", query))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            let kind = project_glyph(&project.kind);
            let mut techs = vec![Span::raw("   ")];
            for tech in project.tech_stack.iter().take(TECH_PREVIEW) {
                let glyph = tech_glyph(tech);
                techs.push(Span::styled(glyph.symbol, Style::default().fg(glyph.color)));
                techs.push(Span::styled(
                    format!(" {}  ", tech),
                    Style::default().fg(Color::Gray),
                ));
            }
            if project.tech_stack.len() > TECH_PREVIEW {
                techs.push(Span::styled(
                    format!("+{}", project.tech_stack.len() - TECH_PREVIEW),
                    Style::default().fg(MUTED),
                ));
            }

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(kind.symbol, Style::default().fg(kind.color)),
                    Span::raw(" "),
                    Span::styled(
                        project.title.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  [{}]", project.kind.tag()),
                        Style::default().fg(ACCENT),
                    ),
                    Span::styled(format!("  {}", project.period), Style::default().fg(MUTED)),
                ]),
                Line::from(Span::styled(
                    format!("   {}", project.description),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(techs),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight())
        .highlight_symbol("> ");

    let mut state = workbench.project_list.clone();
    frame.render_stateful_widget(list, area, &mut state);
    workbench.project_list = state;
}

fn draw_services(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let mut lines = Vec::new();

    for service in &workbench.catalog().services {
        let glyph = service_glyph(&service.icon);
        lines.push(Line::from(vec![
            Span::styled(glyph.symbol, Style::default().fg(glyph.color)),
            Span::raw(" "),
            Span::styled(
                service.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", service.description),
            Style::default().fg(Color::Gray),
        )));
        for feature in &service.features {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                Span::raw(feature.as_str()),
            ]));
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No services listed",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines)
        .block(pane_block(" Services.cs ".to_string(), workbench))
        .scroll((workbench.scroll, 0));
    frame.render_widget(text, area);
}

fn draw_experience(frame: &mut Frame, workbench: &mut Workbench, area: Rect) {
    let block = pane_block(" Experience.git ".to_string(), workbench);
    let timeline = workbench.timeline();

    if timeline.is_empty() {
        let text = Paragraph::new("No history yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = timeline
        .iter()
        .map(|entry| {
            let record = entry.record;
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        record.role.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", entry.kind.label()),
                        Style::default().fg(ACCENT),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("│ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(record.company.clone(), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  {}", record.period), Style::default().fg(MUTED)),
                ]),
            ];
            for item in &record.description {
                lines.push(Line::from(vec![
                    Span::styled("│  - ", Style::default().fg(Color::DarkGray)),
                    Span::styled(item.clone(), Style::default().fg(Color::Gray)),
                ]));
            }
            if let Some(link) = &record.link {
                lines.push(Line::from(vec![
                    Span::styled("│  ↗ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(link.clone(), Style::default().fg(Color::LightBlue)),
                ]));
            }
            lines.push(Line::from(Span::styled(
                "│",
                Style::default().fg(Color::DarkGray),
            )));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight())
        .highlight_symbol("> ");

    let mut state = workbench.timeline_list.clone();
    frame.render_stateful_widget(list, area, &mut state);
    workbench.timeline_list = state;
}

fn draw_skills(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let block = pane_block(" Skills.json ".to_string(), workbench);
    let categories = &workbench.catalog().skills;

    if categories.is_empty() {
        let text = Paragraph::new("No skills listed")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = categories
        .iter()
        .map(|category| {
            let expanded = workbench.expanded.is_expanded(&category.name);
            let marker = if expanded { "▾ " } else { "▸ " };
            let mut lines = vec![Line::from(vec![
                Span::styled(marker, Style::default().fg(MUTED)),
                Span::styled(
                    format!("\"{}\"", category.name),
                    Style::default().fg(Color::Rgb(0xce, 0x91, 0x78)),
                ),
                Span::styled(
                    format!(": [{}]", category.skills.len()),
                    Style::default().fg(MUTED),
                ),
            ])];
            if expanded {
                for skill in &category.skills {
                    let glyph = tech_glyph(skill);
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(glyph.symbol, Style::default().fg(glyph.color)),
                        Span::raw(" "),
                        Span::styled(skill.clone(), Style::default().fg(Color::Gray)),
                    ]));
                }
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(workbench.skill_cursor.min(categories.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
