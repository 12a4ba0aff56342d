// Modal UI components.
// Project detail overlay drawn on top of the editor.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::Project;
use crate::state::ProjectView;

use super::glyphs::{project_glyph, tech_glyph};
use super::snippet::code_lines;

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Draw the project detail modal in either the details or the code view.
pub fn draw_project_modal(frame: &mut Frame, project: &Project, view: ProjectView) {
    let height = match view {
        ProjectView::Details => 20,
        ProjectView::Code => 42,
    };
    let modal_area = centered(frame.area(), 72, height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title and type badge
            Constraint::Min(1),    // Description and tech stack
            Constraint::Length(2), // Instructions
        ])
        .split(modal_area);

    let glyph = project_glyph(&project.kind);
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(glyph.symbol, Style::default().fg(glyph.color)),
            Span::raw(" "),
            Span::styled(
                project.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} Application  ·  {}", project.kind.tag(), project.period),
            Style::default().fg(Color::Rgb(0x00, 0x7a, 0xcc)),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Project ")
            .title(view_switch(view).right_aligned()),
    );
    frame.render_widget(header, chunks[0]);

    if view == ProjectView::Code {
        let listing = Paragraph::new(code_lines(project)).block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Rgb(0x1e, 0x1e, 0x1e)))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(listing, chunks[1]);
        draw_instructions(frame, project, chunks[2]);
        return;
    }

    let mut body = vec![
        Line::from(Span::styled(
            "DESCRIPTION",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.description.as_str(),
            Style::default().fg(Color::Rgb(0x9d, 0x9d, 0x9d)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "TECH STACK",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let mut techs = Vec::new();
    for tech in &project.tech_stack {
        let glyph = tech_glyph(tech);
        techs.push(Span::styled(glyph.symbol, Style::default().fg(glyph.color)));
        techs.push(Span::raw(format!(" {}  ", tech)));
    }
    body.push(Line::from(techs));

    if let Some(link) = &project.link {
        let label = if project.links_to_source() {
            "View Source Code"
        } else {
            "View Production"
        };
        body.push(Line::from(""));
        body.push(Line::from(vec![
            Span::styled(
                format!(" ↗ {} ", label),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(0x00, 0x7a, 0xcc))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", link), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let body_widget = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(body_widget, chunks[1]);
    draw_instructions(frame, project, chunks[2]);
}

fn view_switch(view: ProjectView) -> Line<'static> {
    let style = |shown: bool| {
        if shown {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x37, 0x37, 0x3d))
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    Line::from(vec![
        Span::styled(" Details ", style(view == ProjectView::Details)),
        Span::styled(" Code ", style(view == ProjectView::Code)),
    ])
}

fn draw_instructions(frame: &mut Frame, project: &Project, area: Rect) {
    let mut instructions = Vec::new();
    if project.link.is_some() {
        instructions.push(Span::styled(" Enter", Style::default().fg(Color::Yellow)));
        instructions.push(Span::styled(
            " = Open link  ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    instructions.push(Span::styled("c", Style::default().fg(Color::Yellow)));
    instructions.push(Span::styled(
        " = Details/Code  ",
        Style::default().fg(Color::DarkGray),
    ));
    instructions.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
    instructions.push(Span::styled(" = Close ", Style::default().fg(Color::DarkGray)));

    let instructions_widget = Paragraph::new(Line::from(instructions))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(instructions_widget, area);
}
