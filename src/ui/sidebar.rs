// Activity bar and sidebar panels.
// Explorer lists the portfolio documents; Search edits the project query.

use ratatui::{prelude::*, widgets::*};

use crate::links::Social;
use crate::state::{Section, Tab, Workbench};

use super::glyphs::tab_glyph;

const ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xcc);

/// Draw the leftmost activity bar.
pub fn draw_activity_bar(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let section = workbench.sidebar.section();
    let visible = workbench.sidebar.is_visible();

    let entries = [
        (Section::Explorer, "⎘", visible),
        (Section::Search, "⌕", visible),
        (Section::Git, "⎇", true),
        (Section::Extensions, "▣", true),
    ];

    let mut lines: Vec<Line> = entries
        .iter()
        .map(|(entry, symbol, shown)| {
            if *entry == section && *shown {
                Line::from(vec![
                    Span::styled("▌", Style::default().fg(Color::White)),
                    Span::styled(*symbol, Style::default().fg(Color::White)),
                ])
            } else {
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(*symbol, Style::default().fg(Color::DarkGray)),
                ])
            }
        })
        .collect();

    lines.push(Line::from(Span::styled(
        " ─",
        Style::default().fg(Color::DarkGray),
    )));

    let socials = &workbench.catalog().personal.socials;
    for social in Social::ALL {
        if social.profile(socials).is_some() {
            lines.push(Line::from(Span::styled(
                format!(" {}", social.key()),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let bar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(bar, area);
}

/// Draw the sidebar panel for the current section.
pub fn draw_sidebar(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let title = if workbench.sidebar.section() == Section::Search {
        " SEARCH "
    } else {
        " EXPLORER "
    };
    let border_color = if workbench.sidebar_focused() {
        ACCENT
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if workbench.sidebar.section() == Section::Search {
        draw_search_panel(frame, workbench, inner);
    } else {
        draw_explorer(frame, workbench, inner);
    }
}

fn draw_explorer(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let active = workbench.tabs.active();
    let focused = workbench.sidebar_focused();

    let mut lines = vec![Line::from(Span::styled(
        "▾ PORTFOLIO",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    ))];

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let glyph = tab_glyph(*tab);
        let mut style = if Some(*tab) == active {
            Style::default().fg(Color::White).bg(Color::Rgb(0x37, 0x37, 0x3d))
        } else if workbench.tabs.is_open(*tab) {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if focused && i == workbench.explorer_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(glyph.symbol, Style::default().fg(glyph.color)),
            Span::raw(" "),
            Span::styled(tab.file_name(), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_search_panel(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Result count
            Constraint::Min(0),
        ])
        .split(area);

    let input_active = workbench.search.input_active;
    let mut input = vec![Span::raw(workbench.search.query.as_str())];
    if input_active {
        input.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    } else if workbench.search.query.is_empty() {
        input = vec![Span::styled(
            "Search projects...",
            Style::default().fg(Color::DarkGray),
        )];
    }

    let input_widget = Paragraph::new(Line::from(input)).block(
        Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(if input_active {
                ACCENT
            } else {
                Color::DarkGray
            }),
        ),
    );
    frame.render_widget(input_widget, chunks[0]);

    let count = Paragraph::new(format!(
        "{} results found",
        workbench.filtered_projects().len()
    ))
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(count, chunks[1]);
}
