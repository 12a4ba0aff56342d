// Tab strip rendering.
// One entry per open document, in open order, with the active tab highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::state::Workbench;

use super::glyphs::tab_glyph;

/// Draw the open-tab strip at the top of the editor.
pub fn draw_tabs(frame: &mut Frame, workbench: &Workbench, area: Rect) {
    let active = workbench.tabs.active();

    let mut spans = Vec::new();
    if !workbench.sidebar.is_visible() {
        spans.push(Span::styled(" ≡ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
    }

    for tab in workbench.tabs.open_tabs() {
        let glyph = tab_glyph(*tab);
        let is_active = Some(*tab) == active;

        let label_style = if is_active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let close_style = if is_active {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::raw(" "));
        spans.push(Span::styled(glyph.symbol, Style::default().fg(glyph.color)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(tab.file_name(), label_style));
        spans.push(Span::styled(" ×", close_style));
        spans.push(Span::styled(" │", Style::default().fg(Color::DarkGray)));
    }

    let border_color = if workbench.tabs.is_empty() {
        Color::DarkGray
    } else {
        Color::Rgb(0x00, 0x7a, 0xcc)
    };

    let strip = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(strip, area);
}
