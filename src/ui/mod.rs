// UI module for rendering the TUI.
// Lays out the activity bar, sidebar, tab strip, editor, and status bar.

pub mod glyphs;
mod modal;
mod panes;
mod sidebar;
mod snippet;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{NoticeLevel, notices::format_relative_time};

const STATUS_BG: Color = Color::Rgb(0x00, 0x7a, 0xcc);
const ACTIVITY_WIDTH: u16 = 3;
const SIDEBAR_WIDTH: u16 = 28;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let sidebar_width = if app.workbench.sidebar.is_visible() {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ACTIVITY_WIDTH),
            Constraint::Length(sidebar_width),
            Constraint::Min(1),
        ])
        .split(rows[0]);

    sidebar::draw_activity_bar(frame, &app.workbench, columns[0]);
    if app.workbench.sidebar.is_visible() {
        sidebar::draw_sidebar(frame, &app.workbench, columns[1]);
    }

    let editor = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab strip
            Constraint::Min(1),    // Content
        ])
        .split(columns[2]);

    tabs::draw_tabs(frame, &app.workbench, editor[0]);
    panes::draw_editor(frame, &mut app.workbench, editor[1]);

    draw_status_bar(frame, app, rows[1]);

    // Overlays are rendered last, on top of everything
    if let Some(project) = &app.workbench.selected_project {
        modal::draw_project_modal(frame, project, app.workbench.project_view);
    }
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with error count, latest notice, and key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let base = Style::default().fg(Color::White).bg(STATUS_BG);

    let errors = app.notices.error_count();
    let mut left = vec![
        Span::styled(" ⎇ main  ", base),
        Span::styled(
            format!("✓ {} errors  ", errors),
            if errors > 0 {
                base.fg(Color::LightRed)
            } else {
                base
            },
        ),
        Span::styled("Ready  ", base),
    ];

    if let Some(notice) = app.notices.latest() {
        let style = match notice.level {
            NoticeLevel::Error => base.fg(Color::LightRed),
            NoticeLevel::Info => base,
        };
        left.push(Span::styled(
            format!("{} ({})  ", notice.message, format_relative_time(&notice.timestamp)),
            style,
        ));
    } else {
        left.push(Span::styled("? Help  q Quit", base.fg(Color::Gray)));
    }

    let right = Line::from(vec![Span::styled(" UTF-8   C# ", base)]);

    frame.render_widget(Paragraph::new(Line::from(left)).style(base), area);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right).style(base),
        Rect {
            x: area.x + area.width.saturating_sub(13),
            width: area.width.min(13),
            ..area
        },
    );
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let popup_area = modal::centered(frame.area(), 66, 26);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let bindings = [
        ("  Tab/S-Tab     ", "Next / previous open tab"),
        ("  1-5           ", "Open Profile .. Skills"),
        ("  Alt+1-5       ", "Switch to an open tab"),
        ("  w             ", "Close active tab (explorer: tab under cursor)"),
        ("  b             ", "Toggle sidebar"),
        ("  e / g / x / , ", "Explorer / Git / Extensions / Settings"),
        ("  /             ", "Search projects"),
        ("  ←/→ or h/l    ", "Focus sidebar / editor"),
        ("  ↑/↓ or k/j    ", "Move cursor / scroll"),
        ("  Enter         ", "Open / select / toggle"),
        ("  o             ", "Open link of selected item"),
        ("  c             ", "Project details: toggle code view"),
        ("  r / m         ", "Resume / contact mail"),
        ("  G L C T W     ", "GitHub LinkedIn Codeforces LeetCode WhatsApp"),
        ("  Esc           ", "Close overlay / sidebar"),
        ("  ?             ", "Show/hide this help"),
        ("  q             ", "Quit"),
    ];

    let mut help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];
    for (keys, description) in bindings {
        help_text.push(Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(description),
        ]));
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content;
    use crate::links::LinkOpener;
    use crate::state::{Action, ColumnsHint, Tab};
    use ratatui::backend::TestBackend;

    struct NoopOpener;

    impl LinkOpener for NoopOpener {
        fn open(&mut self, _url: &str) -> crate::error::Result<()> {
            Ok(())
        }
    }

    fn app(columns: u16) -> App {
        let hint = ColumnsHint {
            columns,
            threshold: 100,
        };
        App::new(content::builtin(), &hint, Box::new(NoopOpener))
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_explorer_and_tabs() {
        let mut app = app(140);
        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("EXPLORER"));
        assert!(screen.contains("Profile.md"));
        assert!(screen.contains("Experience.git"));
        assert!(screen.contains("Sam Carter"));
    }

    #[test]
    fn test_renders_placeholder_when_no_tabs() {
        let mut app = app(140);
        for _ in 0..4 {
            app.workbench.dispatch(Action::CloseActiveTab);
        }
        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("Select a file from the explorer to view"));
    }

    #[test]
    fn test_renders_search_results_count() {
        let mut app = app(140);
        app.workbench.dispatch(Action::FocusSearch);
        for c in "redis".chars() {
            app.workbench.dispatch(Action::PushSearchChar(c));
        }
        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("SEARCH"));
        assert!(screen.contains("1 results found"));
        assert!(screen.contains("Clinic Booking Platform"));
        assert!(!screen.contains("Bookstore Portal"));
    }

    #[test]
    fn test_renders_collapsed_skill_category() {
        let mut app = app(140);
        app.workbench.dispatch(Action::OpenTab(Tab::Skills));
        app.workbench.dispatch(Action::FocusEditor);
        for _ in 0..3 {
            app.workbench.dispatch(Action::MoveDown);
        }
        app.workbench.dispatch(Action::Confirm);
        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("▸ \"Tools\""));
        assert!(screen.contains("▾ \"Languages\""));
        assert!(!screen.contains("Postman"));
    }

    #[test]
    fn test_renders_project_modal() {
        let mut app = app(140);
        app.workbench.dispatch(Action::ActivateTab(Tab::Projects));
        app.workbench.dispatch(Action::FocusEditor);
        app.workbench.dispatch(Action::Confirm);
        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("System Application"));
        assert!(screen.contains("View Source Code"));
    }

    #[test]
    fn test_renders_project_code_view() {
        let mut app = app(140);
        app.workbench.dispatch(Action::ActivateTab(Tab::Projects));
        app.workbench.dispatch(Action::FocusEditor);
        app.workbench.dispatch(Action::Confirm);
        app.workbench.dispatch(Action::ToggleProjectView);
        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("ProjectsController"));
        assert!(!screen.contains("DESCRIPTION"));
    }

    #[test]
    fn test_narrow_terminal_hides_sidebar() {
        let mut app = app(80);
        let screen = render(&mut app, 80, 30);
        assert!(!screen.contains("EXPLORER"));
        assert!(screen.contains("≡"));
    }
}
