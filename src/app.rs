// App state and main event loop.
// Translates keyboard input into workbench actions and runs their effects.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::catalog::Catalog;
use crate::links::{Link, LinkOpener, Social};
use crate::state::{Action, Effect, LayoutHint, Notice, NoticeLog, Section, Tab, Workbench};
use crate::ui;

/// Main application state.
pub struct App {
    /// All editor UI state.
    pub workbench: Workbench,
    /// Recent notices for the status bar.
    pub notices: NoticeLog,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    opener: Box<dyn LinkOpener>,
}

impl App {
    pub fn new(catalog: Catalog, hint: &dyn LayoutHint, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            workbench: Workbench::new(catalog, hint),
            notices: NoticeLog::default(),
            show_help: false,
            should_quit: false,
            opener,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Route a key press to the help overlay, search input, modal, or editor.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.workbench.search.input_active {
            let action = match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::BlurSearch),
                KeyCode::Backspace => Some(Action::PopSearchChar),
                KeyCode::Char(c) => Some(Action::PushSearchChar(c)),
                _ => None,
            };
            if let Some(action) = action {
                self.apply(action);
            }
            return;
        }

        if self.workbench.selected_project.is_some() {
            let action = match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseProject),
                KeyCode::Enter | KeyCode::Char('o') => Some(Action::FollowSelected),
                KeyCode::Char('c') => Some(Action::ToggleProjectView),
                _ => None,
            };
            if let Some(action) = action {
                self.apply(action);
            }
            return;
        }

        if let Some(action) = self.action_for(key) {
            self.apply(action);
        }
    }

    fn action_for(&mut self, key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            KeyCode::Esc => {
                if self.workbench.sidebar.is_visible() {
                    Action::CloseSidebar
                } else {
                    return None;
                }
            }
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PrevTab,
            KeyCode::Char(c @ '1'..='5') => {
                let tab = Tab::ALL[c as usize - '1' as usize];
                if key.modifiers.contains(KeyModifiers::ALT) {
                    Action::ActivateTab(tab)
                } else {
                    Action::OpenTab(tab)
                }
            }
            KeyCode::Char('w') => self.close_target(),
            KeyCode::Char('b') => Action::ToggleSidebar,
            KeyCode::Char('e') => Action::SelectSection(Section::Explorer),
            KeyCode::Char('/') => Action::FocusSearch,
            KeyCode::Char('g') => Action::SelectSection(Section::Git),
            KeyCode::Char('x') => Action::SelectSection(Section::Extensions),
            KeyCode::Char(',') => Action::SelectSection(Section::Settings),
            KeyCode::Left | KeyCode::Char('h') => Action::FocusSidebar,
            KeyCode::Right | KeyCode::Char('l') => Action::FocusEditor,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Char('o') => Action::FollowSelected,
            KeyCode::Char('r') => Action::FollowLink(Link::Resume),
            KeyCode::Char('m') => Action::FollowLink(Link::Mail),
            KeyCode::Char(c) => Action::FollowLink(Link::Social(Social::from_key(c)?)),
            _ => return None,
        };
        Some(action)
    }

    /// With the explorer focused, `w` closes the document under its cursor.
    fn close_target(&self) -> Action {
        let workbench = &self.workbench;
        if workbench.sidebar_focused() && workbench.sidebar.section() == Section::Explorer {
            if let Some(tab) = Tab::ALL.get(workbench.explorer_cursor) {
                return Action::CloseTab(*tab);
            }
        }
        Action::CloseActiveTab
    }

    /// Dispatch an action and carry out any effect it produces.
    pub fn apply(&mut self, action: Action) {
        if let Some(effect) = self.workbench.dispatch(action) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::OpenUrl { label, url } => match self.opener.open(&url) {
                Ok(()) => self.notices.push(Notice::info(format!("Opened {}", label))),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to open link");
                    self.notices.push(Notice::error(e.to_string()));
                }
            },
            Effect::Notify(notice) => self.notices.push(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::catalog::content;
    use crate::error::{DevfolioError, Result};
    use crate::state::{ColumnsHint, NoticeLevel, ProjectView};

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&mut self, url: &str) -> Result<()> {
            if self.fail {
                return Err(DevfolioError::LinkOpen {
                    url: url.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no opener"),
                });
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn app_with(opener: RecordingOpener) -> App {
        let hint = ColumnsHint {
            columns: 140,
            threshold: 100,
        };
        App::new(content::builtin(), &hint, Box::new(opener))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(RecordingOpener::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = app_with(RecordingOpener::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_search_input_captures_keys() {
        let mut app = app_with(RecordingOpener::default());
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "qr");

        // 'q' went into the query instead of quitting.
        assert!(!app.should_quit);
        assert_eq!(app.workbench.search.query, "qr");
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Projects));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.workbench.search.query, "q");

        press(&mut app, KeyCode::Enter);
        assert!(!app.workbench.search.input_active);
    }

    #[test]
    fn test_number_keys_open_tabs() {
        let mut app = app_with(RecordingOpener::default());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Skills));
        press(&mut app, KeyCode::Char('w'));
        assert!(!app.workbench.tabs.is_open(Tab::Skills));
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Experience));
    }

    #[test]
    fn test_narrow_search_types_full_query() {
        let hint = ColumnsHint {
            columns: 80,
            threshold: 100,
        };
        let mut app = App::new(
            content::builtin(),
            &hint,
            Box::new(RecordingOpener::default()),
        );

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "sql");

        assert!(!app.should_quit);
        assert!(!app.workbench.sidebar.is_visible());
        assert!(app.workbench.search.input_active);
        assert_eq!(app.workbench.search.query, "sql");

        press(&mut app, KeyCode::Esc);
        assert!(!app.workbench.search.input_active);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_explorer_closes_tab_under_cursor() {
        let mut app = app_with(RecordingOpener::default());
        assert!(app.workbench.sidebar_focused());

        // Move the explorer cursor to Services.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('w'));

        assert_eq!(
            app.workbench.tabs.open_tabs(),
            &[Tab::Profile, Tab::Projects, Tab::Experience]
        );
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Profile));
    }

    #[test]
    fn test_alt_digit_activates_open_tab() {
        let mut app = app_with(RecordingOpener::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT));
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Services));

        // Skills is not open, so nothing changes.
        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT));
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Services));
        assert!(!app.workbench.tabs.is_open(Tab::Skills));
    }

    #[test]
    fn test_git_key_opens_experience() {
        let mut app = app_with(RecordingOpener::default());
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.workbench.sidebar.section(), Section::Git);
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Experience));
    }

    #[test]
    fn test_resume_link_is_opened() {
        let opener = RecordingOpener::default();
        let opened = opener.opened.clone();
        let mut app = app_with(opener);

        press(&mut app, KeyCode::Char('r'));

        let expected = content::builtin().personal.resume_url.unwrap();
        assert_eq!(opened.borrow().as_slice(), &[expected]);
        assert_eq!(app.notices.latest().unwrap().message, "Opened resume");
    }

    #[test]
    fn test_failed_open_records_error() {
        let mut app = app_with(RecordingOpener {
            fail: true,
            ..Default::default()
        });

        press(&mut app, KeyCode::Char('m'));

        let notice = app.notices.latest().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(app.notices.error_count(), 1);
    }

    #[test]
    fn test_missing_social_records_notice() {
        let opener = RecordingOpener::default();
        let opened = opener.opened.clone();
        let mut app = app_with(opener);

        press(&mut app, KeyCode::Char('W'));

        assert!(opened.borrow().is_empty());
        assert_eq!(
            app.notices.latest().unwrap().message,
            "No WhatsApp link configured"
        );
    }

    #[test]
    fn test_modal_captures_keys() {
        let mut app = app_with(RecordingOpener::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.workbench.selected_project.is_some());

        // Tab switching is ignored while the modal is open.
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.workbench.tabs.active(), Some(Tab::Projects));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.workbench.project_view, ProjectView::Code);

        press(&mut app, KeyCode::Esc);
        assert!(app.workbench.selected_project.is_none());
    }

    #[test]
    fn test_help_overlay_toggle() {
        let mut app = app_with(RecordingOpener::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
