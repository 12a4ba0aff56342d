// Activity bar section and sidebar visibility.
// Also hosts the startup layout hint that decides the initial sidebar state.

use serde::{Deserialize, Serialize};

use super::tabs::Tab;

/// Left-rail navigation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Explorer,
    Search,
    Git,
    Extensions,
    Settings,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Explorer => "Explorer",
            Section::Search => "Search",
            Section::Git => "Source Control",
            Section::Extensions => "Extensions",
            Section::Settings => "Settings",
        }
    }

    /// The document this section opens instead of showing a panel, if any.
    pub fn linked_tab(&self) -> Option<Tab> {
        match self {
            Section::Git => Some(Tab::Experience),
            Section::Extensions => Some(Tab::Skills),
            _ => None,
        }
    }
}

/// Answers, once at startup, whether the display is too narrow to keep the
/// sidebar beside the editor.
pub trait LayoutHint {
    fn is_narrow(&self) -> bool;
}

/// Layout hint backed by the terminal width in columns.
#[derive(Debug, Clone, Copy)]
pub struct ColumnsHint {
    pub columns: u16,
    pub threshold: u16,
}

impl LayoutHint for ColumnsHint {
    fn is_narrow(&self) -> bool {
        self.columns < self.threshold
    }
}

/// Active section plus sidebar visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    section: Section,
    visible: bool,
}

impl SidebarState {
    pub fn new(hint: &dyn LayoutHint) -> Self {
        Self {
            section: Section::default(),
            visible: !hint.is_narrow(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Select a section. Panel sections reveal the sidebar; sections linked to
    /// a document return that document for the caller to open.
    pub fn select(&mut self, section: Section) -> Option<Tab> {
        self.section = section;
        match section.linked_tab() {
            Some(tab) => Some(tab),
            None => {
                self.visible = true;
                None
            }
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool);

    impl LayoutHint for Fixed {
        fn is_narrow(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_initial_visibility_follows_hint() {
        assert!(SidebarState::new(&Fixed(false)).is_visible());
        assert!(!SidebarState::new(&Fixed(true)).is_visible());
        assert_eq!(SidebarState::new(&Fixed(true)).section(), Section::Explorer);
    }

    #[test]
    fn test_columns_hint() {
        let narrow = ColumnsHint {
            columns: 80,
            threshold: 100,
        };
        let wide = ColumnsHint {
            columns: 100,
            threshold: 100,
        };
        assert!(narrow.is_narrow());
        assert!(!wide.is_narrow());
    }

    #[test]
    fn test_select_panel_section_shows_sidebar() {
        let mut sidebar = SidebarState::new(&Fixed(true));
        assert_eq!(sidebar.select(Section::Search), None);
        assert_eq!(sidebar.section(), Section::Search);
        assert!(sidebar.is_visible());
    }

    #[test]
    fn test_select_linked_section_returns_tab() {
        let mut sidebar = SidebarState::new(&Fixed(true));
        assert_eq!(sidebar.select(Section::Git), Some(Tab::Experience));
        assert_eq!(sidebar.section(), Section::Git);
        assert!(!sidebar.is_visible());

        assert_eq!(sidebar.select(Section::Extensions), Some(Tab::Skills));
        assert_eq!(sidebar.section(), Section::Extensions);
    }

    #[test]
    fn test_toggle_and_close_keep_section() {
        let mut sidebar = SidebarState::new(&Fixed(false));
        sidebar.select(Section::Search);
        sidebar.toggle();
        assert!(!sidebar.is_visible());
        sidebar.toggle();
        assert!(sidebar.is_visible());
        sidebar.close();
        assert!(!sidebar.is_visible());
        assert_eq!(sidebar.section(), Section::Search);
    }
}
