// Open-tab registry.
// Tracks which documents are open, in display order, and which one is active.

use serde::{Deserialize, Serialize};

/// A content document that can be opened as a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Profile,
    Projects,
    Services,
    Experience,
    Skills,
}

impl Tab {
    /// Every document, in explorer order.
    pub const ALL: [Tab; 5] = [
        Tab::Profile,
        Tab::Projects,
        Tab::Services,
        Tab::Experience,
        Tab::Skills,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Projects => "Projects",
            Tab::Services => "Services",
            Tab::Experience => "Experience",
            Tab::Skills => "Skills",
        }
    }

    /// File extension shown after the title.
    pub fn extension(&self) -> &'static str {
        match self {
            Tab::Profile => ".md",
            Tab::Projects | Tab::Services => ".cs",
            Tab::Experience => ".git",
            Tab::Skills => ".json",
        }
    }

    /// Title with extension, e.g. `Skills.json`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.title(), self.extension())
    }
}

/// Ordered set of open tabs plus the active one.
///
/// The active tab is always `None` or a member of the open list, and the
/// open list never holds the same tab twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabManager {
    open: Vec<Tab>,
    active: Option<Tab>,
}

impl TabManager {
    /// Create a manager with the given tabs open and the first one active.
    pub fn new(initial: &[Tab]) -> Self {
        let mut manager = Self {
            open: Vec::with_capacity(Tab::ALL.len()),
            active: None,
        };
        for tab in initial {
            if !manager.open.contains(tab) {
                manager.open.push(*tab);
            }
        }
        manager.active = manager.open.first().copied();
        manager
    }

    pub fn open_tabs(&self) -> &[Tab] {
        &self.open
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    pub fn is_open(&self, tab: Tab) -> bool {
        self.open.contains(&tab)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open a tab (appending it if needed) and make it active.
    pub fn open(&mut self, tab: Tab) {
        if !self.open.contains(&tab) {
            self.open.push(tab);
        }
        self.active = Some(tab);
    }

    /// Close a tab. If it was active, the last remaining tab becomes active.
    pub fn close(&mut self, tab: Tab) {
        self.open.retain(|t| *t != tab);
        if self.active == Some(tab) {
            self.active = self.open.last().copied();
        }
    }

    /// Make an open tab active. Does nothing if the tab is not open.
    pub fn activate(&mut self, tab: Tab) -> bool {
        if self.open.contains(&tab) {
            self.active = Some(tab);
            true
        } else {
            false
        }
    }

    /// Activate the next open tab, wrapping around.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Activate the previous open tab, wrapping around.
    pub fn prev(&mut self) {
        self.step(self.open.len().saturating_sub(1));
    }

    fn step(&mut self, offset: usize) {
        if self.open.is_empty() {
            return;
        }
        let current = self
            .active
            .and_then(|tab| self.open.iter().position(|t| *t == tab))
            .unwrap_or(0);
        let index = (current + offset) % self.open.len();
        self.active = Some(self.open[index]);
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(&[Tab::Profile, Tab::Projects, Tab::Services, Tab::Experience])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(tabs: &TabManager) {
        let mut seen = Vec::new();
        for tab in tabs.open_tabs() {
            assert!(!seen.contains(tab), "duplicate tab {:?}", tab);
            seen.push(*tab);
        }
        if let Some(active) = tabs.active() {
            assert!(tabs.is_open(active));
        }
    }

    #[test]
    fn test_default_tabs() {
        let tabs = TabManager::default();
        assert_eq!(
            tabs.open_tabs(),
            &[Tab::Profile, Tab::Projects, Tab::Services, Tab::Experience]
        );
        assert_eq!(tabs.active(), Some(Tab::Profile));
    }

    #[test]
    fn test_open_appends_once_and_activates() {
        let mut tabs = TabManager::new(&[]);
        tabs.open(Tab::Skills);
        tabs.open(Tab::Profile);
        tabs.open(Tab::Skills);

        assert_eq!(tabs.open_tabs(), &[Tab::Skills, Tab::Profile]);
        assert_eq!(tabs.active(), Some(Tab::Skills));
    }

    #[test]
    fn test_close_only_tab_clears_active() {
        let mut tabs = TabManager::new(&[]);
        tabs.open(Tab::Profile);
        tabs.close(Tab::Profile);

        assert!(tabs.is_empty());
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn test_close_active_picks_last_remaining() {
        let mut tabs = TabManager::new(&[]);
        tabs.open(Tab::Profile);
        tabs.open(Tab::Projects);
        tabs.open(Tab::Services);
        tabs.open(Tab::Experience);
        tabs.activate(Tab::Projects);

        tabs.close(Tab::Projects);

        // Last entry, not the neighbour of the closed tab.
        assert_eq!(tabs.active(), Some(Tab::Experience));
        assert_eq!(
            tabs.open_tabs(),
            &[Tab::Profile, Tab::Services, Tab::Experience]
        );
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut tabs = TabManager::default();
        tabs.close(Tab::Services);
        assert_eq!(tabs.active(), Some(Tab::Profile));
    }

    #[test]
    fn test_open_open_close_scenario() {
        let mut tabs = TabManager::new(&[]);
        tabs.open(Tab::Profile);
        tabs.open(Tab::Projects);
        tabs.activate(Tab::Profile);

        tabs.close(Tab::Profile);

        assert_eq!(tabs.open_tabs(), &[Tab::Projects]);
        assert_eq!(tabs.active(), Some(Tab::Projects));
    }

    #[test]
    fn test_activate_unopened_is_noop() {
        let mut tabs = TabManager::default();
        assert!(!tabs.activate(Tab::Skills));
        assert_eq!(tabs.active(), Some(Tab::Profile));
        assert!(!tabs.is_open(Tab::Skills));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut tabs = TabManager::new(&[Tab::Profile, Tab::Projects, Tab::Skills]);
        tabs.prev();
        assert_eq!(tabs.active(), Some(Tab::Skills));
        tabs.next();
        assert_eq!(tabs.active(), Some(Tab::Profile));
        tabs.next();
        assert_eq!(tabs.active(), Some(Tab::Projects));

        let mut empty = TabManager::new(&[]);
        empty.next();
        assert_eq!(empty.active(), None);
    }

    #[test]
    fn test_mixed_sequence_stays_consistent() {
        let mut tabs = TabManager::default();
        let script = [
            (true, Tab::Skills),
            (false, Tab::Profile),
            (true, Tab::Profile),
            (true, Tab::Skills),
            (false, Tab::Skills),
            (false, Tab::Experience),
            (true, Tab::Services),
            (false, Tab::Projects),
            (false, Tab::Services),
            (false, Tab::Profile),
            (true, Tab::Experience),
        ];

        for (open, tab) in script {
            if open {
                tabs.open(tab);
            } else {
                tabs.close(tab);
            }
            assert_consistent(&tabs);
        }
        assert_eq!(tabs.open_tabs(), &[Tab::Experience]);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Tab::Profile.file_name(), "Profile.md");
        assert_eq!(Tab::Services.file_name(), "Services.cs");
        assert_eq!(Tab::Experience.file_name(), "Experience.git");
        assert_eq!(Tab::Skills.file_name(), "Skills.json");
    }
}
