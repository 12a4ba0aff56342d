// Workbench state.
// Single owner of all UI state; every change goes through `dispatch`.

use ratatui::widgets::ListState;

use crate::catalog::{Catalog, Project};
use crate::links::Link;

use super::categories::ExpandedCategories;
use super::notices::Notice;
use super::search::{SearchState, filter_projects};
use super::sidebar::{LayoutHint, Section, SidebarState};
use super::tabs::{Tab, TabManager};
use super::timeline::{TimelineEntry, merged_timeline};

/// Which half of the window receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Editor,
}

/// How the project detail overlay presents the open project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectView {
    #[default]
    Details,
    Code,
}

impl ProjectView {
    pub fn toggled(self) -> Self {
        match self {
            ProjectView::Details => ProjectView::Code,
            ProjectView::Code => ProjectView::Details,
        }
    }
}

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenTab(Tab),
    CloseTab(Tab),
    CloseActiveTab,
    ActivateTab(Tab),
    NextTab,
    PrevTab,
    SelectSection(Section),
    ToggleSidebar,
    CloseSidebar,
    PushSearchChar(char),
    PopSearchChar,
    FocusSearch,
    BlurSearch,
    FocusSidebar,
    FocusEditor,
    MoveUp,
    MoveDown,
    Confirm,
    CloseProject,
    ToggleProjectView,
    FollowLink(Link),
    FollowSelected,
}

/// Something the workbench asks the outside world to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl { label: String, url: String },
    Notify(Notice),
}

/// Complete UI state for one session.
#[derive(Debug)]
pub struct Workbench {
    catalog: Catalog,
    narrow: bool,
    pub tabs: TabManager,
    pub sidebar: SidebarState,
    pub search: SearchState,
    pub expanded: ExpandedCategories,
    pub selected_project: Option<Project>,
    pub project_view: ProjectView,
    pub focus: Focus,
    /// Row highlighted in the explorer (index into `Tab::ALL`).
    pub explorer_cursor: usize,
    pub project_list: ListState,
    pub timeline_list: ListState,
    /// Highlighted category in the skills tree.
    pub skill_cursor: usize,
    /// Vertical scroll for the Profile and Services panes.
    pub scroll: u16,
}

impl Workbench {
    pub fn new(catalog: Catalog, hint: &dyn LayoutHint) -> Self {
        let narrow = hint.is_narrow();
        let sidebar = SidebarState::new(hint);
        let focus = if sidebar.is_visible() {
            Focus::Sidebar
        } else {
            Focus::Editor
        };
        let mut workbench = Self {
            expanded: ExpandedCategories::all(&catalog.skills),
            catalog,
            narrow,
            tabs: TabManager::default(),
            sidebar,
            search: SearchState::default(),
            selected_project: None,
            project_view: ProjectView::Details,
            focus,
            explorer_cursor: 0,
            project_list: ListState::default(),
            timeline_list: ListState::default(),
            skill_cursor: 0,
            scroll: 0,
        };
        workbench.reset_project_selection();
        if !workbench.timeline().is_empty() {
            workbench.timeline_list.select(Some(0));
        }
        workbench
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Projects matching the current search query, in catalog order.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        filter_projects(&self.catalog.projects, &self.search.query)
    }

    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        merged_timeline(&self.catalog)
    }

    /// Whether cursor keys currently drive the sidebar.
    pub fn sidebar_focused(&self) -> bool {
        self.focus == Focus::Sidebar && self.sidebar.is_visible()
    }

    /// Apply an action. Returns an outward effect, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::OpenTab(tab) => self.open_tab(tab),
            Action::CloseTab(tab) => self.close_tab(tab),
            Action::CloseActiveTab => {
                if let Some(tab) = self.tabs.active() {
                    self.close_tab(tab);
                }
            }
            Action::ActivateTab(tab) => {
                if self.tabs.activate(tab) {
                    self.on_active_changed();
                }
            }
            Action::NextTab => {
                self.tabs.next();
                self.on_active_changed();
            }
            Action::PrevTab => {
                self.tabs.prev();
                self.on_active_changed();
            }
            Action::SelectSection(section) => self.select_section(section),
            Action::ToggleSidebar => {
                self.sidebar.toggle();
                self.sync_focus();
            }
            Action::CloseSidebar => {
                self.sidebar.close();
                self.sync_focus();
            }
            Action::PushSearchChar(c) => {
                self.search.push(c);
                self.on_query_changed();
            }
            Action::PopSearchChar => {
                if self.search.pop() {
                    self.on_query_changed();
                }
            }
            Action::FocusSearch => {
                self.select_section(Section::Search);
                self.search.input_active = true;
            }
            Action::BlurSearch => self.search.input_active = false,
            Action::FocusSidebar => {
                if self.sidebar.is_visible() {
                    self.focus = Focus::Sidebar;
                }
            }
            Action::FocusEditor => self.focus = Focus::Editor,
            Action::MoveUp => self.move_cursor(false),
            Action::MoveDown => self.move_cursor(true),
            Action::Confirm => return self.confirm(),
            Action::CloseProject => self.selected_project = None,
            Action::ToggleProjectView => {
                if self.selected_project.is_some() {
                    self.project_view = self.project_view.toggled();
                }
            }
            Action::FollowLink(link) => return self.follow(link),
            Action::FollowSelected => {
                if let Some(link) = self.selected_link() {
                    return self.follow(link);
                }
            }
        }
        None
    }

    fn open_tab(&mut self, tab: Tab) {
        tracing::debug!(tab = tab.title(), "open tab");
        self.tabs.open(tab);
        if self.narrow {
            self.sidebar.close();
            self.sync_focus();
        }
        self.on_active_changed();
    }

    fn close_tab(&mut self, tab: Tab) {
        tracing::debug!(tab = tab.title(), "close tab");
        self.tabs.close(tab);
        self.on_active_changed();
    }

    fn select_section(&mut self, section: Section) {
        tracing::debug!(section = section.title(), "select section");
        if let Some(tab) = self.sidebar.select(section) {
            self.open_tab(tab);
        } else {
            self.focus = Focus::Sidebar;
        }
        if section != Section::Search {
            self.search.input_active = false;
        }
    }

    /// Typing keeps input mode even when the narrow layout hides the sidebar.
    fn on_query_changed(&mut self) {
        let typing = self.search.input_active;
        self.open_tab(Tab::Projects);
        self.search.input_active = typing;
        self.reset_project_selection();
    }

    fn on_active_changed(&mut self) {
        self.scroll = 0;
        if let Some(active) = self.tabs.active() {
            if let Some(index) = Tab::ALL.iter().position(|t| *t == active) {
                self.explorer_cursor = index;
            }
        }
    }

    fn sync_focus(&mut self) {
        if !self.sidebar.is_visible() {
            self.focus = Focus::Editor;
            self.search.input_active = false;
        }
    }

    fn reset_project_selection(&mut self) {
        let has_results = !self.filtered_projects().is_empty();
        self.project_list.select(has_results.then_some(0));
    }

    fn move_cursor(&mut self, down: bool) {
        if self.selected_project.is_some() {
            return;
        }

        if self.sidebar_focused() {
            if self.sidebar.section() == Section::Explorer {
                self.explorer_cursor = step(self.explorer_cursor, Tab::ALL.len(), down);
            }
            return;
        }

        match self.tabs.active() {
            Some(Tab::Projects) => {
                let len = self.filtered_projects().len();
                if len > 0 {
                    let current = self.project_list.selected().unwrap_or(0);
                    self.project_list.select(Some(step(current, len, down)));
                }
            }
            Some(Tab::Experience) => {
                let len = self.timeline().len();
                if len > 0 {
                    let current = self.timeline_list.selected().unwrap_or(0);
                    self.timeline_list.select(Some(step(current, len, down)));
                }
            }
            Some(Tab::Skills) => {
                self.skill_cursor = step(self.skill_cursor, self.catalog.skills.len(), down);
            }
            Some(Tab::Profile) | Some(Tab::Services) => {
                self.scroll = if down {
                    self.scroll.saturating_add(1)
                } else {
                    self.scroll.saturating_sub(1)
                };
            }
            None => {}
        }
    }

    fn confirm(&mut self) -> Option<Effect> {
        if self.selected_project.is_some() {
            let link = self.selected_link()?;
            return self.follow(link);
        }

        if self.sidebar_focused() {
            match self.sidebar.section() {
                Section::Explorer => {
                    if let Some(tab) = Tab::ALL.get(self.explorer_cursor) {
                        self.open_tab(*tab);
                    }
                }
                Section::Search => self.search.input_active = false,
                _ => {}
            }
            return None;
        }

        match self.tabs.active() {
            Some(Tab::Projects) => {
                let project = self
                    .project_list
                    .selected()
                    .and_then(|i| self.filtered_projects().get(i).map(|p| (*p).clone()));
                if let Some(project) = project {
                    tracing::debug!(project = %project.title, "show project details");
                    self.selected_project = Some(project);
                    self.project_view = ProjectView::Details;
                }
                None
            }
            Some(Tab::Skills) => {
                if let Some(category) = self.catalog.skills.get(self.skill_cursor) {
                    let name = category.name.clone();
                    self.expanded.toggle(&name);
                }
                None
            }
            Some(Tab::Experience) => {
                let link = self.selected_link()?;
                self.follow(link)
            }
            _ => None,
        }
    }

    /// Link of the item under the cursor: the open project, the highlighted
    /// project, or the highlighted timeline entry.
    pub fn selected_link(&self) -> Option<Link> {
        if let Some(project) = &self.selected_project {
            return project.link.clone().map(Link::External);
        }
        match self.tabs.active() {
            Some(Tab::Projects) => {
                let index = self.project_list.selected()?;
                let projects = self.filtered_projects();
                projects.get(index)?.link.clone().map(Link::External)
            }
            Some(Tab::Experience) => {
                let index = self.timeline_list.selected()?;
                let timeline = self.timeline();
                timeline.get(index)?.record.link.clone().map(Link::External)
            }
            _ => None,
        }
    }

    fn follow(&self, link: Link) -> Option<Effect> {
        match link.url(&self.catalog.personal) {
            Some(url) => {
                tracing::info!(link = %link.label(), %url, "follow link");
                Some(Effect::OpenUrl {
                    label: link.label(),
                    url,
                })
            }
            None => {
                tracing::debug!(link = %link.label(), "link has no target");
                Some(Effect::Notify(Notice::info(format!(
                    "No {} link configured",
                    link.label()
                ))))
            }
        }
    }
}

/// Move an index one step within `0..len`, clamping at the ends.
fn step(current: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}
