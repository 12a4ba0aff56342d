// State management module.
// Tabs, sidebar, search, skill tree, and timeline state owned by the workbench.

pub mod categories;
pub mod notices;
pub mod search;
pub mod sidebar;
pub mod tabs;
pub mod timeline;
pub mod workbench;

pub use notices::{Notice, NoticeLevel, NoticeLog};
pub use sidebar::{ColumnsHint, LayoutHint, Section};
pub use tabs::Tab;
pub use workbench::{Action, Effect, Focus, ProjectView, Workbench};
