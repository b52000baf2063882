//! Navigation view state
//!
//! Pure derivations for the sidebar: which item is active for the current
//! route, and how the panel renders when open or closed. Components call these
//! on every render instead of caching the result.

use crate::models::NoteId;

/// Path of the notes list page
pub const NOTES_PATH: &str = "/notes";

/// App root; the router redirects it to [`NOTES_PATH`]
pub const ROOT_PATH: &str = "/";

/// Path of a note's detail page
#[must_use]
pub fn note_path(id: NoteId) -> String {
    format!("{NOTES_PATH}/{id}")
}

/// Check whether a navigation target is the current route.
///
/// A trailing slash is ignored, so `/notes/1/` matches `/notes/1`.
#[must_use]
pub fn is_active_route(current: &str, target: &str) -> bool {
    normalize_path(current) == normalize_path(target)
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

const ITEM_BASE_CLASS: &str = "flex items-center p-2 rounded-lg transition-colors group";
const ITEM_ACTIVE_CLASS: &str = "bg-gray-100 text-gray-900 dark:bg-gray-700 dark:text-white";
const ITEM_INACTIVE_CLASS: &str = "text-gray-900 hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700";

const ICON_BASE_CLASS: &str = "shrink-0 w-5 h-5 transition";
const ICON_ACTIVE_CLASS: &str = "text-gray-900 dark:text-white";
const ICON_INACTIVE_CLASS: &str = "text-gray-500 group-hover:text-gray-900 dark:text-gray-400 dark:group-hover:text-white";

/// Classes for one sidebar item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItemStyle {
    pub is_active: bool,
    pub link_class: String,
    pub icon_class: String,
}

impl SidebarItemStyle {
    /// Derive the active or inactive variant for a target under the current route
    #[must_use]
    pub fn for_route(current: &str, target: &str) -> Self {
        let is_active = is_active_route(current, target);
        let (link, icon) = if is_active {
            (ITEM_ACTIVE_CLASS, ICON_ACTIVE_CLASS)
        } else {
            (ITEM_INACTIVE_CLASS, ICON_INACTIVE_CLASS)
        };

        Self {
            is_active,
            link_class: format!("{ITEM_BASE_CLASS} {link}"),
            icon_class: format!("{ICON_BASE_CLASS} {icon}"),
        }
    }
}

/// Request from the sidebar asking its owner to close it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseRequest;

const PANEL_BASE_CLASS: &str = "fixed top-0 left-0 z-40 w-64 h-screen pt-20 transition-transform bg-white border-r border-gray-200 sm:translate-x-0 dark:bg-gray-800 dark:border-gray-700";

/// Classes for the full-viewport backdrop shown behind an open sidebar
pub const BACKDROP_CLASS: &str = "fixed inset-0 z-30 bg-gray-900/50 sm:hidden";

/// Render state of the sidebar panel.
///
/// The open flag belongs to the parent; the panel only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarPanelView {
    pub aside_class: String,
    /// The backdrop is left out of the tree entirely when closed
    pub show_backdrop: bool,
}

impl SidebarPanelView {
    #[must_use]
    pub fn new(is_open: bool) -> Self {
        let transform = if is_open {
            "translate-x-0"
        } else {
            "-translate-x-full"
        };
        Self {
            aside_class: format!("{PANEL_BASE_CLASS} {transform}"),
            show_backdrop: is_open,
        }
    }
}

/// Handle a click on the backdrop. Only an open panel asks to be closed.
#[must_use]
pub const fn backdrop_click(is_open: bool) -> Option<CloseRequest> {
    if is_open {
        Some(CloseRequest)
    } else {
        None
    }
}

/// User action on the sidebar's open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    /// Menu button in the top bar
    Toggle,
    /// Backdrop click or navigation
    Close,
}

/// Open flag after one action
#[must_use]
pub const fn next_sidebar_open(is_open: bool, action: SidebarAction) -> bool {
    match action {
        SidebarAction::Toggle => !is_open,
        SidebarAction::Close => false,
    }
}
