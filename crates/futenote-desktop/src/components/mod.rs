//! UI Components
//!
//! Reusable UI components for the desktop application.

mod icons;
mod note_badge;
mod sidebar;
mod sidebar_button;
mod top_navigation;
mod top_user_menu;

pub use note_badge::NoteBadge;
pub use sidebar::Sidebar;
pub use sidebar_button::SidebarButton;
pub use top_navigation::TopNavigation;
pub use top_user_menu::TopUserMenu;
