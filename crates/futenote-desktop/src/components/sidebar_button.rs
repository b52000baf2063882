//! Sidebar navigation item

use dioxus::prelude::*;

use futenote_core::nav::SidebarItemStyle;
use futenote_core::{BadgeType, BadgeValue};

use super::icons::NoteIcon;
use super::NoteBadge;
use crate::router::Route;

/// Link to a note, highlighted while its route is the current one.
///
/// Reading the current route subscribes this item to navigation, so the
/// highlight follows route changes without remounting.
#[component]
pub fn SidebarButton(
    to: Route,
    label: String,
    badge: Option<BadgeValue>,
    badge_type: Option<BadgeType>,
) -> Element {
    let current = use_route::<Route>();
    let style = SidebarItemStyle::for_route(&current.to_string(), &to.to_string());

    rsx! {
        li {
            Link {
                to,
                class: "{style.link_class}",
                NoteIcon { class: style.icon_class.clone() }
                span {
                    class: "flex-1 ms-3 whitespace-nowrap",
                    "{label}"
                }
                NoteBadge { badge, badge_type }
            }
        }
    }
}
