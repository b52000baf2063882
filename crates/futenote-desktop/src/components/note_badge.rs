//! Note badge pill

use dioxus::prelude::*;

use futenote_core::badge::render_badge;
use futenote_core::{BadgeType, BadgeValue};

/// Badge next to a note title; renders nothing when there is no badge
#[component]
pub fn NoteBadge(badge: Option<BadgeValue>, badge_type: Option<BadgeType>) -> Element {
    let rendered = render_badge(badge.as_ref(), badge_type.as_ref());
    if !rendered.visible {
        return rsx! {};
    }

    let class = rendered.class();

    rsx! {
        span {
            class: "{class}",
            "{rendered.text}"
        }
    }
}
