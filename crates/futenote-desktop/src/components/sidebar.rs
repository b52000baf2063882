//! Sidebar component with the note list

use dioxus::prelude::*;

use futenote_core::nav::{backdrop_click, SidebarPanelView, BACKDROP_CLASS};

use super::SidebarButton;
use crate::router::Route;
use crate::state::AppState;

/// Sidebar listing every note in the store.
///
/// `is_open` is owned by the parent. Clicking the backdrop only asks the
/// parent to close through `on_close`.
#[component]
pub fn Sidebar(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let notes = state.notes();
    let view = SidebarPanelView::new(is_open);

    rsx! {
        if view.show_backdrop {
            div {
                class: BACKDROP_CLASS,
                onclick: move |_| forward_backdrop_click(is_open, || on_close.call(())),
            }
        }

        aside {
            id: "logo-sidebar",
            class: "{view.aside_class}",
            "aria-label": "Sidebar",
            div {
                class: "h-full px-3 pb-4 overflow-y-auto bg-white dark:bg-gray-800",
                ul {
                    class: "space-y-2 font-medium",
                    for note in notes {
                        SidebarButton {
                            key: "{note.id}",
                            to: Route::note(note.id),
                            label: note.title,
                            badge: note.badge,
                            badge_type: note.badge_type,
                        }
                    }
                }
            }
        }
    }
}

/// Pass one backdrop click on to the parent as at most one close call
fn forward_backdrop_click(is_open: bool, close: impl FnOnce()) {
    if let Some(request) = backdrop_click(is_open) {
        tracing::debug!("Sidebar backdrop clicked: {:?}", request);
        close();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_backdrop_click_closes_once() {
        let calls = Cell::new(0);
        forward_backdrop_click(true, || calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn closed_backdrop_click_is_ignored() {
        let calls = Cell::new(0);
        forward_backdrop_click(false, || calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn each_click_forwards_separately() {
        let calls = Cell::new(0);
        for _ in 0..3 {
            forward_backdrop_click(true, || calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 3);
    }
}
