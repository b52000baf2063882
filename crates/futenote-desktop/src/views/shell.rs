//! Shell layout - top navigation, sidebar and the routed page

use dioxus::prelude::*;

use crate::components::{Sidebar, TopNavigation};
use crate::router::Route;
use crate::state::AppState;

/// Layout wrapping every note page
#[component]
pub fn Shell() -> Element {
    let mut state = use_context::<AppState>();
    let is_open = (state.sidebar_open)();

    rsx! {
        TopNavigation {
            on_toggle_sidebar: move |()| state.toggle_sidebar(),
        }

        Sidebar {
            is_open,
            on_close: move |()| state.close_sidebar(),
        }

        div {
            class: "p-4 sm:ml-64 mt-14",
            Outlet::<Route> {}
        }
    }
}
