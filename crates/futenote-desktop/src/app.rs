//! Main application component

use dioxus::prelude::*;

use crate::config::app_config;
use crate::router::Route;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    use_context_provider(|| AppState::new(app_config().clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        div {
            class: "app-container min-h-screen bg-gray-50 dark:bg-gray-900",
            Router::<Route> {}
        }
    }
}
