//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("Unknown route {}", path);

    rsx! {
        div {
            class: "max-w-4xl mx-auto p-6 text-center",
            h1 {
                class: "text-3xl font-bold text-gray-900 dark:text-white mb-4",
                "Page Not Found"
            }
            p {
                class: "text-gray-600 dark:text-gray-400 mb-6",
                "Nothing lives at {path}."
            }
            Link {
                to: Route::NotesList {},
                class: "btn btn-primary",
                "Back to Notes"
            }
        }
    }
}
