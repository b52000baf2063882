//! User avatar with a small identity dropdown

use dioxus::prelude::*;

use futenote_core::config::initials;

#[component]
pub fn TopUserMenu(name: String, email: String) -> Element {
    let mut open = use_signal(|| false);
    let avatar = initials(&name);
    let is_open = open();

    rsx! {
        div {
            class: "relative flex items-center ms-3",
            button {
                r#type: "button",
                class: "flex items-center justify-center w-8 h-8 text-sm font-medium text-white bg-gray-800 rounded-full focus:ring-4 focus:ring-gray-300 dark:focus:ring-gray-600",
                "aria-expanded": "{is_open}",
                onclick: move |_| open.set(!is_open),
                span { class: "sr-only", "Open user menu" }
                "{avatar}"
            }
            if is_open {
                div {
                    class: "absolute right-0 top-10 z-50 my-4 text-base list-none bg-white divide-y divide-gray-100 rounded-sm shadow-sm dark:bg-gray-700 dark:divide-gray-600",
                    div {
                        class: "px-4 py-3",
                        p {
                            class: "text-sm text-gray-900 dark:text-white",
                            "{name}"
                        }
                        p {
                            class: "text-sm font-medium text-gray-900 truncate dark:text-gray-300",
                            "{email}"
                        }
                    }
                }
            }
        }
    }
}
