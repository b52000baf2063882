//! Top navigation bar

use dioxus::prelude::*;

use futenote_core::nav::ROOT_PATH;

use super::icons::{LogoIcon, MenuIcon};
use super::TopUserMenu;
use crate::state::AppState;

/// Fixed top bar with the sidebar toggle, brand link and user menu
#[component]
pub fn TopNavigation(on_toggle_sidebar: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let config = state.config.read().clone();

    rsx! {
        nav {
            class: "fixed top-0 z-50 w-full bg-white border-b border-gray-200 dark:bg-gray-800 dark:border-gray-700",
            div {
                class: "px-3 py-3 lg:px-5 lg:pl-3",
                div {
                    class: "flex items-center justify-between",
                    div {
                        class: "flex items-center justify-start rtl:justify-end",
                        button {
                            r#type: "button",
                            class: "inline-flex items-center p-2 text-sm text-gray-500 rounded-lg sm:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600",
                            "aria-controls": "logo-sidebar",
                            onclick: move |_| on_toggle_sidebar.call(()),
                            span { class: "sr-only", "Open sidebar" }
                            MenuIcon { class: "w-6 h-6" }
                        }
                        Link {
                            to: ROOT_PATH,
                            class: "flex ms-2 md:me-24",
                            LogoIcon {}
                            span {
                                class: "self-center text-xl font-semibold sm:text-2xl whitespace-nowrap dark:text-white",
                                "{config.brand}"
                            }
                        }
                    }
                    div {
                        class: "flex items-center",
                        TopUserMenu { name: config.user.name.clone(), email: config.user.email.clone() }
                    }
                }
            }
        }
    }
}
