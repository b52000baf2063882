//! Inline SVG icons

use dioxus::prelude::*;

#[component]
pub fn MenuIcon(class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "aria-hidden": "true",
            "xmlns": "http://www.w3.org/2000/svg",
            "fill": "none",
            "viewBox": "0 0 24 24",
            "stroke": "currentColor",
            "stroke-width": "2",
            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}

#[component]
pub fn NoteIcon(class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "aria-hidden": "true",
            "xmlns": "http://www.w3.org/2000/svg",
            "fill": "none",
            "viewBox": "0 0 24 24",
            "stroke": "currentColor",
            "stroke-width": "2",
            path {
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                d: "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6 M16 13H8 M16 17H8 M10 9H8",
            }
        }
    }
}

/// Brand mark shown next to the app name
#[component]
pub fn LogoIcon() -> Element {
    rsx! {
        svg {
            class: "h-8 me-3 text-blue-600",
            "aria-hidden": "true",
            "xmlns": "http://www.w3.org/2000/svg",
            "fill": "currentColor",
            "viewBox": "0 0 24 24",
            path { d: "M5 3h10l4 4v14H5z M14 3v5h5" }
        }
    }
}
