//! Note detail page

use dioxus::prelude::*;

use futenote_core::models::NoteDraft;
use futenote_core::resolve::not_found_message;
use futenote_core::{Note, NoteId, NoteResolution};

use crate::components::NoteBadge;
use crate::router::Route;
use crate::state::AppState;

/// Detail page for `/notes/:id`.
///
/// Re-resolves on every render, so both a route change and a store mutation
/// show the right state without a remount.
#[component]
pub fn NotePage(id: String) -> Element {
    let state = use_context::<AppState>();

    match state.resolve(&id) {
        NoteResolution::Found(note) => rsx! {
            NoteDetail { note }
        },
        NoteResolution::NotFound(raw_id) => {
            tracing::debug!("No note matches route id {:?}", raw_id);
            rsx! {
                NoteMissing { raw_id }
            }
        }
    }
}

#[component]
fn NoteDetail(note: Note) -> Element {
    let mut state = use_context::<AppState>();
    let mut editing = use_signal(|| None::<NoteId>);
    let mut draft = use_signal(NoteDraft::default);

    let note_id = note.id;
    let is_editing = editing() == Some(note_id);
    let current_draft = draft.read().clone();

    let start_edit = {
        let note = note.clone();
        move |_| {
            draft.set(NoteDraft::from_note(&note));
            editing.set(Some(note_id));
        }
    };

    let save_edit = {
        let note = note.clone();
        move |_| {
            let patch = draft.read().patch_for(&note);
            if !patch.is_empty() {
                state.update_note(note_id, patch);
                tracing::info!("Updated note {}", note_id);
            }
            editing.set(None);
        }
    };

    rsx! {
        div {
            class: "max-w-4xl mx-auto p-6",

            header {
                class: "flex items-center justify-between pb-4 mb-6 border-b border-gray-200 dark:border-gray-700",
                h1 {
                    class: "text-3xl font-bold text-gray-900 dark:text-white",
                    "{note.title}"
                }
                NoteBadge { badge: note.badge.clone(), badge_type: note.badge_type.clone() }
            }

            main {
                class: "prose dark:prose-invert max-w-none",
                if is_editing {
                    div {
                        class: "flex flex-col gap-3",
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{current_draft.title}",
                            oninput: move |evt| draft.write().title = evt.value(),
                        }
                        textarea {
                            class: "form-input",
                            rows: "8",
                            value: "{current_draft.content}",
                            oninput: move |evt| draft.write().content = evt.value(),
                        }
                    }
                } else {
                    div {
                        class: "whitespace-pre-line text-gray-700 dark:text-gray-300",
                        "{note.content}"
                    }
                }
            }

            footer {
                class: "flex items-center justify-between pt-4 mt-8 border-t border-gray-200 dark:border-gray-700",
                span {
                    class: "text-sm text-gray-500 dark:text-gray-400",
                    "Note ID: {note_id}"
                }
                div {
                    class: "flex items-center gap-4",
                    Link {
                        to: Route::NotesList {},
                        class: "text-sm text-blue-600 hover:underline dark:text-blue-500",
                        "Back to Notes"
                    }
                    if is_editing {
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| editing.set(None),
                            "Cancel"
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: save_edit,
                            "Save"
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: start_edit,
                            "Edit Note"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteMissing(raw_id: String) -> Element {
    let message = not_found_message(&raw_id);

    rsx! {
        div {
            class: "max-w-4xl mx-auto p-6 text-center",
            h1 {
                class: "text-3xl font-bold text-gray-900 dark:text-white mb-4",
                "Note Not Found"
            }
            p {
                class: "text-gray-600 dark:text-gray-400 mb-6",
                "{message}"
            }
            Link {
                to: Route::NotesList {},
                class: "btn btn-primary",
                "Back to Notes"
            }
        }
    }
}
