//! Notes list page - overview with create and remove actions

use dioxus::prelude::*;

use futenote_core::models::NoteDraft;
use futenote_core::util::content_preview;

use crate::components::NoteBadge;
use crate::router::Route;
use crate::state::AppState;

const PREVIEW_LEN: usize = 80;

/// Landing page for `/notes`
#[component]
pub fn NotesList() -> Element {
    let mut state = use_context::<AppState>();
    let mut draft = use_signal(NoteDraft::default);
    let notes = state.notes();
    let current_draft = draft.read().clone();

    let create_note = move |_| {
        let new_draft = draft.read().clone();
        if new_draft.is_blank() {
            return;
        }
        state.add_note(new_draft.into_input());
        draft.set(NoteDraft::default());
    };

    rsx! {
        div {
            class: "max-w-4xl mx-auto p-6",

            h1 {
                class: "text-3xl font-bold text-gray-900 dark:text-white mb-6",
                "Notes"
            }

            div {
                class: "flex flex-col gap-3 p-4 mb-8 bg-white border border-gray-200 rounded-lg dark:bg-gray-800 dark:border-gray-700",
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Title",
                    value: "{current_draft.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
                textarea {
                    class: "form-input",
                    rows: "3",
                    placeholder: "Write something...",
                    value: "{current_draft.content}",
                    oninput: move |evt| draft.write().content = evt.value(),
                }
                div {
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: current_draft.is_blank(),
                        onclick: create_note,
                        "+ New Note"
                    }
                }
            }

            if notes.is_empty() {
                p {
                    class: "text-center text-gray-500 dark:text-gray-400",
                    "No notes yet"
                }
            } else {
                ul {
                    class: "divide-y divide-gray-200 dark:divide-gray-700",
                    for note in notes {
                        {
                            let note_id = note.id;
                            let preview = content_preview(&note.content, PREVIEW_LEN);
                            rsx! {
                                li {
                                    key: "{note_id}",
                                    class: "flex items-center justify-between py-3",
                                    div {
                                        class: "flex flex-col min-w-0",
                                        div {
                                            class: "flex items-center",
                                            Link {
                                                to: Route::note(note_id),
                                                class: "font-medium text-gray-900 hover:underline dark:text-white",
                                                "{note.title}"
                                            }
                                            NoteBadge { badge: note.badge.clone(), badge_type: note.badge_type.clone() }
                                        }
                                        span {
                                            class: "text-sm text-gray-500 truncate dark:text-gray-400",
                                            "{preview}"
                                        }
                                    }
                                    button {
                                        r#type: "button",
                                        class: "btn btn-danger",
                                        onclick: move |_| {
                                            state.remove_note(note_id);
                                            tracing::info!("Removed note {}", note_id);
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
