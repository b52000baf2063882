//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use futenote_core::config::AppConfig;
use futenote_core::nav::{next_sidebar_open, SidebarAction};
use futenote_core::seed::initial_store;
use futenote_core::{resolve_note, Note, NoteId, NoteInput, NotePatch, NoteResolution, NoteStore};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The note store; every component reading it re-renders after a write
    pub store: Signal<NoteStore>,
    /// Whether the sidebar is open on narrow windows
    pub sidebar_open: Signal<bool>,
    /// Configuration loaded at startup
    pub config: Signal<AppConfig>,
}

impl AppState {
    /// Create the state from configuration.
    ///
    /// Must be called inside a component, once, at the root of the app.
    pub fn new(config: AppConfig) -> Self {
        let store = create_store(&config);
        Self {
            store: Signal::new(store),
            sidebar_open: Signal::new(config.sidebar_open),
            config: Signal::new(config),
        }
    }

    /// Snapshot of all notes in display order
    #[must_use]
    pub fn notes(&self) -> Vec<Note> {
        self.store.read().notes().to_vec()
    }

    /// Resolve a route id against the current notes
    #[must_use]
    pub fn resolve(&self, raw_id: &str) -> NoteResolution {
        resolve_note(self.store.read().notes(), raw_id)
    }

    pub fn add_note(&mut self, input: NoteInput) -> Note {
        let note = self.store.write().add(input);
        tracing::info!("Created note {}", note.id);
        note
    }

    pub fn remove_note(&mut self, id: NoteId) {
        self.store.write().remove(id);
    }

    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) {
        self.store.write().update(id, patch);
    }

    pub fn toggle_sidebar(&mut self) {
        self.apply_sidebar(SidebarAction::Toggle);
    }

    pub fn close_sidebar(&mut self) {
        self.apply_sidebar(SidebarAction::Close);
    }

    fn apply_sidebar(&mut self, action: SidebarAction) {
        let open = next_sidebar_open((self.sidebar_open)(), action);
        self.sidebar_open.set(open);
    }
}

fn create_store(config: &AppConfig) -> NoteStore {
    let mut store = initial_store(config.seed_file.as_deref());
    tracing::info!("Note store ready with {} notes", store.len());

    store.subscribe(|event| {
        tracing::debug!(
            change = ?event.change,
            revision = event.revision,
            notes = event.notes.len(),
            "Note store updated"
        );
    });
    store
}
