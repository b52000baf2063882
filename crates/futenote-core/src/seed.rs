//! Seed data loaded into the store at startup

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{BadgeType, Note, NoteId};
use crate::store::NoteStore;

/// The four notes every fresh store starts with
#[must_use]
pub fn default_notes() -> Vec<Note> {
    vec![
        Note::new(NoteId::new(1), "Dashboard", "Dashboard content..."),
        Note::new(NoteId::new(2), "Kanban", "Kanban board content...")
            .with_badge("Pro", BadgeType::Default),
        Note::new(NoteId::new(3), "Inbox", "Inbox messages...")
            .with_badge(3_u64, BadgeType::Primary),
        Note::new(NoteId::new(4), "Users", "User management..."),
    ]
}

/// Parse a JSON array of notes
pub fn parse_seed(json: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(json)?)
}

/// Build a store from a JSON seed file.
///
/// The file is only read, never written back.
pub fn load_seed_file(path: &Path) -> Result<NoteStore> {
    let raw = fs::read_to_string(path)?;
    let notes = parse_seed(&raw)?;
    tracing::debug!("Loaded {} seed notes from {}", notes.len(), path.display());
    NoteStore::from_notes(notes)
}

/// Build the startup store, preferring the seed file when one is configured.
///
/// A broken seed file is logged and replaced by the built-in notes.
pub fn initial_store(seed_file: Option<&Path>) -> NoteStore {
    let Some(path) = seed_file else {
        return NoteStore::with_seed();
    };

    match load_seed_file(path) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(
                "Failed to load seed file {}: {}. Using built-in notes.",
                path.display(),
                e
            );
            NoteStore::with_seed()
        }
    }
}
