//! Route parameter to note resolution

use crate::models::{Note, NoteId};

/// Outcome of looking up a note from a route parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteResolution {
    Found(Note),
    /// Carries the identifier exactly as it arrived from the route
    NotFound(String),
}

impl NoteResolution {
    /// The resolved note, if any
    #[must_use]
    pub const fn note(&self) -> Option<&Note> {
        match self {
            Self::Found(note) => Some(note),
            Self::NotFound(_) => None,
        }
    }
}

/// Resolve a textual route id against a snapshot of notes.
///
/// The id is parsed to a [`NoteId`] before comparison; anything that does not
/// parse as a non-negative integer is simply not found.
#[must_use]
pub fn resolve_note(notes: &[Note], raw_id: &str) -> NoteResolution {
    raw_id
        .parse::<NoteId>()
        .ok()
        .and_then(|id| notes.iter().find(|note| note.id == id))
        .map_or_else(
            || NoteResolution::NotFound(raw_id.to_string()),
            |note| NoteResolution::Found(note.clone()),
        )
}

/// Message shown when a note id has no match
#[must_use]
pub fn not_found_message(raw_id: &str) -> String {
    format!("The note with ID {raw_id} doesn't exist.")
}
