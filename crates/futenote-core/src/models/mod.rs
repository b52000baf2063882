//! Data models for Futénote

mod badge;
mod note;

pub use badge::{BadgeType, BadgeValue};
pub use note::{Note, NoteDraft, NoteId, NoteInput, NotePatch, UNTITLED_NOTE};
