//! futenote-core - Core library for Futénote
//!
//! This crate contains the note models, the reactive in-memory note store,
//! and the pure view derivations (badges, note resolution, sidebar state)
//! used by the desktop interface.

pub mod badge;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod resolve;
pub mod seed;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{BadgeType, BadgeValue, Note, NoteId, NoteInput, NotePatch};
pub use resolve::{resolve_note, NoteResolution};
pub use store::NoteStore;
