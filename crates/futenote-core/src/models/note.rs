//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::badge::{BadgeType, BadgeValue};

/// A unique identifier for a note.
///
/// Seed notes use small fixed values; generated ids are derived from the
/// current time in Unix milliseconds (see [`crate::store::NoteStore::add`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wrap a raw integer id
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NoteId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Display title
    pub title: String,
    /// Plain text content, line breaks are significant
    pub content: String,
    /// Optional badge shown next to the title
    #[serde(default)]
    pub badge: Option<BadgeValue>,
    /// Badge styling category, only consulted when `badge` is set
    #[serde(default)]
    pub badge_type: Option<BadgeType>,
}

impl Note {
    /// Create a note with an explicit id and no badge
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            badge: None,
            badge_type: None,
        }
    }

    /// Attach a badge to the note
    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<BadgeValue>, badge_type: BadgeType) -> Self {
        self.badge = Some(badge.into());
        self.badge_type = Some(badge_type);
        self
    }

    /// Build a stored note from creation input and an assigned id
    #[must_use]
    pub fn from_input(id: NoteId, input: NoteInput) -> Self {
        let mut note = Self {
            id,
            title: input.title,
            content: input.content,
            badge: input.badge,
            badge_type: input.badge_type,
        };
        note.clear_orphan_badge_type();
        note
    }

    /// Merge a partial patch into this note.
    ///
    /// Fields left as `None` in the patch are untouched. Returns `true` when
    /// any field actually changed.
    pub fn apply(&mut self, patch: NotePatch) -> bool {
        let before = self.clone();

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(badge) = patch.badge {
            self.badge = badge;
        }
        if let Some(badge_type) = patch.badge_type {
            self.badge_type = badge_type;
        }
        self.clear_orphan_badge_type();

        *self != before
    }

    // A badge type without a badge has no meaning.
    fn clear_orphan_badge_type(&mut self) {
        if self.badge.is_none() {
            self.badge_type = None;
        }
    }
}

/// Fields supplied when creating a note; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub badge: Option<BadgeValue>,
    #[serde(default)]
    pub badge_type: Option<BadgeType>,
}

impl NoteInput {
    /// Create input with a title and content
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attach a badge
    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<BadgeValue>, badge_type: BadgeType) -> Self {
        self.badge = Some(badge.into());
        self.badge_type = Some(badge_type);
        self
    }
}

/// Partial update for a note.
///
/// `None` leaves a field untouched. For the optional badge fields the inner
/// `Option` is the new value, so `Some(None)` clears the badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub badge: Option<Option<BadgeValue>>,
    pub badge_type: Option<Option<BadgeType>>,
}

impl NotePatch {
    /// Patch that only replaces the title
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Patch that only replaces the content
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that sets or clears the badge
    #[must_use]
    pub fn badge(badge: Option<BadgeValue>, badge_type: Option<BadgeType>) -> Self {
        Self {
            badge: Some(badge),
            badge_type: Some(badge_type),
            ..Self::default()
        }
    }

    /// Check whether the patch touches no field
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.badge.is_none()
            && self.badge_type.is_none()
    }
}

/// Editable form text for creating or editing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Title used when a draft is saved with a blank title
pub const UNTITLED_NOTE: &str = "Untitled note";

impl NoteDraft {
    /// Start a draft from an existing note
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    /// Check whether both fields are blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Convert to creation input
    #[must_use]
    pub fn into_input(self) -> NoteInput {
        NoteInput::new(normalize_title(&self.title), self.content)
    }

    /// Diff against the stored note, producing a patch with only changed fields
    #[must_use]
    pub fn patch_for(&self, note: &Note) -> NotePatch {
        let title = normalize_title(&self.title);
        NotePatch {
            title: (title != note.title).then_some(title),
            content: (self.content != note.content).then(|| self.content.clone()),
            ..NotePatch::default()
        }
    }
}

fn normalize_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        UNTITLED_NOTE.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Note {
        Note::new(NoteId::new(3), "Inbox", "Inbox messages...")
            .with_badge(3_u64, BadgeType::Primary)
    }

    #[test]
    fn test_note_id_parse() {
        assert_eq!("2".parse::<NoteId>().unwrap(), NoteId::new(2));
        assert_eq!(" 42 ".parse::<NoteId>().unwrap(), NoteId::new(42));
        assert!("abc".parse::<NoteId>().is_err());
        assert!("-1".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_id_display() {
        assert_eq!(NoteId::new(999).to_string(), "999");
    }

    #[test]
    fn test_apply_title_only() {
        let mut note = sample();
        let before = note.clone();

        assert!(note.apply(NotePatch::title("Renamed")));

        assert_eq!(note.title, "Renamed");
        assert_eq!(note.id, before.id);
        assert_eq!(note.content, before.content);
        assert_eq!(note.badge, before.badge);
        assert_eq!(note.badge_type, before.badge_type);
    }

    #[test]
    fn test_apply_reports_no_change() {
        let mut note = sample();
        assert!(!note.apply(NotePatch::default()));
        assert!(!note.apply(NotePatch::title("Inbox")));
    }

    #[test]
    fn test_clearing_badge_drops_badge_type() {
        let mut note = sample();
        assert!(note.apply(NotePatch {
            badge: Some(None),
            ..NotePatch::default()
        }));
        assert_eq!(note.badge, None);
        assert_eq!(note.badge_type, None);
    }

    #[test]
    fn test_from_input_without_badge_drops_badge_type() {
        let input = NoteInput {
            badge_type: Some(BadgeType::Success),
            ..NoteInput::new("a", "b")
        };
        let note = Note::from_input(NoteId::new(7), input);
        assert_eq!(note.badge_type, None);
    }

    #[test]
    fn test_note_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["badgeType"], "primary");
        assert_eq!(json["badge"], 3);
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_draft_patch_only_changed_fields() {
        let note = sample();
        let mut draft = NoteDraft::from_note(&note);
        draft.content = "Updated\nmultiline".to_string();

        let patch = draft.patch_for(&note);
        assert_eq!(patch.title, None);
        assert_eq!(patch.content.as_deref(), Some("Updated\nmultiline"));
    }

    #[test]
    fn test_draft_blank_title_becomes_untitled() {
        let draft = NoteDraft {
            title: "   ".to_string(),
            content: "body".to_string(),
        };
        assert!(!draft.is_blank());
        assert_eq!(draft.into_input().title, UNTITLED_NOTE);
    }
}
