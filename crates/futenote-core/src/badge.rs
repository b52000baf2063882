//! Badge rendering
//!
//! Maps a note's badge value and category to display text and a
//! text/background class pair. Used by sidebar items and the note page.

use crate::models::{BadgeType, BadgeValue, Note};

/// Classes shared by every visible badge
pub const BADGE_BASE_CLASS: &str = "inline-flex items-center justify-center px-2 ms-3 text-sm font-medium rounded-full";

const PRIMARY_CLASS: &str = "text-blue-800 bg-blue-100 dark:bg-blue-900 dark:text-blue-300";
const SUCCESS_CLASS: &str = "text-green-800 bg-green-100 dark:bg-green-900 dark:text-green-300";
const NEUTRAL_CLASS: &str = "text-gray-800 bg-gray-100 dark:bg-gray-700 dark:text-gray-300";

/// Display-ready badge
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedBadge {
    /// Whether anything should be rendered at all
    pub visible: bool,
    pub text: String,
    /// Text-color and background-color classes for the category
    pub style_class: &'static str,
}

impl RenderedBadge {
    /// Full class list for the badge element
    #[must_use]
    pub fn class(&self) -> String {
        format!("{BADGE_BASE_CLASS} {}", self.style_class)
    }
}

/// Render a badge. An absent badge renders nothing.
#[must_use]
pub fn render_badge(badge: Option<&BadgeValue>, badge_type: Option<&BadgeType>) -> RenderedBadge {
    let Some(badge) = badge else {
        return RenderedBadge::default();
    };

    RenderedBadge {
        visible: true,
        text: badge.to_string(),
        style_class: badge_style(badge_type),
    }
}

/// Render the badge of a note
#[must_use]
pub fn render_note_badge(note: &Note) -> RenderedBadge {
    render_badge(note.badge.as_ref(), note.badge_type.as_ref())
}

/// Class pair for a badge category; unknown and missing categories are neutral.
#[must_use]
pub const fn badge_style(badge_type: Option<&BadgeType>) -> &'static str {
    match badge_type {
        Some(BadgeType::Primary) => PRIMARY_CLASS,
        Some(BadgeType::Success) => SUCCESS_CLASS,
        Some(BadgeType::Default | BadgeType::Other(_)) | None => NEUTRAL_CLASS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;

    fn classes(badge: &RenderedBadge) -> Vec<&str> {
        badge.style_class.split_whitespace().collect()
    }

    #[test]
    fn absent_badge_is_invisible() {
        let rendered = render_badge(None, Some(&BadgeType::Primary));
        assert!(!rendered.visible);
        assert!(rendered.text.is_empty());

        assert!(!render_badge(None, None).visible);
    }

    #[test]
    fn numeric_primary_badge() {
        let rendered = render_badge(Some(&BadgeValue::Count(5)), Some(&BadgeType::Primary));
        assert!(rendered.visible);
        assert_eq!(rendered.text, "5");
        assert!(classes(&rendered).contains(&"text-blue-800"));
        assert!(classes(&rendered).contains(&"bg-blue-100"));
    }

    #[test]
    fn text_default_badge() {
        let rendered = render_badge(Some(&BadgeValue::from("Pro")), Some(&BadgeType::Default));
        assert_eq!(rendered.text, "Pro");
        assert!(classes(&rendered).contains(&"text-gray-800"));
        assert!(classes(&rendered).contains(&"bg-gray-100"));
    }

    #[test]
    fn success_badge() {
        let rendered = render_badge(Some(&BadgeValue::from("Done")), Some(&BadgeType::Success));
        assert!(classes(&rendered).contains(&"text-green-800"));
        assert!(classes(&rendered).contains(&"bg-green-100"));
    }

    #[test]
    fn unknown_type_falls_back_to_gray() {
        let unknown = BadgeType::from("unknown-type");
        let rendered = render_badge(Some(&BadgeValue::from("New")), Some(&unknown));
        assert_eq!(rendered.style_class, NEUTRAL_CLASS);

        let missing = render_badge(Some(&BadgeValue::from("Badge Text")), None);
        assert_eq!(missing.style_class, NEUTRAL_CLASS);
    }

    #[test]
    fn full_class_includes_rounded_pill() {
        let rendered = render_badge(Some(&BadgeValue::Count(3)), Some(&BadgeType::Primary));
        let class = rendered.class();
        assert!(class.split_whitespace().any(|c| c == "rounded-full"));
        assert!(class.ends_with(PRIMARY_CLASS));
    }

    #[test]
    fn note_badge_uses_note_fields() {
        let note = Note::new(NoteId::new(2), "Pro Feature Note", "")
            .with_badge("Pro", BadgeType::Default);
        assert_eq!(render_note_badge(&note).text, "Pro");
    }
}
