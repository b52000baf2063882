//! Route table

use dioxus::prelude::*;

use crate::views::{NotePage, NotesList, PageNotFound, Shell};

/// Application routes.
///
/// The note id stays textual here; [`NotePage`] parses it when resolving.
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/notes")]
        NotesList {},
        #[route("/notes/:id")]
        NotePage { id: String },
    #[end_layout]
    #[redirect("/", || Route::NotesList {})]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Detail route for a note
    pub fn note(id: futenote_core::NoteId) -> Self {
        Self::NotePage { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use futenote_core::nav::{note_path, ROOT_PATH};
    use futenote_core::NoteId;
    use pretty_assertions::assert_eq;

    #[test]
    fn detail_route_keeps_id_as_text() {
        let route = Route::from_str("/notes/2").ok();
        assert_eq!(route, Some(Route::NotePage { id: "2".to_string() }));
    }

    #[test]
    fn list_route() {
        assert_eq!(Route::from_str("/notes").ok(), Some(Route::NotesList {}));
    }

    #[test]
    fn route_path_matches_note_path() {
        let id = NoteId::new(3);
        assert_eq!(Route::note(id).to_string(), note_path(id));
    }

    #[test]
    fn root_redirects_to_list() {
        assert_eq!(Route::from_str(ROOT_PATH).ok(), Some(Route::NotesList {}));
    }
}
