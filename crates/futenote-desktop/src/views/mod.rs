//! Routed pages

mod note_page;
mod notes_list;
mod page_not_found;
mod shell;

pub use note_page::NotePage;
pub use notes_list::NotesList;
pub use page_not_found::PageNotFound;
pub use shell::Shell;
