//! UI Components
//!
//! Leptos components for the notes page.

mod note_form;
mod note_list;
mod note_row;

pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use note_row::NoteRow;
