//! View State
//!
//! In-memory state behind the notes page and the reducer that moves it.

use crate::models::{FormField, Note, NoteForm, NoteId};

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Newest first
    pub notes: Vec<Note>,
    pub loading: bool,
    pub error: bool,
    pub form: NoteForm,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            loading: true,
            error: false,
            form: NoteForm::default(),
        }
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the list with what the backend returned
    SetNotes(Vec<Note>),
    /// Initial load failed
    Error,
    /// Optimistically prepend a note
    AddNote(Note),
    ResetForm,
    SetInput { field: FormField, value: String },
    /// Optimistically drop a note
    RemoveNote(NoteId),
    /// Put a note back at a position (clamped to the list length)
    InsertNote { index: usize, note: Note },
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position_of(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetNotes(notes) => {
                self.notes = notes;
                self.loading = false;
            }
            Action::Error => {
                self.loading = false;
                self.error = true;
            }
            Action::AddNote(note) => self.notes.insert(0, note),
            Action::ResetForm => self.form = NoteForm::default(),
            Action::SetInput { field, value } => self.form.set(field, value),
            Action::RemoveNote(id) => {
                if let Some(index) = self.position_of(&id) {
                    self.notes.remove(index);
                }
            }
            Action::InsertNote { index, note } => {
                let index = index.min(self.notes.len());
                self.notes.insert(index, note);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientId;

    fn make_note(id: &str) -> Note {
        Note {
            id: NoteId::from(id),
            client_id: ClientId::from("client"),
            name: format!("Note {}", id),
            description: format!("About {}", id),
            completed: false,
        }
    }

    fn ids(state: &ViewState) -> Vec<&str> {
        state.notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::new();
        assert!(state.loading);
        assert!(!state.error);
        assert!(state.notes.is_empty());
        assert_eq!(state.form, NoteForm::default());
    }

    #[test]
    fn test_set_notes_keeps_order_and_stops_loading() {
        let mut state = ViewState::new();
        state.apply(Action::SetNotes(vec![make_note("b"), make_note("a"), make_note("c")]));

        assert_eq!(ids(&state), vec!["b", "a", "c"]);
        assert!(!state.loading);
        assert!(!state.error);
    }

    #[test]
    fn test_error_leaves_empty_list() {
        let mut state = ViewState::new();
        state.apply(Action::Error);

        assert!(state.notes.is_empty());
        assert!(!state.loading);
        assert!(state.error);
    }

    #[test]
    fn test_add_note_prepends() {
        let mut state = ViewState::new();
        state.apply(Action::SetNotes(vec![make_note("old")]));
        state.apply(Action::AddNote(make_note("new")));

        assert_eq!(ids(&state), vec!["new", "old"]);
    }

    #[test]
    fn test_set_input_and_reset_form() {
        let mut state = ViewState::new();
        state.apply(Action::SetInput { field: FormField::Name, value: "title".into() });
        state.apply(Action::SetInput { field: FormField::Description, value: "body".into() });
        assert_eq!(state.form.name, "title");
        assert_eq!(state.form.description, "body");

        state.apply(Action::ResetForm);
        assert_eq!(state.form, NoteForm::default());
    }

    #[test]
    fn test_remove_note_preserves_order() {
        let mut state = ViewState::new();
        state.apply(Action::SetNotes(vec![make_note("1"), make_note("2"), make_note("3")]));
        state.apply(Action::RemoveNote(NoteId::from("2")));

        assert_eq!(ids(&state), vec!["1", "3"]);
    }

    #[test]
    fn test_remove_missing_note_is_noop() {
        let mut state = ViewState::new();
        state.apply(Action::SetNotes(vec![make_note("1"), make_note("2")]));
        state.apply(Action::RemoveNote(NoteId::from("nope")));

        assert_eq!(ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_insert_note_clamps_index() {
        let mut state = ViewState::new();
        state.apply(Action::SetNotes(vec![make_note("1")]));
        state.apply(Action::InsertNote { index: 10, note: make_note("2") });
        state.apply(Action::InsertNote { index: 0, note: make_note("0") });

        assert_eq!(ids(&state), vec!["0", "1", "2"]);
    }
}
