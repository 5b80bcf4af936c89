//! Notes View-Model
//!
//! Every user action is applied to local state first, then handed back as a
//! `PendingWrite` that performs the remote half when awaited.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::api::NotesApi;
use crate::error::NoteError;
use crate::models::{ClientId, FormField, Note, NoteId};
use crate::state::{Action, ViewState};

#[cfg(test)]
mod tests;

/// Access to wherever the view state lives (a reactive store in the UI,
/// a plain `RefCell` in tests)
pub trait StateHandle: Clone {
    fn with_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    fn update_view(&self, f: impl FnOnce(&mut ViewState));

    fn dispatch(&self, action: Action) {
        self.update_view(|state| state.apply(action));
    }
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn with_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut());
    }
}

/// What happens to local state when the remote write fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Log the failure and leave local state as the user left it
    #[default]
    KeepLocal,
    /// Undo the optimistic change
    Rollback,
}

/// Result of the remote half of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Confirmed,
    /// Remote write failed, local state kept
    Diverged,
    /// Remote write failed, local change undone
    RolledBack,
}

pub struct NotesViewModel<A, S> {
    api: Rc<A>,
    state: S,
    client_id: ClientId,
    policy: SyncPolicy,
}

impl<A, S: Clone> Clone for NotesViewModel<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
            client_id: self.client_id.clone(),
            policy: self.policy,
        }
    }
}

impl<A: NotesApi, S: StateHandle> NotesViewModel<A, S> {
    pub fn new(api: A, state: S, client_id: ClientId) -> Self {
        Self {
            api: Rc::new(api),
            state,
            client_id,
            policy: SyncPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the whole collection and replace the local list
    pub async fn load(&self) {
        match self.api.list_notes().await {
            Ok(notes) => {
                info!(count = notes.len(), "loaded notes");
                self.state.dispatch(Action::SetNotes(notes));
            }
            Err(err) => {
                warn!(error = %err, "failed to load notes");
                self.state.dispatch(Action::Error);
            }
        }
    }

    /// Keystroke in a form input, keyed by the input's `name` attribute
    pub fn set_input(&self, name: &str, value: String) {
        match name.parse::<FormField>() {
            Ok(field) => self.state.dispatch(Action::SetInput { field, value }),
            Err(err) => debug!(%err, "ignoring input"),
        }
    }

    /// Add the drafted note locally and clear the form.
    ///
    /// Returns `EmptyFields` without touching state when the draft is
    /// incomplete.
    pub fn create(&self) -> Result<PendingWrite<A, S>, NoteError> {
        let form = self.state.with_view(|state| state.form.clone());
        if !form.is_complete() {
            return Err(NoteError::EmptyFields);
        }

        let note = Note::from_form(&form, &self.client_id);
        debug!(id = %note.id, "adding note");
        self.state.dispatch(Action::AddNote(note.clone()));
        self.state.dispatch(Action::ResetForm);

        Ok(self.pending(RemoteWrite::Create(note)))
    }

    /// Drop the note locally. The remote delete is issued even when the id
    /// is not in the local list.
    pub fn delete(&self, id: &NoteId) -> PendingWrite<A, S> {
        let removed = self.state.with_view(|state| {
            state
                .position_of(id)
                .map(|index| (index, state.notes[index].clone()))
        });
        if removed.is_none() {
            debug!(%id, "note not in local list");
        }
        self.state.dispatch(Action::RemoveNote(id.clone()));

        self.pending(RemoteWrite::Delete { id: id.clone(), removed })
    }

    fn pending(&self, write: RemoteWrite) -> PendingWrite<A, S> {
        PendingWrite {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
            policy: self.policy,
            write,
        }
    }
}

#[derive(Debug)]
enum RemoteWrite {
    Create(Note),
    Delete {
        id: NoteId,
        /// Position and note as they were before the local removal
        removed: Option<(usize, Note)>,
    },
}

/// Remote half of an optimistic command
#[must_use = "the remote write only happens when confirmed"]
pub struct PendingWrite<A, S> {
    api: Rc<A>,
    state: S,
    policy: SyncPolicy,
    write: RemoteWrite,
}

impl<A: NotesApi, S: StateHandle> PendingWrite<A, S> {
    pub fn note_id(&self) -> &NoteId {
        match &self.write {
            RemoteWrite::Create(note) => &note.id,
            RemoteWrite::Delete { id, .. } => id,
        }
    }

    pub async fn confirm(self) -> WriteOutcome {
        match self.write {
            RemoteWrite::Create(note) => match self.api.create_note(&note).await {
                Ok(()) => {
                    info!(id = %note.id, "note created");
                    WriteOutcome::Confirmed
                }
                Err(err) => {
                    warn!(id = %note.id, error = %err, "failed to create note");
                    match self.policy {
                        SyncPolicy::KeepLocal => WriteOutcome::Diverged,
                        SyncPolicy::Rollback => {
                            self.state.dispatch(Action::RemoveNote(note.id));
                            WriteOutcome::RolledBack
                        }
                    }
                }
            },
            RemoteWrite::Delete { id, removed } => match self.api.delete_note(&id).await {
                Ok(()) => {
                    info!(%id, "note deleted");
                    WriteOutcome::Confirmed
                }
                Err(err) => {
                    warn!(%id, error = %err, "failed to delete note");
                    match (self.policy, removed) {
                        (SyncPolicy::Rollback, Some((index, note))) => {
                            self.state.dispatch(Action::InsertNote { index, note });
                            WriteOutcome::RolledBack
                        }
                        _ => WriteOutcome::Diverged,
                    }
                }
            },
        }
    }
}
