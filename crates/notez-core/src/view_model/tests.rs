//! View-Model Tests
//!
//! Drives the view-model against a scripted in-memory backend.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use super::*;
use crate::error::ApiError;

#[derive(Default)]
struct FakeApi {
    listed: Vec<Note>,
    fail: Cell<bool>,
    created: RefCell<Vec<Note>>,
    deleted: RefCell<Vec<NoteId>>,
}

fn boom() -> ApiError {
    ApiError::GraphQl(vec!["Network error".to_string()])
}

#[async_trait(?Send)]
impl NotesApi for FakeApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        if self.fail.get() {
            return Err(boom());
        }
        Ok(self.listed.clone())
    }

    async fn create_note(&self, note: &Note) -> Result<(), ApiError> {
        if self.fail.get() {
            return Err(boom());
        }
        self.created.borrow_mut().push(note.clone());
        Ok(())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError> {
        if self.fail.get() {
            return Err(boom());
        }
        self.deleted.borrow_mut().push(id.clone());
        Ok(())
    }
}

type TestVm = NotesViewModel<FakeApi, Rc<RefCell<ViewState>>>;

fn make_note(id: &str) -> Note {
    Note {
        id: NoteId::from(id),
        client_id: ClientId::from("someone-else"),
        name: format!("Note {}", id),
        description: format!("About {}", id),
        completed: false,
    }
}

fn setup(api: FakeApi) -> TestVm {
    NotesViewModel::new(api, Rc::new(RefCell::new(ViewState::new())), ClientId::from("session"))
}

async fn setup_loaded(ids: &[&str]) -> TestVm {
    let api = FakeApi {
        listed: ids.iter().map(|id| make_note(id)).collect(),
        ..Default::default()
    };
    let vm = setup(api);
    vm.load().await;
    vm
}

fn ids(vm: &TestVm) -> Vec<String> {
    vm.state()
        .with_view(|s| s.notes.iter().map(|n| n.id.to_string()).collect())
}

fn fill_form(vm: &TestVm, name: &str, description: &str) {
    vm.set_input("name", name.to_string());
    vm.set_input("description", description.to_string());
}

#[tokio::test]
async fn test_load_replaces_list_in_order() {
    let vm = setup_loaded(&["c", "a", "b"]).await;

    assert_eq!(ids(&vm), vec!["c", "a", "b"]);
    vm.state().with_view(|s| {
        assert!(!s.loading);
        assert!(!s.error);
    });
}

#[tokio::test]
async fn test_failed_load_sets_error() {
    let api = FakeApi::default();
    api.fail.set(true);
    let vm = setup(api);

    vm.load().await;

    vm.state().with_view(|s| {
        assert!(s.notes.is_empty());
        assert!(!s.loading);
        assert!(s.error);
    });
}

#[tokio::test]
async fn test_create_prepends_and_clears_form() {
    let vm = setup_loaded(&["old"]).await;
    fill_form(&vm, "Shopping", "eggs and flour");

    let pending = vm.create().expect("form is complete");

    // Local state changes before the remote write runs
    vm.state().with_view(|s| {
        assert_eq!(s.notes.len(), 2);
        let first = &s.notes[0];
        assert_eq!(first.name, "Shopping");
        assert_eq!(first.description, "eggs and flour");
        assert_eq!(first.client_id, ClientId::from("session"));
        assert!(!first.completed);
        assert_eq!(&first.id, pending.note_id());
        assert!(s.form.name.is_empty());
        assert!(s.form.description.is_empty());
    });

    assert_eq!(pending.confirm().await, WriteOutcome::Confirmed);
    assert_eq!(vm.api.created.borrow().len(), 1);
    assert_eq!(vm.api.created.borrow()[0].name, "Shopping");
}

#[tokio::test]
async fn test_create_with_empty_field_is_rejected() {
    let vm = setup_loaded(&["a"]).await;

    vm.set_input("name", "only a name".to_string());
    assert_eq!(vm.create().err(), Some(NoteError::EmptyFields));

    vm.set_input("name", String::new());
    vm.set_input("description", "only a description".to_string());
    assert_eq!(vm.create().err(), Some(NoteError::EmptyFields));

    assert_eq!(ids(&vm), vec!["a"]);
    vm.state().with_view(|s| assert_eq!(s.form.description, "only a description"));
    assert!(vm.api.created.borrow().is_empty());
}

#[tokio::test]
async fn test_unknown_input_name_is_ignored() {
    let vm = setup_loaded(&[]).await;
    vm.set_input("title", "x".to_string());

    vm.state().with_view(|s| assert_eq!(s.form, crate::models::NoteForm::default()));
}

#[tokio::test]
async fn test_failed_create_keeps_local_note() {
    let vm = setup_loaded(&[]).await;
    fill_form(&vm, "n", "d");
    let pending = vm.create().unwrap();
    vm.api.fail.set(true);

    assert_eq!(pending.confirm().await, WriteOutcome::Diverged);
    assert_eq!(ids(&vm).len(), 1);
}

#[tokio::test]
async fn test_failed_create_rolls_back_under_rollback_policy() {
    let vm = setup_loaded(&["a"]).await.with_policy(SyncPolicy::Rollback);
    fill_form(&vm, "n", "d");
    let pending = vm.create().unwrap();
    vm.api.fail.set(true);

    assert_eq!(pending.confirm().await, WriteOutcome::RolledBack);
    assert_eq!(ids(&vm), vec!["a"]);
}

#[tokio::test]
async fn test_delete_removes_and_preserves_order() {
    let vm = setup_loaded(&["1", "2", "3"]).await;

    let pending = vm.delete(&NoteId::from("2"));
    assert_eq!(ids(&vm), vec!["1", "3"]);

    assert_eq!(pending.confirm().await, WriteOutcome::Confirmed);
    assert_eq!(*vm.api.deleted.borrow(), vec![NoteId::from("2")]);
}

#[tokio::test]
async fn test_rapid_deletes_remove_both_targets() {
    let vm = setup_loaded(&["1", "2", "3", "4"]).await;

    let first = vm.delete(&NoteId::from("2"));
    let second = vm.delete(&NoteId::from("4"));
    let (a, b) = tokio::join!(second.confirm(), first.confirm());

    assert_eq!((a, b), (WriteOutcome::Confirmed, WriteOutcome::Confirmed));
    assert_eq!(ids(&vm), vec!["1", "3"]);
    assert_eq!(vm.api.deleted.borrow().len(), 2);
}

#[tokio::test]
async fn test_delete_unknown_id_still_hits_backend() {
    let vm = setup_loaded(&["1"]).await;

    let pending = vm.delete(&NoteId::from("ghost"));
    assert_eq!(ids(&vm), vec!["1"]);

    assert_eq!(pending.confirm().await, WriteOutcome::Confirmed);
    assert_eq!(*vm.api.deleted.borrow(), vec![NoteId::from("ghost")]);
}

#[tokio::test]
async fn test_failed_delete_is_not_reverted() {
    let vm = setup_loaded(&["1", "2"]).await;
    vm.api.fail.set(true);

    let outcome = vm.delete(&NoteId::from("1")).confirm().await;

    assert_eq!(outcome, WriteOutcome::Diverged);
    assert_eq!(ids(&vm), vec!["2"]);
}

#[tokio::test]
async fn test_failed_delete_restores_position_under_rollback_policy() {
    let vm = setup_loaded(&["1", "2", "3"]).await.with_policy(SyncPolicy::Rollback);
    vm.api.fail.set(true);

    let outcome = vm.delete(&NoteId::from("2")).confirm().await;

    assert_eq!(outcome, WriteOutcome::RolledBack);
    assert_eq!(ids(&vm), vec!["1", "2", "3"]);
}
