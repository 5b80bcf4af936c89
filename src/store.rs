//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the view-model reaches it through
//! `StoreState`.

use leptos::prelude::*;
use reactive_stores::Store;

use notez_core::{GraphQlClient, NotesViewModel, StateHandle, ViewState};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Notes, form draft and load flags
    pub view: ViewState,
}

pub type AppStore = Store<AppState>;

/// View-model wired to the store and the GraphQL backend
pub type NotesVm = NotesViewModel<GraphQlClient, StoreState>;

/// `StateHandle` over the store.
///
/// Reads are untracked: they happen inside event handlers, not views.
#[derive(Clone, Copy)]
pub struct StoreState(pub AppStore);

impl StateHandle for StoreState {
    fn with_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.0.view().with_untracked(f)
    }

    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        self.0.view().update(f);
    }
}
