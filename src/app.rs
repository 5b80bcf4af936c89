//! SMPL NOTEZ App
//!
//! Single page: heading, note form, note list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::error;

use notez_core::{Action, ApiConfig, ClientId, GraphQlClient, NotesViewModel, StateHandle};

use crate::components::{NoteForm, NoteList};
use crate::context::AppContext;
use crate::store::{AppState, StoreState};

/// Amplify-style `aws-exports` document for the GraphQL endpoint
const API_CONFIG: &str = include_str!("../config/api.json");

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let state = StoreState(store);

    let vm = match ApiConfig::from_json(API_CONFIG) {
        Ok(config) => Some(NotesViewModel::new(
            GraphQlClient::new(config),
            state,
            ClientId::generate(),
        )),
        Err(err) => {
            error!(error = %err, "cannot reach notes api");
            state.dispatch(Action::Error);
            None
        }
    };

    let ctx = AppContext::new(store, vm);
    provide_context(ctx);

    // Initial load, once on mount
    Effect::new(move |_| {
        if let Some(vm) = ctx.vm() {
            spawn_local(async move {
                vm.load().await;
            });
        }
    });

    view! {
        <div class="App">
            <h1 class="app-title">"SMPL NOTEZ"</h1>
            <NoteForm />
            <NoteList />
        </div>
    }
}
