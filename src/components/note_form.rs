//! Note Form Component
//!
//! Name and description inputs plus the create button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use notez_core::{FormField, NoteError, NotesApi, NotesViewModel, PendingWrite, StateHandle};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Blocking notice, like the browser's own validation popups
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Local half of a create; a missing view-model is reported like a
/// validation failure so the button never fails silently
fn start_create<A: NotesApi, S: StateHandle>(
    vm: Option<&NotesViewModel<A, S>>,
) -> Result<PendingWrite<A, S>, NoteError> {
    vm.ok_or(NoteError::NotConfigured)?.create()
}

#[component]
pub fn NoteForm() -> impl IntoView {
    let ctx = use_app_context();

    let field_value = move |field: FormField| {
        ctx.store.view().with(|view| match field {
            FormField::Name => view.form.name.clone(),
            FormField::Description => view.form.description.clone(),
        })
    };

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(vm) = ctx.vm() {
            vm.set_input(&input.name(), input.value());
        }
    };

    let create_note = move |_| {
        match start_create(ctx.vm().as_ref()) {
            Ok(pending) => spawn_local(async move {
                pending.confirm().await;
            }),
            Err(err) => alert(&err.to_string()),
        }
    };

    view! {
        <div class="note-form">
            <input
                type="text"
                name=FormField::Name.as_str()
                placeholder="NOTE NAME"
                class="note-input"
                prop:value=move || field_value(FormField::Name)
                on:input=on_input
            />
            <input
                type="text"
                name=FormField::Description.as_str()
                placeholder="NOTE DESCRIPTION"
                class="note-input"
                prop:value=move || field_value(FormField::Description)
                on:input=on_input
            />
            <button type="button" class="create-btn" on:click=create_note>
                "CREATE NOTE"
            </button>
        </div>
    }
}
