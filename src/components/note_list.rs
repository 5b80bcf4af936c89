//! Note List Component
//!
//! Newest first. A failed load renders as an empty list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use notez_core::NoteId;

use crate::components::NoteRow;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

fn count_label(count: usize) -> String {
    match count {
        1 => "1 note".to_string(),
        n => format!("{} notes", n),
    }
}

#[component]
pub fn NoteList() -> impl IntoView {
    let ctx = use_app_context();

    let loading = move || ctx.store.view().with(|view| view.loading);
    let notes = move || ctx.store.view().with(|view| view.notes.clone());
    let count = move || ctx.store.view().with(|view| view.notes.len());

    let delete_note = move |id: NoteId| {
        if let Some(vm) = ctx.vm() {
            let pending = vm.delete(&id);
            spawn_local(async move {
                pending.confirm().await;
            });
        }
    };

    view! {
        <div class="note-list">
            <Show when=loading>
                <div class="loading">"Loading..."</div>
            </Show>
            <ul>
                <For
                    each=notes
                    key=|note| note.id.clone()
                    children=move |note| view! { <NoteRow note=note on_delete=delete_note /> }
                />
            </ul>
            <p class="note-count">{move || count_label(count())}</p>
        </div>
    }
}
