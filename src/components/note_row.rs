//! Note Row Component

use leptos::prelude::*;

use notez_core::{Note, NoteId};

/// One note: name as title, description below, DELETE action on the right
#[component]
pub fn NoteRow(
    note: Note,
    #[prop(into)] on_delete: Callback<NoteId>,
) -> impl IntoView {
    let id = note.id.clone();

    view! {
        <li class="note-item">
            <div class="note-meta">
                <h4 class="note-title">{note.name}</h4>
                <p class="note-description">{note.description}</p>
            </div>
            <p class="note-delete" on:click=move |_| on_delete.run(id.clone())>
                "DELETE"
            </p>
        </li>
    }
}
