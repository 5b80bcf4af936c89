//! SMPL NOTEZ Core
//!
//! Layered the same way as the frontend uses it:
//! - models: Note entity and form draft
//! - state: view state and its reducer
//! - api / graphql: remote persistence through a managed GraphQL endpoint
//! - view_model: optimistic commands tying local state to remote writes

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod state;
pub mod view_model;

pub use api::{GraphQlClient, NotesApi};
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError, NoteError};
pub use models::{ClientId, FormField, Note, NoteForm, NoteId};
pub use state::{Action, ViewState};
pub use view_model::{NotesViewModel, PendingWrite, StateHandle, SyncPolicy, WriteOutcome};
