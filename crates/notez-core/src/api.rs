//! Notes API
//!
//! Remote persistence for notes. `GraphQlClient` talks to the managed
//! endpoint; tests substitute their own `NotesApi`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::graphql::{
    self, CreateNoteData, DeleteNoteData, DeleteNoteInput, GraphQlRequest, InputVariables,
    ListNotesData,
};
use crate::models::{Note, NoteId};

/// Backend operations used by the view-model.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait NotesApi {
    /// Full note collection, in the order the backend returns it
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;

    async fn create_note(&self, note: &Note) -> Result<(), ApiError>;

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError>;
}

/// HTTP client for an AppSync-style GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GraphQlClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// POST body for one operation, `x-api-key` only when a key is set
    fn request<V: Serialize>(&self, query: &str, variables: Option<V>) -> reqwest::RequestBuilder {
        let request = self
            .http
            .post(&self.config.endpoint)
            .json(&GraphQlRequest { query, variables });
        match self.config.api_key() {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    /// POST one operation and unwrap its `data`
    pub async fn execute<V, T>(&self, query: &str, variables: Option<V>) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self.request(query, variables).send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// GraphQL errors may come with a non-2xx status, so the body is tried
/// first; an unreadable body on a failed status reports the status.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    match graphql::parse_response(body) {
        Err(ApiError::Decode(_)) if !status.is_success() => Err(ApiError::Status(status.as_u16())),
        result => result,
    }
}

fn created(data: CreateNoteData) -> Result<(), ApiError> {
    data.create_note.map(|_| ()).ok_or(ApiError::MissingData)
}

fn deleted(data: DeleteNoteData, id: &NoteId) -> Result<(), ApiError> {
    match data.delete_note {
        Some(deleted) if &deleted.id == id => Ok(()),
        Some(deleted) => Err(ApiError::UnexpectedNote(deleted.id)),
        None => Err(ApiError::MissingData),
    }
}

#[async_trait(?Send)]
impl NotesApi for GraphQlClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let data: ListNotesData = self.execute::<(), _>(graphql::LIST_NOTES, None).await?;
        Ok(data.list_notes.items)
    }

    async fn create_note(&self, note: &Note) -> Result<(), ApiError> {
        let data = self
            .execute(graphql::CREATE_NOTE, Some(InputVariables { input: note }))
            .await?;
        created(data)
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError> {
        let data = self
            .execute(
                graphql::DELETE_NOTE,
                Some(InputVariables { input: DeleteNoteInput { id } }),
            )
            .await?;
        deleted(data, id)
    }
}
