//! GraphQL Documents
//!
//! Operations against the managed `Note` schema plus the request and
//! response envelopes shared by all of them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Note, NoteId};

pub const LIST_NOTES: &str = r#"query ListNotes {
  listNotes {
    items {
      id
      clientId
      name
      description
      completed
    }
  }
}"#;

pub const CREATE_NOTE: &str = r#"mutation CreateNote($input: CreateNoteInput!) {
  createNote(input: $input) {
    id
    clientId
    name
    description
    completed
  }
}"#;

pub const DELETE_NOTE: &str = r#"mutation DeleteNote($input: DeleteNoteInput!) {
  deleteNote(input: $input) {
    id
  }
}"#;

// ========================
// Request Envelope
// ========================

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

#[derive(Debug, Serialize)]
pub struct InputVariables<T: Serialize> {
    pub input: T,
}

#[derive(Debug, Serialize)]
pub struct DeleteNoteInput<'a> {
    pub id: &'a NoteId,
}

// ========================
// Response Envelope
// ========================

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Any reported error wins over partial data
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Decode a raw response body
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let response: GraphQlResponse<T> = serde_json::from_str(body)?;
    response.into_data()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesData {
    pub list_notes: NoteConnection,
}

#[derive(Debug, Deserialize)]
pub struct NoteConnection {
    pub items: Vec<Note>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteData {
    pub create_note: Option<Note>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteData {
    pub delete_note: Option<DeletedNote>,
}

#[derive(Debug, Deserialize)]
pub struct DeletedNote {
    pub id: NoteId,
}
