//! Note Models
//!
//! Data structures matching the GraphQL `Note` type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Nullable schema fields arrive as explicit `null`, not as missing keys
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Note identifier, generated on the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies the browser session that authored a note.
///
/// Generated once per mount of the app and reused for every note created
/// during that session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Note record (matches the remote schema, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: ClientId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Stored remotely, not shown by the UI
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

impl Note {
    /// Build a new, not yet persisted note from a filled form
    pub fn from_form(form: &NoteForm, client_id: &ClientId) -> Self {
        Self {
            id: NoteId::generate(),
            client_id: client_id.clone(),
            name: form.name.clone(),
            description: form.description.clone(),
            completed: false,
        }
    }
}

/// Draft of the note being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub name: String,
    pub description: String,
}

impl NoteForm {
    /// Both fields must be non-empty before a note can be created
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
        }
    }
}

/// Form inputs, keyed by the `name` attribute of the input element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Description => "description",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "description" => Ok(FormField::Description),
            other => Err(format!("unknown form field: {other}")),
        }
    }
}
