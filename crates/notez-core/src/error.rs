//! Error types

use thiserror::Error;

use crate::models::NoteId;

/// Rejected user actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("please enter a name and description")]
    EmptyFields,

    #[error("notes api is not configured")]
    NotConfigured,
}

/// Failures talking to the GraphQL endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("graphql errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("response has no data")]
    MissingData,

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("backend deleted note {0} instead")]
    UnexpectedNote(NoteId),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Invalid API configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse api config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("api config has no graphql endpoint")]
    MissingEndpoint,
}
