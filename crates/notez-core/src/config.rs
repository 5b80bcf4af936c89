//! API Configuration
//!
//! Read from an Amplify-style `aws-exports` JSON document.

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    pub endpoint: String,
    #[serde(rename = "aws_appsync_region", default)]
    pub region: Option<String>,
    #[serde(rename = "aws_appsync_apiKey", default)]
    pub api_key: Option<String>,
    #[serde(rename = "aws_appsync_authenticationType", default)]
    pub authentication_type: Option<String>,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: None,
            api_key: None,
            authentication_type: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = serde_json::from_str(json)?;
        if config.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(config)
    }

    /// API key to send, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
