//! Error types for the request pipeline.
//!
//! Validation errors stop a send before anything touches the network. A
//! `NetworkError` covers everything that can go wrong once the request has
//! been handed to the transport, including URLs and header names the
//! transport refuses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please enter a valid API URL.")]
    MissingUrl,

    #[error("Invalid JSON in request body.")]
    InvalidRequestBody(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Error)]
#[error("Network error or API is not running.")]
pub struct NetworkError {
    pub message: String,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Inline description shown in the response area.
    pub fn description(&self) -> String {
        format!(
            "Error: {}. Check if the API is running and the URL is correct.",
            self.message
        )
    }
}

/// Everything `Session::send` can fail with.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}
