// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for AskAfrica
//!
//! This module defines all error types used throughout the client.

use thiserror::Error;

/// Main error type for AskAfrica operations
#[derive(Error, Debug)]
pub enum AskError {
    /// Answer service errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Durable storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors reported by the answer service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Backend answered 2xx with a body we could not read
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build a backend error from a status code and the optional `detail`
    /// carried in the error body.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let message = match detail {
            Some(detail) if !detail.is_empty() => detail,
            _ => format!("HTTP error, status {}", status),
        };
        ApiError::Backend { status, message }
    }
}

/// Result type alias for AskAfrica operations
pub type Result<T> = std::result::Result<T, AskError>;

/// Reduce an error to the single line shown next to the prompt.
pub fn user_message(error: &AskError) -> String {
    match error {
        AskError::Api(ApiError::Backend { message, .. }) => message.clone(),
        AskError::Api(api_error) => api_error.to_string(),
        AskError::Http(http_error) if http_error.is_connect() => {
            "Cannot reach the AskAfrica backend. Is it running?".to_string()
        }
        other => other.to_string(),
    }
}
