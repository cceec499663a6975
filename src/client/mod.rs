// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Answer service client
//!
//! Talks to the AskAfrica backend over HTTP. The trait exists so the shell
//! can be driven by a fake service in tests.

pub mod http;

pub use http::AskClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Source tag the backend uses for book-search answers
pub const SOURCE_BOOK: &str = "book_rag";

/// Source tag the backend uses for general answers
pub const SOURCE_GENERAL: &str = "ollama";

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub use_rag: bool,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, use_rag: bool) -> Self {
        Self {
            question: question.into(),
            use_rag,
        }
    }
}

/// Successful reply to `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default = "default_source")]
    pub source: String,
    /// Model that produced the answer, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

fn default_source() -> String {
    SOURCE_GENERAL.to_string()
}

/// Reply to `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Something that can answer a question
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Ask one question and wait for the full answer
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse>;
}
