// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP implementation of the answer service
//!
//! No timeout and no retry: a request runs until the backend answers or the
//! connection fails.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{AnswerService, AskRequest, AskResponse, HealthStatus};
use crate::error::{ApiError, AskError, Result};

/// Error body returned by the backend on non-2xx replies
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// HTTP client for the AskAfrica backend
pub struct AskClient {
    client: Client,
    base_url: String,
}

impl AskClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query the backend health endpoint
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await.map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| AskError::Api(ApiError::InvalidResponse(e.to_string())))
    }
}

#[async_trait]
impl AnswerService for AskClient {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse> {
        let url = format!("{}/ask", self.base_url);
        tracing::debug!(
            url = %url,
            use_rag = request.use_rag,
            chars = request.question.len(),
            "sending question"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(status = status.as_u16(), error = %err, "backend rejected question");
            return Err(err);
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| AskError::Api(ApiError::InvalidResponse(e.to_string())))?;

        tracing::debug!(source = %body.source, chars = body.answer.len(), "received answer");
        Ok(body)
    }
}

/// Map a transport failure to a user-facing error
fn map_send_error(e: reqwest::Error) -> AskError {
    if e.is_connect() {
        AskError::Api(ApiError::Network(
            "Cannot connect to the AskAfrica backend. Make sure it is running".to_string(),
        ))
    } else {
        AskError::Http(e)
    }
}

/// Turn a non-2xx reply into an error, preferring the backend's `detail`
async fn error_from_response(response: reqwest::Response) -> AskError {
    let status = response.status().as_u16();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail.map(|detail| match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }),
        Err(_) => None,
    };
    AskError::Api(ApiError::from_status(status, detail))
}
