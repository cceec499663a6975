// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! The in-memory list is authoritative for the session. Storage is read once
//! in [`HistoryStore::load`] and written through after every
//! [`HistoryStore::record`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::DurableStore;

/// Maximum number of exchanges kept
pub const MAX_RECENT: usize = 10;

/// Storage key holding the serialized history
pub const STORAGE_KEY: &str = "askAfrica_recent_questions";

/// One question asked and answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Opaque identifier
    pub id: String,
    /// Question as submitted, trimmed
    pub question: String,
    /// Answer returned by the backend
    pub answer: String,
    /// When the exchange was recorded; display only
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Backend mode that produced the answer (e.g. "book_rag", "ollama")
    pub source: String,
}

impl Exchange {
    /// Create a new exchange stamped with a fresh id and the current time
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let question: String = question.into();
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.trim().to_string(),
            answer: answer.into(),
            created_at: Utc::now(),
            source: source.into(),
        }
    }

    /// Whether the answer came from the book search mode
    pub fn is_book_search(&self) -> bool {
        self.source == "book_rag"
    }
}

/// Bounded, newest-first history mirrored into durable storage
pub struct HistoryStore {
    /// Durable backing store
    storage: Arc<dyn DurableStore>,
    /// Key the list is stored under
    key: String,
    /// Cached exchanges, newest first
    exchanges: Vec<Exchange>,
}

impl HistoryStore {
    /// Load history from storage under the default key
    pub fn load(storage: Arc<dyn DurableStore>) -> Self {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    /// Load history from storage under `key`.
    ///
    /// Never fails: a missing, unreadable or malformed value yields an empty
    /// history so a corrupt cache cannot block the client.
    pub fn load_with_key(storage: Arc<dyn DurableStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let exchanges = match storage.get(&key) {
            Ok(Some(content)) => parse_exchanges(&content),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "could not read recent questions");
                Vec::new()
            }
        };

        tracing::debug!(key = %key, count = exchanges.len(), "loaded recent questions");

        Self {
            storage,
            key,
            exchanges,
        }
    }

    /// Record a new exchange at the front of the history.
    ///
    /// The full list is written back right away. A failed write is logged
    /// and otherwise ignored; the in-memory history stays updated.
    pub fn record(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        source: impl Into<String>,
    ) -> Exchange {
        let exchange = Exchange::new(question, answer, source);

        self.exchanges.insert(0, exchange.clone());
        self.exchanges.truncate(MAX_RECENT);

        if let Err(e) = self.save() {
            tracing::warn!(key = %self.key, error = %e, "could not persist recent questions");
        }

        exchange
    }

    /// Current history, newest first
    pub fn current(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Number of exchanges held
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Whether no exchange has been recorded
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Write the full list back to storage
    fn save(&self) -> crate::error::Result<()> {
        let content = serde_json::to_string(&self.exchanges)?;
        self.storage.set(&self.key, &content)
    }
}

/// Parse a persisted list, degrading to empty on any failure.
fn parse_exchanges(content: &str) -> Vec<Exchange> {
    match serde_json::from_str::<Vec<Exchange>>(content) {
        Ok(mut exchanges) => {
            if exchanges.len() > MAX_RECENT {
                tracing::debug!(
                    count = exchanges.len(),
                    "persisted history longer than {}, dropping the oldest",
                    MAX_RECENT
                );
                exchanges.truncate(MAX_RECENT);
            }
            exchanges
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed recent questions");
            Vec::new()
        }
    }
}
