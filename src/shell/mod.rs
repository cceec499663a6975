// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interaction shell
//!
//! Owns the history store and the answer service, and runs one submission
//! at a time. `submit` takes `&mut self`, so a second question cannot be
//! sent while the first is still waiting on the backend.

pub mod display;
pub mod input;

use crate::client::{AnswerService, AskRequest};
use crate::error::user_message;
use crate::history::{Exchange, HistoryStore};

/// Answer shown for the most recent successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct LastAnswer {
    pub text: String,
    /// Whether book search was on when the question was sent
    pub book_search: bool,
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was sent or recorded
    Suppressed,
    /// Backend answered and the exchange was recorded
    Answered(Exchange),
    /// Request failed; the message is what the user sees
    Failed(String),
}

/// Interaction shell driving the ask/record cycle
pub struct Shell<S: AnswerService> {
    service: S,
    history: HistoryStore,
    book_search: bool,
    last_answer: Option<LastAnswer>,
    last_error: Option<String>,
}

impl<S: AnswerService> Shell<S> {
    /// Create a shell over an already loaded history
    pub fn new(service: S, history: HistoryStore) -> Self {
        Self {
            service,
            history,
            book_search: false,
            last_answer: None,
            last_error: None,
        }
    }

    /// Start with book search enabled or disabled
    pub fn with_book_search(mut self, enabled: bool) -> Self {
        self.book_search = enabled;
        self
    }

    /// Submit a question.
    ///
    /// Whitespace-only input is dropped without touching any state. On
    /// failure the history is left as it was.
    pub async fn submit(&mut self, raw_question: &str) -> SubmitOutcome {
        let question = raw_question.trim();
        if question.is_empty() {
            return SubmitOutcome::Suppressed;
        }

        self.last_error = None;
        self.last_answer = None;

        let request = AskRequest::new(question, self.book_search);
        match self.service.ask(&request).await {
            Ok(response) => {
                self.last_answer = Some(LastAnswer {
                    text: response.answer.clone(),
                    book_search: self.book_search,
                });
                let exchange = self
                    .history
                    .record(question, response.answer, response.source);
                SubmitOutcome::Answered(exchange)
            }
            Err(e) => {
                let message = user_message(&e);
                tracing::debug!(error = %e, "submission failed");
                self.last_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Flip book search mode, returning the new state
    pub fn toggle_book_search(&mut self) -> bool {
        self.book_search = !self.book_search;
        self.book_search
    }

    pub fn book_search(&self) -> bool {
        self.book_search
    }

    /// Recent exchanges, newest first
    pub fn history(&self) -> &[Exchange] {
        self.history.current()
    }

    pub fn last_answer(&self) -> Option<&LastAnswer> {
        self.last_answer.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::client::AskResponse;
    use crate::error::{ApiError, Result};
    use crate::storage::MemoryStore;

    /// Service that replays scripted replies and records what it was asked
    #[derive(Default)]
    struct ScriptedService {
        calls: AtomicUsize,
        seen: Mutex<Vec<AskRequest>>,
        fail_with: Option<String>,
    }

    impl ScriptedService {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl AnswerService for ScriptedService {
        async fn ask(&self, request: &AskRequest) -> Result<AskResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());

            if let Some(message) = &self.fail_with {
                return Err(ApiError::from_status(503, Some(message.clone())).into());
            }

            Ok(AskResponse {
                answer: format!("answer to {}", request.question),
                source: if request.use_rag { "book_rag" } else { "ollama" }.to_string(),
                model: None,
            })
        }
    }

    fn shell(service: ScriptedService) -> Shell<ScriptedService> {
        Shell::new(service, HistoryStore::load(Arc::new(MemoryStore::new())))
    }

    #[tokio::test]
    async fn test_blank_submission_is_suppressed() {
        let mut shell = shell(ScriptedService::default());

        assert_eq!(shell.submit("   ").await, SubmitOutcome::Suppressed);
        assert_eq!(shell.submit("").await, SubmitOutcome::Suppressed);
        assert_eq!(shell.submit("\n\t").await, SubmitOutcome::Suppressed);

        assert_eq!(shell.service.calls.load(Ordering::SeqCst), 0);
        assert!(shell.history().is_empty());
        assert!(shell.last_error().is_none());
    }

    #[tokio::test]
    async fn test_success_records_trimmed_question() {
        let mut shell = shell(ScriptedService::default());

        let outcome = shell.submit("  What is Python?  ").await;

        let exchange = match outcome {
            SubmitOutcome::Answered(exchange) => exchange,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(exchange.question, "What is Python?");
        assert_eq!(exchange.answer, "answer to What is Python?");
        assert_eq!(shell.history(), &[exchange]);
        assert_eq!(
            shell.service.seen.lock().unwrap()[0].question,
            "What is Python?"
        );
    }

    #[tokio::test]
    async fn test_book_search_flag_is_sent() {
        let mut shell = shell(ScriptedService::default()).with_book_search(true);

        shell.submit("How do loops work?").await;

        assert!(shell.service.seen.lock().unwrap()[0].use_rag);
        assert_eq!(shell.history()[0].source, "book_rag");
        assert!(shell.last_answer().unwrap().book_search);
    }

    #[tokio::test]
    async fn test_toggle_book_search() {
        let mut shell = shell(ScriptedService::default());

        assert!(!shell.book_search());
        assert!(shell.toggle_book_search());
        assert!(!shell.toggle_book_search());
    }

    #[tokio::test]
    async fn test_last_answer_keeps_mode_it_was_asked_in() {
        let mut shell = shell(ScriptedService::default()).with_book_search(true);

        shell.submit("What is a dictionary?").await;
        shell.toggle_book_search();

        let last = shell.last_answer().unwrap();
        assert!(last.book_search);
        assert!(!shell.book_search());
        assert_eq!(last.text, "answer to What is a dictionary?");
    }

    #[tokio::test]
    async fn test_failure_surfaces_message_and_keeps_history() {
        let mut shell = shell(ScriptedService::failing("Ollama is down"));

        let outcome = shell.submit("q").await;

        assert_eq!(outcome, SubmitOutcome::Failed("Ollama is down".to_string()));
        assert_eq!(shell.last_error(), Some("Ollama is down"));
        assert!(shell.last_answer().is_none());
        assert!(shell.history().is_empty());
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_error() {
        let mut shell = shell(ScriptedService::failing("boom"));
        shell.submit("q").await;
        assert!(shell.last_error().is_some());

        shell.service.fail_with = None;
        shell.submit("q again").await;

        assert!(shell.last_error().is_none());
        assert!(shell.last_answer().is_some());
    }
}
