// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use super::*;
use std::path::Path;
use std::sync::Arc;

use askafrica::cli::{AskArgs, HistoryArgs, SettingsArgs};
use askafrica::error::AskError;
use askafrica::history::HistoryStore;
use askafrica::storage::FileStore;
use super::commands::RunContext;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a temp directory and point ASKAFRICA_HOME at it so that settings
/// writes go to a throwaway location instead of the real ~/.askafrica/.
/// Hold the returned lock for as long as the environment must stay put.
fn sandbox_askafrica_home() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let lock = env_lock().lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().expect("failed to create temp dir");
    std::env::set_var("ASKAFRICA_HOME", dir.path());
    (dir, lock)
}

fn env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}

fn ephemeral_context(backend_url: &str) -> RunContext {
    RunContext {
        settings: Settings::default(),
        backend_url: backend_url.to_string(),
        ephemeral: true,
    }
}

fn file_context(backend_url: &str, storage_dir: &Path) -> RunContext {
    let mut settings = Settings::default();
    settings.storage.path = storage_dir.to_path_buf();
    RunContext {
        settings,
        backend_url: backend_url.to_string(),
        ephemeral: false,
    }
}

fn ask_args(question: Option<&str>) -> AskArgs {
    AskArgs {
        question: question.map(str::to_string),
        book: false,
        stdin: false,
    }
}

fn settings_args(set_url: Option<&str>) -> SettingsArgs {
    SettingsArgs {
        path: false,
        set_url: set_url.map(str::to_string),
        set_book_default: None,
    }
}

// ==================== ask ====================

#[tokio::test]
async fn test_run_ask_whitespace_is_silent_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = ephemeral_context(&mock_server.uri());

    assert!(run_ask(ask_args(Some("   \t  ")), &ctx).await.is_ok());
    assert!(run_ask(ask_args(Some("")), &ctx).await.is_ok());
    assert!(run_ask(ask_args(None), &ctx).await.is_ok());
}

#[tokio::test]
async fn test_run_ask_whitespace_records_nothing() {
    let storage_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = file_context(&mock_server.uri(), storage_dir.path());
    run_ask(ask_args(Some("\n\n")), &ctx).await.unwrap();

    let history = HistoryStore::load(Arc::new(FileStore::new(storage_dir.path())));
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_run_ask_records_answer() {
    let storage_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "Use a for loop.",
            "source": "ollama"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = file_context(&mock_server.uri(), storage_dir.path());
    run_ask(ask_args(Some("  How do I loop?  ")), &ctx)
        .await
        .unwrap();

    let history = HistoryStore::load(Arc::new(FileStore::new(storage_dir.path())));
    assert_eq!(history.len(), 1);
    assert_eq!(history.current()[0].question, "How do I loop?");
    assert_eq!(history.current()[0].answer, "Use a for loop.");
}

#[tokio::test]
async fn test_run_ask_rejects_bad_backend_url() {
    let ctx = ephemeral_context("localhost:8000");
    let result = run_ask(ask_args(Some("hello")), &ctx).await;
    assert!(matches!(result, Err(AskError::Config(_))));
}

// ==================== history ====================

#[test]
fn test_run_history_limit_beyond_length() {
    let storage_dir = TempDir::new().unwrap();
    let mut history = HistoryStore::load(Arc::new(FileStore::new(storage_dir.path())));
    history.record("first", "one", "ollama");
    history.record("second", "two", "book_rag");

    let ctx = file_context("http://localhost:8000", storage_dir.path());
    let args = HistoryArgs {
        limit: 50,
        full: false,
    };
    assert!(run_history(args, &ctx).is_ok());
}

#[test]
fn test_run_history_empty_and_zero_limit() {
    let ctx = ephemeral_context("http://localhost:8000");

    let args = HistoryArgs {
        limit: 10,
        full: true,
    };
    assert!(run_history(args, &ctx).is_ok());

    let args = HistoryArgs {
        limit: 0,
        full: false,
    };
    assert!(run_history(args, &ctx).is_ok());
}

#[test]
fn test_run_history_does_not_need_valid_backend() {
    let ctx = ephemeral_context("not a url");
    let args = HistoryArgs {
        limit: 5,
        full: false,
    };
    assert!(run_history(args, &ctx).is_ok());
}

// ==================== settings ====================

#[test]
fn test_run_settings_rejects_non_http_url() {
    let (home, _lock) = sandbox_askafrica_home();
    let ctx = ephemeral_context("http://localhost:8000");

    let result = run_settings(settings_args(Some("localhost:8000")), &ctx);

    assert!(matches!(result, Err(AskError::Config(_))));
    assert!(!home.path().join("settings.json").exists());
}

#[test]
fn test_run_settings_saves_url() {
    let (home, _lock) = sandbox_askafrica_home();
    // A broken configured URL must not block fixing it.
    let ctx = ephemeral_context("localhost:8000");

    run_settings(settings_args(Some(" http://10.0.0.5:8000 ")), &ctx).unwrap();

    let saved = Settings::load_from(&home.path().join("settings.json")).unwrap();
    assert_eq!(saved.backend.base_url, "http://10.0.0.5:8000");
}

#[test]
fn test_run_settings_saves_book_default() {
    let (home, _lock) = sandbox_askafrica_home();
    let ctx = ephemeral_context("http://localhost:8000");

    let args = SettingsArgs {
        path: false,
        set_url: None,
        set_book_default: Some(true),
    };
    run_settings(args, &ctx).unwrap();

    let saved = Settings::load_from(&home.path().join("settings.json")).unwrap();
    assert!(saved.defaults.book_search);
}

#[test]
fn test_run_settings_print_only_writes_nothing() {
    let (home, _lock) = sandbox_askafrica_home();
    let ctx = ephemeral_context("http://localhost:8000");

    run_settings(settings_args(None), &ctx).unwrap();
    assert!(!home.path().join("settings.json").exists());
}
