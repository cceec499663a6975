// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! AskAfrica - terminal client for a local question answering service.
//!
//! This crate exposes the runtime used by the `askafrica` CLI (`src/main.rs`):
//! - `history`: the bounded recent-questions cache and its persistence
//! - `storage`: durable key-value stores backing the cache
//! - `client`: HTTP client for the backend `/ask` and `/health` endpoints
//! - `shell`: submission flow, view state and display formatting
//! - `config`, `cli`, `error`: settings, argument parsing and error types

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod shell;
pub mod storage;

pub use error::{AskError, Result};
