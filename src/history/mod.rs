// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Recent-question history
//!
//! Keeps the last ten question/answer exchanges, newest first, and mirrors
//! them into durable storage on every change.

pub mod store;

pub use store::{Exchange, HistoryStore, MAX_RECENT, STORAGE_KEY};
