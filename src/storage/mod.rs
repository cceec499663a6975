// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Durable key-value storage
//!
//! A minimal synchronous string store that survives restarts. The history
//! cache is written through to it on every change.

pub mod filesystem;
pub mod memory;

pub use filesystem::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Synchronous durable key-value store
pub trait DurableStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
