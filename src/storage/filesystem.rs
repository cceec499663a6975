// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Filesystem storage backend
//!
//! Stores each key as its own file under a base directory.

use std::path::{Path, PathBuf};

use super::DurableStore;
use crate::error::{AskError, Result};

/// Filesystem-based durable store
pub struct FileStore {
    /// Directory holding one file per key
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new filesystem store rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Directory this store writes into
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the full path for a key
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let name = sanitize_key(key)?;
        Ok(self.base_path.join(format!("{}.json", name)))
    }
}

/// Map a storage key onto a safe file stem.
///
/// Alphanumerics, `-`, `_` and `.` pass through; anything else, and every
/// leading `.`, is written as `%XX` per UTF-8 byte. Distinct keys map to
/// distinct stems.
fn sanitize_key(key: &str) -> Result<String> {
    if key.trim().is_empty() {
        return Err(AskError::Storage("storage key is empty".to_string()));
    }

    let mut name = String::with_capacity(key.len());
    let mut leading = true;
    for byte in key.bytes() {
        let keep = byte.is_ascii_alphanumeric()
            || byte == b'-'
            || byte == b'_'
            || (byte == b'.' && !leading);
        if keep {
            name.push(byte as char);
        } else {
            name.push_str(&format!("%{:02X}", byte));
        }
        leading = leading && byte == b'.';
    }
    Ok(name)
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }

        let path = self.key_path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path).map_err(|e| {
            AskError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}
