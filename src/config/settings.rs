// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for AskAfrica
//!
//! Handles loading and saving settings from ~/.askafrica/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod migration;
mod validation;

/// Main settings structure, stored in ~/.askafrica/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Answer service connection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Defaults for new questions
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Durable storage for the recent-questions cache
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Answer service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend (the `/ask` endpoint lives under it)
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Environment variable that overrides `base_url`
    #[serde(default = "default_backend_url_env")]
    pub base_url_env: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            base_url_env: default_backend_url_env(),
        }
    }
}

/// Defaults applied when a session starts
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Start with book search enabled
    #[serde(default)]
    pub book_search: bool,
}

/// Durable storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_backend_url_env() -> String {
    "ASKAFRICA_BACKEND_URL".to_string()
}

fn default_storage_path() -> PathBuf {
    Settings::app_home().join("storage")
}
