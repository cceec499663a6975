// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{AskError, Result};

use super::Settings;

impl Settings {
    /// Get the backend base URL, checking the env var first.
    pub fn backend_url(&self) -> String {
        // Priority: env var > config file.
        std::env::var(&self.backend.base_url_env)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.backend.base_url.clone())
    }

    /// Check that a backend URL is usable before any request is made.
    pub fn validate_backend_url(url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AskError::Config("backend URL is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AskError::Config(format!(
                "backend URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_env_priority() {
        let mut settings = Settings::default();
        settings.backend.base_url_env = "ASKAFRICA_TEST_URL_31337".to_string();
        settings.backend.base_url = "http://config:8000".to_string();

        std::env::remove_var("ASKAFRICA_TEST_URL_31337");
        assert_eq!(settings.backend_url(), "http://config:8000");

        std::env::set_var("ASKAFRICA_TEST_URL_31337", "http://env:8000");
        assert_eq!(settings.backend_url(), "http://env:8000");

        std::env::remove_var("ASKAFRICA_TEST_URL_31337");
    }

    #[test]
    fn test_validate_backend_url() {
        assert!(Settings::validate_backend_url("http://localhost:8000").is_ok());
        assert!(Settings::validate_backend_url("https://ask.example.org").is_ok());
        assert!(Settings::validate_backend_url("").is_err());
        assert!(Settings::validate_backend_url("localhost:8000").is_err());
    }
}
