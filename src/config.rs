// ABOUTME: Environment-based configuration for the coaching core
// ABOUTME: Reads the model credential and model override once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

//! # Configuration
//!
//! Environment-only configuration, read once at startup. The model credential
//! is optional on purpose: its absence puts the coach into offline mode,
//! which must be detectable without making a network call.

use std::env;

use tracing::warn;

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the default model
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

/// Default generative model used for all coaching calls
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Process-wide coaching configuration
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Model API key; `None` means the coach runs offline
    pub gemini_api_key: Option<String>,
    /// Model identifier, fixed per deployment
    pub model: String,
}

impl CoachConfig {
    /// Load configuration from the environment
    ///
    /// A missing API key is not an error here: read-path services degrade to
    /// documented offline defaults, and interactive services surface the
    /// configuration error at call time.
    #[must_use]
    pub fn from_env() -> Self {
        let gemini_api_key = env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if gemini_api_key.is_none() {
            warn!(
                "{GEMINI_API_KEY_ENV} is not set; AI coaching runs in offline mode \
                 (recommendations return the offline sentinel)"
            );
        }

        let model = env::var(GEMINI_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        Self {
            gemini_api_key,
            model,
        }
    }

    /// Whether the coach has no model credential configured
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.gemini_api_key.is_none()
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_offline() {
        let config = CoachConfig::default();
        assert!(config.is_offline());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_config_with_key_is_online() {
        let config = CoachConfig {
            gemini_api_key: Some("test-key".to_owned()),
            model: DEFAULT_MODEL.to_owned(),
        };
        assert!(!config.is_offline());
    }
}
