// ABOUTME: AI coaching intelligence: prompt assembly, model invocation, and typed parsing
// ABOUTME: Hosts the AiCoach service composing the LLM provider with the extraction pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

//! # Coaching Intelligence
//!
//! The AI recommendation/analysis pipeline: pure prompt builders, a
//! best-effort JSON extraction layer, and the [`AiCoach`] service that
//! composes them with an injected [`LlmProvider`].
//!
//! ## Pipeline
//!
//! 1. A caller gathers domain context from storage and calls a service.
//! 2. The prompt builder renders a fixed coaching policy plus a bounded
//!    context snapshot into a single prompt.
//! 3. The provider submits the prompt and returns raw completion text.
//! 4. The extractor strips formatting noise and deserializes the embedded
//!    JSON into the use case's closed output shape.
//! 5. On parse failure the *whole* invoke+parse cycle is retried, up to
//!    [`MAX_ATTEMPTS`] total attempts: the model is nondeterministic per
//!    call, so re-invoking gives a genuinely different chance of success,
//!    while the small fixed bound caps latency and cost.
//!
//! Services hold no state beyond the shared provider handle, which is
//! read-only after construction; concurrent calls need no coordination.

pub mod extraction;
pub mod prompt;

mod chat;
mod food_analysis;
mod recommendation;
mod session_analysis;

pub use chat::CoachingContext;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::{CoachConfig, GEMINI_API_KEY_ENV};
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};

/// Maximum total invoke+parse attempts before a pipeline gives up
pub const MAX_ATTEMPTS: u32 = 3;

/// The AI coaching service
///
/// Holds the injected model provider, or runs explicitly offline when no
/// credential is configured. Construct once at startup and share; all
/// methods borrow their inputs immutably and may run concurrently.
pub struct AiCoach {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl AiCoach {
    /// Create a coach backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Create an explicitly offline coach
    ///
    /// Read-path services return their documented sentinel results;
    /// interactive services fail with a configuration error.
    #[must_use]
    pub const fn offline() -> Self {
        Self { provider: None }
    }

    /// Build a coach from configuration, offline when no key is present
    ///
    /// Credential absence is decided here, without any network call.
    #[must_use]
    pub fn from_config(config: &CoachConfig) -> Self {
        config.gemini_api_key.as_ref().map_or_else(Self::offline, |key| {
            Self::new(Arc::new(
                GeminiProvider::new(key).with_default_model(config.model.clone()),
            ))
        })
    }

    /// Build a coach from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&CoachConfig::from_env())
    }

    /// Whether this coach has no model backend configured
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.provider.is_none()
    }

    /// The configured provider, or a configuration error when offline
    pub(crate) fn provider(&self) -> AppResult<&dyn LlmProvider> {
        self.provider.as_deref().ok_or_else(|| {
            AppError::config_missing(format!("{GEMINI_API_KEY_ENV} is not configured"))
        })
    }

    /// Invoke the model with a prompt and parse the completion into `T`,
    /// retrying the whole cycle on failure
    ///
    /// Upstream invocation failures consume attempts exactly like parse
    /// failures: retrying a nondeterministic generation may succeed where
    /// retrying a deterministic bad request would not, but the shared attempt
    /// ceiling bounds cost either way. Attempts are strictly sequential.
    ///
    /// On exhaustion with at least one raw completion in hand, fails with a
    /// malformed-response error carrying the last raw text; if every attempt
    /// failed before producing text, the last upstream error propagates.
    pub(crate) async fn invoke_and_parse<T: DeserializeOwned>(
        &self,
        prompt: String,
        exhausted_message: &str,
    ) -> AppResult<T> {
        let provider = self.provider()?;
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let mut last_raw: Option<String> = None;
        let mut last_error: Option<AppError> = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match provider.complete(&request).await {
                Ok(response) => match extraction::parse_response::<T>(&response.content) {
                    Ok(parsed) => {
                        debug!(attempt, "Parsed model response");
                        return Ok(parsed);
                    }
                    Err(e) => {
                        warn!(
                            attempt,
                            max_attempts = MAX_ATTEMPTS,
                            error = %e,
                            raw = %response.content,
                            "Model returned unparsable output, re-invoking"
                        );
                        last_raw = Some(response.content);
                        last_error = Some(e);
                    }
                },
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        error = %e,
                        "Model invocation failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        match last_raw {
            Some(raw) => {
                error!(
                    raw = %raw,
                    "Model output still unparsable after {MAX_ATTEMPTS} attempts"
                );
                Err(AppError::malformed_response(exhausted_message, raw))
            }
            None => Err(last_error
                .unwrap_or_else(|| AppError::internal("retry loop exhausted without attempts"))),
        }
    }
}

impl std::fmt::Debug for AiCoach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiCoach")
            .field("offline", &self.is_offline())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_offline_coach_reports_config_error() {
        let coach = AiCoach::offline();
        assert!(coach.is_offline());
        let error = coach.provider().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
    }

    #[test]
    fn test_from_config_without_key_is_offline() {
        let config = CoachConfig::default();
        let coach = AiCoach::from_config(&config);
        assert!(coach.is_offline());
    }

    #[test]
    fn test_from_config_with_key_is_online() {
        let config = CoachConfig {
            gemini_api_key: Some("test-key".to_owned()),
            model: "gemini-2.0-flash".to_owned(),
        };
        let coach = AiCoach::from_config(&config);
        assert!(!coach.is_offline());
    }
}
