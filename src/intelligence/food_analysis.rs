// ABOUTME: Food analysis service converting free-text meal descriptions into macros
// ABOUTME: Propagates configuration errors: there is no safe offline default for this path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

use tracing::debug;

use super::{prompt, AiCoach};
use crate::errors::{AppError, AppResult};
use crate::models::MealAnalysis;

/// Exhaustion message for the food pipeline, preserved verbatim for callers
/// that surface it to users
const FOOD_EXHAUSTED_MESSAGE: &str = "AI failed to generate valid JSON after 3 attempts";

impl AiCoach {
    /// Convert a free-text meal description plus user-specific nutrition
    /// rules into structured macros and a short analysis note
    ///
    /// The description must be non-empty; rules may be empty. Unlike the
    /// recommendation and session-analysis read paths, a missing model
    /// credential propagates as a configuration error here: there is no
    /// neutral macro estimate to fall back to.
    ///
    /// # Errors
    ///
    /// - invalid-input error for an empty description
    /// - configuration error when no model credential is configured
    /// - malformed-response error after 3 full invoke+parse attempts
    pub async fn analyze_food(
        &self,
        description: &str,
        rules: &[String],
    ) -> AppResult<MealAnalysis> {
        if description.trim().is_empty() {
            return Err(AppError::invalid_input("meal description must not be empty"));
        }

        // Eager credential check, before any network call
        self.provider()?;

        debug!(rules_len = rules.len(), "Analyzing meal description");

        let rendered = prompt::build_food_analysis_prompt(description, rules);
        self.invoke_and_parse(rendered, FOOD_EXHAUSTED_MESSAGE).await
    }
}
