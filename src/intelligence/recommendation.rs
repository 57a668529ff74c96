// ABOUTME: Next-workout recommendation service composing prompt, model, and extraction
// ABOUTME: Degrades to an offline sentinel plan when no model credential is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

use tracing::{debug, info};

use super::{prompt, AiCoach, MAX_ATTEMPTS};
use crate::errors::AppResult;
use crate::models::{DayNutrition, LabResult, UserProfile, WorkoutPlan, WorkoutSession};

impl AiCoach {
    /// Produce a recommended next workout from history, profile, nutrition,
    /// and lab context
    ///
    /// History and labs may be empty (cold start); the caller supplies a
    /// default profile when none is stored. An omitted focus renders as
    /// `"General"`.
    ///
    /// Recommendation is a read path with a safe empty fallback: when no
    /// model credential is configured this resolves with
    /// [`WorkoutPlan::offline`] instead of failing.
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error when the model output still does
    /// not parse after the bounded retry, or an upstream error when every
    /// attempt failed before producing text.
    pub async fn recommend_workout(
        &self,
        history: &[WorkoutSession],
        profile: &UserProfile,
        nutrition: &DayNutrition,
        labs: &[LabResult],
        focus: Option<&str>,
    ) -> AppResult<WorkoutPlan> {
        if self.is_offline() {
            info!("No model credential configured, returning offline plan");
            return Ok(WorkoutPlan::offline());
        }

        debug!(
            history_len = history.len(),
            labs_len = labs.len(),
            focus = focus.unwrap_or(prompt::DEFAULT_FOCUS),
            "Building workout recommendation"
        );

        let rendered = prompt::build_recommendation_prompt(history, profile, nutrition, labs, focus);
        self.invoke_and_parse(
            rendered,
            &format!("AI returned invalid JSON after {MAX_ATTEMPTS} attempts"),
        )
        .await
    }
}
