// ABOUTME: Post-workout session analysis service producing feedback and profile deltas
// ABOUTME: Advisory only: proposed takeaways/context updates are returned, never merged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

use tracing::{debug, info};

use super::{prompt, AiCoach, MAX_ATTEMPTS};
use crate::errors::AppResult;
use crate::models::{SessionAnalysis, UserProfile, WorkoutSession};

impl AiCoach {
    /// Analyze a just-completed session against recent history and profile
    ///
    /// Produces coaching feedback plus proposed profile deltas
    /// (`new_takeaways`, `updated_context`). The profile is borrowed
    /// read-only and never mutated; the caller decides whether to merge the
    /// proposals into persisted state.
    ///
    /// When no model credential is configured this resolves with
    /// [`SessionAnalysis::offline`].
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error when the model output still does
    /// not parse after the bounded retry, or an upstream error when every
    /// attempt failed before producing text.
    pub async fn analyze_session(
        &self,
        session: &WorkoutSession,
        history: &[WorkoutSession],
        profile: &UserProfile,
    ) -> AppResult<SessionAnalysis> {
        if self.is_offline() {
            info!("No model credential configured, returning offline analysis");
            return Ok(SessionAnalysis::offline());
        }

        debug!(
            session_id = %session.id,
            history_len = history.len(),
            "Analyzing completed session"
        );

        let rendered = prompt::build_session_analysis_prompt(session, history, profile);
        self.invoke_and_parse(
            rendered,
            &format!("AI returned invalid JSON after {MAX_ATTEMPTS} attempts"),
        )
        .await
    }
}
