// ABOUTME: Conversational health-assistant service over the user's full context
// ABOUTME: Returns free text, so no JSON extraction or retry applies here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

use tracing::debug;

use super::{prompt, AiCoach};
use crate::errors::AppResult;
use crate::llm::{ChatMessage, ChatRequest};
use crate::models::{DayNutrition, LabResult, UserProfile, WorkoutSession};

/// Full domain context the chat assistant answers over
///
/// Borrowed snapshot gathered by the caller; history and labs are windowed
/// to the most recent entries during prompt rendering.
#[derive(Debug, Clone, Copy)]
pub struct CoachingContext<'a> {
    /// The user's coaching profile
    pub profile: &'a UserProfile,
    /// Stored workout history
    pub history: &'a [WorkoutSession],
    /// Today's nutrition
    pub nutrition: &'a DayNutrition,
    /// Stored lab results
    pub labs: &'a [LabResult],
}

impl AiCoach {
    /// Answer a conversation turn with full access to the user's health data
    ///
    /// The reply is free text for direct display; no JSON shape is expected
    /// and no retry applies. Interactive path: a missing model credential
    /// propagates as a configuration error rather than degrading silently.
    ///
    /// # Errors
    ///
    /// - configuration error when no model credential is configured
    /// - upstream error when the model call fails
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        context: CoachingContext<'_>,
    ) -> AppResult<String> {
        let provider = self.provider()?;

        debug!(turns = messages.len(), "Answering chat turn");

        let rendered = prompt::build_chat_prompt(
            context.profile,
            context.history,
            context.nutrition,
            context.labs,
            messages,
        );
        let request = ChatRequest::new(vec![ChatMessage::user(rendered)]);
        let response = provider.complete(&request).await?;
        Ok(response.content)
    }
}
