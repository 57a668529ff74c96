// ABOUTME: Integration tests for the conversational health assistant
// ABOUTME: Covers free-text pass-through, context rendering, and error propagation without retry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

mod common;

use common::{
    coach_with, sample_history, sample_labs, sample_nutrition, sample_profile, TestLlmProvider,
};
use ironcoach::errors::ErrorCode;
use ironcoach::intelligence::{AiCoach, CoachingContext};
use ironcoach::llm::ChatMessage;

fn context<'a>(
    profile: &'a ironcoach::models::UserProfile,
    history: &'a [ironcoach::models::WorkoutSession],
    nutrition: &'a ironcoach::models::DayNutrition,
    labs: &'a [ironcoach::models::LabResult],
) -> CoachingContext<'a> {
    CoachingContext {
        profile,
        history,
        nutrition,
        labs,
    }
}

#[tokio::test]
async fn test_reply_is_returned_verbatim() {
    let provider = TestLlmProvider::always("Rest today. Your ferritin is on the low side.");
    let coach = coach_with(provider.clone());

    let profile = sample_profile();
    let history = sample_history(2);
    let nutrition = sample_nutrition();
    let labs = sample_labs();

    let reply = coach
        .chat(
            &[ChatMessage::user("Should I train today?")],
            context(&profile, &history, &nutrition, &labs),
        )
        .await
        .unwrap();

    // Free text for direct display, no JSON extraction applied
    assert_eq!(reply, "Rest today. Your ferritin is on the low side.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_prompt_carries_full_context_and_conversation() {
    let provider = TestLlmProvider::always("ok");
    let coach = coach_with(provider.clone());

    let profile = sample_profile();
    let history = sample_history(1);
    let nutrition = sample_nutrition();
    let labs = sample_labs();

    let messages = vec![
        ChatMessage::user("I feel tired"),
        ChatMessage::assistant("Let's look at your labs."),
        ChatMessage::user("Should I deload?"),
    ];
    coach
        .chat(&messages, context(&profile, &history, &nutrition, &labs))
        .await
        .unwrap();

    let prompts = provider.prompts();
    let prompt = &prompts[0];
    assert!(prompt.contains("USER NAME: Alex"));
    assert!(prompt.contains("Ferritin"));
    assert!(prompt.contains("USER: I feel tired"));
    assert!(prompt.contains("ASSISTANT: Let's look at your labs."));
    assert!(prompt.contains("USER: Should I deload?"));
}

#[tokio::test]
async fn test_offline_coach_fails_with_config_error() {
    let coach = AiCoach::offline();
    let profile = sample_profile();
    let nutrition = sample_nutrition();

    let error = coach
        .chat(
            &[ChatMessage::user("hi")],
            context(&profile, &[], &nutrition, &[]),
        )
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigMissing);
}

#[tokio::test]
async fn test_upstream_failure_propagates_without_retry() {
    let provider = TestLlmProvider::always_failing("timeout");
    let coach = coach_with(provider.clone());

    let profile = sample_profile();
    let nutrition = sample_nutrition();

    let error = coach
        .chat(
            &[ChatMessage::user("hi")],
            context(&profile, &[], &nutrition, &[]),
        )
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(provider.call_count(), 1);
}
