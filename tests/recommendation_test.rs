// ABOUTME: Integration tests for the workout recommendation service
// ABOUTME: Covers offline sentinel, fence stripping, windowing, focus, and retry exhaustion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

mod common;

use common::{
    coach_with, fenced_plan_json, sample_history, sample_labs, sample_nutrition, sample_profile,
    ScriptedReply, TestLlmProvider,
};
use ironcoach::errors::ErrorCode;
use ironcoach::intelligence::{AiCoach, MAX_ATTEMPTS};

#[tokio::test]
async fn test_offline_coach_returns_sentinel_plan() {
    let coach = AiCoach::offline();
    let plan = coach
        .recommend_workout(
            &sample_history(2),
            &sample_profile(),
            &sample_nutrition(),
            &sample_labs(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(plan.reasoning, "AI is offline (missing API key).");
    assert!(plan.plan.is_empty());
}

#[tokio::test]
async fn test_fenced_completion_parses_into_plan() {
    let provider = TestLlmProvider::always(fenced_plan_json());
    let coach = coach_with(provider.clone());

    let plan = coach
        .recommend_workout(
            &sample_history(2),
            &sample_profile(),
            &sample_nutrition(),
            &sample_labs(),
            Some("Push day"),
        )
        .await
        .unwrap();

    assert_eq!(provider.call_count(), 1);
    assert_eq!(plan.reasoning, "Push day with reduced pressing volume.");
    assert_eq!(plan.plan.len(), 1);
    assert_eq!(plan.plan[0].name, "Bench Press");
    assert_eq!(plan.plan[0].sets, 4);
}

#[tokio::test]
async fn test_prompt_windows_history_and_renders_focus() {
    let provider = TestLlmProvider::always(fenced_plan_json());
    let coach = coach_with(provider.clone());

    coach
        .recommend_workout(
            &sample_history(8),
            &sample_profile(),
            &sample_nutrition(),
            &sample_labs(),
            None,
        )
        .await
        .unwrap();

    let prompts = provider.prompts();
    let prompt = &prompts[0];

    // Last 5 of 8 sessions survive; earlier ones are windowed out
    for kept in 3..8 {
        assert!(prompt.contains(&format!("s{kept}")), "missing s{kept}");
    }
    for dropped in 0..3 {
        assert!(!prompt.contains(&format!("\"s{dropped}\"")));
    }

    // No focus supplied resolves to the fallback label
    assert!(prompt.contains("TODAY'S FOCUS/CONTEXT: General"));
    assert!(prompt.contains("Ferritin"));
}

#[tokio::test]
async fn test_unparsable_output_exhausts_attempts() {
    let provider = TestLlmProvider::always("I cannot produce JSON today, sorry!");
    let coach = coach_with(provider.clone());

    let error = coach
        .recommend_workout(&[], &sample_profile(), &sample_nutrition(), &[], None)
        .await
        .unwrap_err();

    assert_eq!(provider.call_count() as u32, MAX_ATTEMPTS);
    assert_eq!(error.code, ErrorCode::MalformedResponse);
    assert_eq!(
        error.message,
        format!("AI returned invalid JSON after {MAX_ATTEMPTS} attempts")
    );
    assert_eq!(
        error.raw_response(),
        Some("I cannot produce JSON today, sorry!")
    );
}

#[tokio::test]
async fn test_recovers_when_a_later_attempt_parses() {
    let provider = TestLlmProvider::new(vec![
        ScriptedReply::text("not json"),
        ScriptedReply::text("still not json"),
        ScriptedReply::text(fenced_plan_json()),
    ]);
    let coach = coach_with(provider.clone());

    let plan = coach
        .recommend_workout(&[], &sample_profile(), &sample_nutrition(), &[], None)
        .await
        .unwrap();

    assert_eq!(provider.call_count(), 3);
    assert_eq!(plan.plan.len(), 1);
}
