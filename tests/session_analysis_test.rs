// ABOUTME: Integration tests for the post-session analysis service
// ABOUTME: Covers offline sentinel, padded-output extraction, input immutability, upstream retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

mod common;

use common::{
    coach_with, padded_analysis_json, sample_history, sample_profile, sample_session,
    ScriptedReply, TestLlmProvider,
};
use ironcoach::errors::{AppError, ErrorCode};
use ironcoach::intelligence::AiCoach;

#[tokio::test]
async fn test_offline_coach_returns_sentinel_analysis() {
    let coach = AiCoach::offline();
    let analysis = coach
        .analyze_session(&sample_session("done"), &sample_history(2), &sample_profile())
        .await
        .unwrap();

    assert_eq!(analysis.feedback, "AI Offline (missing API key)");
    assert!(analysis.new_takeaways.is_empty());
    assert!(analysis.updated_context.is_empty());
}

#[tokio::test]
async fn test_padded_completion_parses_into_analysis() {
    let provider = TestLlmProvider::always(padded_analysis_json());
    let coach = coach_with(provider.clone());

    let analysis = coach
        .analyze_session(&sample_session("done"), &sample_history(2), &sample_profile())
        .await
        .unwrap();

    assert_eq!(provider.call_count(), 1);
    assert_eq!(analysis.feedback, "Solid pressing day.");
    assert_eq!(analysis.new_takeaways, vec!["Handles RPE 8 well"]);
}

#[tokio::test]
async fn test_profile_is_never_mutated() {
    let provider = TestLlmProvider::always(padded_analysis_json());
    let coach = coach_with(provider);

    let profile = sample_profile();
    let before = profile.clone();

    let analysis = coach
        .analyze_session(&sample_session("done"), &sample_history(2), &profile)
        .await
        .unwrap();

    // Takeaways come back as proposals only
    assert!(!analysis.new_takeaways.is_empty());
    assert_eq!(profile, before);
}

#[tokio::test]
async fn test_prompt_windows_history_to_three() {
    let provider = TestLlmProvider::always(padded_analysis_json());
    let coach = coach_with(provider.clone());

    coach
        .analyze_session(&sample_session("done"), &sample_history(6), &sample_profile())
        .await
        .unwrap();

    let prompts = provider.prompts();
    let prompt = &prompts[0];
    assert!(prompt.contains("RECENT HISTORY (Last 3)"));
    assert!(prompt.contains("s5"));
    assert!(!prompt.contains("\"s0\""));
    assert!(!prompt.contains("\"s2\""));
    assert!(prompt.contains("COMPLETED SESSION"));
}

#[tokio::test]
async fn test_upstream_failures_consume_attempts_then_succeed() {
    let provider = TestLlmProvider::new(vec![
        ScriptedReply::Fail(AppError::upstream("test", "503 overloaded")),
        ScriptedReply::Fail(AppError::upstream("test", "503 overloaded")),
        ScriptedReply::text(padded_analysis_json()),
    ]);
    let coach = coach_with(provider.clone());

    let analysis = coach
        .analyze_session(&sample_session("done"), &[], &sample_profile())
        .await
        .unwrap();

    assert_eq!(provider.call_count(), 3);
    assert_eq!(analysis.feedback, "Solid pressing day.");
}

#[tokio::test]
async fn test_all_upstream_failures_propagate_last_error() {
    let provider = TestLlmProvider::always_failing("connection reset");
    let coach = coach_with(provider.clone());

    let error = coach
        .analyze_session(&sample_session("done"), &[], &sample_profile())
        .await
        .unwrap_err();

    assert_eq!(provider.call_count(), 3);
    // No completion text was ever produced, so this is not a malformed response
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.raw_response().is_none());
}
