// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a scripted LLM provider double and domain fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `ironcoach`
//!
//! Provides a scripted [`LlmProvider`] double whose completions are queued
//! up front, plus builders for common domain fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};

use ironcoach::errors::AppError;
use ironcoach::intelligence::AiCoach;
use ironcoach::llm::{ChatRequest, ChatResponse, LlmProvider};
use ironcoach::models::{
    DayNutrition, Exercise, Goals, LabResult, Macros, SetEntry, UserProfile, WorkoutSession,
};

/// One scripted outcome for a [`TestLlmProvider`] call
pub enum ScriptedReply {
    /// Return this text as the completion content
    Text(String),
    /// Fail the call with this error
    Fail(AppError),
}

impl ScriptedReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

/// Scripted LLM provider double
///
/// Replies are consumed in order; once the script runs out, the last queued
/// behavior repeats. Records every prompt it receives so tests can assert on
/// rendered prompt content.
pub struct TestLlmProvider {
    script: Mutex<Vec<ScriptedReply>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl TestLlmProvider {
    pub fn new(script: Vec<ScriptedReply>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// A provider that always returns the same completion text
    pub fn always(content: impl Into<String>) -> Arc<Self> {
        Self::new(vec![ScriptedReply::text(content)])
    }

    /// A provider that always fails with an upstream error
    pub fn always_failing(message: impl Into<String>) -> Arc<Self> {
        Self::new(vec![ScriptedReply::Fail(AppError::upstream(
            "test", message,
        ))])
    }

    /// Number of completed `complete` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All prompts received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for TestLlmProvider {
    fn name(&self) -> &'static str {
        "test"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["scripted-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = request
            .messages
            .iter()
            .map(|m| m.content.clone())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        let mut script = self.script.lock().unwrap();
        let reply = if script.len() > 1 {
            script.remove(0)
        } else {
            match script.first() {
                Some(ScriptedReply::Text(text)) => ScriptedReply::Text(text.clone()),
                Some(ScriptedReply::Fail(error)) => {
                    return Err(AppError::upstream("test", error.to_string()))
                }
                None => return Err(AppError::internal("test script is empty")),
            }
        };

        match reply {
            ScriptedReply::Text(content) => Ok(ChatResponse {
                content,
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            ScriptedReply::Fail(error) => Err(error),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Build a coach backed by the given scripted provider
pub fn coach_with(provider: Arc<TestLlmProvider>) -> AiCoach {
    AiCoach::new(provider)
}

/// A workout session fixture with one heavy bench exercise
pub fn sample_session(id: &str) -> WorkoutSession {
    WorkoutSession {
        id: id.to_owned(),
        date: Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap(),
        exercises: vec![Exercise {
            name: "Bench Press".to_owned(),
            sets: vec![SetEntry {
                weight: 100.0,
                reps: 5,
                rpe: Some(8),
                comment: None,
            }],
            notes: None,
        }],
        overall_feeling: Some("Strong".to_owned()),
    }
}

/// A history of `n` sessions with ids `s0..s{n-1}`, oldest first
pub fn sample_history(n: usize) -> Vec<WorkoutSession> {
    (0..n).map(|i| sample_session(&format!("s{i}"))).collect()
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Alex".to_owned(),
        goals: Goals {
            short_term: vec!["Bench 120kg".to_owned()],
            long_term: vec!["Stay injury free".to_owned()],
        },
        principles: vec!["Progressive overload".to_owned()],
        physical_context: vec!["Mild shoulder impingement".to_owned()],
        nutrition_rules: Some(vec!["High protein".to_owned()]),
        takeaways: vec!["Responds well to volume".to_owned()],
    }
}

pub fn sample_nutrition() -> DayNutrition {
    DayNutrition {
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        meals: Vec::new(),
        total: Macros {
            calories: 1850.0,
            protein: 140.0,
            carbs: 180.0,
            fat: 60.0,
        },
    }
}

pub fn sample_labs() -> Vec<LabResult> {
    vec![LabResult {
        id: "lab-1".to_owned(),
        date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        marker: "Ferritin".to_owned(),
        value: 45.0,
        unit: "ng/mL".to_owned(),
        reference_range: Some("30-400".to_owned()),
        notes: None,
    }]
}

/// A valid workout plan completion, wrapped in a markdown code fence
pub fn fenced_plan_json() -> String {
    "```json\n{\"reasoning\": \"Push day with reduced pressing volume.\", \"plan\": [{\"name\": \"Bench Press\", \"sets\": 4, \"reps\": 5, \"weight\": 100.0, \"notes\": \"Pause reps\"}]}\n```".to_owned()
}

/// A valid session analysis completion with conversational padding
pub fn padded_analysis_json() -> String {
    "Here is my review of the session: {\"feedback\": \"Solid pressing day.\", \"new_takeaways\": [\"Handles RPE 8 well\"], \"updated_context\": []} Hope that helps!".to_owned()
}

/// A valid meal analysis completion, bare JSON
pub fn meal_analysis_json() -> String {
    r#"{"description": "Chicken and rice", "macros": {"calories": 650.0, "protein": 55.0, "carbs": 70.0, "fat": 12.0}, "ai_analysis": "High protein, moderate fat"}"#.to_owned()
}
