// ABOUTME: Pure prompt builders rendering coaching policy plus bounded context snapshots
// ABOUTME: Owns context windowing and the labeled section layout of every prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

//! # Prompt Builders
//!
//! Deterministic functions turning a fixed per-use-case policy plus a
//! context snapshot into a single prompt string with clearly labeled
//! sections. No state, no I/O; unit-testable with string-contains
//! assertions.
//!
//! History and lab inputs are truncated to the most recent entries *by array
//! order* before inclusion. This bounds prompt size as a cost/latency
//! control, not a correctness requirement; callers pre-sort if chronological
//! recency matters.

use serde::Serialize;

use crate::llm::prompts::{
    COACHING_POLICY, HEALTH_ASSISTANT_POLICY, NUTRITION_CALCULATOR_POLICY, SESSION_REVIEW_POLICY,
};
use crate::llm::ChatMessage;
use crate::models::{DayNutrition, LabResult, UserProfile, WorkoutSession};

/// Window size for workout history and labs in recommendation prompts
pub const RECENT_WINDOW: usize = 5;

/// Window size for history in session-analysis prompts
pub const ANALYSIS_HISTORY_WINDOW: usize = 3;

/// Fallback focus label when the caller supplies none
pub const DEFAULT_FOCUS: &str = "General";

/// The last `n` entries of a slice, by array order
#[must_use]
pub fn recent<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Pretty-print a value for prompt inclusion
///
/// Serialization of our own models cannot fail; the fallback keeps this
/// function total.
fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_owned())
}

/// Render the next-workout recommendation prompt
#[must_use]
pub fn build_recommendation_prompt(
    history: &[WorkoutSession],
    profile: &UserProfile,
    nutrition: &DayNutrition,
    labs: &[LabResult],
    focus: Option<&str>,
) -> String {
    let recent_history = recent(history, RECENT_WINDOW);
    let recent_labs = recent(labs, RECENT_WINDOW);
    let focus = match focus {
        Some(f) if !f.trim().is_empty() => f,
        _ => DEFAULT_FOCUS,
    };

    format!(
        "{COACHING_POLICY}\n\
        \n\
        USER PROFILE (The \"Truth\"):\n\
        {profile}\n\
        \n\
        TODAY'S NUTRITION (Fuel Status):\n\
        Totals: {totals}\n\
        \n\
        INTERNAL BIOMARKERS (Labs):\n\
        {labs}\n\
        \n\
        CURRENT HISTORY:\n\
        {history}\n\
        \n\
        TODAY'S FOCUS/CONTEXT: {focus}\n\
        \n\
        INSTRUCTIONS:\n\
        1. Respect User Profile.\n\
        2. CONSIDER EVERYTHING (Bio-Digital Twin):\n\
           - Nutrition: Low fuel -> Lower volume.\n\
           - Labs: If markers are off (e.g. Low Iron, Low T, High Inflammation), \
        suggest lighter load or recovery focus. Mention this in reasoning.\n\
        3. Use takeaways to inform next step.\n\
        \n\
        Make your recommendation in JSON format.",
        profile = to_pretty_json(profile),
        totals = to_pretty_json(&nutrition.total),
        labs = to_pretty_json(&recent_labs),
        history = to_pretty_json(&recent_history),
    )
}

/// Render the post-session analysis prompt
#[must_use]
pub fn build_session_analysis_prompt(
    session: &WorkoutSession,
    history: &[WorkoutSession],
    profile: &UserProfile,
) -> String {
    let recent_history = recent(history, ANALYSIS_HISTORY_WINDOW);

    format!(
        "{SESSION_REVIEW_POLICY}\n\
        \n\
        USER PROFILE:\n\
        {profile}\n\
        \n\
        RECENT HISTORY (Last {window}):\n\
        {history}\n\
        \n\
        COMPLETED SESSION (Just now):\n\
        {session}",
        window = ANALYSIS_HISTORY_WINDOW,
        profile = to_pretty_json(profile),
        history = to_pretty_json(&recent_history),
        session = to_pretty_json(session),
    )
}

/// Render the food-analysis prompt
#[must_use]
pub fn build_food_analysis_prompt(description: &str, rules: &[String]) -> String {
    let rules_block = rules
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{NUTRITION_CALCULATOR_POLICY}\n\
        \n\
        USER SPECIFIC CONTEXT (Apply these strictly):\n\
        {rules_block}\n\
        \n\
        INPUT: \"{description}\""
    )
}

/// Render the conversational health-assistant prompt over full context
#[must_use]
pub fn build_chat_prompt(
    profile: &UserProfile,
    history: &[WorkoutSession],
    nutrition: &DayNutrition,
    labs: &[LabResult],
    messages: &[ChatMessage],
) -> String {
    let conversation = messages
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str().to_uppercase(), m.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{HEALTH_ASSISTANT_POLICY}\n\
        \n\
        USER NAME: {name}\n\
        \n\
        1. **Profile (Stats & Principles):** {profile}\n\
        2. **Recent Workouts:** {history}\n\
        3. **Today's Nutrition:** {nutrition}\n\
        4. **Lab Results:** {labs}\n\
        \n\
        CONVERSATION HISTORY:\n\
        {conversation}\n\
        \n\
        ASSISTANT:",
        name = profile.name,
        profile = to_pretty_json(profile),
        history = to_pretty_json(&recent(history, RECENT_WINDOW)),
        nutrition = to_pretty_json(nutrition),
        labs = to_pretty_json(&recent(labs, RECENT_WINDOW)),
    )
}
