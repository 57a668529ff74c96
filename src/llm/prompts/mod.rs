// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the fixed coaching policies for each AI use case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

//! # System Prompts
//!
//! Fixed per-use-case coaching policies, loaded at compile time from
//! markdown files for easy maintenance. The dynamic context sections
//! (profile, history, nutrition, labs) are rendered around these policies by
//! [`crate::intelligence`]'s prompt builders.

/// Workout progression policy for the recommendation service
pub const COACHING_POLICY: &str = include_str!("coaching_policy.md");

/// Post-session feedback rubric for the session analysis service
pub const SESSION_REVIEW_POLICY: &str = include_str!("session_review.md");

/// Nutrition-calculation policy for the food analysis service
pub const NUTRITION_CALCULATOR_POLICY: &str = include_str!("nutrition_calculator.md");

/// Health-assistant persona for the conversational chat service
pub const HEALTH_ASSISTANT_POLICY: &str = include_str!("health_assistant.md");
