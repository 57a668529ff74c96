// ABOUTME: Main library entry point for the ironcoach AI coaching core
// ABOUTME: Exposes the coaching services, LLM provider layer, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

#![deny(unsafe_code)]

//! # ironcoach
//!
//! The AI coaching core of a personal strength and health tracker. It turns
//! stored domain history (workouts, profile, nutrition, labs) into typed
//! coaching output by assembling prompts, invoking a hosted generative
//! model, and robustly parsing the model's free-form completions, with
//! bounded retry on malformed output.
//!
//! ## Services
//!
//! - **Recommendation**: next-workout plan from recent history and context
//! - **Session analysis**: post-workout feedback plus advisory profile deltas
//! - **Food analysis**: free-text meal description to structured macros
//! - **Chat**: conversational answers over the user's full health data
//!
//! Storage, HTTP routing, and auth are external collaborators: a route layer
//! gathers context, calls a service, and persists or forwards the typed
//! result. The core holds no state beyond the shared model provider handle.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ironcoach::intelligence::AiCoach;
//! use ironcoach::models::{DayNutrition, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> ironcoach::errors::AppResult<()> {
//!     let coach = AiCoach::from_env();
//!     let nutrition = DayNutrition::empty(chrono::Utc::now().date_naive());
//!     let plan = coach
//!         .recommend_workout(&[], &UserProfile::default(), &nutrition, &[], None)
//!         .await?;
//!     println!("{}", plan.reasoning);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration for the coaching core
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// AI coaching intelligence: prompts, extraction, and services
pub mod intelligence;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Common data models for coaching inputs and typed AI outputs
pub mod models;
