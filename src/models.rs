// ABOUTME: Core data models for the ironcoach coaching pipeline
// ABOUTME: Defines workout, profile, nutrition, and lab inputs plus the typed AI output shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

//! # Data Models
//!
//! Immutable value objects passed in and out of the coaching core. The core
//! never owns or mutates any of these; callers construct them per request
//! from storage and persist whatever the core returns.
//!
//! ## Input Models
//!
//! - [`WorkoutSession`]: a logged session with exercises, sets, and RPE
//! - [`UserProfile`]: goals, principles, and accumulated coaching takeaways
//! - [`DayNutrition`]: meals and aggregate macro totals for one day
//! - [`LabResult`]: a single blood-work marker reading
//!
//! ## Output Models (closed JSON shapes)
//!
//! - [`WorkoutPlan`]: next-workout recommendation
//! - [`SessionAnalysis`]: post-workout feedback plus advisory profile deltas
//! - [`MealAnalysis`]: structured macros for a free-text meal description
//!
//! Output shapes are strict on required fields: a model response missing any
//! of them fails deserialization and is treated as malformed. Unknown keys
//! are ignored, matching serde's default tolerance.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Workout Inputs
// ============================================================================

/// A single set within an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetEntry {
    /// Weight lifted in kilograms
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Rate of Perceived Exertion, 1-10 subjective intensity scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Free-text note for this set (e.g. "grindy lockout")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An exercise performed during a session, with its ordered sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name (e.g. "Squat", "Bench")
    pub name: String,
    /// Ordered sets as performed
    pub sets: Vec<SetEntry>,
    /// Optional exercise-level notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A completed workout session from the caller's stored history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Caller-assigned session identifier
    pub id: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Ordered exercises as performed
    pub exercises: Vec<Exercise>,
    /// Overall subjective feeling after the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_feeling: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

/// Short- and long-term training goals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Goals {
    /// Goals for the current training block
    #[serde(default)]
    pub short_term: Vec<String>,
    /// Multi-month goals
    #[serde(default)]
    pub long_term: Vec<String>,
}

/// The user's coaching profile, read-only to the core
///
/// The core *proposes* additions to `takeaways` and `physical_context` via
/// [`SessionAnalysis`] but never writes them back; the caller persists the
/// merge if it chooses to accept the proposals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Training goals
    #[serde(default)]
    pub goals: Goals,
    /// Training principles the coach must respect
    #[serde(default)]
    pub principles: Vec<String>,
    /// Physical context (injuries, limitations, bodyweight)
    #[serde(default)]
    pub physical_context: Vec<String>,
    /// User-specific nutrition rules applied during food analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_rules: Option<Vec<String>>,
    /// Accumulated coach-discovered facts about the user
    #[serde(default)]
    pub takeaways: Vec<String>,
}

// ============================================================================
// Nutrition
// ============================================================================

/// Macronutrient totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    /// Kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Meal identifier
    pub id: String,
    /// Day the meal was eaten
    pub date: NaiveDate,
    /// Time of day, `HH:MM`
    pub time: String,
    /// Meal description (cleaned by the model when AI-analyzed)
    pub description: String,
    /// Macro estimate for this meal
    pub macros: Macros,
    /// Short AI calculation note (e.g. "High protein, good start")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

impl Meal {
    /// Build a persistable meal from an AI food analysis
    ///
    /// The core returns [`MealAnalysis`] only; callers use this to stamp an
    /// id and timestamp before persisting.
    #[must_use]
    pub fn from_analysis(analysis: MealAnalysis, date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            time: time.into(),
            description: analysis.description,
            macros: analysis.macros,
            ai_analysis: Some(analysis.ai_analysis),
        }
    }
}

/// One day of nutrition: meals plus aggregate totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayNutrition {
    /// The day these totals cover
    pub date: NaiveDate,
    /// Meals logged for the day
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Aggregate macro totals across meals
    pub total: Macros,
}

impl DayNutrition {
    /// An empty day with zeroed totals, for callers with nothing logged
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            total: Macros::default(),
        }
    }
}

// ============================================================================
// Labs
// ============================================================================

/// A single lab marker result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabResult {
    /// Caller-assigned identifier
    pub id: String,
    /// Sample date
    pub date: NaiveDate,
    /// Marker name (e.g. "Vitamin D", "Ferritin")
    pub marker: String,
    /// Measured value
    pub value: f64,
    /// Unit (e.g. "ng/mL")
    pub unit: String,
    /// Reference range from the lab report (e.g. "30-100")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// AI Output Shapes
// ============================================================================

/// One prescribed exercise in a recommended plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Prescribed number of sets
    pub sets: u32,
    /// Prescribed repetitions per set
    pub reps: u32,
    /// Prescribed weight in kilograms
    pub weight: f64,
    /// Coaching cue for this exercise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A recommended next workout, produced by the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// The coach's reasoning for this plan
    pub reasoning: String,
    /// Ordered exercises to perform
    pub plan: Vec<PlannedExercise>,
}

impl WorkoutPlan {
    /// Sentinel plan returned when no model credential is configured
    ///
    /// Recommendation is a read path with a safe empty fallback, so the
    /// service resolves with this instead of failing.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            reasoning: "AI is offline (missing API key).".to_owned(),
            plan: Vec::new(),
        }
    }
}

/// Post-workout coaching feedback plus advisory profile deltas
///
/// `new_takeaways` and `updated_context` are proposals; the core never merges
/// them into the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionAnalysis {
    /// Newly learned concise lessons/facts about the user
    pub new_takeaways: Vec<String>,
    /// Physical context updates, if anything changed
    pub updated_context: Vec<String>,
    /// Direct coach-to-user feedback message
    pub feedback: String,
}

impl SessionAnalysis {
    /// Sentinel analysis returned when no model credential is configured
    #[must_use]
    pub fn offline() -> Self {
        Self {
            new_takeaways: Vec::new(),
            updated_context: Vec::new(),
            feedback: "AI Offline (missing API key)".to_owned(),
        }
    }
}

/// Structured macros and a short note for a free-text meal description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealAnalysis {
    /// Cleaned-up meal description
    pub description: String,
    /// Estimated macro totals
    pub macros: Macros,
    /// Brief calculation note from the model
    pub ai_analysis: String,
}
