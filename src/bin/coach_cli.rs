// ABOUTME: coach-cli - command-line front end for the ironcoach AI services
// ABOUTME: Loads JSON context files, runs a coaching service, prints the typed result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors
//!
//! Usage:
//! ```bash
//! # Recommend the next workout from stored context
//! coach-cli recommend --history history.json --profile profile.json --focus "Bench heavy"
//!
//! # Analyze a completed session
//! coach-cli analyze-session --session session.json --history history.json --profile profile.json
//!
//! # Turn a meal description into macros
//! coach-cli analyze-food "200g chicken breast, 150g rice" --rule "I drink oat milk"
//!
//! # Ask the health assistant a question
//! coach-cli chat "Should I train today?" --profile profile.json --history history.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

use ironcoach::intelligence::{AiCoach, CoachingContext};
use ironcoach::llm::ChatMessage;
use ironcoach::logging;
use ironcoach::models::{DayNutrition, LabResult, UserProfile, WorkoutSession};

#[derive(Parser)]
#[command(
    name = "coach-cli",
    about = "ironcoach AI coaching CLI",
    long_about = "Runs the AI coaching services over JSON context files and prints the typed result."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend the next workout
    Recommend {
        /// Workout history JSON file (array of sessions)
        #[arg(long)]
        history: Option<PathBuf>,
        /// User profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Day nutrition JSON file
        #[arg(long)]
        nutrition: Option<PathBuf>,
        /// Lab results JSON file (array)
        #[arg(long)]
        labs: Option<PathBuf>,
        /// Today's focus/context (defaults to "General")
        #[arg(long)]
        focus: Option<String>,
    },

    /// Analyze a completed session
    AnalyzeSession {
        /// The completed session JSON file
        #[arg(long)]
        session: PathBuf,
        /// Workout history JSON file (array of sessions)
        #[arg(long)]
        history: Option<PathBuf>,
        /// User profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Convert a meal description into structured macros
    AnalyzeFood {
        /// Free-text meal description
        description: String,
        /// User-specific nutrition rule (repeatable)
        #[arg(long = "rule")]
        rules: Vec<String>,
    },

    /// Ask the health assistant a question over full context
    Chat {
        /// The question to ask
        message: String,
        /// Workout history JSON file (array of sessions)
        #[arg(long)]
        history: Option<PathBuf>,
        /// User profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Day nutrition JSON file
        #[arg(long)]
        nutrition: Option<PathBuf>,
        /// Lab results JSON file (array)
        #[arg(long)]
        labs: Option<PathBuf>,
    },
}

/// Load a JSON context file, or fall back to a default when no path is given
async fn load_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => load_json(path).await,
        None => Ok(T::default()),
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_result<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn load_nutrition(path: Option<&Path>) -> Result<DayNutrition> {
    match path {
        Some(path) => load_json(path).await,
        None => Ok(DayNutrition::empty(chrono::Utc::now().date_naive())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let cli = Cli::parse();
    let coach = AiCoach::from_env();

    match cli.command {
        Command::Recommend {
            history,
            profile,
            nutrition,
            labs,
            focus,
        } => {
            let history: Vec<WorkoutSession> = load_or_default(history.as_deref()).await?;
            let profile: UserProfile = load_or_default(profile.as_deref()).await?;
            let nutrition = load_nutrition(nutrition.as_deref()).await?;
            let labs: Vec<LabResult> = load_or_default(labs.as_deref()).await?;

            let plan = coach
                .recommend_workout(&history, &profile, &nutrition, &labs, focus.as_deref())
                .await?;
            print_result(&plan)?;
        }

        Command::AnalyzeSession {
            session,
            history,
            profile,
        } => {
            let session: WorkoutSession = load_json(&session).await?;
            let history: Vec<WorkoutSession> = load_or_default(history.as_deref()).await?;
            let profile: UserProfile = load_or_default(profile.as_deref()).await?;

            let analysis = coach.analyze_session(&session, &history, &profile).await?;
            print_result(&analysis)?;
        }

        Command::AnalyzeFood { description, rules } => {
            let meal = coach.analyze_food(&description, &rules).await?;
            print_result(&meal)?;
        }

        Command::Chat {
            message,
            history,
            profile,
            nutrition,
            labs,
        } => {
            let history: Vec<WorkoutSession> = load_or_default(history.as_deref()).await?;
            let profile: UserProfile = load_or_default(profile.as_deref()).await?;
            let nutrition = load_nutrition(nutrition.as_deref()).await?;
            let labs: Vec<LabResult> = load_or_default(labs.as_deref()).await?;

            let context = CoachingContext {
                profile: &profile,
                history: &history,
                nutrition: &nutrition,
                labs: &labs,
            };
            let reply = coach.chat(&[ChatMessage::user(message)], context).await?;
            println!("{reply}");
        }
    }

    Ok(())
}
