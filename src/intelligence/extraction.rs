// ABOUTME: Best-effort JSON recovery from free-form model completions
// ABOUTME: Strips code fences, isolates the JSON span, and parses into typed shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ironcoach contributors

//! # Response Extraction
//!
//! Generative models are asked for JSON only, but in practice wrap it in
//! markdown code fences or conversational prose despite instructions. This
//! module masks that noise with a narrow, well-tested heuristic:
//!
//! 1. remove literal ```` ```json ```` and ```` ``` ```` fence markers
//!    anywhere in the text;
//! 2. slice from the first `{` to the last `}` when both are present,
//!    discarding preamble and postamble;
//! 3. strict typed deserialization into the use case's closed shape.
//!
//! This is bracket surgery, not a parser, and is documented as best-effort:
//! a `{` inside leading prose can defeat it. The services' bounded retry
//! loop is the real safety net.

use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Remove literal markdown code-fence markers anywhere in the text
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Slice to the span between the first `{` and the last `}`, inclusive
///
/// Returns the trimmed input unchanged when no such span exists; strict
/// parsing downstream rejects it there.
#[must_use]
pub fn extract_json_span(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text.trim(),
    }
}

/// Parse a raw model completion into the expected typed shape
///
/// Applies fence stripping and span isolation before strict deserialization.
/// Required fields missing from the response are a failure; unknown keys are
/// ignored by the destination types.
///
/// # Errors
///
/// Returns a serialization error when the cleaned text still does not parse
/// into `T`. Callers decide whether to re-invoke the model.
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    let without_fences = strip_code_fences(raw);
    let candidate = extract_json_span(&without_fences);

    serde_json::from_str(candidate).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("model output does not match the expected shape: {e}"),
        )
    })
}
