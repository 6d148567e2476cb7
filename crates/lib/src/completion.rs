//! # Completion Cleanup
//!
//! The prompt demands a bare JSON object, but models routinely wrap their
//! output in a Markdown code fence anyway. This module strips that wrapper
//! and parses what remains.

use crate::errors::ExtractError;
use serde_json::Value;

/// Strips a surrounding code fence, if any, and parses the completion as JSON.
pub fn parse_completion(completion: &str) -> Result<Value, ExtractError> {
    Ok(serde_json::from_str(strip_code_fences(completion))?)
}

/// Removes a ```` ```json ```` (or bare ```` ``` ````) wrapper around a completion.
///
/// A completion without fences is returned trimmed and otherwise untouched.
pub fn strip_code_fences(completion: &str) -> &str {
    let trimmed = completion.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    body.strip_suffix("```").unwrap_or(body).trim()
}
