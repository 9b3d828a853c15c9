//! Result parsers: raw completion text in, validated results out.
//!
//! All defaulting and clamping of model output lives here. The orchestrator
//! only decides which parse failures propagate and which are swallowed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::llm_client::strip_json_fences;

/// ATS compatibility of a resume against one job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    /// Always within 0 – 100.
    pub match_score: u8,
    pub missing_keywords: Vec<String>,
    pub strong_matches: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("completion is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    UnexpectedShape(&'static str),
}

/// Match-analysis payload as the model sends it. Every field is optional and
/// untyped until normalized.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatchAnalysis {
    #[serde(default)]
    match_score: Value,
    #[serde(default)]
    missing_keywords: Value,
    #[serde(default)]
    strong_matches: Value,
    #[serde(default)]
    suggestions: Value,
}

impl From<RawMatchAnalysis> for MatchAnalysis {
    fn from(raw: RawMatchAnalysis) -> Self {
        MatchAnalysis {
            match_score: clamp_score(&raw.match_score),
            missing_keywords: string_list(raw.missing_keywords),
            strong_matches: string_list(raw.strong_matches),
            suggestions: string_list(raw.suggestions),
        }
    }
}

/// Parses a match-analysis completion. No content counts as an empty object,
/// so it yields a zero score; content that is not a JSON object is an error.
pub fn parse_match_analysis(content: Option<&str>) -> Result<MatchAnalysis, ParseError> {
    let value = parse_json_or(content, Value::Object(Default::default()))?;
    if !value.is_object() {
        return Err(ParseError::UnexpectedShape(json_type_name(&value)));
    }
    let raw: RawMatchAnalysis = serde_json::from_value(value)?;
    Ok(raw.into())
}

/// Tailored resume text, or the original resume when the model returned nothing usable.
pub fn parse_tailored_resume(content: Option<String>, original_resume: &str) -> String {
    match content {
        Some(text) if !text.trim().is_empty() => text,
        _ => original_resume.to_string(),
    }
}

/// Cover-letter text; empty when the model returned no content.
pub fn parse_cover_letter(content: Option<String>) -> String {
    content.unwrap_or_default()
}

/// Accepts `{"suggestions": [...]}` or a bare JSON array of strings.
pub fn parse_suggestions(content: Option<&str>) -> Result<Vec<String>, ParseError> {
    match parse_json_or(content, Value::Array(Vec::new()))? {
        Value::Array(items) => Ok(string_list(Value::Array(items))),
        Value::Object(mut map) => Ok(map
            .remove("suggestions")
            .map(string_list)
            .unwrap_or_default()),
        other => Err(ParseError::UnexpectedShape(json_type_name(&other))),
    }
}

fn parse_json_or(content: Option<&str>, empty: Value) -> Result<Value, ParseError> {
    match content.map(strip_json_fences).filter(|text| !text.is_empty()) {
        Some(text) => Ok(serde_json::from_str(text)?),
        None => Ok(empty),
    }
}

/// Numbers and numeric strings ("85", "85%") are rounded and clamped to 0 – 100.
/// Anything else, including NaN, scores 0.
fn clamp_score(value: &Value) -> u8 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(score) if score.is_finite() => score.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// Keeps string items in model order, trimmed; drops blanks and non-strings.
fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => {
                    let trimmed = s.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
