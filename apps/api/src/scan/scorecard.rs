//! Scorecard types and validation for the resume scan pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm::LlmError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanIssue {
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScore {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub issues: Vec<ScanIssue>,
}

/// Structured resume-quality assessment returned by the scan endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub ats_score: f64,
    #[serde(default)]
    pub total_issues: u32,
    pub sections: Vec<SectionScore>,
}

/// Validates and types the raw provider object. A response whose `sections`
/// is missing or not array-shaped is invalid provider output, not a crash.
pub fn parse_scorecard(raw: &Value) -> Result<Scorecard, LlmError> {
    match raw.get("sections") {
        Some(sections) if sections.is_array() => {}
        _ => {
            return Err(LlmError::SchemaViolation(
                "scorecard response has no 'sections' array".to_string(),
            ))
        }
    }

    serde_json::from_value(raw.clone())
        .map_err(|e| LlmError::SchemaViolation(format!("scorecard shape mismatch: {e}")))
}
