// Scan (scorecard) prompts and schema.

use serde_json::json;

use crate::llm::prompts::STRUCTURED_SYSTEM_BASE;
use crate::llm::ToolSpec;

pub fn scorecard_system() -> String {
    format!(
        "{STRUCTURED_SYSTEM_BASE} \
         You grade resumes the way an applicant tracking system would: \
         section by section, with concrete issues and actionable suggestions. \
         Scores are integers from 0 to 100."
    )
}

pub const SCORECARD_PROMPT: &str = r#"Grade the resume text below and fill the scorecard schema.

RESUME TEXT:
{resume_text}

RULES:
1. Grade each major section separately (summary, experience, projects, skills, education).
2. overall_score reflects content quality; ats_score reflects machine readability.
3. Every issue needs a severity (critical | warning | info), a finding, and a suggestion.
4. total_issues is the count of issues across all sections."#;

/// Tool declaration for the scorecard schema.
pub fn scorecard_tool() -> ToolSpec {
    ToolSpec {
        name: "record_resume_scorecard".to_string(),
        description: "Record the structured quality scorecard for a resume".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "overall_score": {"type": "number", "minimum": 0, "maximum": 100},
                "ats_score": {"type": "number", "minimum": 0, "maximum": 100},
                "total_issues": {"type": "integer", "minimum": 0},
                "sections": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "score": {"type": "number", "minimum": 0, "maximum": 100},
                            "issues": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "severity": {"type": "string", "enum": ["critical", "warning", "info"]},
                                        "text": {"type": "string"},
                                        "suggestion": {"type": "string"}
                                    },
                                    "required": ["severity", "text", "suggestion"]
                                }
                            }
                        },
                        "required": ["name", "score", "issues"]
                    }
                }
            },
            "required": ["overall_score", "ats_score", "total_issues", "sections"]
        }),
    }
}
