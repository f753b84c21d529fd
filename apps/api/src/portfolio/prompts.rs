// Portfolio extraction prompts and schema. Follows the service-local
// prompts.rs convention; shared fragments live in llm::prompts.

use serde_json::json;

use crate::llm::prompts::STRUCTURED_SYSTEM_BASE;
use crate::llm::ToolSpec;

pub fn portfolio_extract_system() -> String {
    format!(
        "{STRUCTURED_SYSTEM_BASE} \
         You extract candidate portfolio content from resume text: identity, \
         work history, projects, and skills. Keep descriptions concise and \
         copy factual details verbatim from the resume."
    )
}

pub const PORTFOLIO_EXTRACT_PROMPT: &str = r#"Extract a structured candidate profile from the resume text below.

RESUME TEXT:
{resume_text}

RULES:
1. fullName and title come from the resume header when present.
2. bio is a 2-3 sentence professional summary in the candidate's voice.
3. experience entries are ordered most recent first; period is the raw date range string.
4. projects include a link only when one appears in the resume.
5. skills is a flat list of individual technologies and competencies.
6. Use the literal string UNKNOWN for any value that is absent."#;

/// Tool declaration for the candidate-profile schema.
pub fn portfolio_tool() -> ToolSpec {
    ToolSpec {
        name: "record_candidate_profile".to_string(),
        description: "Record the structured candidate profile extracted from a resume".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "personalInfo": {
                    "type": "object",
                    "properties": {
                        "fullName": {"type": "string"},
                        "title": {"type": "string"},
                        "bio": {"type": "string"},
                        "location": {"type": "string"},
                        "email": {"type": "string"},
                        "socialLinks": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "platform": {"type": "string"},
                                    "url": {"type": "string"}
                                },
                                "required": ["platform", "url"]
                            }
                        }
                    },
                    "required": ["fullName", "title", "bio", "location", "email", "socialLinks"]
                },
                "experience": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string"},
                            "company": {"type": "string"},
                            "period": {"type": "string"},
                            "description": {"type": "string"}
                        },
                        "required": ["title", "company", "period", "description"]
                    }
                },
                "projects": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string"},
                            "description": {"type": "string"},
                            "link": {"type": "string"},
                            "techStack": {"type": "array", "items": {"type": "string"}}
                        },
                        "required": ["title", "description", "link", "techStack"]
                    }
                },
                "skills": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["personalInfo", "experience", "projects", "skills"]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_tool_schema_shape() {
        let tool = portfolio_tool();
        assert_eq!(tool.name, "record_candidate_profile");
        let schema = &tool.input_schema;
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["personalInfo"]["properties"]["socialLinks"].is_object());
        assert_eq!(schema["properties"]["skills"]["items"]["type"], "string");
    }

    #[test]
    fn test_prompt_has_resume_text_placeholder() {
        assert!(PORTFOLIO_EXTRACT_PROMPT.contains("{resume_text}"));
    }
}
