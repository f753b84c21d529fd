// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// System prompt fragment shared by every structured-extraction call.
pub const STRUCTURED_SYSTEM_BASE: &str = "You are a precise resume analysis engine. \
    Fill the provided tool schema exactly. \
    Never invent facts that are not present in the resume text. \
    When a value is genuinely absent from the resume, use the literal string UNKNOWN.";
