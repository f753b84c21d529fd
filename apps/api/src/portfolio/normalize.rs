//! Field normalizer: turns the raw provider object into a `CandidateProfile`.
//!
//! This step is pure: no I/O, deterministic for the same input, and
//! `clean_text` is idempotent. Provider sentinel values are eliminated here,
//! so nothing downstream ever sees them.

use serde_json::Value;

use crate::portfolio::models::{
    CandidateProfile, ExperienceEntry, PersonalInfo, PortfolioStatus, ProfileMeta, ProjectEntry,
    SocialLink,
};

/// Literal marker the provider emits for "no value available".
pub const SENTINEL: &str = "UNKNOWN";

const DEFAULT_NAME: &str = "Candidate";
const DEFAULT_TITLE: &str = "Professional";

/// Cleans a free-text field: sentinel values become empty; leading list
/// prefixes are stripped; newlines become a period-delimited joiner; repeated
/// periods collapse; markdown emphasis characters are removed; whitespace
/// collapses to single spaces.
pub fn clean_text(raw: &str) -> String {
    if raw.contains(SENTINEL) {
        return String::new();
    }

    let stripped = strip_list_prefix(raw);

    // Newline runs become sentence boundaries.
    let joined = stripped
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(". ");

    let mut collapsed = String::with_capacity(joined.len());
    let mut prev_dot = false;
    for c in joined.chars() {
        match c {
            '.' => {
                if !prev_dot {
                    collapsed.push('.');
                }
                prev_dot = true;
            }
            '*' | '_' | '`' => {
                prev_dot = false;
            }
            _ => {
                collapsed.push(c);
                prev_dot = false;
            }
        }
    }

    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips leading bullet, punctuation, and numbered-list prefixes, repeatedly,
/// so the result is a fixed point. Numbers are only consumed when they form a
/// list marker ("1. ", "2) "); "12.5% growth" keeps its digits.
fn strip_list_prefix(s: &str) -> &str {
    let mut rest = s;
    loop {
        let trimmed = rest.trim_start();
        if let Some(stripped) = trimmed.strip_prefix([
            '-', '\u{2013}', '\u{2014}', '\u{2022}', '\u{00b7}', '*', '>', '#', '.', ',', ';', ':',
            '(', ')', '_', '`',
        ]) {
            rest = stripped;
            continue;
        }
        let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            let after = &trimmed[digits..];
            if let Some(tail) = after.strip_prefix(['.', ')']) {
                if tail.is_empty() || tail.starts_with(char::is_whitespace) {
                    rest = tail;
                    continue;
                }
            }
        }
        return trimmed;
    }
}

/// Cleans an opaque value (URL, email): sentinel check and trim only, since
/// markdown stripping would corrupt underscores in addresses and paths.
fn clean_opaque(raw: &str) -> String {
    if raw.contains(SENTINEL) {
        return String::new();
    }
    raw.trim().to_string()
}

fn text_field(obj: &Value, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).map(clean_text).unwrap_or_default()
}

fn opaque_field(obj: &Value, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(clean_opaque)
        .unwrap_or_default()
}

/// Anything expected to be a list that is not list-shaped coerces to empty.
fn array<'a>(obj: &'a Value, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_list(obj: &Value, key: &str) -> Vec<String> {
    array(obj, key)
        .iter()
        .filter_map(Value::as_str)
        .map(clean_text)
        .filter(|s| !s.is_empty())
        .collect()
}

fn normalize_social_links(personal: &Value) -> Vec<SocialLink> {
    array(personal, "socialLinks")
        .iter()
        .filter_map(|entry| {
            let url = entry.get("url").and_then(Value::as_str)?;
            let platform = entry.get("platform").and_then(Value::as_str).unwrap_or("");
            if url.trim().is_empty() || url.contains(SENTINEL) || platform.contains(SENTINEL) {
                return None;
            }
            Some(SocialLink {
                platform: platform.trim().to_string(),
                url: url.trim().to_string(),
            })
        })
        .collect()
}

/// Builds a validated `CandidateProfile` from the raw provider object,
/// applying cleaning, defaulting, and array coercion. Status is always
/// `draft` at creation time.
pub fn normalize_profile(raw: &Value, meta: ProfileMeta) -> CandidateProfile {
    let null = Value::Null;
    let personal = raw.get("personalInfo").unwrap_or(&null);

    let mut full_name = text_field(personal, "fullName");
    if full_name.is_empty() {
        full_name = DEFAULT_NAME.to_string();
    }
    let mut title = text_field(personal, "title");
    if title.is_empty() {
        title = DEFAULT_TITLE.to_string();
    }

    let personal_info = PersonalInfo {
        full_name,
        title,
        bio: text_field(personal, "bio"),
        location: text_field(personal, "location"),
        email: opaque_field(personal, "email"),
        social_links: normalize_social_links(personal),
    };

    let experience = array(raw, "experience")
        .iter()
        .map(|entry| ExperienceEntry {
            title: text_field(entry, "title"),
            company: text_field(entry, "company"),
            period: text_field(entry, "period"),
            description: text_field(entry, "description"),
        })
        .collect();

    let projects = array(raw, "projects")
        .iter()
        .map(|entry| ProjectEntry {
            title: text_field(entry, "title"),
            description: text_field(entry, "description"),
            link: opaque_field(entry, "link"),
            tech_stack: string_list(entry, "techStack"),
        })
        .collect();

    CandidateProfile {
        personal_info,
        experience,
        projects,
        skills: string_list(raw, "skills"),
        meta,
        status: PortfolioStatus::Draft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn meta() -> ProfileMeta {
        ProfileMeta {
            original_resume_url: "https://cdn.example/test-resume.pdf".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_clean_is_idempotent() {
        let samples = [
            "- Led a team of 12\nShipped the v2 platform",
            "* **Bold claim** with `code`",
            "1. first item",
            "  plain text already clean  ",
            "Improved throughput...\n\n...by 40%",
            "_1. underscore bullet_",
            "12.5% growth YoY",
        ];
        for s in samples {
            let once = clean_text(s);
            let twice = clean_text(&once);
            assert_eq!(once, twice, "clean not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_sentinel_value_becomes_empty() {
        assert_eq!(clean_text("UNKNOWN"), "");
        assert_eq!(clean_text("City: UNKNOWN"), "");
    }

    #[test]
    fn test_bullet_prefix_stripped() {
        assert_eq!(clean_text("- Shipped the thing"), "Shipped the thing");
        assert_eq!(clean_text("• Shipped the thing"), "Shipped the thing");
        assert_eq!(clean_text("2) Shipped the thing"), "Shipped the thing");
    }

    #[test]
    fn test_leading_numbers_survive_when_not_list_markers() {
        assert_eq!(clean_text("12.5% growth YoY"), "12.5% growth YoY");
        assert_eq!(clean_text("2024 award winner"), "2024 award winner");
    }

    #[test]
    fn test_newlines_become_period_joiner() {
        assert_eq!(clean_text("line one\nline two"), "line one. line two");
        assert_eq!(clean_text("ends with dot.\nnext"), "ends with dot. next");
    }

    #[test]
    fn test_markdown_emphasis_stripped() {
        assert_eq!(clean_text("uses **bold** and `code`"), "uses bold and code");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_text("too   many\t spaces"), "too many spaces");
    }

    #[test]
    fn test_defaults_applied_for_empty_name_and_title() {
        let raw = json!({"personalInfo": {"fullName": "", "title": ""}});
        let profile = normalize_profile(&raw, meta());
        assert_eq!(profile.personal_info.full_name, "Candidate");
        assert_eq!(profile.personal_info.title, "Professional");
    }

    #[test]
    fn test_sentinel_full_name_falls_through_to_default() {
        // Scenario: provider reports UNKNOWN for the name, a real title, and
        // empty sections. Cleaning empties the name, then defaulting applies.
        let raw = json!({
            "personalInfo": {"fullName": "UNKNOWN", "title": "Engineer", "bio": "..."},
            "experience": [],
            "projects": [],
            "skills": []
        });
        let profile = normalize_profile(&raw, meta());
        assert_eq!(profile.personal_info.full_name, "Candidate");
        assert_eq!(profile.personal_info.title, "Engineer");
    }

    #[test]
    fn test_social_links_dropped_not_nulled() {
        let raw = json!({"personalInfo": {"socialLinks": [
            {"platform": "github", "url": "https://github.com/ada"},
            {"platform": "UNKNOWN", "url": "https://x.com/ada"},
            {"platform": "linkedin", "url": "UNKNOWN"},
            {"platform": "dribbble"},
            {"platform": "mastodon", "url": "  "}
        ]}});
        let profile = normalize_profile(&raw, meta());
        assert_eq!(
            profile.personal_info.social_links,
            vec![SocialLink {
                platform: "github".to_string(),
                url: "https://github.com/ada".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_array_fields_coerce_to_empty_lists() {
        let raw = json!({
            "personalInfo": {"fullName": "Ada"},
            "experience": "ten years",
            "projects": {"title": "not a list"},
            "skills": 42
        });
        let profile = normalize_profile(&raw, meta());
        assert!(profile.experience.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_email_underscores_preserved() {
        let raw = json!({"personalInfo": {"fullName": "Ada", "email": " ada_l@example.com "}});
        let profile = normalize_profile(&raw, meta());
        assert_eq!(profile.personal_info.email, "ada_l@example.com");
    }

    #[test]
    fn test_project_links_trimmed_not_rewritten() {
        let raw = json!({"projects": [
            {"title": "Engine", "link": " https://github.com/ada/analytical_engine ", "techStack": ["rust"]}
        ]});
        let profile = normalize_profile(&raw, meta());
        assert_eq!(
            profile.projects[0].link,
            "https://github.com/ada/analytical_engine"
        );
        assert_eq!(profile.projects[0].tech_stack, vec!["rust"]);
    }

    #[test]
    fn test_emptied_skill_entries_are_dropped() {
        let raw = json!({"skills": ["Rust", "UNKNOWN", "  ", "SQL"]});
        let profile = normalize_profile(&raw, meta());
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_new_profile_status_is_draft() {
        let profile = normalize_profile(&json!({}), meta());
        assert_eq!(profile.status, PortfolioStatus::Draft);
    }

    #[test]
    fn test_experience_fields_cleaned() {
        let raw = json!({"experience": [{
            "title": "- **Senior Engineer**",
            "company": "Initech",
            "period": "2019 - 2023",
            "description": "Built the billing system\nOwned on-call rotation"
        }]});
        let profile = normalize_profile(&raw, meta());
        let entry = &profile.experience[0];
        assert_eq!(entry.title, "Senior Engineer");
        assert_eq!(entry.period, "2019 - 2023");
        assert_eq!(
            entry.description,
            "Built the billing system. Owned on-call rotation"
        );
    }
}
