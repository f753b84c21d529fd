use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a portfolio. Transitions are monotonic:
/// `draft -> published`, `draft|published -> deleted`; nothing leaves `deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioStatus {
    Draft,
    Published,
    Deleted,
}

impl PortfolioStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioStatus::Draft => "draft",
            PortfolioStatus::Published => "published",
            PortfolioStatus::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub link: String,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMeta {
    pub original_resume_url: String,
    pub created_at: DateTime<Utc>,
}

/// Canonical normalized profile: the durable output of the pipeline and the
/// exact shape of the `{slug}.json` artifact in object storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
    pub meta: ProfileMeta,
    pub status: PortfolioStatus,
}

/// Denormalized summary row mirroring the JSON artifact for querying by slug.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub location: String,
    pub slug: String,
    pub resume_url: String,
    pub json_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PortfolioStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&PortfolioStatus::Published).unwrap(),
            "\"published\""
        );
        assert_eq!(
            serde_json::to_string(&PortfolioStatus::Deleted).unwrap(),
            "\"deleted\""
        );
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = CandidateProfile {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                title: "Engineer".to_string(),
                bio: String::new(),
                location: String::new(),
                email: String::new(),
                social_links: vec![SocialLink {
                    platform: "github".to_string(),
                    url: "https://github.com/ada".to_string(),
                }],
            },
            experience: vec![],
            projects: vec![ProjectEntry {
                title: "Engine".to_string(),
                description: String::new(),
                link: String::new(),
                tech_stack: vec!["rust".to_string()],
            }],
            skills: vec![],
            meta: ProfileMeta {
                original_resume_url: "https://cdn.example/x-resume.pdf".to_string(),
                created_at: Utc::now(),
            },
            status: PortfolioStatus::Draft,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["personalInfo"]["fullName"], "Ada Lovelace");
        assert_eq!(value["personalInfo"]["socialLinks"][0]["platform"], "github");
        assert_eq!(value["projects"][0]["techStack"][0], "rust");
        assert!(value["meta"]["originalResumeUrl"].is_string());
        assert_eq!(value["status"], "draft");
    }
}
