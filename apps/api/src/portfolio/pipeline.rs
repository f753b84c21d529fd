//! The resume ingestion pipeline: extract text, prompt the model against the
//! profile schema, normalize, derive a slug, persist. The five steps run
//! strictly sequentially within one request; there is no cross-request
//! coordination and no retry at any step.

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::llm::LlmClient;
use crate::portfolio::models::{CandidateProfile, ProfileMeta};
use crate::portfolio::normalize::{clean_text, normalize_profile};
use crate::portfolio::prompts::{
    portfolio_extract_system, portfolio_tool, PORTFOLIO_EXTRACT_PROMPT,
};
use crate::portfolio::slug::generate_slug;
use crate::store::{resume_key, PortfolioStore};

pub struct CreatedPortfolio {
    pub slug: String,
    pub profile: CandidateProfile,
}

pub async fn create_portfolio(
    llm: &LlmClient,
    store: &PortfolioStore,
    kind: DocumentKind,
    original: &[u8],
) -> Result<CreatedPortfolio, AppError> {
    let text = extract_text(original, kind)?;
    info!("Extracted {} chars of resume text", text.len());

    let prompt = PORTFOLIO_EXTRACT_PROMPT.replace("{resume_text}", &text);
    let raw = llm
        .extract_structured(&prompt, &portfolio_extract_system(), &portfolio_tool())
        .await?;

    // The slug derives from the cleaned (pre-default) name and title, so a
    // resume with no usable identity lands on the "portfolio" fallback base.
    let (name, title) = slug_basis(&raw);
    let slug = generate_slug(&name, &title);

    let meta = ProfileMeta {
        original_resume_url: store.public_url(&resume_key(&slug, kind)),
        created_at: Utc::now(),
    };
    let profile = normalize_profile(&raw, meta);

    let artifacts = store
        .persist_portfolio(&slug, kind, original, &profile)
        .await?;

    info!(
        "Created portfolio {slug} (resume: {}, profile: {})",
        artifacts.resume_url, artifacts.json_url
    );
    Ok(CreatedPortfolio { slug, profile })
}

fn slug_basis(raw: &Value) -> (String, String) {
    let personal = raw.get("personalInfo");
    let field = |key: &str| {
        personal
            .and_then(|p| p.get(key))
            .and_then(Value::as_str)
            .map(clean_text)
            .unwrap_or_default()
    };
    (field("fullName"), field("title"))
}
