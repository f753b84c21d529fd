use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::portfolio::handlers::read_upload;
use crate::scan::prompts::{scorecard_system, scorecard_tool, SCORECARD_PROMPT};
use crate::scan::scorecard::{parse_scorecard, Scorecard};
use crate::state::AppState;

/// POST /api/scan
///
/// Independent pipeline: text extraction plus one structured LLM call against
/// the scorecard schema. Nothing is persisted.
pub async fn handle_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Scorecard>, AppError> {
    let (filename, content_type, data) = read_upload(&mut multipart).await?;
    let kind = DocumentKind::detect(filename.as_deref(), content_type.as_deref());
    if kind != Some(DocumentKind::Pdf) {
        return Err(AppError::Validation(
            "scan accepts PDF resumes only".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    let text = extract_text(&data, DocumentKind::Pdf)?;
    info!("Scanning resume ({} chars extracted)", text.len());

    let prompt = SCORECARD_PROMPT.replace("{resume_text}", &text);
    let raw = state
        .llm
        .extract_structured(&prompt, &scorecard_system(), &scorecard_tool())
        .await?;

    let scorecard = parse_scorecard(&raw)?;
    Ok(Json(scorecard))
}
