use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::extract::DocumentKind;
use crate::portfolio::pipeline::create_portfolio;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SlugRequest {
    pub slug: String,
}

/// Pulls the `file` field out of a multipart form.
pub(crate) async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(Option<String>, Option<String>, bytes::Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        return Ok((filename, content_type, data));
    }
    Err(AppError::Validation(
        "multipart form must contain a 'file' field".to_string(),
    ))
}

/// POST /api/create-portfolio
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let (filename, content_type, data) = read_upload(&mut multipart).await?;
    let kind = DocumentKind::detect(filename.as_deref(), content_type.as_deref()).ok_or_else(
        || AppError::Validation("unsupported file type; upload a .pdf or .docx resume".to_string()),
    )?;
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    let created = create_portfolio(&state.llm, &state.store, kind, &data).await?;

    let mut body = serde_json::to_value(&created.profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("response serialization: {e}")))?;
    body["ok"] = json!(true);
    body["slug"] = json!(created.slug);
    Ok(Json(body))
}

/// POST /api/publish-portfolio
pub async fn handle_publish_portfolio(
    State(state): State<AppState>,
    Json(req): Json<SlugRequest>,
) -> Result<Json<Value>, AppError> {
    let slug = non_empty_slug(&req)?;
    state.store.set_published(slug).await?;
    Ok(Json(json!({"ok": true, "slug": slug})))
}

/// POST /api/delete-portfolio
pub async fn handle_delete_portfolio(
    State(state): State<AppState>,
    Json(req): Json<SlugRequest>,
) -> Result<Json<Value>, AppError> {
    let slug = non_empty_slug(&req)?;
    state.store.set_deleted(slug).await?;
    Ok(Json(json!({"ok": true})))
}

/// GET /api/portfolio/:slug
///
/// Only published portfolios are visible: hidden and nonexistent slugs both
/// come back as the same not-found response.
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.store.fetch_published(&slug).await?;
    let profile = state.store.fetch_profile_json(&slug).await?;
    Ok(Json(profile))
}

fn non_empty_slug(req: &SlugRequest) -> Result<&str, AppError> {
    let slug = req.slug.trim();
    if slug.is_empty() {
        return Err(AppError::Validation("missing slug".to_string()));
    }
    Ok(slug)
}
