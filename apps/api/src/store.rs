//! Persistence writer: object storage artifacts plus the queryable summary row.
//!
//! Write policy: the two storage uploads are the source of
//! truth and any failure there aborts the operation; the summary row is a
//! best-effort index whose insert failure is logged and swallowed. Status
//! mutations touch only the summary row, never the artifacts.

use aws_sdk_s3::primitives::ByteStream;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::DocumentKind;
use crate::portfolio::models::{CandidateProfile, PortfolioRow, PortfolioStatus};

/// Explicit storage configuration handed in at construction time.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub bucket: String,
    pub public_base_url: String,
}

impl StoreConfig {
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{key}",
            self.public_base_url.trim_end_matches('/'),
            self.bucket
        )
    }
}

/// Storage key of the original uploaded document.
pub fn resume_key(slug: &str, kind: DocumentKind) -> String {
    format!("{slug}-resume.{}", kind.extension())
}

/// Storage key of the normalized profile JSON.
pub fn profile_key(slug: &str) -> String {
    format!("{slug}.json")
}

#[derive(Clone)]
pub struct PortfolioStore {
    s3: aws_sdk_s3::Client,
    db: PgPool,
    config: StoreConfig,
}

/// Public URLs of the two artifacts written for one portfolio.
#[derive(Debug, Clone)]
pub struct PersistedArtifacts {
    pub resume_url: String,
    pub json_url: String,
}

impl PortfolioStore {
    pub fn new(s3: aws_sdk_s3::Client, db: PgPool, config: StoreConfig) -> Self {
        Self { s3, db, config }
    }

    pub fn public_url(&self, key: &str) -> String {
        self.config.public_url(key)
    }

    /// Durably stores the original document, the profile JSON, and the summary
    /// row. Step order is fixed: resume upload (fatal on failure), profile
    /// JSON upload (fatal on failure), then the best-effort row insert.
    pub async fn persist_portfolio(
        &self,
        slug: &str,
        kind: DocumentKind,
        original: &[u8],
        profile: &CandidateProfile,
    ) -> Result<PersistedArtifacts, AppError> {
        let resume_key = resume_key(slug, kind);
        self.put_object(&resume_key, original.to_vec(), kind.content_type())
            .await?;
        let resume_url = self.public_url(&resume_key);
        info!("Uploaded original resume to s3://{}/{resume_key}", self.config.bucket);

        let profile_key = profile_key(slug);
        let profile_json = serde_json::to_vec(profile)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("profile serialization: {e}")))?;
        self.put_object(&profile_key, profile_json, "application/json")
            .await?;
        let json_url = self.public_url(&profile_key);
        info!("Uploaded profile JSON to s3://{}/{profile_key}", self.config.bucket);

        // Best-effort index; object storage is the source of truth.
        if let Err(e) = self
            .insert_summary_row(slug, profile, &resume_url, &json_url)
            .await
        {
            error!("Summary row insert failed for {slug}: {e}. Artifacts remain authoritative.");
        }

        Ok(PersistedArtifacts {
            resume_url,
            json_url,
        })
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError> {
        self.s3
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("upload of {key} failed: {e}")))?;
        Ok(())
    }

    async fn insert_summary_row(
        &self,
        slug: &str,
        profile: &CandidateProfile,
        resume_url: &str,
        json_url: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO portfolios
                (id, full_name, job_title, email, location, slug, resume_url, json_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&profile.personal_info.full_name)
        .bind(&profile.personal_info.title)
        .bind(&profile.personal_info.email)
        .bind(&profile.personal_info.location)
        .bind(slug)
        .bind(resume_url)
        .bind(json_url)
        .bind(PortfolioStatus::Draft.as_str())
        .execute(&self.db)
        .await?;
        Ok(())
    }

    /// `draft -> published`. Idempotent for already-published rows; a deleted
    /// or missing slug is a uniform not-found so deletion is never reversed.
    pub async fn set_published(&self, slug: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE portfolios SET status = 'published' WHERE slug = $1 AND status <> 'deleted'",
        )
        .bind(slug)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("portfolio {slug} not found")));
        }
        info!("Published portfolio {slug}");
        Ok(())
    }

    /// Soft delete: hides the row from public reads, retains both artifacts.
    /// Repeating the call on an existing slug succeeds (idempotent).
    pub async fn set_deleted(&self, slug: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE portfolios SET status = 'deleted' WHERE slug = $1")
            .bind(slug)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("portfolio {slug} not found")));
        }
        info!("Soft-deleted portfolio {slug}");
        Ok(())
    }

    /// Row lookup for anonymous reads. The `status = 'published'` predicate is
    /// the authorization check: draft, deleted, and nonexistent slugs are
    /// indistinguishable to the caller.
    pub async fn fetch_published(&self, slug: &str) -> Result<PortfolioRow, AppError> {
        let row: Option<PortfolioRow> =
            sqlx::query_as("SELECT * FROM portfolios WHERE slug = $1 AND status = 'published'")
                .bind(slug)
                .fetch_optional(&self.db)
                .await?;

        row.ok_or_else(|| AppError::NotFound(format!("portfolio {slug} not found")))
    }

    /// Fetches and parses the profile JSON artifact. Any fetch or parse
    /// failure is reported as not-found, same as a missing row.
    pub async fn fetch_profile_json(&self, slug: &str) -> Result<Value, AppError> {
        let key = profile_key(slug);
        let not_found = || AppError::NotFound(format!("portfolio {slug} not found"));

        let object = self
            .s3
            .get_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|_| not_found())?;

        let bytes = object.body.collect().await.map_err(|_| not_found())?;
        serde_json::from_slice(&bytes.into_bytes()).map_err(|_| not_found())
    }
}
