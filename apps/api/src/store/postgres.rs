//! Postgres-backed `ResumeStore`.
//!
//! One row per resume; the page/block tree is stored as a single JSONB
//! column, matching the whole-document write model (no per-block rows to
//! keep consistent). Expected schema:
//!
//! ```sql
//! CREATE TABLE resumes (
//!     id          UUID PRIMARY KEY,
//!     owner_id    UUID NOT NULL,
//!     title       TEXT NOT NULL,
//!     template    TEXT NOT NULL,
//!     pages       JSONB NOT NULL DEFAULT '[]',
//!     is_public   BOOLEAN NOT NULL DEFAULT FALSE,
//!     created_at  TIMESTAMPTZ NOT NULL,
//!     updated_at  TIMESTAMPTZ NOT NULL
//! );
//! CREATE INDEX resumes_owner_idx ON resumes (owner_id, created_at);
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ResumeStore, StoreError};
use crate::models::resume::{Page, Resume};

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResumeRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    template: String,
    pages: Value,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResumeRow {
    fn into_resume(self) -> Result<Resume, StoreError> {
        let pages: Vec<Page> = serde_json::from_value(self.pages)
            .map_err(|e| StoreError::Unavailable(format!("corrupt pages payload: {e}")))?;
        Ok(Resume {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            template: self.template,
            pages,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn put(&self, resume: &Resume) -> Result<(), StoreError> {
        let pages = serde_json::to_value(&resume.pages)
            .map_err(|e| StoreError::Unavailable(format!("pages serialization failed: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO resumes (id, owner_id, title, template, pages, is_public, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                template = EXCLUDED.template,
                pages = EXCLUDED.pages,
                is_public = EXCLUDED.is_public,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(resume.id)
        .bind(resume.owner_id)
        .bind(&resume.title)
        .bind(&resume.template)
        .bind(&pages)
        .bind(resume.is_public)
        .bind(resume.created_at)
        .bind(resume.updated_at)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Resume, StoreError> {
        let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;

        row.ok_or(StoreError::NotFound(id))?.into_resume()
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        let rows: Vec<ResumeRow> = sqlx::query_as(
            "SELECT * FROM resumes WHERE owner_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        rows.into_iter().map(ResumeRow::into_resume).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
