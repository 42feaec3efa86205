//! Resume service — the only path by which identities read or mutate
//! resumes. Enforces ownership via `policy`, validates drafts, and keeps
//! the owner directory's back-references in step with create/delete.
//!
//! Updates are whole-document replacements: the caller always submits the
//! complete desired page/block tree. Two concurrent replaces on the same
//! id resolve last-writer-wins; there is no version token (see DESIGN.md).

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::OwnerDirectory;
use crate::models::resume::{Page, Resume};
use crate::resume::policy;
use crate::store::ResumeStore;

/// A client-submitted document body, shared by create and replace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraft {
    pub title: String,
    pub template: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    /// On replace, `None` retains the stored value.
    #[serde(default)]
    pub is_public: Option<bool>,
}

impl ResumeDraft {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
        if self.template.trim().is_empty() {
            return Err(AppError::Validation(
                "template must not be empty".to_string(),
            ));
        }
        for page in &self.pages {
            page.validate()?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ResumeService {
    store: Arc<dyn ResumeStore>,
    owners: Arc<dyn OwnerDirectory>,
}

impl ResumeService {
    pub fn new(store: Arc<dyn ResumeStore>, owners: Arc<dyn OwnerDirectory>) -> Self {
        Self { store, owners }
    }

    /// Creates a resume owned by `owner_id` and records the back-reference
    /// in the owner directory.
    pub async fn create(&self, owner_id: Uuid, draft: ResumeDraft) -> Result<Resume, AppError> {
        draft.validate()?;

        let now = Utc::now();
        let resume = Resume {
            id: Uuid::new_v4(),
            owner_id,
            title: draft.title,
            template: draft.template,
            pages: draft.pages,
            is_public: draft.is_public.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        self.store.put(&resume).await?;
        self.owners.attach(owner_id, resume.id).await?;

        tracing::info!("Created resume {} for owner {owner_id}", resume.id);
        Ok(resume)
    }

    /// Returns the resume if it is public or owned by the requester.
    /// NotFound and Forbidden stay distinct; a non-owner probing a private
    /// id learns it exists, which is accepted for client UX.
    pub async fn fetch(&self, requester_id: Uuid, id: Uuid) -> Result<Resume, AppError> {
        let resume = self.store.get(id).await?;
        if !policy::can_read(requester_id, &resume) {
            return Err(AppError::Forbidden);
        }
        Ok(resume)
    }

    /// Whole-document overwrite. Title, template, and pages are replaced
    /// entirely; an empty `pages` truncates, it does not merge. `is_public`
    /// changes only when the draft supplies it. `id`, `owner_id`, and
    /// `created_at` are immutable.
    pub async fn replace(
        &self,
        requester_id: Uuid,
        id: Uuid,
        draft: ResumeDraft,
    ) -> Result<Resume, AppError> {
        let existing = self.store.get(id).await?;
        if !policy::can_write(requester_id, &existing) {
            return Err(AppError::Forbidden);
        }
        draft.validate()?;

        let resume = Resume {
            title: draft.title,
            template: draft.template,
            pages: draft.pages,
            is_public: draft.is_public.unwrap_or(existing.is_public),
            updated_at: Utc::now(),
            ..existing
        };

        self.store.put(&resume).await?;
        Ok(resume)
    }

    /// Removes the resume and prunes the owner's back-reference.
    pub async fn delete(&self, requester_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let existing = self.store.get(id).await?;
        if !policy::can_write(requester_id, &existing) {
            return Err(AppError::Forbidden);
        }

        self.store.delete(id).await?;
        self.owners.detach(existing.owner_id, id).await?;

        tracing::info!("Deleted resume {id} for owner {}", existing.owner_id);
        Ok(())
    }

    /// All resumes owned by `owner_id`, owner-only — public visibility
    /// affects single-document fetch, never listing.
    pub async fn list_owned(
        &self,
        requester_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Vec<Resume>, AppError> {
        if requester_id != owner_id {
            return Err(AppError::Forbidden);
        }
        Ok(self.store.list_by_owner(owner_id).await?)
    }
}
