#![allow(dead_code)]

//! In-memory `ResumeStore` — used by the service tests and for running the
//! API locally without Postgres. A single `RwLock` over the map gives the
//! per-key serialization the trait requires.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ResumeStore, StoreError};
use crate::models::resume::Resume;

#[derive(Default)]
pub struct MemoryResumeStore {
    inner: RwLock<HashMap<Uuid, Resume>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn put(&self, resume: &Resume) -> Result<(), StoreError> {
        self.inner.write().await.insert(resume.id, resume.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Resume, StoreError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        let mut owned: Vec<Resume> = self
            .inner
            .read()
            .await
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        // creation order; id as tiebreak for identical timestamps
        owned.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(owned)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
