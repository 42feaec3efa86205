//! Document store — durable key-value persistence of `Resume` aggregates
//! with secondary lookup by owner.
//!
//! The store is the only shared mutable resource in the core. Implementors
//! must provide per-key serialization and read-your-writes on a single
//! instance; callers perform no additional locking.
//!
//! Carried in `AppState` as `Arc<dyn ResumeStore>`, so the Postgres backend
//! can be swapped for the in-memory one in tests without touching callers.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::Resume;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resume {0} not found")]
    NotFound(Uuid),

    /// Backend failure. Propagated unchanged to the caller; a failed write
    /// leaves the prior persisted value intact.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Inserts or fully overwrites the resume keyed by `resume.id`.
    /// Durable before the call returns. Re-putting identical content is a
    /// no-op in effect.
    async fn put(&self, resume: &Resume) -> Result<(), StoreError>;

    async fn get(&self, id: Uuid) -> Result<Resume, StoreError>;

    /// All resumes owned by `owner_id`, in creation order.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Resume>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
