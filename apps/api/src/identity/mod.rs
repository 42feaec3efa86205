#![allow(dead_code)]

//! Owner directory — the slice of the identity collaborator this core
//! touches. Identity itself (auth, profiles, subscriptions) is out of
//! scope; the only coordination point is the denormalized list of resume
//! ids each owner carries, appended to on create and pruned on delete.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::StoreError;

#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    /// Records `resume_id` against the owner. Idempotence is not required;
    /// the service calls this exactly once per created resume.
    async fn attach(&self, owner_id: Uuid, resume_id: Uuid) -> Result<(), StoreError>;

    /// Removes `resume_id` from the owner's list. Missing entries are not
    /// an error (the identity side may already have pruned).
    async fn detach(&self, owner_id: Uuid, resume_id: Uuid) -> Result<(), StoreError>;

    async fn resume_ids(&self, owner_id: Uuid) -> Result<Vec<Uuid>, StoreError>;
}

/// Postgres-backed directory over the identity service's `users` table,
/// which carries a `resume_ids UUID[]` column.
pub struct PgOwnerDirectory {
    pool: PgPool,
}

impl PgOwnerDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl OwnerDirectory for PgOwnerDirectory {
    async fn attach(&self, owner_id: Uuid, resume_id: Uuid) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET resume_ids = array_append(resume_ids, $2) WHERE id = $1")
            .bind(owner_id)
            .bind(resume_id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    async fn detach(&self, owner_id: Uuid, resume_id: Uuid) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET resume_ids = array_remove(resume_ids, $2) WHERE id = $1")
            .bind(owner_id)
            .bind(resume_id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    async fn resume_ids(&self, owner_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        let ids: Option<Vec<Uuid>> =
            sqlx::query_scalar("SELECT resume_ids FROM users WHERE id = $1")
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(unavailable)?;
        Ok(ids.unwrap_or_default())
    }
}

/// In-memory directory, paired with `MemoryResumeStore` in tests.
#[derive(Default)]
pub struct MemoryOwnerDirectory {
    inner: RwLock<HashMap<Uuid, Vec<Uuid>>>,
}

impl MemoryOwnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerDirectory for MemoryOwnerDirectory {
    async fn attach(&self, owner_id: Uuid, resume_id: Uuid) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .entry(owner_id)
            .or_default()
            .push(resume_id);
        Ok(())
    }

    async fn detach(&self, owner_id: Uuid, resume_id: Uuid) -> Result<(), StoreError> {
        if let Some(ids) = self.inner.write().await.get_mut(&owner_id) {
            ids.retain(|id| *id != resume_id);
        }
        Ok(())
    }

    async fn resume_ids(&self, owner_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .get(&owner_id)
            .cloned()
            .unwrap_or_default())
    }
}
