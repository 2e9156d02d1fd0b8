use std::collections::BTreeMap;

use async_trait::async_trait;
use rsvp_domain::Versioned;
use tokio::sync::RwLock;
use tracing::debug;

use super::Repository;
use crate::error::{RepositoryError, RepositoryResult};

/// Process-local store with optimistic concurrency on the entity version.
///
/// A save must carry the version it was loaded at; the stored copy gets the
/// next version. New entities are stored at version 1.
pub struct InMemoryRepository<T: Versioned> {
    items: RwLock<BTreeMap<T::Id, T>>,
}

impl<T: Versioned> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<T: Versioned> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Versioned> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn load(&self, id: T::Id) -> RepositoryResult<T> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(T::TYPE_NAME, id))
    }

    async fn save(&self, mut entity: T) -> RepositoryResult<T> {
        let mut items = self.items.write().await;
        let id = entity.id();

        let stored_version = items.get(&id).map_or(0, |current| current.version());
        if entity.version() != stored_version {
            return Err(RepositoryError::Conflict {
                entity: T::TYPE_NAME,
                id: id.to_string(),
                expected: stored_version,
                actual: entity.version(),
            });
        }

        entity.set_version(stored_version + 1);
        items.insert(id, entity.clone());
        debug!(entity = T::TYPE_NAME, %id, version = entity.version(), "stored");
        Ok(entity)
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<()> {
        self.items
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(T::TYPE_NAME, id))
    }
}
