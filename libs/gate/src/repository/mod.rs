//! The repository contract and the decorators that gate writes.
//!
//! Decorators implement the same [`Repository`] trait as the store they wrap
//! and hold the next link, so they compose in whatever order the caller
//! wires them. The recommended chain is
//! [`AuthorizingRepository`] → [`ValidatingRepository`] → base store: an
//! unauthorized write is refused before it is validated or stored.

mod authorizing;
mod memory;
mod validating;

pub use authorizing::AuthorizingRepository;
pub use memory::InMemoryRepository;
pub use validating::ValidatingRepository;

use async_trait::async_trait;
use rsvp_domain::Entity;

use crate::error::{RepositoryError, RepositoryResult};

/// Load/save storage for one entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<T>>;

    /// Fails with [`RepositoryError::NotFound`] if there is no such entity.
    async fn load(&self, id: T::Id) -> RepositoryResult<T>;

    /// Inserts or replaces `entity`, returning what was stored.
    async fn save(&self, entity: T) -> RepositoryResult<T>;

    async fn delete(&self, id: T::Id) -> RepositoryResult<()>;
}

#[async_trait]
impl<T: Entity, R: Repository<T> + ?Sized> Repository<T> for std::sync::Arc<R> {
    async fn list(&self) -> RepositoryResult<Vec<T>> {
        (**self).list().await
    }

    async fn load(&self, id: T::Id) -> RepositoryResult<T> {
        (**self).load(id).await
    }

    async fn save(&self, entity: T) -> RepositoryResult<T> {
        (**self).save(entity).await
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<()> {
        (**self).delete(id).await
    }
}

/// Loads the stored state, treating "not found" as "nothing stored yet".
pub(crate) async fn load_current<T, R>(repo: &R, id: T::Id) -> RepositoryResult<Option<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    match repo.load(id).await {
        Ok(current) => Ok(Some(current)),
        Err(RepositoryError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
