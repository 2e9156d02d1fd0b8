use async_trait::async_trait;
use rsvp_domain::{Entity, Transition};
use tracing::{info, instrument};

use super::{load_current, Repository};
use crate::error::RepositoryResult;
use crate::validation::Validate;

/// Validates every write against the currently stored state before
/// delegating. Reads pass through.
pub struct ValidatingRepository<R, V> {
    inner: R,
    validator: V,
}

impl<R, V> ValidatingRepository<R, V> {
    pub fn new(inner: R, validator: V) -> Self {
        Self { inner, validator }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<T, R, V> Repository<T> for ValidatingRepository<R, V>
where
    T: Entity,
    R: Repository<T>,
    V: Validate<T>,
{
    async fn list(&self) -> RepositoryResult<Vec<T>> {
        self.inner.list().await
    }

    async fn load(&self, id: T::Id) -> RepositoryResult<T> {
        self.inner.load(id).await
    }

    #[instrument(skip(self, entity), fields(entity = T::TYPE_NAME, id = %entity.id()))]
    async fn save(&self, entity: T) -> RepositoryResult<T> {
        let current = load_current(&self.inner, entity.id()).await?;

        if let Err(e) = self
            .validator
            .validate_state(Transition::saving(current.as_ref(), &entity))
        {
            info!(violations = e.messages.len(), "rejected invalid state");
            return Err(e.into());
        }

        self.inner.save(entity).await
    }

    #[instrument(skip(self), fields(entity = T::TYPE_NAME))]
    async fn delete(&self, id: T::Id) -> RepositoryResult<()> {
        let current = self.inner.load(id).await?;

        if let Err(e) = self
            .validator
            .validate_state(Transition::Delete { old: &current })
        {
            info!(violations = e.messages.len(), "rejected delete");
            return Err(e.into());
        }

        self.inner.delete(id).await
    }
}
