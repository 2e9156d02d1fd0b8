use async_trait::async_trait;
use rsvp_domain::{Entity, Transition};
use tracing::instrument;

use super::{load_current, Repository};
use crate::authorization::Authorize;
use crate::error::RepositoryResult;

/// Authorizes every write against the currently stored state before
/// delegating. A denied write never reaches the inner repository's write
/// path. Reads pass through.
pub struct AuthorizingRepository<R, A> {
    inner: R,
    authorizer: A,
}

impl<R, A> AuthorizingRepository<R, A> {
    pub fn new(inner: R, authorizer: A) -> Self {
        Self { inner, authorizer }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<T, R, A> Repository<T> for AuthorizingRepository<R, A>
where
    T: Entity,
    R: Repository<T>,
    A: Authorize<T>,
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
        self.authorizer
            .authorize(Transition::saving(current.as_ref(), &entity))?;
        self.inner.save(entity).await
    }

    #[instrument(skip(self), fields(entity = T::TYPE_NAME))]
    async fn delete(&self, id: T::Id) -> RepositoryResult<()> {
        let current = self.inner.load(id).await?;
        self.authorizer
            .authorize(Transition::Delete { old: &current })?;
        self.inner.delete(id).await
    }
}
