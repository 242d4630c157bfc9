use crate::framework::{FrameworkError, QueueClient, QueueEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read-only queue operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// operations that need no domain-specific error mapping beyond [`ActorClient::map_error`].
#[async_trait]
pub trait ActorClient<T: QueueEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic QueueClient.
    fn inner(&self) -> &QueueClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entry by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Number of active entries.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }

    /// Every active entry in queue order.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
