//! # Core Queue Framework
//!
//! This module defines the generic building blocks for the queue actor.
//!
//! ## Key Types
//!
//! - [`QueueEntity`]: The trait that every queued resource must implement.
//! - [`QueueActor`]: The generic actor that owns an [`OrderQueue`] and serializes access to it.
//! - [`QueueClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, Duplicate, NotFound).

use crate::framework::queue::OrderQueue;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks)
// =============================================================================

/// Trait that any queued entity must implement to be managed by [`QueueActor`].
///
/// # Architecture Note
/// The queue logic (uniqueness, dense positions, suffix renumbering) is written *once*
/// in [`OrderQueue`]. An entity only has to say what its identifier is, where its
/// position lives, and how to build itself from a creation payload.
///
/// Unlike a keyed store, the identifier is chosen by the caller and travels inside the
/// creation payload, which is why [`QueueEntity::create_id`] exists: the queue must be
/// able to reject a duplicate before anything is constructed.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other services. The `Context` type is
/// injected into every hook at `run()` time ("Late Binding"). Use `()` when there are no
/// dependencies.
///
/// # Provided Methods (Hooks)
/// - [`QueueEntity::on_create`]
/// - [`QueueEntity::on_cancel`]
///
/// Both default to `Ok(())`. A hook that fails aborts the operation and leaves the
/// queue untouched.
#[async_trait]
pub trait QueueEntity: Clone + Send + Sync + 'static {
    /// The caller-supplied identifier, compared only for equality.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to enqueue a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type returned by construction and hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this entry.
    fn id(&self) -> &Self::Id;

    /// The identifier a creation payload asks for.
    fn create_id(params: &Self::Create) -> &Self::Id;

    /// The current 1-based position of this entry.
    fn position(&self) -> usize;

    /// Overwrites the position. Only the queue calls this.
    fn set_position(&mut self, position: usize);

    /// Construct the full entity from its payload and the position it will occupy.
    /// This is called synchronously before `on_create`.
    fn from_create_params(params: Self::Create, position: usize) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it joins the queue.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the entity leaves the queue.
    async fn on_cancel(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the queue framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Already queued: {0}")]
    Duplicate(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to the actor to request operations.
///
/// One variant per queue operation. Every variant carries its own responder, so the
/// actor answers each request exactly once, in the order requests arrived.
#[derive(Debug)]
pub enum QueueRequest<T: QueueEntity> {
    Count {
        respond_to: Response<usize>,
    },
    Enqueue {
        params: T::Create,
        respond_to: Response<usize>,
    },
    Position {
        id: T::Id,
        respond_to: Response<usize>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Cancel {
        id: T::Id,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a queue of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the [`OrderQueue`] and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially*. The duplicate check and the append of an
/// enqueue, and the removal and renumbering of a cancel, therefore run as one critical
/// section without any `Mutex` around the queue.
pub struct QueueActor<T: QueueEntity> {
    receiver: mpsc::Receiver<QueueRequest<T>>,
    queue: OrderQueue<T>,
}

impl<T: QueueEntity> QueueActor<T> {
    /// Creates the actor and its client. `buffer_size` bounds the request channel;
    /// callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, QueueClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            queue: OrderQueue::new(),
        };
        let client = QueueClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "dineline::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                QueueRequest::Count { respond_to } => {
                    let count = self.queue.count();
                    debug!(entity_type, count, "Count");
                    let _ = respond_to.send(Ok(count));
                }
                QueueRequest::Enqueue { params, respond_to } => {
                    debug!(entity_type, ?params, "Enqueue");
                    let mut item = match self.queue.admit(params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Enqueue rejected");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };
                    // Await the async hook
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, id = %item.id(), error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let id = item.id().clone();
                    let position = self.queue.push(item);
                    info!(entity_type, %id, position, size = self.queue.count(), "Enqueued");
                    let _ = respond_to.send(Ok(position));
                }
                QueueRequest::Position { id, respond_to } => {
                    let result = self.queue.position(&id);
                    debug!(entity_type, %id, found = result.is_ok(), "Position");
                    let _ = respond_to.send(result);
                }
                QueueRequest::Get { id, respond_to } => {
                    let item = self.queue.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                QueueRequest::Cancel { id, respond_to } => {
                    debug!(entity_type, %id, "Cancel");
                    let Some(item) = self.queue.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Await the async hook
                    if let Err(e) = item.on_cancel(&context).await {
                        warn!(entity_type, %id, error = %e, "on_cancel failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let result = self.queue.cancel(&id).map(|removed| {
                        info!(
                            entity_type,
                            %id,
                            position = removed.position(),
                            size = self.queue.count(),
                            "Cancelled"
                        );
                    });
                    let _ = respond_to.send(result);
                }
                QueueRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.queue.count(), "Snapshot");
                    let _ = respond_to.send(Ok(self.queue.snapshot()));
                }
            }
        }

        info!(entity_type, size = self.queue.count(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`QueueActor`].
///
/// Holds only a sender, so cloning is cheap. Once the actor has stopped every call
/// fails with [`FrameworkError::ActorClosed`].
#[derive(Clone)]
pub struct QueueClient<T: QueueEntity> {
    sender: mpsc::Sender<QueueRequest<T>>,
}

impl<T: QueueEntity> QueueClient<T> {
    pub fn new(sender: mpsc::Sender<QueueRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| QueueRequest::Count { respond_to })
            .await
    }

    pub async fn enqueue(&self, params: T::Create) -> Result<usize, FrameworkError> {
        self.request(|respond_to| QueueRequest::Enqueue { params, respond_to })
            .await
    }

    pub async fn position(&self, id: T::Id) -> Result<usize, FrameworkError> {
        self.request(|respond_to| QueueRequest::Position { id, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| QueueRequest::Get { id, respond_to })
            .await
    }

    pub async fn cancel(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| QueueRequest::Cancel { id, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| QueueRequest::Snapshot { respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> QueueRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
