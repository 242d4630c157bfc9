//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` queue actor.
//! It wraps a `QueueClient<Order>` and translates framework errors into [`OrderError`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, QueueClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: QueueClient<Order>,
}

impl OrderClient {
    pub fn new(inner: QueueClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order at the back of the queue and returns its queue number.
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<usize, OrderError> {
        debug!(?params, "place_order called");
        info!("Sending place_order to actor");
        self.inner.enqueue(params).await.map_err(to_order_error)
    }

    /// Current queue number of an active order.
    #[instrument(skip(self))]
    pub async fn queue_number(&self, id: OrderId) -> Result<usize, OrderError> {
        debug!("Sending request");
        self.inner.position(id).await.map_err(to_order_error)
    }

    /// Cancels an active order; everyone behind it moves up one place.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<(), OrderError> {
        info!("Sending cancel_order to actor");
        self.inner.cancel(id).await.map_err(to_order_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &QueueClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        to_order_error(e)
    }
}

fn to_order_error(e: FrameworkError) -> OrderError {
    match e {
        FrameworkError::Duplicate(id) => OrderError::DuplicateOrder(OrderId(id)),
        FrameworkError::NotFound(id) => OrderError::OrderNotFound(OrderId(id)),
        FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
            Ok(order_error) => *order_error,
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        },
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}
