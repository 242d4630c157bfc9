//! The order placed by a diner.
//!
//! [`Order`] implements the [`QueueEntity`](crate::framework::QueueEntity) trait,
//! allowing it to be managed by a [`QueueActor`](crate::framework::QueueActor).
//! The implementation lives in [`crate::order_actor::entity`].

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Client-generated identifier of an order, usually a device UUID.
///
/// Opaque: only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents an active order waiting in the queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Dish names as the client sent them.
    pub items: Vec<String>,
    /// 1-based place in the queue, kept dense by the queue.
    pub queue_number: usize,
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub id: OrderId,
    pub items: Vec<String>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Client-supplied identifier
    /// * `items` - Contents of the order
    /// * `queue_number` - Position at creation time (the queue reassigns it on cancellations)
    pub fn new(id: impl Into<OrderId>, items: Vec<String>, queue_number: usize) -> Self {
        Self {
            id: id.into(),
            items,
            queue_number,
        }
    }
}
