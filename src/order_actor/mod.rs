//! Order-specific queue logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::QueueActor;
use crate::model::Order;

/// Request channel capacity used by [`new`].
pub const DEFAULT_BUFFER: usize = 32;

/// Creates a new Order actor and its client.
pub fn new() -> (QueueActor<Order>, OrderClient) {
    with_buffer(DEFAULT_BUFFER)
}

/// Creates a new Order actor whose request channel holds `buffer_size` messages.
pub fn with_buffer(buffer_size: usize) -> (QueueActor<Order>, OrderClient) {
    let (actor, generic_client) = QueueActor::new(buffer_size);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
