//! Error types for the Order actor.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// The display strings of the first two variants are shown to diners as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An active order already uses this id.
    #[error("Order already exists for this user.")]
    DuplicateOrder(OrderId),

    /// No active order uses this id.
    #[error("Order not found for this user.")]
    OrderNotFound(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
