//! Type-safe wrappers around [`QueueClient`](crate::framework::QueueClient).

pub mod actor_client;
pub mod order_client;

pub use actor_client::*;
pub use order_client::*;
