//! Pure data structures (DTOs) implementing the [`QueueEntity`](crate::framework::QueueEntity) trait.

pub mod order;

pub use order::*;
