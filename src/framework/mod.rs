//! Generic queue actor framework.
//!
//! This module provides the building blocks for a first-come-first-served queue whose
//! state is owned by a single actor task.
//!
//! # Main Components
//!
//! - [`QueueEntity`] - Trait that queued types implement
//! - [`OrderQueue`] - The synchronous queue state machine
//! - [`QueueActor`] - Generic actor that owns a queue and serializes every operation
//! - [`QueueClient`] - Type-safe handle for sending requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;
pub mod queue;

// Re-export core types for convenience
pub use self::core::*;
pub use self::queue::OrderQueue;
