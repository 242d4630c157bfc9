//! # System Lifecycle
//!
//! Starts the order queue actor, hands out its client, and shuts it down again.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - `Shutdown size=N`
//! 4. **Await completion** - [`OrderSystem::shutdown`] joins the task
//!
//! Every clone of the client keeps the actor alive, so transports must drop theirs first.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`](self::tracing) module.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::*;
