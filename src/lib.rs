#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # DineLine
//!
//! > **A first-come-first-served order queue behind a single actor.**
//!
//! Diners place an order under an id their device generates, get a queue number back,
//! can ask for their current number, and can cancel. Cancelling moves everybody behind
//! them up one place, so queue numbers are always exactly `1..=N`.
//!
//! ## 🏗️ Design
//!
//! ### One actor owns the queue
//! The queue is process-wide mutable state. Instead of wrapping it in a `Mutex`, a single
//! [`QueueActor`](framework::QueueActor) owns it and processes requests one at a time
//! from a channel. The duplicate check and append of an enqueue, and the removal and
//! renumbering of a cancel, can therefore never interleave with another request.
//!
//! ### The state machine is plain Rust
//! [`OrderQueue`](framework::OrderQueue) is synchronous and knows nothing about actors or
//! HTTP. Its tests exercise the ordering rules directly.
//!
//! ### Type-Safe Error Handling
//! The framework reports [`FrameworkError`](framework::FrameworkError); the order client
//! turns it into [`OrderError`](order_actor::OrderError), whose messages are what diners see.
//!
//! ### Observability
//! `tracing` everywhere, installed by [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`QueueEntity`](framework::QueueEntity), [`OrderQueue`](framework::OrderQueue),
//!   [`QueueActor`](framework::QueueActor), [`QueueClient`](framework::QueueClient).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`OrderSystem`](lifecycle::OrderSystem), [`shutdown`](lifecycle::OrderSystem::shutdown).
//!
//! ### 3. The Interface ([`clients`])
//! - **Key items**: [`OrderClient`](clients::OrderClient), [`ActorClient`](clients::ActorClient).
//!
//! ### 4. The Implementation ([`model`], [`order_actor`])
//! - **Role**: The [`Order`](model::Order) entity and its errors.
//!
//! ### 5. The Transport ([`server`], [`config`])
//! - **Role**: HTTP/1 routes over the client, configured from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:8000/placeOrder -H 'Content-Type: application/json' \
//!      -d '{"uuid": "abc123", "order": ["Nasi Lemak", "Teh Tarik"]}'
//! curl "localhost:8000/getQueueNumber?uuid=abc123"
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod server;
