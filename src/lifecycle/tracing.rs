//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); the actor tags its events with `entity_type` instead.
//! Levels come from the `RUST_LOG` environment variable.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, mutations, HTTP access lines
//! RUST_LOG=debug cargo run    # every request, including payloads
//! RUST_LOG=dineline::server=debug,info cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, and `Shutdown` with the final queue size
//! - **Mutations**: `Enqueued` and `Cancelled` with id, position and new size (info)
//! - **Reads**: `Count`, `Position`, `Get`, `Snapshot` (debug)
//! - **Rejections**: duplicate ids, unknown ids and failed hooks (warn)
//! - **Client spans**: `place_order`, `queue_number`, `cancel_order` carry the order id
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Order system started buffer_size=32
//! INFO Actor started entity_type="Order"
//! INFO place_order: Sending place_order to actor id=abc123
//! INFO Enqueued entity_type="Order" id=abc123 position=1 size=1
//! INFO POST /placeOrder status=200
//! WARN Enqueue rejected entity_type="Order" error=Already queued: abc123
//! INFO POST /placeOrder status=400
//! INFO cancel_order: Sending cancel_order to actor id=OrderId("abc123")
//! INFO Cancelled entity_type="Order" id=abc123 position=1 size=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "place_order")
        .init();
}
