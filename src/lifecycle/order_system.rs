use crate::clients::OrderClient;
use crate::config::ServiceConfig;
use crate::order_actor;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the order queue.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the queue actor
/// - **Access**: Handing out the [`OrderClient`] every transport talks through
///
/// The queue starts empty and lives exactly as long as the actor task.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let queue_number = system.order_client.place_order(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl OrderSystem {
    /// Creates the order actor with the default channel capacity and starts it.
    pub fn new() -> Self {
        Self::start(order_actor::DEFAULT_BUFFER)
    }

    /// Creates the order actor sized by `config` and starts it.
    pub fn with_config(config: &ServiceConfig) -> Self {
        Self::start(config.queue_buffer)
    }

    fn start(buffer_size: usize) -> Self {
        let (order_actor, order_client) = order_actor::with_buffer(buffer_size);

        // Orders have no dependencies (Context = ())
        let handle = tokio::spawn(order_actor.run(()));
        info!(buffer_size, "Order system started");

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the channel once every other clone is gone, then
    /// waits for the actor task. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        // When the last sender is dropped the actor's receiver returns None.
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
