use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Resolves once shutdown is signalled or the coordinator is dropped
    pub async fn wait(mut self) {
        let _ = self.shutdown_rx.recv().await;
    }

    /// Non-blocking check, consumes the signal if present
    pub fn is_signalled(&mut self) -> bool {
        self.shutdown_rx.try_recv().is_ok()
    }
}
