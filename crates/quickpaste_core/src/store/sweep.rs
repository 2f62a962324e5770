//! Periodic background removal of expired pastes.

use super::EntryStore;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a running expiry sweeper.
///
/// Dropping the handle stops the sweeper at its next wake-up; call
/// [`SweeperHandle::shutdown`] to stop it and wait for it to exit.
pub struct SweeperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop and wait for the task to finish.
    pub async fn shutdown(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(err) = (&mut self.task).await {
            tracing::warn!("Expiry sweeper ended abnormally: {}", err);
        }
    }

    /// Whether the sweeper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start sweeping expired pastes from `store` every `period`.
///
/// The task only holds a weak reference to the store and exits once the store
/// is dropped, the handle is dropped, or shutdown is requested. The first sweep
/// runs one full `period` after spawning.
///
/// # Panics
/// Panics when called outside a tokio runtime, or if `period` is zero.
pub fn spawn_sweeper(store: &Arc<EntryStore>, period: Duration) -> SweeperHandle {
    let store = Arc::downgrade(store);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let task = tokio::spawn(run_sweeper(store, period, shutdown_rx));
    tracing::info!("Expiry sweeper started (every {:?})", period);
    SweeperHandle {
        shutdown: Some(shutdown_tx),
        task,
    }
}

async fn run_sweeper(
    store: Weak<EntryStore>,
    period: Duration,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Fires on explicit shutdown and when the handle is dropped.
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                let Some(store) = store.upgrade() else {
                    break;
                };
                match store.pastes.sweep_expired() {
                    Ok(0) => {}
                    Ok(removed) => tracing::info!(removed, "Swept expired pastes"),
                    Err(err) => tracing::error!("Expiry sweep failed: {}", err),
                }
            }
        }
    }
    tracing::debug!("Expiry sweeper stopped");
}
