use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{TimerFired, TimerHandle, TimerService};

#[derive(Default)]
struct Shared {
    next_id: AtomicU64,
    tasks: Mutex<HashMap<TimerHandle, JoinHandle<()>>>,
}

/// Timer service backed by tokio tasks
///
/// Each schedule spawns a task that only posts [`TimerFired`] into the
/// channel given at construction. Clones share the handle counter and the
/// task table, so handles are unique across every clone.
///
/// Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct TokioTimer {
    tx: mpsc::UnboundedSender<TimerFired>,
    shared: Arc<Shared>,
}

impl TokioTimer {
    pub fn new(tx: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            tx,
            shared: Arc::new(Shared::default()),
        }
    }

    /// Create a timer together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Number of timers that are scheduled and not yet finished
    pub fn active_count(&self) -> usize {
        let mut tasks = self.lock_tasks();
        tasks.retain(|_, task| !task.is_finished());
        tasks.len()
    }

    /// Cancel every outstanding timer
    pub fn cancel_all(&self) {
        let mut tasks = self.lock_tasks();
        for (handle, task) in tasks.drain() {
            debug!(%handle, "Cancelling timer on shutdown");
            task.abort();
        }
    }

    fn next_handle(&self) -> TimerHandle {
        TimerHandle::new(self.shared.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn lock_tasks(&self) -> std::sync::MutexGuard<'_, HashMap<TimerHandle, JoinHandle<()>>> {
        // A poisoned table still holds valid JoinHandles
        self.shared
            .tasks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn track(&self, handle: TimerHandle, task: JoinHandle<()>) {
        let mut tasks = self.lock_tasks();
        tasks.retain(|_, task| !task.is_finished());
        tasks.insert(handle, task);
    }
}

impl TimerService for TokioTimer {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        // tokio::time::interval panics on a zero period
        let period = period.max(Duration::from_millis(1));
        let handle = self.next_handle();
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // Skip the first tick (fires immediately)
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(TimerFired(handle)).is_err() {
                    warn!(%handle, "Timer receiver dropped, stopping repeating timer");
                    break;
                }
            }
        });

        debug!(%handle, period_ms = period.as_millis() as u64, "Scheduled repeating timer");
        self.track(handle, task);
        handle
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = self.next_handle();
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(TimerFired(handle)).is_err() {
                warn!(%handle, "Timer receiver dropped before one-shot timer fired");
            }
        });

        debug!(%handle, delay_ms = delay.as_millis() as u64, "Scheduled one-shot timer");
        self.track(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.lock_tasks().remove(&handle) {
            task.abort();
            debug!(%handle, "Cancelled timer");
        }
    }
}
