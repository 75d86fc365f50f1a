//! Timer services for periodic and delayed work
//!
//! Components never receive callbacks. A [`TimerService`] hands out a
//! [`TimerHandle`] for every schedule and the host's event loop passes the
//! handle back to the owning component when the timer fires. Every state
//! change therefore happens on the host's single thread.
//!
//! - `tokio_timer` - tokio tasks that post [`TimerFired`] into a channel
//! - `manual` - a virtual clock for tests and headless drivers

mod manual;
mod tokio_timer;

pub use manual::ManualTimer;
pub use tokio_timer::TokioTimer;

use std::fmt;
use std::time::Duration;

/// Opaque identifier of one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Notification that a timer elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired(pub TimerHandle);

/// Scheduling capability injected into components
pub trait TimerService {
    /// Fire every `period` until cancelled. The first fire is one period from now.
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle;

    /// Fire once after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a timer. Unknown or already finished handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}
