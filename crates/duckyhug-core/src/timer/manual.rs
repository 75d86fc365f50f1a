use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use super::{TimerHandle, TimerService};

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
struct State {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<TimerHandle, Entry>,
}

/// Deterministic timer driven by a virtual clock
///
/// Nothing fires on its own. Call [`ManualTimer::advance_with`] to move the
/// clock forward and dispatch each expiry in order. Clones share the same
/// clock, so a driver can keep one clone while a component owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    state: Rc<RefCell<State>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.state.borrow().entries.contains_key(&handle)
    }

    pub fn scheduled_count(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Move the clock forward by `by`, calling `on_fire` for every expiry.
    ///
    /// Expiries are dispatched in due-time order (ties by handle) and the
    /// clock sits at the expiry instant during the callback, so the callback
    /// may cancel or schedule timers and the rest of the advance sees it.
    pub fn advance_with<F>(&self, by: Duration, mut on_fire: F)
    where
        F: FnMut(TimerHandle),
    {
        let target = self.now() + by;

        loop {
            let fired = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .entries
                    .iter()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(handle, entry)| (entry.due, **handle))
                    .map(|(handle, entry)| (*handle, *entry));

                match next {
                    Some((handle, entry)) => {
                        state.now = entry.due;
                        match entry.period {
                            Some(period) => {
                                if let Some(e) = state.entries.get_mut(&handle) {
                                    e.due += period;
                                }
                            }
                            None => {
                                state.entries.remove(&handle);
                            }
                        }
                        Some(handle)
                    }
                    None => None,
                }
            };

            match fired {
                Some(handle) => on_fire(handle),
                None => break,
            }
        }

        self.state.borrow_mut().now = target;
    }

    /// Move the clock forward and return every expiry in order
    pub fn advance(&self, by: Duration) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        self.advance_with(by, |handle| fired.push(handle));
        fired
    }

    fn schedule(&mut self, delay: Duration, period: Option<Duration>) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let handle = TimerHandle::new(state.next_id);
        let due = state.now + delay;
        state.entries.insert(handle, Entry { due, period });
        handle
    }
}

impl TimerService for ManualTimer {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        // A zero period would never let the clock move past the expiry
        let period = period.max(Duration::from_millis(1));
        self.schedule(period, Some(period))
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.schedule(delay, None)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.state.borrow_mut().entries.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn test_repeating_fires_per_period() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule_repeating(5 * SEC);

        assert!(timer.advance(4 * SEC).is_empty());
        assert_eq!(timer.advance(SEC), vec![handle]);
        assert_eq!(timer.advance(10 * SEC), vec![handle, handle]);
        assert_eq!(timer.now(), 15 * SEC);
    }

    #[test]
    fn test_once_fires_and_is_removed() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule_once(2 * SEC);

        assert_eq!(timer.advance(3 * SEC), vec![handle]);
        assert!(!timer.is_scheduled(handle));
        assert!(timer.advance(10 * SEC).is_empty());
    }

    #[test]
    fn test_expiries_are_ordered() {
        let mut timer = ManualTimer::new();
        let slow = timer.schedule_repeating(3 * SEC);
        let fast = timer.schedule_once(SEC);

        assert_eq!(timer.advance(6 * SEC), vec![fast, slow, slow]);
    }

    #[test]
    fn test_callback_can_cancel_remaining() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule_repeating(SEC);
        let mut canceller = timer.clone();

        let mut count = 0;
        timer.advance_with(10 * SEC, |fired| {
            count += 1;
            canceller.cancel(fired);
        });

        assert_eq!(count, 1);
        assert!(!timer.is_scheduled(handle));
        assert_eq!(timer.now(), 10 * SEC);
    }

    #[test]
    fn test_cancel_unknown_is_noop() {
        let mut timer = ManualTimer::new();
        timer.cancel(TimerHandle::new(42));
        assert_eq!(timer.scheduled_count(), 0);
    }
}
