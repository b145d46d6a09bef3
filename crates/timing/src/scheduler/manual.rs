use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{Callback, Scheduler};

/// Identifies a timer queued on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A virtual clock that only moves when told to.
///
/// Timers fire from [`advance`](Self::advance) / [`advance_to`](Self::advance_to)
/// in deadline order, ties broken by scheduling order. Before each callback
/// runs, [`now`](Scheduler::now) is set to that timer's deadline. Callbacks run
/// without the internal lock held, so they may schedule or cancel timers;
/// anything they schedule that falls due within the same advance also fires.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use plainkit_timing::{ManualScheduler, Scheduler};
///
/// let clock = ManualScheduler::new();
/// let hits = Arc::new(AtomicUsize::new(0));
/// let hits_clone = hits.clone();
/// clock.schedule_after(Duration::from_millis(50), Box::new(move || {
///     hits_clone.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// clock.advance(Duration::from_millis(49));
/// assert_eq!(hits.load(Ordering::SeqCst), 0);
/// clock.advance(Duration::from_millis(1));
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), Callback>,
    deadlines: HashMap<u64, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, firing every timer that falls due.
    /// Returns the number of callbacks run. The clock saturates at
    /// `Duration::MAX`.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.inner.lock().now.saturating_add(by);
        self.advance_to(target)
    }

    /// Moves the clock to `target`. The clock never runs backwards; a target in
    /// the past only fires timers that are already due.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let callback = {
                let mut state = self.inner.lock();
                let due = matches!(
                    state.queue.first_key_value(),
                    Some((&(deadline, _), _)) if deadline <= target
                );
                if !due {
                    break;
                }
                let Some(((deadline, id), callback)) = state.queue.pop_first() else {
                    break;
                };
                state.deadlines.remove(&id);
                state.now = state.now.max(deadline);
                callback
            };
            callback();
            fired += 1;
        }
        let mut state = self.inner.lock();
        state.now = state.now.max(target);
        fired
    }

    /// Number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Deadline of the earliest queued timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.inner.lock().queue.keys().next().map(|&(deadline, _)| deadline)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn now(&self) -> Duration {
        self.inner.lock().now
    }

    fn schedule_after(&self, delay: Duration, callback: Callback) -> TimerId {
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now.saturating_add(delay);
        state.queue.insert((deadline, id), callback);
        state.deadlines.insert(id, deadline);
        TimerId(id)
    }

    fn cancel(&self, handle: TimerId) {
        let mut state = self.inner.lock();
        if let Some(deadline) = state.deadlines.remove(&handle.0) {
            state.queue.remove(&(deadline, handle.0));
        }
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}
