use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::options::DEFAULT_LIMIT;
use crate::pending::{take_matching, Pending};
use crate::scheduler::Scheduler;

type Action<A> = Box<dyn FnMut(A) + Send + 'static>;

/// Leading-edge on first use, trailing-edge afterwards.
///
/// - The very first [`call`](Self::call) runs the action immediately and
///   records `last_ran_at`.
/// - Every later call cancels the pending trailing timer and schedules a new
///   one for `limit - (now - last_ran_at)` (zero once the window has passed)
///   carrying that call's arguments.
/// - When the trailing timer fires it runs the action only if at least
///   `limit` has elapsed since `last_ran_at`, then moves `last_ran_at` to now.
///
/// After the first call, even a call made long after the window runs on the
/// next timer tick rather than synchronously.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use plainkit_timing::{ManualScheduler, Throttled};
///
/// let clock = ManualScheduler::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let seen_clone = seen.clone();
/// let on_scroll = Throttled::new(clock.clone(), Duration::from_millis(100), move |y: u32| {
///     seen_clone.lock().unwrap().push(y);
/// });
///
/// on_scroll.call(0);
/// on_scroll.call(40);
/// on_scroll.call(80);
/// assert_eq!(*seen.lock().unwrap(), vec![0]);
///
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(*seen.lock().unwrap(), vec![0, 80]);
/// ```
pub struct Throttled<A, S: Scheduler> {
    inner: Arc<ThrottleInner<A, S>>,
}

struct ThrottleInner<A, S: Scheduler> {
    scheduler: S,
    limit: Duration,
    action: Mutex<Action<A>>,
    state: Mutex<ThrottleState<A, S::Handle>>,
}

struct ThrottleState<A, H> {
    last_ran_at: Option<Duration>,
    generation: u64,
    pending: Option<Pending<A, H>>,
}

impl<A, S> Throttled<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    pub fn new(scheduler: S, limit: Duration, action: impl FnMut(A) + Send + 'static) -> Self {
        Self {
            inner: Arc::new(ThrottleInner {
                scheduler,
                limit,
                action: Mutex::new(Box::new(action)),
                state: Mutex::new(ThrottleState {
                    last_ran_at: None,
                    generation: 0,
                    pending: None,
                }),
            }),
        }
    }

    /// Throttles with [`DEFAULT_LIMIT`] (300 ms).
    pub fn with_default_limit(scheduler: S, action: impl FnMut(A) + Send + 'static) -> Self {
        Self::new(scheduler, DEFAULT_LIMIT, action)
    }

    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        let now = inner.scheduler.now();

        let Some(last_ran_at) = state.last_ran_at else {
            state.last_ran_at = Some(now);
            drop(state);
            tracing::trace!(?now, "throttled action running on leading edge");
            inner.invoke(args);
            return;
        };

        if let Some(previous) = state.pending.take() {
            inner.scheduler.cancel(previous.handle);
            tracing::trace!(generation = previous.generation, "throttle trailing timer reset");
        }
        let delay = inner.limit.saturating_sub(now.saturating_sub(last_ran_at));
        state.generation += 1;
        let generation = state.generation;
        let fire_inner = Arc::clone(inner);
        let handle = inner
            .scheduler
            .schedule_after(delay, Box::new(move || fire_inner.fire(generation)));
        state.pending = Some(Pending {
            generation,
            handle,
            args,
        });
    }

    /// Drops the pending trailing invocation, if any. Returns whether one was
    /// pending. `last_ran_at` is left as is.
    pub fn cancel(&self) -> bool {
        let pending = self.inner.state.lock().pending.take();
        match pending {
            Some(pending) => {
                self.inner.scheduler.cancel(pending.handle);
                tracing::debug!(generation = pending.generation, "throttled call cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    /// Scheduler time of the last invocation, `None` before the first call.
    pub fn last_ran_at(&self) -> Option<Duration> {
        self.inner.state.lock().last_ran_at
    }

    pub fn limit(&self) -> Duration {
        self.inner.limit
    }
}

impl<A, S: Scheduler> ThrottleInner<A, S> {
    fn fire(&self, generation: u64) {
        let args = {
            let mut state = self.state.lock();
            let Some(pending) = take_matching(&mut state.pending, generation) else {
                tracing::trace!(generation, "stale throttle timer ignored");
                return;
            };
            let now = self.scheduler.now();
            let elapsed = state.last_ran_at.map_or(self.limit, |last| now.saturating_sub(last));
            if elapsed < self.limit {
                tracing::debug!(generation, ?elapsed, "trailing call dropped inside throttle window");
                return;
            }
            state.last_ran_at = Some(now);
            pending.args
        };
        tracing::trace!(generation, "throttled action running on trailing edge");
        self.invoke(args);
    }

    fn invoke(&self, args: A) {
        let mut action = self.action.lock();
        (&mut **action)(args);
    }
}

impl<A, S: Scheduler> Clone for Throttled<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Throttled<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Throttled")
            .field("limit", &self.inner.limit)
            .field("last_ran_at", &state.last_ran_at)
            .field("pending", &state.pending.is_some())
            .finish()
    }
}

/// Shorthand for [`Throttled::new`].
pub fn throttle<A, S>(scheduler: S, limit: Duration, action: impl FnMut(A) + Send + 'static) -> Throttled<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    Throttled::new(scheduler, limit, action)
}
