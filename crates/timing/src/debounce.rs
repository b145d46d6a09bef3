use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::options::DEFAULT_WAIT;
use crate::pending::{take_matching, Pending};
use crate::scheduler::Scheduler;

type Action<A> = Box<dyn FnMut(A) + Send + 'static>;

/// Collapses a burst of calls into a single trailing invocation.
///
/// Every [`call`](Self::call) cancels the pending timer and starts a new one
/// for `wait`; when a timer survives, the action runs once with the arguments
/// of the last call. Calls made while an invocation is pending never run the
/// action themselves.
///
/// The handle is cheap to clone and all clones share one pending slot. A
/// scheduled invocation keeps the wrapper alive, so dropping every handle does
/// not cancel it; use [`cancel`](Self::cancel) for that.
///
/// The action is never run while internal state is locked, so it may call back
/// into [`call`](Self::call) or [`cancel`](Self::cancel). Calling
/// [`flush`](Self::flush) from inside the action deadlocks.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use plainkit_timing::{Debounced, ManualScheduler};
///
/// let clock = ManualScheduler::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let seen_clone = seen.clone();
/// let search = Debounced::new(clock.clone(), Duration::from_millis(100), move |q: &'static str| {
///     seen_clone.lock().unwrap().push(q);
/// });
///
/// search.call("r");
/// search.call("ru");
/// search.call("rust");
/// clock.advance(Duration::from_millis(100));
///
/// assert_eq!(*seen.lock().unwrap(), vec!["rust"]);
/// ```
pub struct Debounced<A, S: Scheduler> {
    inner: Arc<DebounceInner<A, S>>,
}

struct DebounceInner<A, S: Scheduler> {
    scheduler: S,
    wait: Duration,
    action: Mutex<Action<A>>,
    state: Mutex<DebounceState<A, S::Handle>>,
}

struct DebounceState<A, H> {
    generation: u64,
    pending: Option<Pending<A, H>>,
}

impl<A, S> Debounced<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    pub fn new(scheduler: S, wait: Duration, action: impl FnMut(A) + Send + 'static) -> Self {
        Self {
            inner: Arc::new(DebounceInner {
                scheduler,
                wait,
                action: Mutex::new(Box::new(action)),
                state: Mutex::new(DebounceState {
                    generation: 0,
                    pending: None,
                }),
            }),
        }
    }

    /// Debounces with [`DEFAULT_WAIT`] (300 ms).
    pub fn with_default_wait(scheduler: S, action: impl FnMut(A) + Send + 'static) -> Self {
        Self::new(scheduler, DEFAULT_WAIT, action)
    }

    /// Records `args` as the latest call and restarts the wait.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if let Some(previous) = state.pending.take() {
            inner.scheduler.cancel(previous.handle);
            tracing::trace!(generation = previous.generation, "debounce timer reset");
        }
        state.generation += 1;
        let generation = state.generation;
        let fire_inner = Arc::clone(inner);
        let handle = inner
            .scheduler
            .schedule_after(inner.wait, Box::new(move || fire_inner.fire(generation)));
        state.pending = Some(Pending {
            generation,
            handle,
            args,
        });
    }

    /// Drops the pending invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let pending = self.inner.state.lock().pending.take();
        match pending {
            Some(pending) => {
                self.inner.scheduler.cancel(pending.handle);
                tracing::debug!(generation = pending.generation, "debounced call cancelled");
                true
            }
            None => false,
        }
    }

    /// Runs the pending invocation now instead of waiting. Returns whether one
    /// was pending.
    pub fn flush(&self) -> bool {
        let pending = self.inner.state.lock().pending.take();
        match pending {
            Some(pending) => {
                self.inner.scheduler.cancel(pending.handle);
                tracing::trace!(generation = pending.generation, "debounced call flushed");
                self.inner.invoke(pending.args);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }
}

impl<A, S: Scheduler> DebounceInner<A, S> {
    fn fire(&self, generation: u64) {
        let pending = take_matching(&mut self.state.lock().pending, generation);
        match pending {
            Some(pending) => {
                tracing::trace!(generation, "debounced action firing");
                self.invoke(pending.args);
            }
            None => tracing::trace!(generation, "stale debounce timer ignored"),
        }
    }

    fn invoke(&self, args: A) {
        let mut action = self.action.lock();
        (&mut **action)(args);
    }
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Debounced<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("pending", &self.inner.state.lock().pending.is_some())
            .finish()
    }
}

/// Shorthand for [`Debounced::new`].
pub fn debounce<A, S>(scheduler: S, wait: Duration, action: impl FnMut(A) + Send + 'static) -> Debounced<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    Debounced::new(scheduler, wait, action)
}
