//! Timer facilities consumed by [`Debounced`](crate::Debounced) and
//! [`Throttled`](crate::Throttled).

mod manual;
mod runtime;

use std::time::Duration;

pub use manual::{ManualScheduler, TimerId};
pub use runtime::TokioScheduler;

/// Deferred work handed to a [`Scheduler`].
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Schedule-after-delay and cancel-by-handle, plus a monotonic clock.
///
/// Cloning a scheduler yields another handle onto the same clock and timer
/// queue.
pub trait Scheduler: Clone + Send + Sync + 'static {
    type Handle: Send + 'static;

    /// Time elapsed since the scheduler's origin.
    fn now(&self) -> Duration;

    /// Runs `callback` once `delay` has elapsed, unless cancelled first.
    fn schedule_after(&self, delay: Duration, callback: Callback) -> Self::Handle;

    /// Cancels a timer. Cancelling a timer that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
