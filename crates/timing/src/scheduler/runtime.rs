use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

use super::{Callback, Scheduler};
use crate::error::TimingError;

/// Timer facility backed by a tokio runtime.
///
/// Each timer is a spawned task that sleeps for the delay and then runs its
/// callback; cancelling aborts the task. The clock is `tokio::time::Instant`,
/// so a paused test runtime drives it deterministically.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
    origin: Instant,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            origin: Instant::now(),
        }
    }

    /// Binds to the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// [`TimingError::NoRuntime`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, TimingError> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn now(&self) -> Duration {
        Instant::now().duration_since(self.origin)
    }

    fn schedule_after(&self, delay: Duration, callback: Callback) -> AbortHandle {
        self.handle
            .spawn(async move {
                tokio::time::sleep(delay).await;
                callback();
            })
            .abort_handle()
    }

    fn cancel(&self, handle: AbortHandle) {
        handle.abort();
    }
}
