use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Debounce wait used when none is given.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(300);

/// Throttle limit used when none is given.
pub const DEFAULT_LIMIT: Duration = Duration::from_millis(300);

/// Delay settings, deserializable from a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingOptions {
    /// Debounce wait in milliseconds. Default is 300.
    pub debounce_wait_ms: u64,
    /// Throttle limit in milliseconds. Default is 300.
    pub throttle_limit_ms: u64,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            debounce_wait_ms: DEFAULT_WAIT.as_millis() as u64,
            throttle_limit_ms: DEFAULT_LIMIT.as_millis() as u64,
        }
    }
}

impl TimingOptions {
    pub fn debounce_wait(&self) -> Duration {
        Duration::from_millis(self.debounce_wait_ms)
    }

    pub fn throttle_limit(&self) -> Duration {
        Duration::from_millis(self.throttle_limit_ms)
    }
}
