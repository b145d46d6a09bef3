//! plainkit-timing - Debounce and throttle wrappers
//!
//! [`Debounced`] and [`Throttled`] gate how often an action runs in response
//! to a rapid sequence of calls. Both are generic over a [`Scheduler`]: use
//! [`TokioScheduler`] inside a tokio runtime, or [`ManualScheduler`] for a
//! virtual clock driven by hand.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//! use plainkit_timing::{debounce, ManualScheduler};
//!
//! let clock = ManualScheduler::new();
//! let saves = Arc::new(AtomicUsize::new(0));
//! let saves_clone = saves.clone();
//! let autosave = debounce(clock.clone(), Duration::from_millis(300), move |_doc: String| {
//!     saves_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! for draft in ["h", "he", "hello"] {
//!     autosave.call(draft.to_string());
//! }
//! clock.advance(Duration::from_millis(300));
//! assert_eq!(saves.load(Ordering::SeqCst), 1);
//! ```

pub mod debounce;
pub mod error;
pub mod options;
mod pending;
pub mod scheduler;
pub mod throttle;

// Re-exports for convenience
pub use debounce::{debounce, Debounced};
pub use error::TimingError;
pub use options::{TimingOptions, DEFAULT_LIMIT, DEFAULT_WAIT};
pub use scheduler::{Callback, ManualScheduler, Scheduler, TimerId, TokioScheduler};
pub use throttle::{throttle, Throttled};
