use thiserror::Error;

/// Errors raised while setting up a timer facility.
#[derive(Debug, Error)]
pub enum TimingError {
    #[error("no tokio runtime is running on this thread")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
