//! Per-call cancellation and deadline.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::{CacheError, CacheResult};

/// Cancellation token plus optional deadline, threaded into every store call.
///
/// A default context never expires and is never cancelled.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl RequestContext {
    /// Context that never expires and is never cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// Context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::default().with_deadline(Instant::now() + timeout)
    }

    /// Context with the timeout from `operation_timeout_ms`, if configured.
    pub fn from_timeout_ms(timeout_ms: Option<u64>) -> Self {
        timeout_ms.map_or_else(Self::background, |ms| {
            Self::with_timeout(Duration::from_millis(ms))
        })
    }

    /// Set an absolute deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Share a caller-owned token; cancelling it aborts in-flight store calls.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The deadline, if any
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Token observed by store calls
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel this context and every clone sharing its token
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Drive `fut` unless the context is cancelled or its deadline passes first.
    pub(crate) async fn run<F: Future>(&self, fut: F) -> CacheResult<F::Output> {
        if self.cancel.is_cancelled() {
            return Err(CacheError::Cancelled);
        }

        let guarded = async {
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => Err(CacheError::Cancelled),
                out = fut => Ok(out),
            }
        };

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(CacheError::DeadlineExceeded),
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .map_err(|_| CacheError::DeadlineExceeded)?,
            None => guarded.await,
        }
    }
}
