//! Mount scope for section controllers.
//!
//! A [`Scope`] lives exactly as long as its controller is mounted. Work run
//! through [`Scope::run`] resolves to `None` once the scope is cancelled, so
//! a late response can never be written into an unmounted section.

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Cancellation scope tied to one mounted section.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    token: CancellationToken,
}

impl Scope {
    /// Create a live scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope cancelled together with `self` (and independently of it).
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Returns `true` while the section is mounted.
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Mark the scope as torn down. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Drive `fut` unless the scope is cancelled first.
    ///
    /// Returns `None` when cancellation wins, including when it happens in
    /// the same poll in which `fut` completes. The in-flight future is
    /// dropped, which aborts any request it owns.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            out = fut => self.is_active().then_some(out),
        }
    }
}
