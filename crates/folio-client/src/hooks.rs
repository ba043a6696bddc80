//! Request and failure hooks.
//!
//! Every outbound call is reported to each hook's [`Hook::on_request`]; every
//! failed exchange is reported to [`Hook::on_failure`] before the error is
//! returned to the caller. Hooks observe, they never swallow or rewrite.

use crate::error::TransportError;

/// What a hook sees of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// Upper-case HTTP method
    pub method: String,
    /// Path relative to the API base, e.g. `/projects/cv`
    pub path: String,
}

/// Observer of the API client's traffic.
pub trait Hook: Send + Sync {
    /// Called once before each request is sent.
    fn on_request(&self, _request: &RequestInfo) {}

    /// Called once for each failed exchange.
    fn on_failure(&self, _request: &RequestInfo, _error: &TransportError) {}
}

/// Default hook: one `info` event per request, one `error` event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl Hook for TracingHook {
    fn on_request(&self, request: &RequestInfo) {
        tracing::info!(
            method = %request.method,
            path = %request.path,
            "Making {} request to: {}",
            request.method,
            request.path
        );
    }

    fn on_failure(&self, request: &RequestInfo, error: &TransportError) {
        tracing::error!(
            method = %request.method,
            path = %request.path,
            status = error.status(),
            "API error: {}",
            error.message()
        );
    }
}
