//! The API client: one configured transport shared by every resource client.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use folio_core::{Config, HealthStatus};

use crate::error::{Result, TransportError, extract_server_message};
use crate::hooks::{Hook, RequestInfo, TracingHook};

/// Transport timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Portfolio content API client.
///
/// Cheap to clone (Arc internals). Holds immutable configuration only, so a
/// single instance can be shared read-only by every resource client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base: Url,
    timeout: Duration,
    hooks: Vec<Arc<dyn Hook>>,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    hooks: Vec<Arc<dyn Hook>>,
}

impl ApiClientBuilder {
    /// Override the transport timeout. Defaults to [`DEFAULT_TIMEOUT`].
    ///
    /// Test seam only: [`ApiClient::new`] and [`ApiClient::from_config`] never
    /// call it, so every production client keeps the fixed ten-second limit.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Register an extra hook, called after the tracing hook.
    pub fn hook(mut self, hook: Arc<dyn Hook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Build the client.
    pub fn build(self) -> folio_core::Result<ApiClient> {
        let base = Url::parse(self.base_url.trim()).map_err(|e| {
            folio_core::Error::config(format!("Invalid API base URL '{}': {e}", self.base_url))
        })?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(folio_core::Error::config(format!(
                "API base URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| folio_core::Error::config(format!("Failed to build HTTP client: {e}")))?;

        let mut hooks: Vec<Arc<dyn Hook>> = vec![Arc::new(TracingHook)];
        hooks.extend(self.hooks);

        Ok(ApiClient {
            inner: Arc::new(ApiClientInner {
                http,
                base,
                timeout: self.timeout,
                hooks,
            }),
        })
    }
}

impl ApiClient {
    /// Create a client for the given API base (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> folio_core::Result<Self> {
        Self::builder(base_url).build()
    }

    /// Create a client for the configured backend.
    pub fn from_config(config: &Config) -> folio_core::Result<Self> {
        Self::new(config.api_base()?)
    }

    /// Start building a client.
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            hooks: Vec::new(),
        }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        self.inner.base.as_str()
    }

    /// The transport timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// `GET /` liveness check.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get(&[""]).await
    }

    /// `GET` the path built from `segments`.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(Method::GET, segments, None::<&()>).await
    }

    /// `POST` a JSON body.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, segments, Some(body)).await
    }

    /// `POST` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(Method::POST, segments, None::<&()>).await
    }

    /// `PATCH` a JSON body.
    pub async fn patch<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, segments, Some(body)).await
    }

    /// `PATCH` without a body.
    pub async fn patch_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(Method::PATCH, segments, None::<&()>).await
    }

    /// `DELETE` the path built from `segments`.
    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(Method::DELETE, segments, None::<&()>).await
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let info = RequestInfo {
            method: method.as_str().to_string(),
            path: display_path(segments),
        };
        for hook in &self.inner.hooks {
            hook.on_request(&info);
        }

        let result = self.exchange(method, segments, body, &info).await;

        if let Err(err) = &result {
            for hook in &self.inner.hooks {
                hook.on_failure(&info, err);
            }
        }
        result
    }

    async fn exchange<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        info: &RequestInfo,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.inner.http.request(method, self.url_for(segments));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(info, e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(info, e))?;

        if !status.is_success() {
            let message = extract_server_message(&bytes).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
            });
            return Err(TransportError::Status {
                method: info.method.clone(),
                path: info.path.clone(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode {
            method: info.method.clone(),
            path: info.path.clone(),
            message: e.to_string(),
        })
    }

    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base.clone();
        // cannot_be_a_base was rejected in build(), so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn transport_error(&self, info: &RequestInfo, source: reqwest::Error) -> TransportError {
        if source.is_timeout() {
            TransportError::Timeout {
                method: info.method.clone(),
                path: info.path.clone(),
                timeout: self.inner.timeout,
            }
        } else {
            TransportError::Network {
                method: info.method.clone(),
                path: info.path.clone(),
                message: source.to_string(),
                source,
            }
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base.as_str())
            .field("timeout", &self.inner.timeout)
            .field("hooks", &self.inner.hooks.len())
            .finish()
    }
}

fn display_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}
