//! Call Api capability
//!
//! The power to call a REST API: a base URL, a pluggable sender, and an
//! ordered chain of request interceptors, combined into one deterministic
//! `send` operation that records the response body for later questions.

use std::fmt;
use std::sync::Arc;

use rostrum_domain::{ApiRequest, ApiResponse, DomainError, DomainResult};
use url::Url;

use crate::error::SendError;
use crate::ports::{HttpSender, RequestInterceptor};
use crate::screenplay::Ability;

/// Ability to call a REST API.
///
/// Configuration is value-style: `at` constructs the capability and each
/// `with_*` call consumes it and returns the extended value, so shared
/// instances are never mutated mid-scenario.
///
/// # Example
///
/// ```ignore
/// let sender = Arc::new(ReqwestSender::new()?);
/// let mut api = CallApi::at("https://api.example.test")?
///     .with_sender(sender)
///     .with_interceptor(AddHeader::new("Authorization", token));
///
/// let response = api.send(ApiRequest::get("https://api.example.test/users")).await?;
/// ```
pub struct CallApi {
    base_url: String,
    sender: Option<Arc<dyn HttpSender>>,
    interceptors: Vec<Box<dyn RequestInterceptor>>,
    last_response: Option<String>,
}

impl CallApi {
    /// Creates a capability for the given base URL, with no sender and no
    /// interceptors.
    ///
    /// The string is stored verbatim; only its validity is checked.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyUrl` for an empty string and
    /// `DomainError::InvalidUrl` for anything that does not parse as an
    /// absolute URL.
    pub fn at(base_url: impl Into<String>) -> DomainResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        Url::parse(&base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;

        Ok(Self {
            base_url,
            sender: None,
            interceptors: Vec::new(),
            last_response: None,
        })
    }

    /// Returns the capability with the given sender attached.
    ///
    /// Calling this twice replaces the sender; the last write wins. The
    /// base URL and interceptor list are preserved.
    #[must_use]
    pub fn with_sender(mut self, sender: Arc<dyn HttpSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Returns the capability with one interceptor appended.
    ///
    /// Registration order is application order: the first interceptor
    /// registered sees the original request, the last one produces what the
    /// sender dispatches.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Returns the configured base URL, exactly as given to `at`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the body of the last successfully received response.
    #[must_use]
    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    /// Runs the request through the interceptor chain and dispatches it.
    ///
    /// Interceptors apply left-to-right, synchronously, before the single
    /// await point; each receives the output of the previous one. On
    /// success the response body is recorded as the last response. On any
    /// failure the previously recorded response is left untouched.
    ///
    /// # Errors
    ///
    /// `SendError::MissingSender` if no sender was configured; interceptor
    /// and transport failures propagate unchanged.
    pub async fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, SendError> {
        let sender = self.sender.as_ref().ok_or(SendError::MissingSender)?;

        let mut prepared = request;
        for interceptor in &self.interceptors {
            prepared = interceptor.intercept(prepared)?;
        }

        tracing::debug!(method = %prepared.method, url = %prepared.url, "dispatching request");
        let response = sender.send(prepared).await?;
        tracing::debug!(status = response.status, "response received");

        self.last_response = Some(response.body.clone());
        Ok(response)
    }
}

impl Ability for CallApi {}

impl fmt::Debug for CallApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallApi")
            .field("base_url", &self.base_url)
            .field("sender", &self.sender.as_ref().map(|_| "<dyn HttpSender>"))
            .field("interceptors", &self.interceptors.len())
            .field("has_last_response", &self.last_response.is_some())
            .finish()
    }
}
