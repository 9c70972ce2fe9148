//! Request sender implementation using reqwest.
//!
//! This adapter implements the `HttpSender` port over `reqwest::Client`.
//! Timeouts and redirect policy live here; the dispatch pipeline adds
//! neither.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use rostrum_application::ports::{HttpSender, TransportError};
use rostrum_domain::{ApiRequest, ApiResponse, Headers, HttpMethod};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Request sender backed by reqwest.
///
/// This is the real transport for Rostrum scenarios that talk to a live
/// service. Test scenarios normally swap in `testing::FakeSender` instead.
pub struct ReqwestSender {
    client: Client,
    timeout: Duration,
}

impl ReqwestSender {
    /// Creates a sender with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - User-Agent: "Rostrum/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent("Rostrum/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a sender around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Returns the sender with a different per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Converts a domain `HttpMethod` to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to the port's `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::Connection(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request
            .parse_url()
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);

        tracing::debug!(method = %request.method, url = %request.url, "dispatching over reqwest");

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(self.timeout);

        // reqwest appends on repeated names, so multimap order survives.
        for header in &request.headers {
            builder = builder.header(&header.name, &header.value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();

        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            headers.append(name.as_str(), value.to_str().unwrap_or("<binary>"));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(ReqwestSender::to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(ReqwestSender::to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(ReqwestSender::to_reqwest_method(HttpMethod::Put), Method::PUT);
        assert_eq!(
            ReqwestSender::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_sender_creation() {
        assert!(ReqwestSender::new().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_dispatch() {
        let sender = ReqwestSender::new().expect("client builds");

        let err = sender
            .send(ApiRequest::get("not a url"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }
}
