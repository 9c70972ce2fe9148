//! Request sender port

use async_trait::async_trait;
use rostrum_domain::{ApiRequest, ApiResponse};
use thiserror::Error;

/// Errors a sender may raise while dispatching a request.
///
/// The dispatch pipeline treats these opaquely: they propagate to the caller
/// of `send` unchanged, with no classification or retry.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the sender's timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for dispatching an assembled HTTP request.
///
/// This trait abstracts the transport, allowing the capability to be wired
/// to a real HTTP client or to a test double. Implementations own their
/// timeout and cancellation behavior; the pipeline adds none.
#[async_trait]
pub trait HttpSender: Send + Sync {
    /// Sends the request and resolves to the response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the request could not be dispatched or
    /// the response could not be read.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
