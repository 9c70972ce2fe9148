//! Request interceptor port

use rostrum_domain::ApiRequest;
use thiserror::Error;

/// Error raised by an interceptor while transforming a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("interceptor failed: {message}")]
pub struct InterceptorError {
    message: String,
}

impl InterceptorError {
    /// Creates an interceptor error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for transforming an outgoing request before dispatch.
///
/// Interceptors are synchronous and communicate only through their return
/// value: each call consumes the request and yields a new one. An
/// implementation may hold fixed configuration (a header name and value to
/// inject, say) but must not depend on capability state.
pub trait RequestInterceptor: Send + Sync {
    /// Transforms the request, yielding the value the next stage sees.
    ///
    /// # Errors
    ///
    /// Returns an `InterceptorError` if the request cannot be transformed;
    /// the send is aborted before dispatch.
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, InterceptorError>;
}

impl<F> RequestInterceptor for F
where
    F: Fn(ApiRequest) -> Result<ApiRequest, InterceptorError> + Send + Sync,
{
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, InterceptorError> {
        self(request)
    }
}
