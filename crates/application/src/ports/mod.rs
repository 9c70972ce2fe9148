//! Port definitions (interfaces)
//!
//! Ports define the boundary between the dispatch pipeline and pluggable
//! behavior. Each port is a single-operation trait implemented by the real
//! transport or by test doubles.

mod http_sender;
mod interceptor;

pub use http_sender::{HttpSender, TransportError};
pub use interceptor::{InterceptorError, RequestInterceptor};
