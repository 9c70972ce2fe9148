//! Rostrum Domain - Transport message types
//!
//! This crate defines the request and response model that the Rostrum
//! dispatch pipeline passes through. All types here are pure Rust with no
//! I/O dependencies.

pub mod error;
pub mod http;
pub mod request;
pub mod response;

pub use error::{DomainError, DomainResult};
pub use request::{ApiRequest, Header, Headers, HttpMethod};
pub use response::ApiResponse;
