//! HTTP request model
//!
//! Requests are opaque transport messages: a method, a target URL, an
//! ordered header multimap, and an optional body. The dispatch pipeline
//! passes them through without parsing or validating them.

mod header;
mod method;
mod spec;

pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use spec::ApiRequest;
