//! Well-known HTTP header names and media types.
//!
//! String constants used when building requests and interceptors, so tests
//! and interaction code do not scatter literals.

/// Standard HTTP header names.
pub mod header_names {
    /// The `Authorization` header.
    pub const AUTHORIZATION: &str = "Authorization";
    /// The `Accept` header.
    pub const ACCEPT: &str = "Accept";
    /// The `Content-Type` header.
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// The `User-Agent` header.
    pub const USER_AGENT: &str = "User-Agent";
    /// The `Accept-Language` header.
    pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
    /// The `Cache-Control` header.
    pub const CACHE_CONTROL: &str = "Cache-Control";
}

/// Common media type values.
pub mod media_types {
    /// JSON content.
    pub const APPLICATION_JSON: &str = "application/json";
    /// Form-encoded content.
    pub const APPLICATION_FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";
    /// XML content.
    pub const APPLICATION_XML: &str = "application/xml";
    /// Plain text content.
    pub const TEXT_PLAIN: &str = "text/plain";
    /// HTML content.
    pub const TEXT_HTML: &str = "text/html";
}
