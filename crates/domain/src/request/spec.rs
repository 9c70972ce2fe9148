//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Headers, HttpMethod};
use crate::http::{header_names, media_types};

/// An outgoing HTTP request.
///
/// The dispatch pipeline treats requests as opaque: interceptors may rewrite
/// any part of them, and the sender receives whatever the last interceptor
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL
    pub url: String,
    /// HTTP headers
    #[serde(default)]
    pub headers: Headers,
    /// Request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ApiRequest {
    /// Creates a request with the given method and URL, no headers, no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request for the given URL.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Creates a PUT request for the given URL.
    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Creates a DELETE request for the given URL.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Returns the request with a header appended.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Returns the request with the given body attached.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the request with a JSON body and matching `Content-Type`.
    #[must_use]
    pub fn with_json_body(self, body: impl Into<String>) -> Self {
        self.with_header(header_names::CONTENT_TYPE, media_types::APPLICATION_JSON)
            .with_body(body)
    }

    /// Validates the URL and returns the parsed version if valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn parse_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_request() {
        let req = ApiRequest::get("https://api.example.com/users");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.com/users");
        assert!(req.headers.is_empty());
        assert_eq!(req.body, None);
    }

    #[test]
    fn test_with_header_appends() {
        let req = ApiRequest::get("https://api.example.com")
            .with_header("Accept", "application/json")
            .with_header("Accept", "text/html");

        let values: Vec<_> = req.headers.values("Accept").collect();
        assert_eq!(values, vec!["application/json", "text/html"]);
    }

    #[test]
    fn test_with_json_body_sets_content_type() {
        let req = ApiRequest::post("https://api.example.com/users")
            .with_json_body(r#"{"name":"ada"}"#);

        assert_eq!(
            req.headers.first_value("Content-Type"),
            Some("application/json")
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"ada"}"#));
    }

    #[test]
    fn test_parse_url() {
        let req = ApiRequest::get("https://api.example.com/users");
        assert!(req.parse_url().is_ok());

        let bad = ApiRequest::get("not a url");
        assert!(bad.parse_url().is_err());
    }
}
