//! Shipped request interceptors

use rostrum_domain::ApiRequest;

use crate::ports::{InterceptorError, RequestInterceptor};

/// Interceptor that appends a fixed header to every outgoing request.
///
/// Appending rather than replacing keeps repeated registrations observable:
/// two `AddHeader`s on the same name yield both values, in registration
/// order.
#[derive(Debug, Clone)]
pub struct AddHeader {
    name: String,
    value: String,
}

impl AddHeader {
    /// Creates an interceptor that appends `name: value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl RequestInterceptor for AddHeader {
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, InterceptorError> {
        Ok(request.with_header(self.name.clone(), self.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_header_appends() {
        let interceptor = AddHeader::new("Authorization", "Bearer abc");

        let out = interceptor
            .intercept(ApiRequest::get("https://example.test"))
            .expect("interceptor succeeds");

        assert_eq!(out.headers.first_value("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_add_header_keeps_existing_values() {
        let interceptor = AddHeader::new("Accept", "text/html");
        let request =
            ApiRequest::get("https://example.test").with_header("Accept", "application/json");

        let out = interceptor.intercept(request).expect("interceptor succeeds");

        let values: Vec<_> = out.headers.values("Accept").collect();
        assert_eq!(values, vec!["application/json", "text/html"]);
    }
}
