//! Per-call request descriptions handed to a [`Transport`](crate::transport::Transport).

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::collections::HashMap;

/// Everything a transport needs to perform one HTTP call.
///
/// Descriptors are built per call and never persisted.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The request path, relative to the transport's base URL.
    pub path: String,

    /// Headers for this request.
    pub headers: HeaderMap,

    /// Query parameters for this request. Order is not significant.
    pub query_params: HashMap<String, String>,

    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    /// Creates a new `RequestDescriptor` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query_params: HashMap::new(),
            body: None,
        }
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Adds multiple query parameters to the request.
    pub fn with_query_params(
        mut self,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.query_params.extend(params);
        self
    }

    /// Fills in headers from `defaults` that this request does not set itself.
    pub(crate) fn merge_default_headers(&mut self, defaults: &HeaderMap) {
        for (name, value) in defaults {
            if !self.headers.contains_key(name) {
                self.headers.insert(name.clone(), value.clone());
            }
        }
    }
}

impl Default for RequestDescriptor {
    fn default() -> Self {
        Self::new(Method::GET, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, CONTENT_TYPE};

    #[test]
    fn test_request_headers_win_over_defaults() {
        let mut defaults = HeaderMap::new();
        defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut request = RequestDescriptor::new(Method::GET, "/me")
            .with_header("accept", "text/plain")
            .unwrap();
        request.merge_default_headers(&defaults);

        assert_eq!(request.headers.get(ACCEPT).unwrap(), "text/plain");
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_header_is_configuration_error() {
        let result = RequestDescriptor::default().with_header("bad header", "x");
        assert!(matches!(result, Err(crate::Error::ConfigurationError(_))));
    }
}
