use serde_json::{Map, Value};

/// The response handed back by every operation, untouched. Status, headers
/// and the async body accessors belong to the transport; nothing is read or
/// parsed on the caller's behalf.
pub use reqwest::Response;

/// # RequestOptions
/// Configuration for a single outgoing request. An instance is built fresh
/// per call, consumed by the operation, and carries no identity afterwards.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// Url of the request, absolute or relative. A value the transport
    /// cannot use is the transport's to reject.
    pub path: String,
    /// Optional JSON body mapping, honored by the body-bearing verbs only
    /// (POST, PATCH). Key order is preserved through serialization.
    pub data: Option<Map<String, Value>>,
    /// Optional `Authorization` header value, sent verbatim when non-empty.
    pub authorization: Option<String>,
}

impl RequestOptions {
    /// Creates a new instance of [RequestOptions] for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: None,
            authorization: None,
        }
    }

    /// Sets the JSON body mapping.
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the `Authorization` header value.
    pub fn authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }
}
