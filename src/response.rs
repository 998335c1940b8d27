//! Transport-neutral JSON response.
//!
//! Controllers and exception handlers return an [`ApiResponse`]; whatever HTTP
//! server a generated service runs on copies the status, headers and body
//! across.

use serde::Serialize;
use serde_json::Value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Status, headers and JSON body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl ApiResponse {
    /// JSON response with the `Content-Type` header set.
    ///
    /// A body that fails to serialize is replaced by an error object and the
    /// status becomes 500.
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        let (status, body) = match serde_json::to_value(body) {
            Ok(v) => (status, v),
            Err(e) => (
                500,
                serde_json::json!({ "error": "Failed to serialize response", "details": e.to_string() }),
            ),
        };
        Self {
            status,
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body,
        }
    }

    /// Add a header, replacing any existing header of the same name
    /// (names compare case-insensitively).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    /// Registered reason phrase for the status, `"Unknown"` otherwise.
    pub fn reason(&self) -> &'static str {
        crate::status::reason_phrase(i64::from(self.status)).unwrap_or("Unknown")
    }

    /// Serialized body.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.body.to_string().into_bytes()
    }
}
