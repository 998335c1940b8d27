//! # Exceptions Module
//!
//! An [`HttpException`] aborts a controller with a specific status code, an
//! optional JSON body and extra headers. [`http_exception_handler`] renders it
//! into an [`ApiResponse`].
//!
//! The usual body is an [`ErrorResponse`]:
//!
//! ```rust
//! use responsekit::exceptions::{http_exception_handler, HttpException};
//! use responsekit::models::ErrorResponse;
//!
//! let err = ErrorResponse::new(404, "pet 42 not found").unwrap();
//! let res = http_exception_handler(&HttpException::from(err));
//! assert_eq!(res.status, 404);
//! assert_eq!(res.body["error"]["status"], "NOT_FOUND");
//! ```

use crate::models::ErrorResponse;
use crate::response::ApiResponse;
use http::StatusCode;
use serde_json::Value;
use std::fmt;
use tracing::{error, warn};

/// An HTTP error raised by a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpException {
    pub status_code: StatusCode,
    pub content: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl HttpException {
    pub fn new(status_code: StatusCode, content: Option<Value>) -> Self {
        Self {
            status_code,
            content,
            headers: Vec::new(),
        }
    }

    /// Exception carrying `error` as its body, with the record's status code.
    pub fn from_error(error: ErrorResponse) -> Self {
        let status_code = error.error().status_code();
        Self::new(status_code, Some(error.to_value()))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl fmt::Display for HttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} {}",
            self.status_code.as_u16(),
            self.status_code.canonical_reason().unwrap_or("Unknown")
        )
    }
}

impl std::error::Error for HttpException {}

impl From<ErrorResponse> for HttpException {
    fn from(error: ErrorResponse) -> Self {
        Self::from_error(error)
    }
}

impl ErrorResponse {
    /// Raise this error as an [`HttpException`].
    pub fn into_exception(self) -> HttpException {
        HttpException::from_error(self)
    }
}

/// Render an exception as a JSON response.
///
/// Server errors are logged at `error`, everything else at `warn`.
pub fn http_exception_handler(exception: &HttpException) -> ApiResponse {
    let status = exception.status_code.as_u16();
    if exception.status_code.is_server_error() {
        error!(status, content = ?exception.content, "request failed");
    } else {
        warn!(status, content = ?exception.content, "request rejected");
    }
    let body = exception.content.clone().unwrap_or(Value::Null);
    exception
        .headers
        .iter()
        .fold(ApiResponse::json(status, &body), |res, (name, value)| {
            res.with_header(name.clone(), value.clone())
        })
}
