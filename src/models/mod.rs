//! # Models Module
//!
//! Validated response records shared by every generated service.
//!
//! ## Overview
//!
//! - [`ReadyResponse`] - body of the readiness probe, `{"status": "ok"}`
//! - [`ErrorModel`] - an HTTP error: `code`, `message` and the derived `status`
//! - [`ErrorResponse`] - the `{"error": ErrorModel}` envelope returned on failure
//!
//! ## Construction
//!
//! Records are built once and never mutated. Every constructor runs the same
//! two stages:
//!
//! 1. **Field coercion** - each declared field is coerced on its own (see
//!    [`crate::fields`]); all failing fields are collected into one
//!    [`ValidationError`](crate::validator::ValidationError).
//! 2. **Derivation** - only for [`ErrorModel`]: `status` is looked up from
//!    `code` in the HTTP status registry. An unregistered code rejects the
//!    whole record.
//!
//! Untyped input (a JSON object of keyword arguments) goes through
//! `from_fields` / `TryFrom<Value>`, which is also what `Deserialize` uses, so
//! a record read off the wire obeys the same invariants as one built in code.
//!
//! ```rust
//! use responsekit::models::{ErrorResponse, ReadyResponse};
//!
//! let ready = ReadyResponse::new("ok");
//! assert_eq!(ready.status(), "ok");
//!
//! let err = ErrorResponse::new(404, "not found").unwrap();
//! assert_eq!(err.error().status(), "NOT_FOUND");
//! ```

mod error;
mod ready;


pub use error::{derive_status, ErrorModel, ErrorResponse};
pub use ready::ReadyResponse;

use crate::validator::{ValidationError, ValidationIssue};
use serde_json::{Map, Value};

/// Location used for issues about the input as a whole.
pub(crate) const ROOT_LOCATION: &str = "$";

/// Borrow a keyword-argument object or reject the input.
pub(crate) fn as_fields<'a>(
    model: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::single(
            model,
            ValidationIssue::new(
                ROOT_LOCATION,
                crate::validator::KIND_TYPE_DICT,
                "value is not a valid dict",
            ),
        )
    })
}
