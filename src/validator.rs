//! # Validation Errors
//!
//! Every model in this crate reports bad input through a single error type,
//! [`ValidationError`], the "invalid field value" error. It carries one
//! [`ValidationIssue`] per failing field so a caller sees every problem from a
//! single construction attempt.

use serde::Serialize;
use std::fmt;

/// Issue kind: a required field was not supplied.
pub const KIND_MISSING: &str = "missing";
/// Issue kind: an explicit `null` was supplied for a non-optional field.
pub const KIND_NONE_NOT_ALLOWED: &str = "none_not_allowed";
/// Issue kind: the value could not be coerced to text.
pub const KIND_TYPE_STR: &str = "type_error.str";
/// Issue kind: the value could not be coerced to an integer.
pub const KIND_TYPE_INTEGER: &str = "type_error.integer";
/// Issue kind: keyword arguments were not supplied as an object.
pub const KIND_TYPE_DICT: &str = "type_error.dict";
/// Issue kind: the integer is not a registered HTTP status code.
pub const KIND_STATUS_CODE: &str = "value_error.status_code";
/// Issue kind: a JSON instance did not match the model's schema document.
pub const KIND_SCHEMA: &str = "schema";

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Field (or JSON pointer) the issue refers to
    pub location: String,
    /// Machine-readable issue kind, one of the `KIND_*` constants
    pub kind: String,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn missing(location: &str) -> Self {
        ValidationIssue::new(location, KIND_MISSING, "field required")
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.location, self.message, self.kind)
    }
}

/// The "invalid field value" error raised when a record cannot be constructed.
///
/// Construction is atomic: when this error is returned no record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the model that rejected its input (e.g. `ErrorModel`)
    pub model: &'static str,
    /// All issues found, in field declaration order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(model: &'static str, issues: Vec<ValidationIssue>) -> Self {
        Self { model, issues }
    }

    pub fn single(model: &'static str, issue: ValidationIssue) -> Self {
        Self::new(model, vec![issue])
    }

    /// Returns `true` if any issue targets `location`.
    pub fn has_issue_at(&self, location: &str) -> bool {
        self.issues.iter().any(|i| i.location == location)
    }

    /// Returns `true` if any issue has the given kind.
    pub fn has_kind(&self, kind: &str) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.issues.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} validation error{} for {}",
            self.issues.len(),
            plural,
            self.model
        )?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
