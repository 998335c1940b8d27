use super::as_fields;
use crate::fields::{coerce_int, coerce_text};
use crate::schema::JsonSchema;
use crate::status;
use crate::validator::{ValidationError, ValidationIssue, KIND_STATUS_CODE, KIND_TYPE_DICT};
use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use std::convert::TryFrom;
use tracing::debug;

/// Derive the `status` field of an [`ErrorModel`] from its `code`.
///
/// Returns the canonical status name (`404` → `"NOT_FOUND"`), or an
/// "invalid field value" error when `code` is not a registered HTTP status.
pub fn derive_status(code: i64) -> Result<String, ValidationError> {
    lookup(code)
        .map(|(_, name)| name)
        .map_err(|issue| ValidationError::single(ErrorModel::MODEL, issue))
}

fn lookup(code: i64) -> Result<(StatusCode, String), ValidationIssue> {
    match (status::lookup(code), status::status_name(code)) {
        (Some(status_code), Some(name)) => Ok((status_code, name)),
        _ => Err(ValidationIssue::new(
            "code",
            KIND_STATUS_CODE,
            format!("{code} is not a valid HTTP status code"),
        )),
    }
}

/// HTTP error record.
///
/// * `code` - HTTP error status code
/// * `message` - detail on the error
/// * `status` - canonical name of `code` (e.g. `NOT_FOUND`), set at
///   construction and never supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorModel {
    code: i64,
    message: String,
    status: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl ErrorModel {
    pub const MODEL: &'static str = "ErrorModel";

    /// Build an error record. Fails when `code` is not a registered status.
    pub fn new(code: i64, message: impl Into<String>) -> Result<Self, ValidationError> {
        let (status_code, status) =
            lookup(code).map_err(|issue| ValidationError::single(Self::MODEL, issue))?;
        Ok(Self {
            code,
            message: message.into(),
            status,
            status_code,
        })
    }

    /// Build from keyword arguments, e.g. `{"code": 404, "message": "not found"}`.
    ///
    /// Both fields are coerced first and every failing field is reported.
    /// `status` is derived only when both succeed; a `status` key in the input
    /// is ignored.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let code = coerce_int("code", fields.get("code"));
        let message = coerce_text("message", fields.get("message"));
        match (code, message) {
            (Ok(code), Ok(message)) => Self::new(code, message),
            (code, message) => {
                let issues: Vec<ValidationIssue> =
                    [code.err(), message.err()].into_iter().flatten().collect();
                debug!(model = Self::MODEL, issues = issues.len(), "rejected error record");
                Err(ValidationError::new(Self::MODEL, issues))
            }
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The HTTP status this record describes.
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Dictionary view of the record.
    pub fn to_value(&self) -> Value {
        json!({
            "code": self.code,
            "message": self.message,
            "status": self.status,
        })
    }
}

impl TryFrom<Value> for ErrorModel {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_fields(as_fields(Self::MODEL, &value)?)
    }
}

impl<'de> Deserialize<'de> for ErrorModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ErrorModel::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for ErrorModel {
    const TITLE: &'static str = Self::MODEL;

    fn base_schema() -> Value {
        json!({
            "title": Self::TITLE,
            "description": "HTTP error record with the status name derived from its code.",
            "type": "object",
            "properties": {
                "code": { "title": "Code", "type": "integer" },
                "message": { "title": "Message", "type": "string" }
            },
            "required": ["code", "message"]
        })
    }
}

/// Error envelope, `{"error": {...}}`.
///
/// Built by forwarding `code`/`message` into an internally created
/// [`ErrorModel`]; it has no fields of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ErrorResponse {
    error: ErrorModel,
}

impl ErrorResponse {
    pub const MODEL: &'static str = "ErrorResponse";

    pub fn new(code: i64, message: impl Into<String>) -> Result<Self, ValidationError> {
        ErrorModel::new(code, message).map(Self::from)
    }

    /// Build from the same keyword arguments as [`ErrorModel::from_fields`].
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        ErrorModel::from_fields(fields).map(Self::from)
    }

    pub fn error(&self) -> &ErrorModel {
        &self.error
    }

    pub fn into_error(self) -> ErrorModel {
        self.error
    }

    /// Dictionary view of the envelope.
    pub fn to_value(&self) -> Value {
        json!({ "error": self.error.to_value() })
    }
}

impl From<ErrorModel> for ErrorResponse {
    fn from(error: ErrorModel) -> Self {
        Self { error }
    }
}

/// Accepts either the envelope (`{"error": {...}}`) or the flat keyword
/// arguments (`{"code": .., "message": ..}`). A present but non-object
/// `error` is rejected.
impl TryFrom<Value> for ErrorResponse {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fields = as_fields(Self::MODEL, &value)?;
        match fields.get("error") {
            Some(Value::Object(inner)) => Self::from_fields(inner),
            Some(_) => Err(ValidationError::single(
                Self::MODEL,
                ValidationIssue::new("error", KIND_TYPE_DICT, "value is not a valid dict"),
            )),
            None => Self::from_fields(fields),
        }
    }
}

impl JsonSchema for ErrorResponse {
    const TITLE: &'static str = Self::MODEL;

    fn base_schema() -> Value {
        json!({
            "title": Self::TITLE,
            "description": "Envelope wrapping a single error record.",
            "type": "object",
            "properties": {
                "error": { "$ref": "#/components/schemas/ErrorModel" }
            },
            "required": ["error"]
        })
    }
}
