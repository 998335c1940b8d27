use super::as_fields;
use crate::validator::ValidationError;
use crate::fields::coerce_text;
use crate::schema::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::convert::TryFrom;

/// Readiness probe response.
///
/// `status` is text; any scalar supplied for it is converted to its text form
/// (`15` → `"15"`, `false` → `"False"`). Objects and arrays are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ReadyResponse {
    status: String,
}

impl ReadyResponse {
    pub const MODEL: &'static str = "ReadyResponse";

    /// Build from text. Text is always a valid status.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// The probe's healthy answer, `{"status": "ok"}`.
    pub fn ok() -> Self {
        Self::new("ok")
    }

    /// Build from an arbitrary JSON value for `status`, coercing scalars to text.
    pub fn from_value(status: &Value) -> Result<Self, ValidationError> {
        coerce_text("status", Some(status))
            .map(Self::new)
            .map_err(|issue| ValidationError::single(Self::MODEL, issue))
    }

    /// Build from keyword arguments, e.g. `{"status": "ok"}`.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        coerce_text("status", fields.get("status"))
            .map(Self::new)
            .map_err(|issue| ValidationError::single(Self::MODEL, issue))
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Dictionary view of the record.
    pub fn to_value(&self) -> Value {
        json!({ "status": self.status })
    }
}

impl Default for ReadyResponse {
    fn default() -> Self {
        Self::ok()
    }
}

impl TryFrom<Value> for ReadyResponse {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_fields(as_fields(Self::MODEL, &value)?)
    }
}

impl JsonSchema for ReadyResponse {
    const TITLE: &'static str = Self::MODEL;

    fn base_schema() -> Value {
        json!({
            "title": Self::TITLE,
            "description": "Readiness probe response.",
            "type": "object",
            "properties": {
                "status": { "title": "Status", "type": "string" }
            },
            "required": ["status"]
        })
    }
}
