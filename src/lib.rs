//! # responsekit
//!
//! **responsekit** holds the boilerplate response models every generated
//! OpenAPI service ships with: the readiness probe body and the HTTP error
//! envelope, together with their JSON Schema documents.
//!
//! ## Overview
//!
//! - **[`models`]** - [`ReadyResponse`], [`ErrorModel`], [`ErrorResponse`]
//! - **[`validator`]** - the "invalid field value" error ([`ValidationError`])
//! - **[`fields`]** - per-field coercion (scalar → text, text → integer)
//! - **[`status`]** - HTTP status registry lookups (`404` → `NOT_FOUND`)
//! - **[`schema`]** - JSON Schema generation, annotations and instance validation
//! - **[`exceptions`]** - [`HttpException`](exceptions::HttpException) and its handler
//! - **[`controllers`]** - the readiness controller
//! - **[`response`]** - transport-neutral JSON response
//! - **[`config`]** - service settings
//! - **[`otel`]** - structured logging setup
//!
//! ### Record Construction Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Model as ErrorModel::from_fields
//!     participant Fields as fields::coerce_*
//!     participant Status as status::lookup
//!
//!     Caller->>Model: {"code": 404, "message": "not found"}
//!     Model->>Fields: coerce_int("code"), coerce_text("message")
//!     alt Any field invalid
//!         Fields-->>Caller: ValidationError (every failing field)
//!     end
//!     Model->>Status: lookup(404)
//!     alt Unregistered code
//!         Status-->>Caller: ValidationError (value_error.status_code)
//!     end
//!     Status-->>Model: NOT_FOUND
//!     Model-->>Caller: ErrorModel {code, message, status}
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use responsekit::exceptions::http_exception_handler;
//! use responsekit::{ErrorResponse, ReadyResponse};
//!
//! let ready = ReadyResponse::ok();
//! assert_eq!(serde_json::to_string(&ready).unwrap(), r#"{"status":"ok"}"#);
//!
//! let res = http_exception_handler(&ErrorResponse::new(404, "not found").unwrap().into_exception());
//! assert_eq!(res.status, 404);
//! assert_eq!(res.body["error"]["status"], "NOT_FOUND");
//! ```

pub mod config;
pub mod controllers;
pub mod exceptions;
pub mod fields;
pub mod models;
pub mod otel;
pub mod response;
pub mod schema;
pub mod status;
pub mod validator;

pub use models::{ErrorModel, ErrorResponse, ReadyResponse};
pub use validator::{ValidationError, ValidationIssue};
