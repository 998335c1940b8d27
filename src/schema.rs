//! # Schema Module
//!
//! JSON Schema documents for the response models.
//!
//! ## Overview
//!
//! Each model describes its declared fields through [`JsonSchema::base_schema`].
//! Documentation tweaks (a friendlier description, a derived property the
//! caller never supplies) are applied afterwards by a [`SchemaAnnotation`].
//! Annotations are plain values kept here, away from the record types, so they
//! change the published document without touching how records are built.
//!
//! ```rust
//! use responsekit::models::ErrorModel;
//! use responsekit::schema::JsonSchema;
//!
//! let schema = ErrorModel::schema();
//! assert_eq!(schema["description"], "Error model.");
//! assert_eq!(schema["properties"]["status"]["type"], "string");
//! ```
//!
//! ## Components document
//!
//! [`components`] assembles an OpenAPI 3.1 fragment with every model under
//! `components.schemas`, ready to merge into a service's `openapi.yaml`.
//! [`validate_instance`] checks a JSON value against that document.

use crate::config::Settings;
use crate::models::{ErrorModel, ErrorResponse, ReadyResponse, ROOT_LOCATION};
use crate::validator::{ValidationError, ValidationIssue, KIND_SCHEMA};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// OpenAPI version stamped on the components document.
pub const OPENAPI_VERSION: &str = "3.1.0";

/// A model that can describe itself as a JSON Schema object.
pub trait JsonSchema {
    /// Schema title and key under `components.schemas`.
    const TITLE: &'static str;

    /// Schema of the declared fields, before any annotation.
    fn base_schema() -> Value;

    /// Published schema: the base schema with the model's annotation applied.
    fn schema() -> Value
    where
        Self: Sized,
    {
        annotated_schema::<Self>()
    }
}

/// Post-processing applied to a generated schema object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaAnnotation {
    description: Option<String>,
    properties: Vec<(String, Value)>,
    required: Vec<String>,
}

impl SchemaAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the schema's `description`.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Insert (or overwrite) a property descriptor.
    pub fn property(mut self, name: impl Into<String>, descriptor: Value) -> Self {
        self.properties.push((name.into(), descriptor));
        self
    }

    /// Append a name to `required`.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Mutate `schema` in place.
    ///
    /// Missing `properties`/`required` members are created. A name already in
    /// `required` is not added twice.
    pub fn apply(&self, schema: &mut Value) {
        let Some(obj) = schema.as_object_mut() else {
            return;
        };
        if let Some(description) = &self.description {
            obj.insert("description".to_string(), Value::String(description.clone()));
        }
        if !self.properties.is_empty() {
            let props = obj
                .entry("properties")
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(props) = props.as_object_mut() {
                for (name, descriptor) in &self.properties {
                    props.insert(name.clone(), descriptor.clone());
                }
            }
        }
        if !self.required.is_empty() {
            let required = obj
                .entry("required")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Some(required) = required.as_array_mut() {
                for name in &self.required {
                    let name = Value::String(name.clone());
                    if !required.contains(&name) {
                        required.push(name);
                    }
                }
            }
        }
    }
}

/// Annotation published for each built-in model, keyed by schema title.
pub fn default_annotation(title: &str) -> SchemaAnnotation {
    match title {
        ReadyResponse::MODEL => SchemaAnnotation::new().description("Ready response model."),
        ErrorModel::MODEL => SchemaAnnotation::new()
            .description("Error model.")
            .property("status", json!({ "title": "Status", "type": "string" }))
            .require("status"),
        ErrorResponse::MODEL => SchemaAnnotation::new().description("Error response model."),
        _ => SchemaAnnotation::new(),
    }
}

/// Base schema of `T` with `annotation` applied.
pub fn schema_for<T: JsonSchema>(annotation: &SchemaAnnotation) -> Value {
    let mut schema = T::base_schema();
    annotation.apply(&mut schema);
    schema
}

/// Base schema of `T` with its default annotation applied.
pub fn annotated_schema<T: JsonSchema>() -> Value {
    schema_for::<T>(&default_annotation(T::TITLE))
}

static SCHEMAS: Lazy<Map<String, Value>> = Lazy::new(|| {
    let mut schemas = Map::new();
    schemas.insert(ReadyResponse::TITLE.to_string(), annotated_schema::<ReadyResponse>());
    schemas.insert(ErrorModel::TITLE.to_string(), annotated_schema::<ErrorModel>());
    schemas.insert(ErrorResponse::TITLE.to_string(), annotated_schema::<ErrorResponse>());
    schemas
});

/// All published model schemas, keyed by title.
pub fn schemas() -> &'static Map<String, Value> {
    &SCHEMAS
}

/// OpenAPI fragment holding every model under `components.schemas`.
pub fn components(settings: &Settings) -> Value {
    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": settings.project_name,
            "version": settings.version,
        },
        "components": {
            "schemas": Value::Object(schemas().clone()),
        }
    })
}

static VALIDATORS: Lazy<RwLock<HashMap<&'static str, Arc<Validator>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Compiled validator for the published schema titled `title`.
///
/// Compiled once per title and shared afterwards. `$ref`s into
/// `#/components/schemas` resolve against the full set of model schemas.
fn validator(title: &'static str) -> Result<Arc<Validator>, ValidationError> {
    if let Some(cached) = VALIDATORS.read().ok().and_then(|c| c.get(title).cloned()) {
        return Ok(cached);
    }
    let root = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$ref": format!("#/components/schemas/{title}"),
        "components": { "schemas": Value::Object(schemas().clone()) },
    });
    let compiled = jsonschema::validator_for(&root).map_err(|e| {
        ValidationError::single(
            title,
            ValidationIssue::new(ROOT_LOCATION, KIND_SCHEMA, format!("schema failed to compile: {e}")),
        )
    })?;
    let compiled = Arc::new(compiled);
    if let Ok(mut cache) = VALIDATORS.write() {
        cache.insert(title, Arc::clone(&compiled));
    }
    debug!(model = title, "compiled schema validator");
    Ok(compiled)
}

/// Validate a JSON instance against the published schema of `T`.
///
/// Every violation becomes one issue of kind `schema`, located at the JSON
/// pointer of the offending value (`$` for the document itself).
pub fn validate_instance<T: JsonSchema>(instance: &Value) -> Result<(), ValidationError> {
    let validator = validator(T::TITLE)?;
    let issues: Vec<ValidationIssue> = validator
        .iter_errors(instance)
        .map(|e| {
            let pointer = e.instance_path().to_string();
            let location = if pointer.is_empty() { ROOT_LOCATION.to_string() } else { pointer };
            ValidationIssue::new(location, KIND_SCHEMA, e.to_string())
        })
        .collect();
    if issues.is_empty() {
        Ok(())
    } else {
        debug!(model = T::TITLE, issues = issues.len(), "instance does not match schema");
        Err(ValidationError::new(T::TITLE, issues))
    }
}
