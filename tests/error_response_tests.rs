use responsekit::schema::{validate_instance, JsonSchema};
use responsekit::validator::{KIND_MISSING, KIND_SCHEMA, KIND_STATUS_CODE, KIND_TYPE_DICT};
use responsekit::{ErrorModel, ErrorResponse};
use serde_json::json;

#[test]
fn test_error_response_not_found() {
    let resp = ErrorResponse::new(404, "not found").unwrap();
    assert_eq!(resp.error().status(), "NOT_FOUND");
    assert_eq!(resp.error().code(), 404);
    assert_eq!(resp.error().message(), "not found");
}

#[test]
fn test_error_model_status_names() {
    let cases = [
        (100, "CONTINUE"),
        (204, "NO_CONTENT"),
        (226, "IM_USED"),
        (307, "TEMPORARY_REDIRECT"),
        (401, "UNAUTHORIZED"),
        (413, "REQUEST_ENTITY_TOO_LARGE"),
        (414, "REQUEST_URI_TOO_LONG"),
        (416, "REQUESTED_RANGE_NOT_SATISFIABLE"),
        (418, "IM_A_TEAPOT"),
        (422, "UNPROCESSABLE_ENTITY"),
        (451, "UNAVAILABLE_FOR_LEGAL_REASONS"),
        (503, "SERVICE_UNAVAILABLE"),
        (511, "NETWORK_AUTHENTICATION_REQUIRED"),
    ];
    for (code, name) in cases {
        let model = ErrorModel::new(code, "message").unwrap();
        assert_eq!(model.status(), name, "{code}");
        assert_eq!(i64::from(model.status_code().as_u16()), code);
    }
}

#[test]
fn test_error_model_invalid_code() {
    for code in [0, 1, 99, 600, 700, 999, 10_000, -500] {
        let err = ErrorModel::new(code, "message").unwrap_err();
        assert!(err.has_kind(KIND_STATUS_CODE), "{code}");
        let err = ErrorResponse::new(code, "message").unwrap_err();
        assert!(err.has_kind(KIND_STATUS_CODE), "{code}");
    }
}

#[test]
fn test_error_model_missing_fields() {
    let err = serde_json::from_value::<ErrorModel>(json!({ "message": "no code" })).unwrap_err();
    assert!(err.to_string().contains("code"));

    let err = ErrorModel::from_fields(json!({ "code": 400 }).as_object().unwrap()).unwrap_err();
    assert!(err.has_kind(KIND_MISSING));
}

#[test]
fn test_error_schemas() {
    let model = ErrorModel::schema();
    assert_eq!(model["description"], "Error model.");
    assert!(model["required"].as_array().unwrap().contains(&json!("status")));

    let envelope = ErrorResponse::schema();
    assert_eq!(envelope["description"], "Error response model.");
    assert_eq!(envelope["properties"]["error"]["$ref"], "#/components/schemas/ErrorModel");
}

#[test]
fn test_error_records_match_their_schemas() {
    let resp = ErrorResponse::new(503, "maintenance").unwrap();
    validate_instance::<ErrorResponse>(&serde_json::to_value(&resp).unwrap()).unwrap();
    validate_instance::<ErrorModel>(&resp.error().to_value()).unwrap();

    // Without the derived status the document is incomplete.
    let err = validate_instance::<ErrorModel>(&json!({ "code": 503, "message": "m" })).unwrap_err();
    assert_eq!(err.model, "ErrorModel");
    assert!(!err.issues.is_empty());

    let err = validate_instance::<ErrorResponse>(&json!({ "error": { "code": "x" } })).unwrap_err();
    assert!(err.issues.iter().all(|i| i.kind == KIND_SCHEMA));
    assert!(err.has_issue_at("/error/code"));
    assert!(err.has_issue_at("/error"));
}

#[test]
fn test_error_envelope_must_be_an_object() {
    let err = serde_json::from_value::<ErrorResponse>(json!({ "error": "oops" })).unwrap_err();
    assert!(err.to_string().contains("error"));

    let err = ErrorResponse::try_from(json!({ "error": "oops" })).unwrap_err();
    assert_eq!(err.model, "ErrorResponse");
    assert_eq!(err.issues.len(), 1);
    assert!(err.has_issue_at("error"));
    assert!(err.has_kind(KIND_TYPE_DICT));
}
