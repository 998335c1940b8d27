//! Per-field coercion shared by the response models.
//!
//! Each helper takes the field's location and the raw JSON value (or `None`
//! when the key was absent) and either returns the coerced value or a single
//! [`ValidationIssue`].

use crate::validator::{
    ValidationIssue, KIND_NONE_NOT_ALLOWED, KIND_TYPE_INTEGER, KIND_TYPE_STR,
};
use serde_json::Value;

/// Coerce any scalar to text.
///
/// Strings pass through, numbers use their JSON text and booleans render as
/// `True`/`False`. Objects, arrays and `null` are rejected.
pub fn coerce_text(location: &str, value: Option<&Value>) -> Result<String, ValidationIssue> {
    match value {
        None => Err(ValidationIssue::missing(location)),
        Some(Value::Null) => Err(none_not_allowed(location)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        // booleans render capitalised on the wire
        Some(Value::Bool(true)) => Ok("True".to_string()),
        Some(Value::Bool(false)) => Ok("False".to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(ValidationIssue::new(
            location,
            KIND_TYPE_STR,
            "str type expected",
        )),
    }
}

/// Coerce to a signed integer.
///
/// Accepts integers, floats without a fractional part and strings holding a
/// decimal integer. Booleans are not integers here.
pub fn coerce_int(location: &str, value: Option<&Value>) -> Result<i64, ValidationIssue> {
    let not_int = || ValidationIssue::new(location, KIND_TYPE_INTEGER, "value is not a valid integer");
    match value {
        None => Err(ValidationIssue::missing(location)),
        Some(Value::Null) => Err(none_not_allowed(location)),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(not_int()),
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| not_int()),
        Some(_) => Err(not_int()),
    }
}

fn none_not_allowed(location: &str) -> ValidationIssue {
    ValidationIssue::new(location, KIND_NONE_NOT_ALLOWED, "none is not an allowed value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::KIND_MISSING;
    use serde_json::json;

    #[test]
    fn test_text_scalars() {
        assert_eq!(coerce_text("s", Some(&json!("ok"))).unwrap(), "ok");
        assert_eq!(coerce_text("s", Some(&json!(15))).unwrap(), "15");
        assert_eq!(coerce_text("s", Some(&json!(-3))).unwrap(), "-3");
        assert_eq!(coerce_text("s", Some(&json!(1.5))).unwrap(), "1.5");
        assert_eq!(coerce_text("s", Some(&json!(false))).unwrap(), "False");
        assert_eq!(coerce_text("s", Some(&json!(true))).unwrap(), "True");
    }

    #[test]
    fn test_text_rejects_structures() {
        for v in [json!({"status": "ok"}), json!([123, "ok"]), json!(["ok", "ready"])] {
            let issue = coerce_text("status", Some(&v)).unwrap_err();
            assert_eq!(issue.kind, KIND_TYPE_STR);
            assert_eq!(issue.location, "status");
        }
    }

    #[test]
    fn test_text_missing_and_null() {
        assert_eq!(coerce_text("m", None).unwrap_err().kind, KIND_MISSING);
        assert_eq!(coerce_text("m", Some(&Value::Null)).unwrap_err().kind, KIND_NONE_NOT_ALLOWED);
    }

    #[test]
    fn test_int_accepts() {
        assert_eq!(coerce_int("code", Some(&json!(404))).unwrap(), 404);
        assert_eq!(coerce_int("code", Some(&json!(404.0))).unwrap(), 404);
        assert_eq!(coerce_int("code", Some(&json!("404"))).unwrap(), 404);
        assert_eq!(coerce_int("code", Some(&json!(" 500 "))).unwrap(), 500);
        assert_eq!(coerce_int("code", Some(&json!(-7))).unwrap(), -7);
    }

    #[test]
    fn test_int_rejects() {
        let cases = [
            json!(404.5),
            json!(404.7),
            json!("four"),
            json!(true),
            json!([404]),
            json!({"code": 404}),
        ];
        for v in cases {
            assert_eq!(coerce_int("code", Some(&v)).unwrap_err().kind, KIND_TYPE_INTEGER, "{v}");
        }
        assert_eq!(coerce_int("code", None).unwrap_err().kind, KIND_MISSING);
    }
}
