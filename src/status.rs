//! # HTTP Status Registry
//!
//! Lookup from an integer status code to its registered reason phrase and its
//! canonical upper-snake name (`404` → `Not Found` → `NOT_FOUND`).
//!
//! The registry is the set of codes the `http` crate knows a canonical reason
//! for. Everything else, including codes that fit in the valid `100..=999`
//! range but are unassigned, is unrecognised.
//!
//! Names follow the long-standing enum names clients already match on. Three
//! codes whose reason phrases were reworded by RFC 7231/9110 keep their older
//! name (`413` → `REQUEST_ENTITY_TOO_LARGE`).

use http::StatusCode;

/// Resolve an integer to a registered [`StatusCode`].
///
/// Returns `None` for codes outside `u16`, outside `100..=999`, or without a
/// registered reason phrase.
pub fn lookup(code: i64) -> Option<StatusCode> {
    let raw = u16::try_from(code).ok()?;
    let status = StatusCode::from_u16(raw).ok()?;
    status.canonical_reason().map(|_| status)
}

/// Registered reason phrase for `code` (e.g. `"Not Found"`).
pub fn reason_phrase(code: i64) -> Option<&'static str> {
    lookup(code).and_then(|s| s.canonical_reason())
}

/// Canonical name for `code` (e.g. `"NOT_FOUND"`).
pub fn status_name(code: i64) -> Option<String> {
    let status = lookup(code)?;
    match legacy_name(status) {
        Some(name) => Some(name.to_string()),
        None => status.canonical_reason().map(phrase_to_name),
    }
}

fn legacy_name(status: StatusCode) -> Option<&'static str> {
    match status.as_u16() {
        413 => Some("REQUEST_ENTITY_TOO_LARGE"),
        414 => Some("REQUEST_URI_TOO_LONG"),
        416 => Some("REQUESTED_RANGE_NOT_SATISFIABLE"),
        _ => None,
    }
}

/// Convert a reason phrase to its upper-snake name.
///
/// Apostrophes are dropped (`I'm a teapot` → `IM_A_TEAPOT`); any other run of
/// non-alphanumeric characters becomes a single underscore
/// (`Multi-Status` → `MULTI_STATUS`).
fn phrase_to_name(phrase: &str) -> String {
    let mut name = String::with_capacity(phrase.len());
    let mut pending_sep = false;
    for c in phrase.chars() {
        if c == '\'' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_sep && !name.is_empty() {
                name.push('_');
            }
            pending_sep = false;
            name.push(c.to_ascii_uppercase());
        } else {
            pending_sep = true;
        }
    }
    name
}
