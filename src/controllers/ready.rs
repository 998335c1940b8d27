
// Controller for the readiness probe.

use crate::exceptions::{http_exception_handler, HttpException};
use crate::models::{ErrorResponse, ReadyResponse};
use crate::response::ApiResponse;
use http::StatusCode;
use serde_json::json;
use tracing::{debug, error};

/// A backing dependency the service needs before it can take traffic
/// (a cache, a database, an upstream API).
pub trait DependencyProbe {
    /// Name used in the error message, e.g. `Redis`.
    fn name(&self) -> &str;

    /// Check the dependency is reachable.
    fn ping(&self) -> anyhow::Result<()>;
}

/// Run every probe in order; the first failure aborts with `502 Bad Gateway`.
pub fn readiness_check(probes: &[&dyn DependencyProbe]) -> Result<ReadyResponse, HttpException> {
    for probe in probes {
        if let Err(err) = probe.ping() {
            error!(dependency = probe.name(), error = %err, "readiness probe failed");
            let message = format!("Could not connect to {}", probe.name());
            return Err(match ErrorResponse::new(502, message) {
                Ok(body) => body.into_exception(),
                Err(e) => HttpException::new(
                    StatusCode::BAD_GATEWAY,
                    Some(json!({ "error": e.to_string() })),
                ),
            });
        }
        debug!(dependency = probe.name(), "readiness probe passed");
    }
    Ok(ReadyResponse::ok())
}

/// Readiness endpoint: `200 {"status": "ok"}` or the rendered exception.
pub fn ready(probes: &[&dyn DependencyProbe]) -> ApiResponse {
    match readiness_check(probes) {
        Ok(body) => ApiResponse::json(200, &body),
        Err(exception) => http_exception_handler(&exception),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Up;
    struct Down(&'static str);

    impl DependencyProbe for Up {
        fn name(&self) -> &str {
            "Up"
        }
        fn ping(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    impl DependencyProbe for Down {
        fn name(&self) -> &str {
            self.0
        }
        fn ping(&self) -> anyhow::Result<()> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_no_probes_is_ready() {
        assert_eq!(readiness_check(&[]).unwrap(), ReadyResponse::ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let exc = readiness_check(&[&Up, &Down("Redis"), &Down("Postgres")]).unwrap_err();
        assert_eq!(exc.status_code, StatusCode::BAD_GATEWAY);
        let content = exc.content.unwrap();
        assert_eq!(content["error"]["message"], "Could not connect to Redis");
        assert_eq!(content["error"]["status"], "BAD_GATEWAY");
    }

    #[test]
    fn test_ready_renders_ok() {
        let res = ready(&[&Up]);
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "status": "ok" }));
    }
}
