use responsekit::config::Settings;
use responsekit::schema::{components, OPENAPI_VERSION};
use std::io::Write;

#[test]
fn test_load_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "project_name: pet-store\nversion: 1.2.0\ndebug: true").unwrap();
    let settings = Settings::load(file.path()).unwrap();
    // Environment overrides are not set in the test environment.
    if std::env::var("RESPONSEKIT_PROJECT_NAME").is_err() {
        assert_eq!(settings.project_name, "pet-store");
    }
    if std::env::var("RESPONSEKIT_VERSION").is_err() {
        assert_eq!(settings.version, "1.2.0");
    }
}

#[test]
fn test_load_rejects_unknown_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "project_name: x\nredis_port: 6379").unwrap();
    let err = Settings::load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse settings"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read settings"));
}

#[test]
fn test_components_document_uses_settings() {
    let settings = Settings {
        project_name: "inventory".to_string(),
        version: "3.0.0".to_string(),
        debug: false,
    };
    let doc = components(&settings);
    assert_eq!(doc["openapi"], OPENAPI_VERSION);
    assert_eq!(doc["info"]["title"], "inventory");
    assert_eq!(doc["info"]["version"], "3.0.0");
    let schemas = doc["components"]["schemas"].as_object().unwrap();
    for name in ["ReadyResponse", "ErrorModel", "ErrorResponse"] {
        assert!(schemas.contains_key(name), "{name}");
    }
}
