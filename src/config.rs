//! # Configuration Module
//!
//! Service settings read from an optional YAML file and environment variables.
//!
//! ## Environment Variables
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `RESPONSEKIT_PROJECT_NAME` | `project_name` | `responsekit` |
//! | `RESPONSEKIT_VERSION` | `version` | crate version |
//! | `RESPONSEKIT_DEBUG` | `debug` | `false` |
//!
//! Environment variables always win over the file.
//!
//! ## Example Configuration
//!
//! ```yaml
//! project_name: pet-store
//! version: 1.2.0
//! debug: true
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const ENV_PROJECT_NAME: &str = "RESPONSEKIT_PROJECT_NAME";
pub const ENV_VERSION: &str = "RESPONSEKIT_VERSION";
pub const ENV_DEBUG: &str = "RESPONSEKIT_DEBUG";

/// Settings shared by the schema document and the binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Service name, used as `info.title` of the components document
    pub project_name: String,
    /// Service version, used as `info.version`
    pub version: String,
    /// Debug mode (pretty logs at `debug` level in the binaries)
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
        }
    }
}

impl Settings {
    /// Defaults overridden by the environment.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        settings.apply_overrides(|key| env::var(key).ok());
        settings
    }

    /// Load a YAML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid YAML, or holds unknown keys.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let mut settings = Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
        settings.apply_overrides(|key| env::var(key).ok());
        Ok(settings)
    }

    /// Parse settings from YAML text. Absent keys keep their defaults.
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Override fields from `lookup`, which maps a variable name to its value.
    ///
    /// Unparsable booleans are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_PROJECT_NAME).filter(|v| !v.is_empty()) {
            self.project_name = name;
        }
        if let Some(version) = lookup(ENV_VERSION).filter(|v| !v.is_empty()) {
            self.version = version;
        }
        if let Some(debug) = lookup(ENV_DEBUG).and_then(|v| parse_bool(&v)) {
            self.debug = debug;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.project_name, "responsekit");
        assert!(!s.debug);
    }

    #[test]
    fn test_yaml_partial() {
        let s = Settings::from_yaml("project_name: pet-store\n").unwrap();
        assert_eq!(s.project_name, "pet-store");
        assert_eq!(s.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_yaml_empty_is_default() {
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_yaml_unknown_key_rejected() {
        assert!(Settings::from_yaml("use_redis: true\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_PROJECT_NAME, "inventory"),
            (ENV_VERSION, "2.0.0"),
            (ENV_DEBUG, "YES"),
        ]
        .into_iter()
        .collect();
        let mut s = Settings::default();
        s.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(s.project_name, "inventory");
        assert_eq!(s.version, "2.0.0");
        assert!(s.debug);
    }

    #[test]
    fn test_bad_bool_ignored() {
        let mut s = Settings {
            debug: true,
            ..Settings::default()
        };
        s.apply_overrides(|k| (k == ENV_DEBUG).then(|| "maybe".to_string()));
        assert!(s.debug);
    }
}
