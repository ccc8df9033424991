//! Command-line settings.
//!
//! Settings are read-only: they come from built-in defaults or from a JSON file
//! passed with `--config`.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output formats accepted in `default_output_format`.
const OUTPUT_FORMATS: [&str; 3] = ["plain", "json", "csv"];

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format used when `--output` is not given.
    pub default_output_format: String,
    /// Largest range `expand` prints without `--limit`, 0 for unlimited.
    pub max_expand: u64,
    /// Print byte dumps in upper-case hex.
    pub uppercase_hex: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_output_format: "plain".to_string(),
            max_expand: 65536,
            uppercase_hex: false,
        }
    }
}

impl Settings {
    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the settings values.
    pub fn validate(&self) -> ConfigResult<()> {
        let format = self.default_output_format.to_ascii_lowercase();
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown output format '{}' (expected one of: {})",
                self.default_output_format,
                OUTPUT_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_output_format, "plain");
        assert_eq!(settings.max_expand, 65536);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_expand": 10, "default_output_format": "JSON"}}"#).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.max_expand, 10);
        assert_eq!(settings.default_output_format, "JSON");
        assert!(!settings.uppercase_hex);
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_output_format": "xml"}}"#).unwrap();

        assert!(matches!(
            Settings::load_from(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            Settings::load_from(file.path()),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load_from(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
