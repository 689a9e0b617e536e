use crate::pipeline::DEFAULT_ARTIFACT_PATH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "rain_tomorrow=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_PATH)
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the optional config file, then the command-line
    /// artifact override.
    pub fn resolve(file: Option<&Path>, artifact: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(path) = artifact {
            config.artifact_path = path;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(text: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults_point_at_the_working_directory() {
        let c = AppConfig::resolve(None, None).unwrap();
        assert_eq!(c.artifact_path, PathBuf::from("aussie_rain_pipeline.json"));
        assert_eq!(c.log_filter, "rain_tomorrow=info");
    }

    #[test]
    fn file_fills_gaps_with_defaults() {
        let f = config_file(r#"{ "artifact_path": "/models/rain.json" }"#);
        let c = AppConfig::resolve(Some(f.path()), None).unwrap();
        assert_eq!(c.artifact_path, PathBuf::from("/models/rain.json"));
        assert_eq!(c.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn command_line_wins_over_file() {
        let f = config_file(r#"{ "artifact_path": "/models/rain.json", "log_filter": "debug" }"#);
        let c = AppConfig::resolve(Some(f.path()), Some("other.json".into())).unwrap();
        assert_eq!(c.artifact_path, PathBuf::from("other.json"));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn unknown_keys_and_missing_files_are_errors() {
        let f = config_file(r#"{ "artefact": "typo.json" }"#);
        assert!(matches!(
            AppConfig::resolve(Some(f.path()), None),
            Err(ConfigError::Malformed { .. })
        ));
        assert!(matches!(
            AppConfig::from_file(Path::new("/definitely/not/here.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn schema_describes_both_keys() {
        let schema = serde_json::to_value(schemars::schema_for!(AppConfig)).unwrap();
        assert!(schema["properties"]["artifact_path"].is_object());
        assert!(schema["properties"]["log_filter"].is_object());
    }
}
