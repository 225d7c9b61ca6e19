//! Configuration types for workbench

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, usually loaded from `workbench.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Storage configuration
    pub storage: StorageConfig,
    /// Inference configuration
    pub inference: InferenceConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl WorkbenchConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::WorkbenchError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::WorkbenchError::Config(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, crate::WorkbenchError> {
        Ok(toml::from_str(content)?)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory managed by the file store
    pub root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("workbench-data"),
        }
    }
}

/// Inference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Adapter label shown in results
    pub name: String,
    /// Adapter version
    pub version: String,
    /// Backend selected at construction
    pub backend: BackendKind,
    /// Text-classification endpoint (classification backend only)
    pub endpoint: Option<String>,
    /// Bearer token sent to the endpoint
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            name: "Sentiment Model".to_string(),
            version: "1.0".to_string(),
            backend: BackendKind::Echo,
            endpoint: None,
            api_token: None,
            timeout_secs: 30,
        }
    }
}

/// Model backend variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Echoes the input without computation
    #[default]
    Echo,
    /// Delegates to an external text classifier
    Classification,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Echo => write!(f, "echo"),
            BackendKind::Classification => write!(f, "classification"),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = crate::WorkbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "echo" | "base" => Ok(BackendKind::Echo),
            "classification" | "classify" | "sentiment" => Ok(BackendKind::Classification),
            other => Err(crate::WorkbenchError::Config(format!(
                "Unknown backend: {}",
                other
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkbenchConfig::default();
        assert_eq!(config.inference.backend, BackendKind::Echo);
        assert_eq!(config.inference.version, "1.0");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_parse() {
        let toml_str = r#"
[storage]
root = "/tmp/demo"

[inference]
name = "Sentiment"
backend = "classification"
endpoint = "http://localhost:8000/classify"
timeout_secs = 5
"#;
        let config = WorkbenchConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.storage.root, PathBuf::from("/tmp/demo"));
        assert_eq!(config.inference.backend, BackendKind::Classification);
        assert_eq!(config.inference.timeout_secs, 5);
        // unset fields keep their defaults
        assert_eq!(config.inference.version, "1.0");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_parse_error() {
        let err = WorkbenchConfig::from_toml("[inference]\nbackend = \"gpt\"").unwrap_err();
        assert!(matches!(err, crate::WorkbenchError::Config(_)));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbench.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = WorkbenchConfig::from_file(&path).unwrap();
        assert_eq!(config.logging.level, "debug");

        let missing = WorkbenchConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(crate::WorkbenchError::Config(_))));
    }

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("echo".parse::<BackendKind>().unwrap(), BackendKind::Echo);
        assert_eq!(
            "Classification".parse::<BackendKind>().unwrap(),
            BackendKind::Classification
        );
        assert!("llama".parse::<BackendKind>().is_err());
    }
}
