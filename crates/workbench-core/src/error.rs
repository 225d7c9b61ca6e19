//! Error types for workbench

use thiserror::Error;

/// Main error type for workbench
#[derive(Error, Debug)]
pub enum WorkbenchError {
    /// Missing directory, file or copy source
    #[error("Not found: {0}")]
    NotFound(String),

    /// Filesystem failure (permissions, disk, path collisions)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// External inference capability unavailable or failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// File name that would escape the store directory
    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for workbench operations
pub type WorkbenchResult<T> = Result<T, WorkbenchError>;

impl WorkbenchError {
    /// Whether this error reports a missing directory, file or source
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkbenchError::NotFound(_))
    }
}

impl From<toml::de::Error> for WorkbenchError {
    fn from(err: toml::de::Error) -> Self {
        WorkbenchError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WorkbenchError::NotFound("directory 'demo'".to_string());
        assert_eq!(err.to_string(), "Not found: directory 'demo'");

        let err = WorkbenchError::InvalidName("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid file name: \"../etc\"");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: WorkbenchError = io_err.into();
        assert!(matches!(err, WorkbenchError::Io(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let err: WorkbenchError = toml_err.into();
        assert!(matches!(err, WorkbenchError::Config(_)));
    }
}
