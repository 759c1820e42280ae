//! Application error types

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Recoverable Errors (notify user, continue) =====
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Download failed: {0}")]
    Network(String),

    #[error("Unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ===== Fatal Errors (application termination) =====
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization failed: {0}")]
    Init(String),
}

impl AppError {
    /// Is this error recoverable?
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Io(_)
                | AppError::NotFound(_)
                | AppError::ImageDecode(_)
                | AppError::Network(_)
                | AppError::UnsupportedSource(_)
                | AppError::Validation(_)
                | AppError::Serialization(_)
        )
    }

    /// Is this a fatal error?
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(what) => format!("Not found: {}", what),
            AppError::ImageDecode(msg) => format!("Cannot load image: {}", msg),
            AppError::Network(msg) => format!("Cannot download image: {}", msg),
            AppError::UnsupportedSource(url) => format!("Cannot open image source: {}", url),
            AppError::Validation(msg) => msg.clone(),
            AppError::Storage(_) => "Saving failed. Changes were not stored.".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<app_db::DbError> for AppError {
    fn from(e: app_db::DbError) -> Self {
        match e {
            app_db::DbError::Io(io) => AppError::Io(io),
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl From<image::ImageError> for AppError {
    fn from(e: image::ImageError) -> Self {
        AppError::ImageDecode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(AppError::NotFound("x".into()).is_recoverable());
        assert!(AppError::UnsupportedSource("ftp://x".into()).is_recoverable());
        assert!(AppError::Network("timeout".into()).is_recoverable());
        assert!(AppError::Storage("disk".into()).is_fatal());
        assert!(AppError::Init("gpu".into()).is_fatal());
    }

    #[test]
    fn test_db_error_conversion() {
        let err: AppError = app_db::DbError::Pool("timeout".into()).into();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.user_message(), "Saving failed. Changes were not stored.");
    }
}
