//! Unified error type for folio.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

/// Every failure the library can report.
///
/// None of these are fatal once the TUI is running: the app turns them into a
/// status line message. Only content loading at startup aborts the program.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Content override file could not be read.
    #[error("failed to read content file {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content override file is not a valid portfolio document.
    #[error("invalid content file {path}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Content could not be serialized for export.
    #[error("failed to serialize content: {0}")]
    ContentExport(#[source] serde_json::Error),

    /// Resume file does not exist at the configured path.
    #[error("resume not found at {path}")]
    ResumeNotFound { path: PathBuf },

    /// Copying the resume into the download directory failed.
    #[error("failed to save resume to {dest}: {source}")]
    ResumeCopy {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS refused to open a URL.
    #[error("could not open {url}: {message}")]
    BrowserLaunch { url: String, message: String },

    /// Clipboard access failed.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// A flag or environment value could not be parsed.
    #[error("invalid value {value:?} for {setting}")]
    InvalidSetting { setting: &'static str, value: String },

    /// Terminal I/O error.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::ContentRead { .. }
            | FolioError::ContentParse { .. }
            | FolioError::InvalidSetting { .. } => ErrorCategory::Configuration,
            FolioError::ResumeNotFound { .. } => ErrorCategory::User,
            FolioError::ContentExport(_)
            | FolioError::ResumeCopy { .. }
            | FolioError::BrowserLaunch { .. }
            | FolioError::Clipboard(_)
            | FolioError::Terminal(_) => ErrorCategory::System,
        }
    }

    /// Whether the TUI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            FolioError::Terminal(_) | FolioError::ContentRead { .. } | FolioError::ContentParse { .. }
        )
    }

    /// Get a short, single-line message for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::ResumeNotFound { path } => {
                format!("Resume file is missing ({})", path.display())
            }
            FolioError::ResumeCopy { dest, .. } => {
                format!("Could not save resume to {}", dest.display())
            }
            FolioError::BrowserLaunch { url, .. } => format!("Could not open {}", url),
            FolioError::Clipboard(_) => "Clipboard is not available".to_string(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::ContentRead { .. } => "CONTENT_READ",
            FolioError::ContentParse { .. } => "CONTENT_PARSE",
            FolioError::ContentExport(_) => "CONTENT_EXPORT",
            FolioError::ResumeNotFound { .. } => "RESUME_NOT_FOUND",
            FolioError::ResumeCopy { .. } => "RESUME_COPY",
            FolioError::BrowserLaunch { .. } => "BROWSER_LAUNCH",
            FolioError::Clipboard(_) => "CLIPBOARD",
            FolioError::InvalidSetting { .. } => "INVALID_SETTING",
            FolioError::Terminal(_) => "TERMINAL",
        }
    }
}
