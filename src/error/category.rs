//! Error category classification.
//!
//! Categories drive how the UI reports a failure: user-actionable problems
//! get a short hint in the status line, system problems get logged.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (invalid input, missing file they pointed at).
    User,

    /// System/OS errors (filesystem, clipboard, URL handler).
    System,

    /// Configuration errors (bad content file, bad flag value).
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::User => "User action required",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Check the input and try again.",
            ErrorCategory::System => "Check file permissions and installed desktop helpers.",
            ErrorCategory::Configuration => "Fix the configuration and restart folio.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
