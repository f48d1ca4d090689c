//! JSON content override.

use std::path::Path;

use super::Portfolio;
use crate::error::{FolioError, FolioResult};

impl Portfolio {
    /// Load a portfolio document from `path`.
    pub fn load(path: &Path) -> FolioResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_json(&raw).map_err(|source| FolioError::ContentParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded portfolio content");
        Ok(portfolio)
    }

    /// Parse a portfolio document.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Pretty-printed JSON, the format [`Portfolio::load`] accepts.
    pub fn to_json(&self) -> FolioResult<String> {
        serde_json::to_string_pretty(self).map_err(FolioError::ContentExport)
    }
}
