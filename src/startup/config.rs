//! Startup configuration.
//!
//! Values come from three layers: built-in defaults, `FOLIO_*` environment
//! variables, then command-line flags. Later layers win.

use std::path::PathBuf;

use crate::app::resume::default_download_dir;
use crate::app::ResumeSettings;
use crate::cli::RunOptions;
use crate::content::ContactInfo;
use crate::domain::{Theme, SCROLL_TOP_THRESHOLD};
use crate::error::{FolioError, FolioResult};

pub const ENV_THEME: &str = "FOLIO_THEME";
pub const ENV_CONTENT: &str = "FOLIO_CONTENT";
pub const ENV_RESUME: &str = "FOLIO_RESUME";
pub const ENV_DOWNLOAD_DIR: &str = "FOLIO_DOWNLOAD_DIR";
pub const ENV_LOG: &str = "FOLIO_LOG";

/// Event loop tick in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 16;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved settings for one run.
///
/// # Example
///
/// ```
/// use folio::domain::Theme;
/// use folio::startup::FolioConfig;
///
/// let config = FolioConfig::default().with_theme(Theme::Dark);
/// assert_eq!(config.theme, Some(Theme::Dark));
/// assert_eq!(config.tick_rate_ms, 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Forced theme; `None` means follow the terminal's colour scheme
    pub theme: Option<Theme>,
    /// Content override file
    pub content_path: Option<PathBuf>,
    /// Resume source file; `None` means the bundled asset
    pub resume_path: Option<PathBuf>,
    /// Where downloaded resumes are written; `None` means the user's download dir
    pub download_dir: Option<PathBuf>,
    pub tick_rate_ms: u64,
    /// Scroll offset (in scroll units) past which the scroll-to-top button shows
    pub scroll_threshold: u32,
    pub log_filter: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme: None,
            content_path: None,
            resume_path: None,
            download_dir: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            scroll_threshold: SCROLL_TOP_THRESHOLD,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_resume_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.resume_path = Some(path.into());
        self
    }

    pub fn with_download_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(path.into());
        self
    }

    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms.max(1);
        self
    }

    pub fn with_scroll_threshold(mut self, threshold: u32) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> FolioResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with variables from `lookup`. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> FolioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_THEME) {
            let theme = value.parse().map_err(|_| FolioError::InvalidSetting {
                setting: ENV_THEME,
                value,
            })?;
            config = config.with_theme(theme);
        }
        if let Some(path) = get(ENV_CONTENT) {
            config = config.with_content_path(path);
        }
        if let Some(path) = get(ENV_RESUME) {
            config = config.with_resume_path(path);
        }
        if let Some(path) = get(ENV_DOWNLOAD_DIR) {
            config = config.with_download_dir(path);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        Ok(config)
    }

    /// Overlay command-line options.
    pub fn apply_cli(mut self, options: &RunOptions) -> Self {
        if let Some(theme) = options.theme {
            self.theme = Some(theme);
        }
        if let Some(path) = &options.content_path {
            self.content_path = Some(path.clone());
        }
        if let Some(path) = &options.resume_path {
            self.resume_path = Some(path.clone());
        }
        self
    }

    /// Resume source and destination for the given contact details.
    ///
    /// The bundled resume is looked up as `assets/<file name>` next to the
    /// executable.
    pub fn resume_settings(&self, contact: &ContactInfo) -> ResumeSettings {
        let file_name = contact.resume_file_name.clone();
        let source = self
            .resume_path
            .clone()
            .unwrap_or_else(|| bundled_asset_dir().join(&file_name));
        let download_dir = self
            .download_dir
            .clone()
            .unwrap_or_else(default_download_dir);
        ResumeSettings {
            source,
            download_dir,
            file_name,
        }
    }
}

fn bundled_asset_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"))
}
