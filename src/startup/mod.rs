//! Startup: configuration layering and logging.
//!
//! - [`config`] - `FolioConfig` built from defaults, environment and flags
//! - [`logging`] - file-backed `tracing` subscriber

pub mod config;
pub mod logging;

pub use config::FolioConfig;
pub use logging::init_tracing;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    #[test]
    fn test_config_builder() {
        let config = FolioConfig::default()
            .with_theme(Theme::Dark)
            .with_scroll_threshold(100);
        assert_eq!(config.theme, Some(Theme::Dark));
        assert_eq!(config.scroll_threshold, 100);
    }
}
