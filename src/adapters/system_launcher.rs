//! Desktop-backed [`SystemBridge`].

use crate::error::{FolioError, FolioResult};
use crate::traits::SystemBridge;

/// Opens URLs with `open` and writes the clipboard with `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl SystemBridge for SystemLauncher {
    fn open_url(&self, url: &str) -> FolioResult<()> {
        open::that(url).map_err(|e| FolioError::BrowserLaunch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn copy_to_clipboard(&self, text: &str) -> FolioResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| FolioError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| FolioError::Clipboard(e.to_string()))
    }
}
