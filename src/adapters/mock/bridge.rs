//! Recording system bridge for testing.

use std::sync::{Arc, Mutex};

use crate::error::{FolioError, FolioResult};
use crate::traits::SystemBridge;

/// A [`SystemBridge`] that records every call instead of touching the desktop.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the `App`.
///
/// # Example
///
/// ```
/// use folio::adapters::mock::RecordingBridge;
/// use folio::traits::SystemBridge;
///
/// let bridge = RecordingBridge::new();
/// bridge.open_url("https://github.com").unwrap();
/// assert_eq!(bridge.opened_urls(), vec!["https://github.com".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    opened: Arc<Mutex<Vec<String>>>,
    copied: Arc<Mutex<Vec<String>>>,
    /// Whether calls should fail
    should_fail: Arc<Mutex<bool>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether subsequent calls fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// URLs passed to `open_url`, in order.
    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    /// Text passed to `copy_to_clipboard`, in order.
    pub fn copied_text(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }

    fn failing(&self) -> bool {
        *self.should_fail.lock().unwrap()
    }
}

impl SystemBridge for RecordingBridge {
    fn open_url(&self, url: &str) -> FolioResult<()> {
        if self.failing() {
            return Err(FolioError::BrowserLaunch {
                url: url.to_string(),
                message: "mock failure".to_string(),
            });
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> FolioResult<()> {
        if self.failing() {
            return Err(FolioError::Clipboard("mock failure".to_string()));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
