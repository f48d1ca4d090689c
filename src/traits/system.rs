//! Outbound system effects.
//!
//! The page never talks to a network; the only things that leave the
//! process are URLs handed to the OS (browser, mail client) and text put on
//! the clipboard. Both go through [`SystemBridge`] so the app can be driven
//! in tests without side effects.

use crate::error::FolioResult;

/// Access to the desktop environment.
pub trait SystemBridge: Send {
    /// Open `url` (http(s) or `mailto:`) with the system handler.
    fn open_url(&self, url: &str) -> FolioResult<()>;

    /// Put `text` on the system clipboard.
    fn copy_to_clipboard(&self, text: &str) -> FolioResult<()>;
}
