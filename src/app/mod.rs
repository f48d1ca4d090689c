//! Application state and logic for the portfolio.
//!
//! [`App`] is the root view: it owns the only mutable UI state (menu, scroll,
//! theme, typewriter, contact form) and hands immutable snapshots of itself to
//! the render functions. User input comes back in as method calls, either from
//! the key/mouse handlers or from clicked hit areas.
//!
//! - [`contact`] - Contact form editing, validation and mailto composition
//! - [`resume`] - Resume download
//! - [`run_app`] - The event loop driving input, ticks and redraws
//! - [`types`] - Status messages, section anchors, menu items

pub mod contact;
mod event_loop;
mod handlers;
mod navigation;
pub mod resume;
mod types;

pub use event_loop::run_app;
pub use contact::{ContactError, ContactField, ContactForm, ContactSubmission, TextField};
pub use resume::ResumeSettings;
pub use types::{MenuItem, SectionAnchors, StatusKind, StatusMessage, STATUS_TTL_MS};

use crate::content::Portfolio;
use crate::domain::{ScrollState, Theme, Typewriter};
use crate::error::FolioError;
use crate::traits::SystemBridge;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::LayoutContext;

/// Root application state.
pub struct App {
    /// Content shown on the page
    pub portfolio: Portfolio,
    /// Current light/dark selection
    pub theme: Theme,
    /// Whether the mobile navigation menu is open
    pub menu_open: bool,
    /// Highlighted entry of the mobile menu
    pub menu_cursor: usize,
    /// Page scroll position and scroll-to-top threshold
    pub scroll: ScrollState,
    /// Hero banner typing effect
    pub typewriter: Typewriter,
    /// Contact form buffers and focus
    pub contact: ContactForm,
    /// Transient status-bar message
    pub status: Option<StatusMessage>,
    /// Clickable regions registered by the last render
    pub hit_areas: HitAreaRegistry,
    /// Section rows from the last render
    pub anchors: SectionAnchors,
    /// Section to scroll to once anchors are known
    pub pending_section: Option<crate::domain::Section>,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Set when the user asked to leave
    pub should_quit: bool,
    /// Loop time (ms since startup) of the last tick
    pub now_ms: u64,
    /// Terminal size from the last resize event
    pub terminal_width: u16,
    pub terminal_height: u16,
    resume: ResumeSettings,
    bridge: Box<dyn SystemBridge>,
}

impl App {
    /// Create the root view.
    ///
    /// `theme` is the initial theme, normally the system preference read once
    /// at startup.
    pub fn new(
        portfolio: Portfolio,
        theme: Theme,
        resume: ResumeSettings,
        bridge: Box<dyn SystemBridge>,
    ) -> Self {
        let typewriter = Typewriter::new(portfolio.typewriter_words.clone());
        Self {
            portfolio,
            theme,
            menu_open: false,
            menu_cursor: 0,
            scroll: ScrollState::new(),
            typewriter,
            contact: ContactForm::new(),
            status: None,
            hit_areas: HitAreaRegistry::new(),
            anchors: SectionAnchors::new(),
            pending_section: None,
            needs_redraw: true,
            should_quit: false,
            now_ms: 0,
            terminal_width: 80,
            terminal_height: 24,
            resume,
            bridge,
        }
    }

    /// Replace the scroll state's threshold (keeps offset at the top).
    pub fn with_scroll_threshold(mut self, threshold: u32) -> Self {
        self.scroll = ScrollState::with_threshold(threshold);
        self
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn layout(&self) -> LayoutContext {
        LayoutContext::new(self.terminal_width, self.terminal_height)
    }

    pub fn is_mobile(&self) -> bool {
        self.layout().is_mobile()
    }

    pub fn resume_settings(&self) -> &ResumeSettings {
        &self.resume
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        tracing::debug!(theme = %self.theme, "Theme toggled");
        self.mark_dirty();
    }

    /// Advance timers by one loop tick.
    ///
    /// Drives the typewriter, any smooth scroll in progress, and status expiry.
    /// `now_ms` is milliseconds since the loop started.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);

        if self.typewriter.update(now_ms) {
            self.mark_dirty();
        }
        if self.scroll.tick() {
            self.mark_dirty();
        }
        if let Some(status) = &self.status {
            if self.now_ms >= status.expires_at_ms {
                self.status = None;
                self.mark_dirty();
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at_ms: self.now_ms + STATUS_TTL_MS,
        });
        self.mark_dirty();
    }

    /// Log a recoverable failure and surface it in the status bar.
    pub fn report_error(&mut self, err: &FolioError) {
        tracing::warn!(code = err.error_code(), category = %err.category(), "{}", err);
        self.set_status(err.user_message(), StatusKind::Error);
    }

    /// Open an external link (profile pages, project repositories).
    pub fn open_link(&mut self, url: &str) {
        match self.bridge.open_url(url) {
            Ok(()) => {
                tracing::info!(url, "Opened link");
                self.set_status(format!("Opened {}", url), StatusKind::Info);
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Open a blank email to the portfolio owner.
    pub fn send_email(&mut self) {
        let url = self.portfolio.contact.mailto_url();
        self.open_link(&url);
    }

    /// Copy the owner's email address to the clipboard.
    pub fn copy_email(&mut self) {
        let email = self.portfolio.contact.email.clone();
        match self.bridge.copy_to_clipboard(&email) {
            Ok(()) => {
                tracing::info!("Copied email address");
                self.set_status(format!("Copied {}", email), StatusKind::Info);
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Save the resume into the download directory.
    pub fn download_resume(&mut self) {
        match self.resume.download() {
            Ok(path) => {
                self.set_status(format!("Resume saved to {}", path.display()), StatusKind::Info)
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Validate the contact form and hand it to the mail client.
    pub fn submit_contact(&mut self) {
        match self.contact.validate() {
            Ok(submission) => {
                let url = submission.mailto_url(&self.portfolio.contact.email);
                match self.bridge.open_url(&url) {
                    Ok(()) => {
                        tracing::info!("Contact message handed to mail client");
                        self.contact.reset();
                        self.set_status(
                            format!("Thanks {}! Your mail client has the message.", submission.name),
                            StatusKind::Info,
                        );
                    }
                    Err(e) => self.report_error(&e),
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                self.contact.focus(e.field());
                self.set_status(e.to_string(), StatusKind::Error);
            }
        }
    }
}
