//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! let (mut app, bridge) = common::TestAppBuilder::new().width(60).build();
//! ```

#![allow(dead_code)]

use std::path::PathBuf;

use folio::adapters::mock::RecordingBridge;
use folio::app::{App, ResumeSettings};
use folio::content::Portfolio;
use folio::domain::Theme;
use folio::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Builder for test `App` instances.
pub struct TestAppBuilder {
    theme: Theme,
    width: u16,
    height: u16,
    portfolio: Portfolio,
    resume: ResumeSettings,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            theme: Theme::Light,
            width: 120,
            height: 40,
            portfolio: Portfolio::builtin(),
            resume: ResumeSettings {
                source: PathBuf::from("/no/such/resume.pdf"),
                download_dir: std::env::temp_dir(),
                file_name: "resume.pdf".to_string(),
            },
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn portfolio(mut self, portfolio: Portfolio) -> Self {
        self.portfolio = portfolio;
        self
    }

    pub fn resume(mut self, resume: ResumeSettings) -> Self {
        self.resume = resume;
        self
    }

    /// Build the app plus a handle on the bridge it was given.
    pub fn build(self) -> (App, RecordingBridge) {
        let bridge = RecordingBridge::new();
        let mut app = App::new(
            self.portfolio,
            self.theme,
            self.resume,
            Box::new(bridge.clone()),
        );
        app.update_terminal_dimensions(self.width, self.height);
        (app, bridge)
    }
}

/// Render one frame at the app's terminal size and return the screen text.
pub fn render_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(app.terminal_width, app.terminal_height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Screen row `y` of a rendered string.
pub fn screen_row(screen: &str, y: usize) -> &str {
    screen.lines().nth(y).unwrap_or("")
}
