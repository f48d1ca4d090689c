//! Light/dark theme selection.
//!
//! The initial theme comes from the terminal's colour scheme, read once at
//! startup. Terminals that follow the rxvt convention export `COLORFGBG` as
//! `"<fg>;<bg>"` (sometimes `"<fg>;default;<bg>"`); a low ANSI background
//! index means a dark background. There is no live subscription: a terminal
//! that changes scheme later keeps the theme chosen at startup.

use std::fmt;
use std::str::FromStr;

/// Presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Flip in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a `COLORFGBG` value. `None` when absent or unparsable.
    pub fn from_colorfgbg(value: Option<&str>) -> Option<Theme> {
        let bg = value?.rsplit(';').next()?.trim();
        let index: u8 = bg.parse().ok()?;
        // ANSI 0-6 and 8 are the dark backgrounds; 7 and 9-15 are light.
        if index <= 6 || index == 8 {
            Some(Theme::Dark)
        } else {
            Some(Theme::Light)
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(other.to_string()),
        }
    }
}

/// Query the terminal's colour scheme once. Defaults to light when unknown.
pub fn detect_system_theme() -> Theme {
    let value = std::env::var("COLORFGBG").ok();
    let theme = Theme::from_colorfgbg(value.as_deref()).unwrap_or_default();
    tracing::debug!(colorfgbg = ?value, %theme, "Detected system theme");
    theme
}
