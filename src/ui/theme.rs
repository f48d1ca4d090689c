//! Color palettes for the portfolio UI.
//!
//! One palette per [`Theme`]; render functions take colors from the palette
//! instead of hard-coding them so the theme toggle repaints everything.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Theme;

// ============================================================================
// Light palette
// ============================================================================

/// Navy used for headings and the nav bar in the light theme (#1A2B50)
pub const COLOR_NAVY: Color = Color::Rgb(26, 43, 80);

/// Teal accent (#00A3A3)
pub const COLOR_TEAL: Color = Color::Rgb(0, 163, 163);

/// Coral highlight for the typewriter and bullets (#FF7F6E)
pub const COLOR_CORAL: Color = Color::Rgb(255, 127, 110);

/// Body text in the light theme (#333333)
pub const COLOR_CHARCOAL: Color = Color::Rgb(51, 51, 51);

/// Page background in the light theme (#F5F7FA)
pub const COLOR_PAPER: Color = Color::Rgb(245, 247, 250);

// ============================================================================
// Dark palette
// ============================================================================

/// Page background in the dark theme (gray-900)
pub const COLOR_GRAY_900: Color = Color::Rgb(17, 24, 39);

/// Card surfaces in the dark theme (gray-800)
pub const COLOR_GRAY_800: Color = Color::Rgb(31, 41, 55);

/// Body text in the dark theme (gray-300)
pub const COLOR_GRAY_300: Color = Color::Rgb(209, 213, 219);

/// Secondary text in both themes (gray-500)
pub const COLOR_GRAY_500: Color = Color::Rgb(107, 114, 128);

/// Button fill in the dark theme (blue-600)
pub const COLOR_BLUE_600: Color = Color::Rgb(37, 99, 235);

/// Links in the dark theme (blue-400)
pub const COLOR_BLUE_400: Color = Color::Rgb(96, 165, 250);

/// Error text in both themes
pub const COLOR_ERROR: Color = Color::Rgb(220, 38, 38);

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Card and nav bar background
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Secondary text (periods, issuers, hints)
    pub muted: Color,
    /// Section headings and the name
    pub heading: Color,
    /// Links, organizations and skill icons
    pub accent: Color,
    /// Typewriter word and list bullets
    pub highlight: Color,
    /// Primary button fill
    pub button: Color,
    /// Text on a primary button
    pub button_text: Color,
    /// Card borders and the timeline rail
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: COLOR_PAPER,
                surface: Color::White,
                text: COLOR_CHARCOAL,
                muted: COLOR_GRAY_500,
                heading: COLOR_NAVY,
                accent: COLOR_TEAL,
                highlight: COLOR_CORAL,
                button: COLOR_TEAL,
                button_text: Color::White,
                border: COLOR_TEAL,
                error: COLOR_ERROR,
            },
            Theme::Dark => Self {
                background: COLOR_GRAY_900,
                surface: COLOR_GRAY_800,
                text: COLOR_GRAY_300,
                muted: COLOR_GRAY_500,
                heading: Color::White,
                accent: COLOR_BLUE_400,
                highlight: COLOR_CORAL,
                button: COLOR_BLUE_600,
                button_text: Color::White,
                border: COLOR_GRAY_500,
                error: COLOR_ERROR,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.base()
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.button_text)
            .bg(self.button)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }

    /// Style laid over a hit area while the pointer is on it.
    pub fn hover_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_by_theme() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.heading, COLOR_NAVY);
        assert_eq!(dark.background, COLOR_GRAY_900);
        assert_eq!(dark.button, COLOR_BLUE_600);
        assert_eq!(light.button, COLOR_TEAL);
    }
}
