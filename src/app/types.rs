//! Type definitions for the application state.
//!
//! - [`StatusMessage`] - Transient line shown in the status bar
//! - [`SectionAnchors`] - Page row of each section from the last render
//! - [`MenuItem`] - Entries of the mobile navigation menu

use crate::domain::Section;

/// How long a status message stays up, in milliseconds.
pub const STATUS_TTL_MS: u64 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient feedback for outbound actions and form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// Loop time (ms) at which the message is dropped
    pub expires_at_ms: u64,
}

/// Row of each section anchor in the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionAnchors {
    rows: [Option<usize>; Section::COUNT],
}

impl SectionAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: Section, row: usize) {
        self.rows[section.nav_index()] = Some(row);
    }

    pub fn get(&self, section: Section) -> Option<usize> {
        self.rows[section.nav_index()]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Option::is_none)
    }

    /// The section whose anchor is the last one at or above `row`.
    pub fn section_at(&self, row: usize) -> Option<Section> {
        Section::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|r| (s, r)))
            .filter(|(_, r)| *r <= row)
            .max_by_key(|(_, r)| *r)
            .map(|(s, _)| s)
    }
}

/// Entries of the mobile navigation menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Link(Section),
    ToggleTheme,
    DownloadResume,
}

impl MenuItem {
    pub fn all() -> Vec<MenuItem> {
        Section::ALL
            .into_iter()
            .map(MenuItem::Link)
            .chain([MenuItem::ToggleTheme, MenuItem::DownloadResume])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_at_picks_nearest_anchor_above() {
        let mut anchors = SectionAnchors::new();
        anchors.set(Section::Home, 0);
        anchors.set(Section::About, 6);
        anchors.set(Section::Experience, 20);
        assert_eq!(anchors.section_at(0), Some(Section::Home));
        assert_eq!(anchors.section_at(10), Some(Section::About));
        assert_eq!(anchors.section_at(200), Some(Section::Experience));
    }

    #[test]
    fn test_empty_anchors() {
        let anchors = SectionAnchors::new();
        assert!(anchors.is_empty());
        assert_eq!(anchors.section_at(5), None);
    }

    #[test]
    fn test_menu_items_order() {
        let items = MenuItem::all();
        assert_eq!(items.len(), 9);
        assert_eq!(items[0], MenuItem::Link(Section::Home));
        assert_eq!(items[6], MenuItem::Link(Section::Contact));
        assert_eq!(items[8], MenuItem::DownloadResume);
    }
}
