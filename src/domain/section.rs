//! Page sections and their anchors.

use std::fmt;

/// A navigable section of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Certifications,
    Projects,
    Contact,
}

impl Section {
    /// Number of sections.
    pub const COUNT: usize = 7;

    /// All sections in navigation order.
    pub const ALL: [Section; Section::COUNT] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Certifications,
        Section::Projects,
        Section::Contact,
    ];

    /// In-page anchor, e.g. `#home`.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Experience => "#experience",
            Section::Skills => "#skills",
            Section::Certifications => "#certifications",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Resolve an anchor, with or without the leading `#`.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let name = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL
            .into_iter()
            .find(|s| &s.anchor()[1..] == name)
    }

    /// Position in navigation order; also the 1-based shortcut digit minus one.
    pub fn nav_index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// Section for a shortcut digit `'1'..='7'`.
    pub fn from_shortcut(c: char) -> Option<Section> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(|i| Section::ALL.get(i).copied())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
