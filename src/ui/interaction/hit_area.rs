//! Hit area system for mouse interactions.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::ContactField;
use crate::domain::Section;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Navigation
    /// Desktop nav link or in-page link to a section
    NavigateTo(Section),
    /// Mobile menu link: closes the menu, then navigates
    MobileNavigateTo(Section),
    /// Mobile menu button (☰ / ✕)
    ToggleMenu,
    /// Floating scroll-to-top button
    ScrollToTop,
    /// Hero "View My Work" button
    ViewWork,

    // Header buttons
    ToggleTheme,
    DownloadResume,

    // Outbound
    /// External link (profile pages, repositories)
    OpenUrl(String),
    /// Email address link
    SendEmail,
    CopyEmail,

    // Contact form
    FocusContactField(ContactField),
    SubmitContact,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Hover state survives the clear when the same rect comes back,
/// so hovering a link does not flicker while the page animates.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Last mouse position seen by `update_hover`
    pointer: Option<(u16, u16)>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
        if let Some((x, y)) = self.pointer {
            self.hovered = self.find_hovered_index(x, y);
        }
    }

    /// Return the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.find_hovered_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    fn find_hovered_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
