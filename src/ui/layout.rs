//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the layout
//! questions the render functions ask: mobile or desktop navigation, how wide
//! the page column is, how many rows the page viewport has.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints
pub mod breakpoints {
    /// Below this width the nav bar collapses into the mobile menu
    pub const MOBILE_WIDTH: u16 = 80;
    /// Below this width the timeline drops its two-sided rail
    pub const TIMELINE_SPLIT_WIDTH: u16 = 60;
    /// Smallest terminal the page is drawn in
    pub const MIN_WIDTH: u16 = 30;
    pub const MIN_HEIGHT: u16 = 10;
}

/// Widest the page column grows; wider terminals get side margins.
pub const MAX_CONTENT_WIDTH: u16 = 100;

/// Rows taken by the nav bar at the top.
pub const NAV_HEIGHT: u16 = 2;

/// Rows taken by the status line at the bottom.
pub const STATUS_HEIGHT: u16 = 1;

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```
/// use folio::ui::LayoutContext;
///
/// let ctx = LayoutContext::new(120, 40);
/// assert!(!ctx.is_mobile());
/// assert_eq!(ctx.content_width(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the collapsed mobile navigation is used.
    pub fn is_mobile(&self) -> bool {
        self.width < breakpoints::MOBILE_WIDTH
    }

    /// Whether timeline cards alternate around a center rail.
    pub fn split_timeline(&self) -> bool {
        self.width >= breakpoints::TIMELINE_SPLIT_WIDTH
    }

    /// Whether the terminal is too small to draw the page at all.
    pub fn is_too_small(&self) -> bool {
        self.width < breakpoints::MIN_WIDTH || self.height < breakpoints::MIN_HEIGHT
    }

    /// Width of the page column, after side padding.
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH)
    }

    /// Left edge of the centered page column.
    pub fn content_x(&self) -> u16 {
        self.width.saturating_sub(self.content_width()) / 2
    }

    /// Rows available to the scrolling page.
    pub fn page_height(&self) -> u16 {
        self.height
            .saturating_sub(NAV_HEIGHT + STATUS_HEIGHT)
            .max(1)
    }

    /// Number of columns in the project and skills grids.
    pub fn grid_columns(&self) -> usize {
        match self.content_width() {
            0..=59 => 1,
            60..=89 => 2,
            _ => 3,
        }
    }
}
