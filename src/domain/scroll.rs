//! Page scroll state.
//!
//! This module provides [`ScrollState`], the document scroll position of the
//! portfolio page. Offsets are kept in scroll units rather than rows so the
//! "scrolled past the hero" threshold reads the same as a pixel offset would:
//! one terminal row is [`ROW_UNITS`] units.

/// Scroll units per terminal row.
pub const ROW_UNITS: u32 = 20;

/// Offset beyond which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD: u32 = 500;

/// Scroll state with smooth-scroll target tracking.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current offset from the top of the page
    offset: u32,
    /// Largest valid offset (calculated during render)
    max_offset: u32,
    /// Where a smooth scroll is heading, if one is in progress
    target: Option<u32>,
    /// Cached `offset > threshold`, refreshed on every offset change
    show_scroll_top: bool,
    /// Threshold for `show_scroll_top`
    threshold: u32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::with_threshold(SCROLL_TOP_THRESHOLD)
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            target: None,
            show_scroll_top: false,
            threshold,
        }
    }

    /// Current offset in scroll units.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// First visible page row.
    pub fn row(&self) -> usize {
        (self.offset / ROW_UNITS) as usize
    }

    pub fn max_offset(&self) -> u32 {
        self.max_offset
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    /// Whether the scroll-to-top control should be visible.
    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    fn observe(&mut self) {
        self.show_scroll_top = self.offset > self.threshold;
    }

    /// Jump to `offset`, clamped to the page. Cancels any smooth scroll.
    pub fn set_offset(&mut self, offset: u32) {
        self.target = None;
        self.offset = offset.min(self.max_offset);
        self.observe();
    }

    /// Scroll by whole rows; negative scrolls up. Returns true if the offset changed.
    pub fn scroll_by_rows(&mut self, rows: i32) -> bool {
        let old = self.offset;
        let delta = rows.unsigned_abs().saturating_mul(ROW_UNITS);
        let next = if rows < 0 {
            self.offset.saturating_sub(delta)
        } else {
            self.offset.saturating_add(delta)
        };
        self.set_offset(next);
        old != self.offset
    }

    /// Begin a smooth scroll towards `offset`.
    pub fn smooth_scroll_to(&mut self, offset: u32) {
        let target = offset.min(self.max_offset);
        if target == self.offset {
            self.target = None;
        } else {
            self.target = Some(target);
        }
    }

    /// Smooth scroll back to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.smooth_scroll_to(0);
    }

    /// Jump to the bottom of the page.
    pub fn scroll_to_bottom(&mut self) {
        self.set_offset(self.max_offset);
    }

    /// Advance a smooth scroll by one animation frame.
    ///
    /// Covers a quarter of the remaining distance per frame, never less than
    /// one row, and lands exactly on the target. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let distance = target.abs_diff(self.offset);
        let stride = (distance / 4).max(ROW_UNITS);
        self.offset = if distance <= stride {
            target
        } else if target > self.offset {
            self.offset + stride
        } else {
            self.offset - stride
        };

        if self.offset == target {
            self.target = None;
        }
        self.observe();
        true
    }

    /// Update scroll limits from the rendered page size.
    pub fn update_limits(&mut self, total_rows: usize, viewport_rows: usize) {
        let overflow = total_rows.saturating_sub(viewport_rows) as u32;
        self.max_offset = overflow.saturating_mul(ROW_UNITS);

        if self.offset > self.max_offset {
            self.offset = self.max_offset;
        }
        if let Some(target) = self.target {
            let clamped = target.min(self.max_offset);
            self.target = (clamped != self.offset).then_some(clamped);
        }
        self.observe();
    }
}
