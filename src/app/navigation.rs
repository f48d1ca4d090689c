//! Navigation methods for the App.

use super::{App, ContactField, MenuItem};
use crate::domain::{Section, ROW_UNITS};

impl App {
    /// Smooth-scroll to `section`.
    ///
    /// The target row comes from the last render; if the page has not been
    /// laid out yet the request is kept and resolved on the next render.
    pub fn navigate_to(&mut self, section: Section) {
        tracing::debug!(anchor = section.anchor(), "Navigate");
        if section != Section::Contact {
            self.contact.blur();
        }
        self.pending_section = Some(section);
        self.resolve_pending_navigation();
        self.mark_dirty();
    }

    /// Turn a pending navigation into a smooth scroll once anchors exist.
    pub fn resolve_pending_navigation(&mut self) {
        let Some(section) = self.pending_section else {
            return;
        };
        if let Some(row) = self.anchors.get(section) {
            self.scroll.smooth_scroll_to(row as u32 * ROW_UNITS);
            self.pending_section = None;
        }
    }

    /// Activate a link in the mobile menu: always closes the menu.
    pub fn activate_mobile_link(&mut self, section: Section) {
        self.menu_open = false;
        self.navigate_to(section);
    }

    /// Hero "View My Work" button.
    pub fn view_work(&mut self) {
        self.navigate_to(Section::Projects);
    }

    /// Scroll-to-top control.
    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
        self.mark_dirty();
    }

    /// Scroll the page by whole rows (negative is up).
    pub fn scroll_by(&mut self, rows: i32) {
        if self.scroll.scroll_by_rows(rows) {
            self.mark_dirty();
        }
    }

    /// Rows in a page step: the viewport minus a little overlap.
    pub fn page_rows(&self) -> i32 {
        i32::from(self.layout().page_height()).saturating_sub(2).max(1)
    }

    /// Mobile menu button.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.menu_cursor = 0;
        self.mark_dirty();
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.mark_dirty();
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
        self.mark_dirty();
    }

    pub fn menu_down(&mut self) {
        let last = MenuItem::all().len() - 1;
        self.menu_cursor = (self.menu_cursor + 1).min(last);
        self.mark_dirty();
    }

    /// Activate the highlighted mobile menu entry.
    pub fn activate_menu_item(&mut self) {
        match MenuItem::all().get(self.menu_cursor).copied() {
            Some(MenuItem::Link(section)) => self.activate_mobile_link(section),
            Some(MenuItem::ToggleTheme) => self.toggle_theme(),
            Some(MenuItem::DownloadResume) => self.download_resume(),
            None => {}
        }
    }

    /// Jump to the contact section and start editing `field`.
    pub fn focus_contact(&mut self, field: ContactField) {
        self.navigate_to(Section::Contact);
        self.contact.focus(field);
    }
}
