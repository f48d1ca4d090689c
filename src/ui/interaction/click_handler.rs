//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into App state
//! mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        // =====================================================================
        // Navigation
        // =====================================================================
        ClickAction::NavigateTo(section) => {
            tracing::debug!("Click: NavigateTo({})", section.anchor());
            app.navigate_to(section);
        }
        ClickAction::MobileNavigateTo(section) => {
            tracing::debug!("Click: MobileNavigateTo({})", section.anchor());
            app.activate_mobile_link(section);
        }
        ClickAction::ToggleMenu => {
            app.toggle_menu();
            tracing::debug!("Click: ToggleMenu - open={}", app.menu_open);
        }
        ClickAction::ScrollToTop => {
            tracing::debug!("Click: ScrollToTop");
            app.scroll_to_top();
        }
        ClickAction::ViewWork => {
            tracing::debug!("Click: ViewWork");
            app.view_work();
        }

        // =====================================================================
        // Header Buttons
        // =====================================================================
        ClickAction::ToggleTheme => {
            app.toggle_theme();
            tracing::debug!("Click: ToggleTheme - now {}", app.theme);
        }
        ClickAction::DownloadResume => {
            tracing::debug!("Click: DownloadResume");
            app.download_resume();
        }

        // =====================================================================
        // Outbound Links
        // =====================================================================
        ClickAction::OpenUrl(url) => {
            tracing::debug!("Click: OpenUrl({})", url);
            app.open_link(&url);
        }
        ClickAction::SendEmail => {
            tracing::debug!("Click: SendEmail");
            app.send_email();
        }
        ClickAction::CopyEmail => {
            tracing::debug!("Click: CopyEmail");
            app.copy_email();
        }

        // =====================================================================
        // Contact Form
        // =====================================================================
        ClickAction::FocusContactField(field) => {
            tracing::debug!("Click: FocusContactField({})", field.label());
            app.contact.focus(field);
        }
        ClickAction::SubmitContact => {
            tracing::debug!("Click: SubmitContact");
            app.submit_contact();
        }
    }
}
