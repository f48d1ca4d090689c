//! UI rendering for the portfolio.
//!
//! The screen is three bands:
//! - Nav bar: section links, theme toggle and Resume button, or the mobile
//!   menu button on narrow terminals
//! - Page: a window onto the scrolling portfolio document
//! - Status line: feedback from the last action, or keybind hints
//!
//! Overlays (mobile menu, scroll-to-top button) are drawn on top of the page.
//!
//! ## Responsive Layout System
//!
//! Render functions take a [`LayoutContext`] built from the frame size. It
//! decides mobile vs desktop navigation, the page column width and the grid
//! column counts.
//!
//! ## Hit areas
//!
//! Every frame clears `App::hit_areas` and re-registers each clickable
//! element that is visible, in z-order: page links, then nav, then overlays.

pub mod helpers;
pub mod interaction;
mod layout;
mod nav;
mod overlay;
pub mod page;
mod sections;
mod status_bar;
mod theme;

pub use layout::{breakpoints, LayoutContext, MAX_CONTENT_WIDTH, NAV_HEIGHT, STATUS_HEIGHT};
pub use nav::{menu_glyph, theme_glyph, RESUME_LABEL};
pub use page::{Page, PageBuilder, PageLink, Segment};
pub use sections::build_page;
pub use status_bar::keybind_hints;
pub use theme::{Palette, COLOR_BLUE_600, COLOR_CORAL, COLOR_GRAY_900, COLOR_NAVY, COLOR_TEAL};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use interaction::ClickAction;

/// Label of the floating scroll-to-top button.
pub const SCROLL_TOP_LABEL: &str = " ▲ ";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame.
///
/// Also feeds the layout back into the app: scroll limits, section anchors and
/// any navigation that was waiting for them.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.terminal_width = area.width;
    app.terminal_height = area.height;

    let layout = LayoutContext::new(area.width, area.height);
    let palette = Palette::for_theme(app.theme);

    app.hit_areas.clear();
    frame.render_widget(Block::default().style(palette.base()), area);

    if layout.is_too_small() {
        render_too_small(frame, area, &palette);
        return;
    }

    let [nav_area, page_area, status_area] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    let page = build_page(app, &palette, &layout);
    app.scroll
        .update_limits(page.height(), usize::from(page_area.height));
    app.anchors = page.anchors.clone();
    app.resolve_pending_navigation();

    render_page(frame, app, &page, page_area, &layout, &palette);
    nav::render_nav(frame, app, nav_area, &layout, &palette);
    status_bar::render_status_bar(frame, app, status_area, &layout, &palette);

    if app.menu_open && layout.is_mobile() {
        overlay::render_menu(frame, app, page_area, &palette);
    }
    if app.scroll.show_scroll_top() {
        render_scroll_top(frame, app, page_area, &palette);
    }

    apply_hover(frame, app);
}

/// Draw the visible window of the page and register its links.
fn render_page(
    frame: &mut Frame,
    app: &mut App,
    page: &Page,
    area: Rect,
    layout: &LayoutContext,
    palette: &Palette,
) {
    let first = app.scroll.row();
    let rows = usize::from(area.height);
    let column = Rect::new(
        area.x + layout.content_x(),
        area.y,
        layout.content_width().min(area.width),
        area.height,
    );

    let visible: Vec<_> = page.lines.iter().skip(first).take(rows).cloned().collect();
    frame.render_widget(Paragraph::new(visible).style(palette.base()), column);

    let hover = palette.hover_style();
    for link in page.visible_links(first, rows) {
        let y = area.y + (link.row - first) as u16;
        let rect = Rect::new(column.x + link.x, y, link.width, 1).intersection(column);
        if !rect.is_empty() {
            app.hit_areas
                .register(rect, link.action.clone(), Some(hover));
        }
    }
}

fn render_scroll_top(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let width = SCROLL_TOP_LABEL.chars().count() as u16;
    let x = area.right().saturating_sub(width + 2);
    let y = area.bottom().saturating_sub(2);
    nav::draw_button(
        frame,
        &mut app.hit_areas,
        palette.hover_style(),
        (x, y),
        Span::styled(SCROLL_TOP_LABEL, palette.button_style()),
        ClickAction::ScrollToTop,
    );
}

fn render_too_small(frame: &mut Frame, area: Rect, palette: &Palette) {
    let message = helpers::truncate_to_width("Terminal too small", usize::from(area.width));
    let y = area.y + area.height / 2;
    let x = area.x + area.width.saturating_sub(message.chars().count() as u16) / 2;
    frame.render_widget(
        Span::styled(message, palette.muted_style()),
        Rect::new(x, y, area.width.saturating_sub(x - area.x), 1),
    );
}

/// Lay the hovered hit area's hover style over what was drawn there.
fn apply_hover(frame: &mut Frame, app: &App) {
    if let Some(area) = app.hit_areas.get_hovered() {
        if let Some(style) = area.hover_style {
            let rect = area.rect.intersection(frame.area());
            frame.buffer_mut().set_style(rect, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingBridge;
    use crate::app::ResumeSettings;
    use crate::content::Portfolio;
    use crate::domain::{Section, Theme};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn create_test_app() -> App {
        let resume = ResumeSettings {
            source: PathBuf::from("resume.pdf"),
            download_dir: PathBuf::from("."),
            file_name: "resume.pdf".to_string(),
        };
        App::new(
            Portfolio::builtin(),
            Theme::Light,
            resume,
            Box::new(RecordingBridge::new()),
        )
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
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

    #[test]
    fn test_render_sets_anchors_and_limits() {
        let mut app = create_test_app();
        draw(&mut app, 120, 40);
        assert!(!app.anchors.is_empty());
        assert!(app.scroll.max_offset() > 0);
    }

    #[test]
    fn test_pending_navigation_resolves_on_render() {
        let mut app = create_test_app();
        app.navigate_to(Section::Contact);
        assert!(app.pending_section.is_some());
        draw(&mut app, 120, 40);
        assert!(app.pending_section.is_none());
        assert!(app.scroll.is_animating());
    }

    #[test]
    fn test_too_small() {
        let mut app = create_test_app();
        let screen = draw(&mut app, 20, 8);
        assert!(screen.contains("Terminal"));
        assert!(app.hit_areas.is_empty());
    }

    #[test]
    fn test_nav_registers_hit_areas() {
        let mut app = create_test_app();
        draw(&mut app, 120, 40);
        // row 0 holds the nav bar
        let mut found = Vec::new();
        for x in 0..120 {
            if let Some(action) = app.hit_areas.hit_test(x, 0) {
                if !found.contains(&action) {
                    found.push(action);
                }
            }
        }
        for section in Section::ALL {
            assert!(found.contains(&ClickAction::NavigateTo(section)));
        }
        assert!(found.contains(&ClickAction::ToggleTheme));
        assert!(found.contains(&ClickAction::DownloadResume));
    }
}
