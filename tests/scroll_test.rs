// Integration tests for page scrolling and the scroll-to-top control

mod common;

use common::{render_to_string, TestAppBuilder};
use folio::domain::{ScrollState, ROW_UNITS, SCROLL_TOP_THRESHOLD};
use folio::ui::SCROLL_TOP_LABEL;

fn long_page() -> ScrollState {
    let mut scroll = ScrollState::new();
    scroll.update_limits(500, 30);
    scroll
}

#[test]
fn test_threshold_is_exclusive() {
    let mut scroll = long_page();
    scroll.set_offset(SCROLL_TOP_THRESHOLD);
    assert!(!scroll.show_scroll_top(), "exactly 500 must not show the control");

    scroll.set_offset(SCROLL_TOP_THRESHOLD + 1);
    assert!(scroll.show_scroll_top(), "501 must show the control");

    scroll.set_offset(0);
    assert!(!scroll.show_scroll_top());
}

#[test]
fn test_row_scrolling_crosses_threshold() {
    let mut scroll = long_page();
    let rows_to_threshold = (SCROLL_TOP_THRESHOLD / ROW_UNITS) as i32;
    scroll.scroll_by_rows(rows_to_threshold);
    assert_eq!(scroll.offset(), SCROLL_TOP_THRESHOLD);
    assert!(!scroll.show_scroll_top());
    scroll.scroll_by_rows(1);
    assert!(scroll.show_scroll_top());
}

#[test]
fn test_smooth_scroll_lands_on_target() {
    let mut scroll = long_page();
    scroll.smooth_scroll_to(200 * ROW_UNITS);
    let mut frames = 0;
    while scroll.tick() {
        frames += 1;
        assert!(frames < 1_000, "smooth scroll never finished");
    }
    assert_eq!(scroll.offset(), 200 * ROW_UNITS);
    assert!(!scroll.is_animating());
    assert!(scroll.show_scroll_top());
}

#[test]
fn test_offset_clamped_to_page() {
    let mut scroll = ScrollState::new();
    scroll.update_limits(40, 30);
    scroll.scroll_by_rows(100);
    assert_eq!(scroll.offset(), 10 * ROW_UNITS);

    // Shrinking the page pulls the offset back in.
    scroll.update_limits(35, 30);
    assert_eq!(scroll.offset(), 5 * ROW_UNITS);
}

#[test]
fn test_scroll_top_button_follows_threshold() {
    let (mut app, _) = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app);
    assert!(!screen.contains(SCROLL_TOP_LABEL.trim()));

    app.scroll.set_offset(SCROLL_TOP_THRESHOLD + ROW_UNITS);
    let screen = render_to_string(&mut app);
    assert!(screen.contains(SCROLL_TOP_LABEL.trim()));
}

#[test]
fn test_scroll_top_action_returns_to_top() {
    let (mut app, _) = TestAppBuilder::new().build();
    render_to_string(&mut app);
    app.scroll.set_offset(40 * ROW_UNITS);
    app.scroll_to_top();
    let mut now = 0;
    while app.scroll.is_animating() {
        now += 16;
        app.tick(now);
    }
    assert_eq!(app.scroll.offset(), 0);
    assert!(!app.scroll.show_scroll_top());
}
