// Render tests against ratatui's TestBackend at different terminal sizes

mod common;

use common::{render_to_string, screen_row, TestAppBuilder};
use folio::domain::{Section, Theme};
use folio::ui::{menu_glyph, theme_glyph, Palette, RESUME_LABEL};
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_desktop_nav_shows_every_link() {
    let (mut app, _) = TestAppBuilder::new().width(120).build();
    let screen = render_to_string(&mut app);
    let nav = screen_row(&screen, 0);
    for section in Section::ALL {
        assert!(nav.contains(section.label()), "nav is missing {}", section.label());
    }
    assert!(nav.contains(RESUME_LABEL.trim()));
    assert!(nav.contains(theme_glyph(Theme::Light).trim()));
    assert!(!nav.contains(menu_glyph(false).trim()));
}

#[test]
fn test_desktop_nav_fits_at_breakpoint() {
    let (mut app, _) = TestAppBuilder::new().width(80).build();
    let screen = render_to_string(&mut app);
    let nav = screen_row(&screen, 0);
    assert!(nav.contains("Contact"));
    assert!(nav.contains(RESUME_LABEL.trim()));
}

#[test]
fn test_mobile_nav_collapses_to_menu_button() {
    let (mut app, _) = TestAppBuilder::new().width(79).build();
    let screen = render_to_string(&mut app);
    let nav = screen_row(&screen, 0);
    assert!(nav.contains(menu_glyph(false).trim()));
    assert!(nav.contains("Aparna Alamanda"));
    assert!(!nav.contains("Certifications"));
}

#[test]
fn test_mobile_menu_overlay() {
    let (mut app, _) = TestAppBuilder::new().width(60).build();
    app.toggle_menu();
    let screen = render_to_string(&mut app);
    assert!(screen_row(&screen, 0).contains(menu_glyph(true).trim()));
    for section in Section::ALL {
        assert!(screen.contains(section.label()));
    }
    assert!(screen.contains(RESUME_LABEL.trim()));
}

#[test]
fn test_menu_overlay_hidden_on_desktop() {
    let (mut app, _) = TestAppBuilder::new().width(120).build();
    app.menu_open = true;
    let screen = render_to_string(&mut app);
    assert!(!screen.contains("› "));
}

#[test]
fn test_hero_content() {
    let (mut app, _) = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app);
    assert!(screen.contains("Aparna Alamanda"));
    assert!(screen.contains("View My Work"));
}

#[test]
fn test_typewriter_text_appears() {
    let (mut app, _) = TestAppBuilder::new().build();
    let first = app.typewriter.words()[0].clone();
    let mut now = 0;
    app.tick(now);
    for _ in 0..first.chars().count() {
        now += 150;
        app.tick(now);
    }
    assert_eq!(app.typewriter.visible_text(), first);
    let screen = render_to_string(&mut app);
    assert!(screen.contains(&first));
}

#[test]
fn test_dark_theme_background() {
    let (mut app, _) = TestAppBuilder::new().theme(Theme::Dark).build();
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| folio::ui::render(f, &mut app)).unwrap();

    let palette = Palette::for_theme(Theme::Dark);
    let buffer = terminal.backend().buffer();
    // A cell in the empty margin carries the page background.
    assert_eq!(buffer[(0, 10)].bg, palette.background);
    assert_ne!(palette.background, Palette::for_theme(Theme::Light).background);
}

#[test]
fn test_no_panic_across_sizes() {
    for (width, height) in [(20, 5), (30, 10), (40, 20), (79, 24), (80, 24), (120, 40), (200, 60)] {
        let (mut app, _) = TestAppBuilder::new().width(width).height(height).build();
        app.toggle_menu();
        app.scroll.set_offset(10_000);
        render_to_string(&mut app);
        app.scroll.scroll_to_bottom();
        render_to_string(&mut app);
    }
}

#[test]
fn test_too_small_terminal() {
    let (mut app, _) = TestAppBuilder::new().width(25).height(8).build();
    let screen = render_to_string(&mut app);
    assert!(screen.contains("too small"));
    assert!(app.hit_areas.is_empty());
}

#[test]
fn test_status_message_replaces_hints() {
    let (mut app, _) = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app);
    assert!(screen_row(&screen, 39).contains("quit"));

    app.set_status("Copied aparna.alamanda@gmail.com", folio::app::StatusKind::Info);
    let screen = render_to_string(&mut app);
    assert!(screen_row(&screen, 39).contains("Copied"));
}
