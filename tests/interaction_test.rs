// Integration tests for mouse hit testing and click dispatch

mod common;

use common::{render_to_string, TestAppBuilder};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::app::{App, ContactField};
use folio::domain::{Section, Theme};
use folio::ui::interaction::{handle_click_action, ClickAction};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
}

/// Screen position of the first hit area carrying `action`.
fn find(app: &App, action: &ClickAction) -> Option<(u16, u16)> {
    app.hit_areas
        .areas()
        .iter()
        .find(|area| &area.action == action)
        .map(|area| (area.rect.x, area.rect.y))
}

#[test]
fn test_click_theme_toggle_in_nav() {
    let (mut app, _) = TestAppBuilder::new().build();
    render_to_string(&mut app);
    let (x, y) = find(&app, &ClickAction::ToggleTheme).expect("theme button");
    click(&mut app, x, y);
    assert_eq!(app.theme, Theme::Dark);
}

#[test]
fn test_click_project_link_opens_repository() {
    let (mut app, bridge) = TestAppBuilder::new().build();
    render_to_string(&mut app);
    app.navigate_to(Section::Projects);
    let mut now = 0;
    while app.scroll.is_animating() {
        now += 16;
        app.tick(now);
    }
    render_to_string(&mut app);

    let repo = app.portfolio.projects[0].repository_url.clone();
    let (x, y) = find(&app, &ClickAction::OpenUrl(repo.clone())).expect("GitHub link visible");
    click(&mut app, x, y);
    assert_eq!(bridge.opened_urls(), vec![repo]);
}

#[test]
fn test_click_mobile_menu_link() {
    let (mut app, _) = TestAppBuilder::new().width(60).build();
    render_to_string(&mut app);
    let (x, y) = find(&app, &ClickAction::ToggleMenu).expect("menu button");
    click(&mut app, x, y);
    assert!(app.menu_open);

    render_to_string(&mut app);
    let (x, y) = find(&app, &ClickAction::MobileNavigateTo(Section::Contact)).expect("menu link");
    click(&mut app, x, y);
    assert!(!app.menu_open);
    assert!(app.scroll.is_animating());
}

#[test]
fn test_click_outside_menu_closes_it() {
    let (mut app, _) = TestAppBuilder::new().width(60).build();
    app.toggle_menu();
    render_to_string(&mut app);
    // Bottom of the page, well below the menu card.
    click(&mut app, 5, 35);
    assert!(!app.menu_open);
}

#[test]
fn test_hover_tracks_pointer() {
    let (mut app, _) = TestAppBuilder::new().build();
    render_to_string(&mut app);
    let (x, y) = find(&app, &ClickAction::DownloadResume).expect("resume button");
    app.handle_mouse(mouse(MouseEventKind::Moved, x, y));
    assert!(app.hit_areas.is_hovering());

    // Hover survives the next frame.
    render_to_string(&mut app);
    assert_eq!(
        app.hit_areas.get_hovered().map(|a| a.action.clone()),
        Some(ClickAction::DownloadResume)
    );
}

#[test]
fn test_wheel_scrolls_page() {
    let (mut app, _) = TestAppBuilder::new().build();
    render_to_string(&mut app);
    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 10));
    assert!(app.scroll.offset() > 0);
    app.handle_mouse(mouse(MouseEventKind::ScrollUp, 10, 10));
    assert_eq!(app.scroll.offset(), 0);
}

#[test]
fn test_dispatch_copy_and_email() {
    let (mut app, bridge) = TestAppBuilder::new().build();
    handle_click_action(&mut app, ClickAction::CopyEmail);
    handle_click_action(&mut app, ClickAction::SendEmail);
    assert_eq!(bridge.copied_text(), vec!["aparna.alamanda@gmail.com".to_string()]);
    assert_eq!(
        bridge.opened_urls(),
        vec!["mailto:aparna.alamanda@gmail.com".to_string()]
    );
}

#[test]
fn test_dispatch_failure_becomes_status() {
    let (mut app, bridge) = TestAppBuilder::new().build();
    bridge.set_should_fail(true);
    handle_click_action(&mut app, ClickAction::OpenUrl("https://github.com".to_string()));
    let status = app.status.as_ref().expect("error status");
    assert_eq!(status.kind, folio::app::StatusKind::Error);
    assert!(!app.should_quit);
}

#[test]
fn test_click_contact_field_focuses_it() {
    let (mut app, _) = TestAppBuilder::new().build();
    render_to_string(&mut app);
    app.scroll.scroll_to_bottom();
    render_to_string(&mut app);
    let action = ClickAction::FocusContactField(ContactField::Email);
    let (x, y) = find(&app, &action).expect("email box visible at the bottom");
    click(&mut app, x, y);
    assert_eq!(app.contact.focused, Some(ContactField::Email));
}
