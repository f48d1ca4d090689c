// End-to-end contact form and resume download through the key handlers

mod common;

use common::{render_to_string, TestAppBuilder};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::app::{ContactField, ResumeSettings, StatusKind};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut folio::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

#[test]
fn test_fill_and_send_form() {
    let (mut app, bridge) = TestAppBuilder::new().build();
    render_to_string(&mut app);

    app.handle_key(press(KeyCode::Char('c')));
    assert_eq!(app.contact.focused, Some(ContactField::Name));
    type_text(&mut app, "Ada");
    app.handle_key(press(KeyCode::Tab));
    type_text(&mut app, "ada@example.com");
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.contact.focused, Some(ContactField::Message));
    type_text(&mut app, "Hello");
    app.handle_key(press(KeyCode::Enter));
    type_text(&mut app, "there");
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    let urls = bridge.opened_urls();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("mailto:aparna.alamanda@gmail.com?subject="));
    assert!(urls[0].contains("Hello%0Athere"));
    assert!(app.contact.name.is_empty());
    assert!(!app.contact.is_editing());
    assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Info));
}

#[test]
fn test_invalid_email_is_reported() {
    let (mut app, bridge) = TestAppBuilder::new().build();
    app.handle_key(press(KeyCode::Char('c')));
    type_text(&mut app, "Ada");
    app.handle_key(press(KeyCode::Tab));
    type_text(&mut app, "not-an-email");
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(bridge.opened_urls().is_empty());
    assert_eq!(app.contact.focused, Some(ContactField::Email));
    assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
}

#[test]
fn test_paste_into_single_line_field() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_key(press(KeyCode::Char('c')));
    app.handle_paste("Ada\nLovelace");
    assert_eq!(app.contact.name.value(), "Ada Lovelace");
}

#[test]
fn test_typed_text_is_rendered() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_key(press(KeyCode::Char('c')));
    type_text(&mut app, "Grace");
    render_to_string(&mut app);
    app.scroll.scroll_to_bottom();
    let screen = render_to_string(&mut app);
    assert!(screen.contains("Grace"));
}

#[test]
fn test_resume_download_saves_file() {
    let src = tempfile::tempdir().unwrap();
    let source = src.path().join("resume.pdf");
    std::fs::write(&source, b"%PDF").unwrap();
    let dest = tempfile::tempdir().unwrap();

    let (mut app, _) = TestAppBuilder::new()
        .resume(ResumeSettings {
            source,
            download_dir: dest.path().to_path_buf(),
            file_name: "Aparnaa_Resume.pdf".to_string(),
        })
        .build();

    app.handle_key(press(KeyCode::Char('r')));
    assert!(dest.path().join("Aparnaa_Resume.pdf").is_file());
    assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Info));
}

#[test]
fn test_missing_resume_is_an_error_status() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_key(press(KeyCode::Char('r')));
    let status = app.status.as_ref().expect("status");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("missing"));
}
