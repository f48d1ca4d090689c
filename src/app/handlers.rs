//! Keyboard and mouse input for the App.
//!
//! Key handling has three layers, checked in order: the contact form while a
//! field is focused, the mobile menu while it is open, then page shortcuts.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, ContactField};
use crate::domain::Section;
use crate::ui::interaction::handle_click_action;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.contact.is_editing() {
            self.handle_form_key(key);
        } else if self.menu_open && self.is_mobile() {
            self.handle_menu_key(key);
        } else {
            self.handle_page_key(key);
        }
    }

    /// Bracketed paste goes into the focused text field.
    pub fn handle_paste(&mut self, text: &str) {
        let single_line = !matches!(self.contact.focused, Some(ContactField::Message));
        if let Some(field) = self.contact.focused_field_mut() {
            if single_line {
                field.insert_str(&text.replace(['\r', '\n'], " "));
            } else {
                field.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
            }
            self.mark_dirty();
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.contact.blur(),
            KeyCode::Tab => self.contact.focus_next(),
            KeyCode::BackTab => self.contact.focus_prev(),
            KeyCode::Char('s') if ctrl => self.submit_contact(),
            KeyCode::Enter => match self.contact.focused {
                Some(ContactField::Send) => self.submit_contact(),
                Some(ContactField::Message) => {
                    self.contact.insert_newline();
                }
                _ => self.contact.focus_next(),
            },
            code => {
                let Some(field) = self.contact.focused_field_mut() else {
                    return;
                };
                match code {
                    KeyCode::Char(c) if !ctrl => field.insert_char(c),
                    KeyCode::Backspace => field.backspace(),
                    KeyCode::Delete => field.delete(),
                    KeyCode::Left => field.move_left(),
                    KeyCode::Right => field.move_right(),
                    KeyCode::Home => field.move_home(),
                    KeyCode::End => field.move_end(),
                    _ => {}
                }
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Up | KeyCode::Char('k') => self.menu_up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu_down(),
            KeyCode::Enter => self.activate_menu_item(),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_shortcut(c) {
                    self.activate_mobile_link(section);
                } else if c == 't' {
                    self.toggle_theme();
                } else if c == 'r' {
                    self.download_resume();
                } else if c == 'q' {
                    self.quit();
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => self.close_menu(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.page_rows()),
            KeyCode::PageUp => self.scroll_by(-self.page_rows()),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.scroll_to_bottom(),
            KeyCode::Char('m') if self.is_mobile() => self.toggle_menu(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.download_resume(),
            KeyCode::Char('w') => self.view_work(),
            KeyCode::Char('c') => self.focus_contact(ContactField::Name),
            KeyCode::Char('e') => self.send_email(),
            KeyCode::Char('y') => self.copy_email(),
            KeyCode::Char('l') => {
                let url = self.portfolio.contact.linkedin_url.clone();
                self.open_link(&url);
            }
            KeyCode::Char('h') => {
                let url = self.portfolio.contact.github_url.clone();
                self.open_link(&url);
            }
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_shortcut(c) {
                    self.navigate_to(section);
                }
            }
            _ => {}
        }
    }

    /// Handle mouse wheel, clicks and hover.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_areas.hit_test(mouse.column, mouse.row) {
                    Some(action) => handle_click_action(self, action),
                    None => {
                        // Clicking outside the menu or form dismisses it.
                        self.close_menu();
                        if self.contact.is_editing() {
                            self.contact.blur();
                            self.mark_dirty();
                        }
                    }
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingBridge;
    use crate::app::ResumeSettings;
    use crate::content::Portfolio;
    use crate::domain::Theme;
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn app(width: u16) -> (App, RecordingBridge) {
        let bridge = RecordingBridge::new();
        let resume = ResumeSettings {
            source: PathBuf::from("resume.pdf"),
            download_dir: PathBuf::from("."),
            file_name: "resume.pdf".to_string(),
        };
        let mut app = App::new(
            Portfolio::builtin(),
            Theme::Light,
            resume,
            Box::new(bridge.clone()),
        );
        app.update_terminal_dimensions(width, 40);
        app.scroll.update_limits(400, 30);
        (app, bridge)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_even_while_editing() {
        let (mut app, _) = app(120);
        app.focus_contact(ContactField::Name);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (mut app, _) = app(120);
        let mut key = press(KeyCode::Char('t'));
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        app.handle_key(key);
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_theme_key() {
        let (mut app, _) = app(120);
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_menu_key_only_on_mobile() {
        let (mut desktop, _) = app(120);
        desktop.handle_key(press(KeyCode::Char('m')));
        assert!(!desktop.menu_open);

        let (mut mobile, _) = app(60);
        mobile.handle_key(press(KeyCode::Char('m')));
        assert!(mobile.menu_open);
    }

    #[test]
    fn test_menu_digit_closes_menu_and_navigates() {
        let (mut app, _) = app(60);
        app.handle_key(press(KeyCode::Char('m')));
        app.handle_key(press(KeyCode::Char('6')));
        assert!(!app.menu_open);
        assert_eq!(app.pending_section, Some(Section::Projects));
    }

    #[test]
    fn test_typing_into_form() {
        let (mut app, _) = app(120);
        app.handle_key(press(KeyCode::Char('c')));
        for c in "Ada".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Tab));
        for c in "ada@example.com".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.contact.focused, Some(ContactField::Message));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit, "q is text while editing");
        assert_eq!(app.contact.name.value(), "Ada");
        assert_eq!(app.contact.email.value(), "ada@example.com");
        assert_eq!(app.contact.message.value(), "q");
    }

    #[test]
    fn test_ctrl_s_submits() {
        let (mut app, bridge) = app(120);
        app.focus_contact(ContactField::Name);
        app.handle_paste("Ada\nLovelace");
        assert_eq!(app.contact.name.value(), "Ada Lovelace");
        app.contact.email.insert_str("ada@example.com");
        app.contact.message.insert_str("Hi");
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(bridge.opened_urls().len(), 1);
    }

    #[test]
    fn test_message_paste_normalises_line_endings() {
        let (mut app, _) = app(120);
        app.contact.focus(ContactField::Message);
        app.handle_paste("one\r\ntwo\rthree\nfour");
        assert_eq!(app.contact.message.value(), "one\ntwo\nthree\nfour");
        assert!(!app.contact.message.value().contains('\r'));
    }

    #[test]
    fn test_escape_leaves_form() {
        let (mut app, _) = app(120);
        app.focus_contact(ContactField::Email);
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.contact.is_editing());
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_scrolls_and_crosses_threshold() {
        let (mut app, _) = app(120);
        for _ in 0..9 {
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 10,
                row: 10,
                modifiers: KeyModifiers::NONE,
            });
        }
        // 27 rows * 20 units = 540 > 500
        assert!(app.scroll.show_scroll_top());
    }

    #[test]
    fn test_outbound_shortcuts() {
        let (mut app, bridge) = app(120);
        app.handle_key(press(KeyCode::Char('l')));
        app.handle_key(press(KeyCode::Char('h')));
        app.handle_key(press(KeyCode::Char('e')));
        assert_eq!(
            bridge.opened_urls(),
            vec![
                "https://www.linkedin.com/in/aparnaalamanda/".to_string(),
                "https://github.com".to_string(),
                "mailto:aparna.alamanda@gmail.com".to_string(),
            ]
        );
    }
}
