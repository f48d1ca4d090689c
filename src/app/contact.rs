//! Contact form state and submission.
//!
//! The form has no backend. Submitting a valid form composes a `mailto:` URL
//! addressed to the portfolio owner and hands it to the system mail client,
//! after which the form is cleared.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
    Send,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
        ContactField::Send,
    ];

    pub fn next(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Send,
            ContactField::Send => ContactField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Send,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
            ContactField::Send => ContactField::Message,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
            ContactField::Send => "Send Message",
        }
    }
}

/// Single text buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in characters, `0..=char_count`
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please write a message")]
    EmptyMessage,
}

impl ContactError {
    /// Field to focus so the visitor can fix the problem.
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::MissingName => ContactField::Name,
            ContactError::InvalidEmail => ContactField::Email,
            ContactError::EmptyMessage => ContactField::Message,
        }
    }
}

/// A validated message, ready to hand to the mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// `mailto:` URL addressed to `recipient` carrying this message.
    pub fn mailto_url(&self, recipient: &str) -> String {
        let subject = format!("Portfolio contact from {}", self.name);
        let body = format!(
            "{}\n\n-- \n{} <{}>",
            self.message, self.name, self.email
        );
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

/// Name / email / message form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: TextField,
    pub email: TextField,
    pub message: TextField,
    /// Focused element; `None` while the visitor is browsing the page
    pub focused: Option<ContactField>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.focused.is_some()
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(self.focused.map_or(ContactField::Name, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focused = Some(self.focused.map_or(ContactField::Send, |f| f.prev()));
    }

    /// Text buffer behind the focused element, if it has one.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focused? {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Message => Some(&mut self.message),
            ContactField::Send => None,
        }
    }

    pub fn field(&self, field: ContactField) -> Option<&TextField> {
        match field {
            ContactField::Name => Some(&self.name),
            ContactField::Email => Some(&self.email),
            ContactField::Message => Some(&self.message),
            ContactField::Send => None,
        }
    }

    /// Insert a newline; only the message accepts one.
    pub fn insert_newline(&mut self) -> bool {
        if self.focused == Some(ContactField::Message) {
            self.message.insert_char('\n');
            true
        } else {
            false
        }
    }

    /// Check the form and build a submission.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.value().trim();
        let email = self.email.value().trim();
        let message = self.message.value().trim();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Empty every field and leave the form.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focused = None;
    }
}
