//! Get In Touch: blurb, contact links and the message form.

use ratatui::style::{Modifier, Style};

use super::SECTION_GAP;
use crate::app::{App, ContactField, ContactForm, TextField};
use crate::domain::Section;
use crate::ui::helpers::{tail_to_width, wrap_text};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::page::{card, column_width, text_rows, PageBuilder, Row, Segment};
use crate::ui::theme::Palette;

const GAP: usize = 4;

/// Visible rows of the message box.
const MESSAGE_ROWS: usize = 4;

/// Caret drawn inside the focused field.
const CARET: char = '▏';

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette, layout: &LayoutContext) {
    b.anchor(Section::Contact);
    b.push_heading("Get In Touch", palette.heading_style());

    let side_by_side = layout.grid_columns() >= 2;
    let width = if side_by_side {
        column_width(b.width(), 2, GAP)
    } else {
        b.width()
    };

    let links = link_rows(app, width, palette);
    let form = form_rows(&app.contact, width, palette, b.fill());

    if side_by_side {
        b.push_columns(vec![links, form], width, GAP);
    } else {
        b.push_rows(links);
        b.blank();
        b.push_rows(form);
    }

    b.blanks(SECTION_GAP);
}

fn link_rows(app: &App, width: usize, palette: &Palette) -> Vec<Row> {
    let contact = &app.portfolio.contact;
    let mut rows = text_rows(&contact.blurb, width, palette.text_style());
    rows.push(Vec::new());
    rows.push(vec![
        Segment::styled("✉  ", palette.accent_style()),
        Segment::link(contact.email.clone(), palette.link_style(), ClickAction::SendEmail),
        Segment::styled(" ", palette.base()),
        Segment::link("(copy)", palette.muted_style(), ClickAction::CopyEmail),
    ]);
    rows.push(Vec::new());
    rows.push(vec![
        Segment::styled("in ", palette.accent_style()),
        Segment::link(
            "LinkedIn",
            palette.link_style(),
            ClickAction::OpenUrl(contact.linkedin_url.clone()),
        ),
    ]);
    rows.push(Vec::new());
    rows.push(vec![
        Segment::styled("⌥  ", palette.accent_style()),
        Segment::link(
            "GitHub",
            palette.link_style(),
            ClickAction::OpenUrl(contact.github_url.clone()),
        ),
    ]);
    rows
}

fn form_rows(form: &ContactForm, width: usize, palette: &Palette, fill: Style) -> Vec<Row> {
    let mut rows = Vec::new();
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let focused = form.focused == Some(field);
        let label_style = if focused {
            palette.accent_style().add_modifier(Modifier::BOLD)
        } else {
            palette.text_style().add_modifier(Modifier::BOLD)
        };
        rows.push(vec![Segment::styled(field.label(), label_style)]);

        let border = if focused {
            palette.accent_style().add_modifier(Modifier::BOLD)
        } else {
            palette.muted_style()
        };
        let text = form.field(field).map(|f| field_text(f, focused)).unwrap_or_default();
        let inner = width.saturating_sub(4);
        let body = if field == ContactField::Message {
            message_body(&text, inner, palette)
        } else {
            vec![vec![Segment::styled(tail_to_width(&text, inner), palette.text_style())]]
        };
        rows.extend(clickable(
            card(body, width, border, fill),
            ClickAction::FocusContactField(field),
        ));
    }

    rows.push(Vec::new());
    let mut send = palette.button_style();
    if form.focused == Some(ContactField::Send) {
        send = send.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    let label = ContactField::Send.label();
    let pad = width.saturating_sub(label.chars().count());
    rows.push(vec![Segment::link(
        format!("{}{}{}", " ".repeat(pad / 2), label, " ".repeat(pad - pad / 2)),
        send,
        ClickAction::SubmitContact,
    )]);
    rows
}

/// Field value with the caret spliced in when focused.
fn field_text(field: &TextField, focused: bool) -> String {
    if !focused {
        return field.value().to_string();
    }
    let mut text: String = field.value().chars().take(field.cursor()).collect();
    text.push(CARET);
    text.extend(field.value().chars().skip(field.cursor()));
    text
}

/// Message box rows: wrapped text, scrolled so the last lines stay visible.
fn message_body(text: &str, width: usize, palette: &Palette) -> Vec<Row> {
    let lines = wrap_text(text, width);
    let skip = lines.len().saturating_sub(MESSAGE_ROWS);
    let mut rows: Vec<Row> = lines
        .into_iter()
        .skip(skip)
        .map(|line| vec![Segment::styled(line, palette.text_style())])
        .collect();
    rows.resize_with(MESSAGE_ROWS, Vec::new);
    rows
}

/// Make every segment of `rows` trigger `action`.
fn clickable(rows: Vec<Row>, action: ClickAction) -> Vec<Row> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|mut seg| {
                    seg.action = Some(action.clone());
                    seg
                })
                .collect()
        })
        .collect()
}
