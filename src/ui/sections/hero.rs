//! Hero banner: name, headline, bio, typewriter and the "View My Work" button.

use ratatui::style::Modifier;

use super::SECTION_GAP;
use crate::app::App;
use crate::domain::Section;
use crate::ui::helpers::display_width;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{PageBuilder, Segment};
use crate::ui::theme::Palette;

/// Widest the bio paragraph grows.
const BIO_WIDTH: usize = 72;

/// Block cursor trailing the typed text.
const TYPE_CURSOR: &str = "▌";

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette) {
    let profile = &app.portfolio.profile;

    b.anchor(Section::Home);
    b.blank();
    b.push_centered(vec![Segment::styled(
        profile.name.clone(),
        palette.heading_style(),
    )]);
    b.push_centered_text(
        &profile.headline,
        BIO_WIDTH,
        palette.accent_style().add_modifier(Modifier::BOLD),
    );
    b.blank();

    b.anchor(Section::About);
    b.push_centered_text(&profile.bio, BIO_WIDTH, palette.text_style());
    b.blank();

    // The typed word grows from a fixed left edge so the line does not
    // re-center on every keystroke.
    let widest = app
        .typewriter
        .words()
        .iter()
        .map(|w| display_width(w))
        .max()
        .unwrap_or(0)
        + display_width(TYPE_CURSOR);
    let indent = b.width().saturating_sub(widest) / 2;
    if app.typewriter.is_empty() {
        b.blank();
    } else {
        let style = palette.highlight_style().add_modifier(Modifier::BOLD);
        b.push_row_at(
            indent,
            vec![
                Segment::styled(app.typewriter.visible_text(), style),
                Segment::styled(
                    TYPE_CURSOR,
                    palette.highlight_style().add_modifier(Modifier::SLOW_BLINK),
                ),
            ],
        );
    }
    b.blank();

    b.push_centered(vec![Segment::link(
        "  View My Work  ",
        palette.button_style(),
        ClickAction::ViewWork,
    )]);
    b.blanks(SECTION_GAP);
}
