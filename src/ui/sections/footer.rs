//! Footer: copyright line and profile links.

use crate::app::App;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{PageBuilder, Segment};
use crate::ui::theme::Palette;

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette) {
    let profile = &app.portfolio.profile;
    let contact = &app.portfolio.contact;

    b.push_row(vec![Segment::styled("─".repeat(b.width()), palette.muted_style())]);
    b.blank();
    b.push_centered_text(
        &format!(
            "© {} {}. All rights reserved.",
            profile.copyright_year, profile.name
        ),
        b.width(),
        palette.muted_style(),
    );
    b.push_centered(vec![
        Segment::link(
            "LinkedIn",
            palette.link_style(),
            ClickAction::OpenUrl(contact.linkedin_url.clone()),
        ),
        Segment::styled("  ·  ", palette.muted_style()),
        Segment::link(
            "GitHub",
            palette.link_style(),
            ClickAction::OpenUrl(contact.github_url.clone()),
        ),
        Segment::styled("  ·  ", palette.muted_style()),
        Segment::link("Email", palette.link_style(), ClickAction::SendEmail),
    ]);
    b.blank();
}
