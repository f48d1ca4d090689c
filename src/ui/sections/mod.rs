//! Page sections.
//!
//! Each submodule appends one section of the portfolio to the page builder.
//! Document order follows the page, not the nav bar: hero, experience,
//! certifications, projects, skills, contact, footer.

mod certifications;
mod contact;
mod footer;
mod hero;
mod projects;
mod skills;
mod timeline;

use super::layout::LayoutContext;
use super::page::{Page, PageBuilder};
use super::theme::Palette;
use crate::app::App;

/// Build the whole page for the current state and terminal size.
pub fn build_page(app: &App, palette: &Palette, layout: &LayoutContext) -> Page {
    let mut builder = PageBuilder::new(layout.content_width(), palette.base());

    hero::render(&mut builder, app, palette);
    timeline::render(&mut builder, app, palette, layout);
    certifications::render(&mut builder, app, palette, layout);
    projects::render(&mut builder, app, palette, layout);
    skills::render(&mut builder, app, palette);
    contact::render(&mut builder, app, palette, layout);
    footer::render(&mut builder, app, palette);

    builder.finish()
}

/// Rows between sections.
const SECTION_GAP: usize = 2;
