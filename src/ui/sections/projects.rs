//! Featured Projects grid.

use super::SECTION_GAP;
use crate::app::App;
use crate::content::Project;
use crate::domain::Section;
use crate::ui::helpers::display_width;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::page::{card, column_width, text_rows, PageBuilder, Row, Segment};
use crate::ui::theme::Palette;

const GAP: usize = 2;

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette, layout: &LayoutContext) {
    b.anchor(Section::Projects);
    b.push_heading("Featured Projects", palette.heading_style());

    let columns = layout.grid_columns();
    let width = column_width(b.width(), columns, GAP);
    let cards = app
        .portfolio
        .projects
        .iter()
        .map(|project| {
            card(
                project_rows(project, width.saturating_sub(4), palette),
                width,
                palette.border_style(),
                b.fill(),
            )
        })
        .collect();
    b.push_grid(cards, columns, width, GAP);

    b.blanks(SECTION_GAP);
}

fn project_rows(project: &Project, width: usize, palette: &Palette) -> Vec<Row> {
    let mut rows = vec![vec![Segment::styled(
        project.title.clone(),
        palette.heading_style(),
    )]];
    rows.extend(text_rows(&project.description, width, palette.text_style()));
    rows.push(Vec::new());
    rows.extend(tag_rows(&project.tags, width, palette));
    rows.push(Vec::new());
    rows.push(vec![Segment::link(
        "⌥ GitHub ↗",
        palette.link_style(),
        ClickAction::OpenUrl(project.repository_url.clone()),
    )]);
    rows
}

/// Tags as `[tag]` chips, wrapped onto as many rows as needed.
fn tag_rows(tags: &[String], width: usize, palette: &Palette) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row: Row = Vec::new();
    let mut used = 0;
    for tag in tags {
        let chip = format!("[{}]", tag);
        let chip_width = display_width(&chip);
        let sep = usize::from(!row.is_empty());
        if !row.is_empty() && used + sep + chip_width > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        if !row.is_empty() {
            row.push(Segment::styled(" ", palette.base()));
            used += 1;
        }
        row.push(Segment::styled(chip, palette.accent_style()));
        used += chip_width;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
