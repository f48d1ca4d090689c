//! Experience & Education timeline.
//!
//! Wide terminals get a center rail with cards alternating left and right as
//! each entry's side says; narrow ones put the rail on the left and stack
//! every card to its right.

use ratatui::style::Modifier;

use super::SECTION_GAP;
use crate::app::App;
use crate::content::{Description, TimelineEntry, TimelineSide};
use crate::domain::Section;
use crate::ui::layout::LayoutContext;
use crate::ui::page::{bullet_rows, card, fit_row, text_rows, PageBuilder, Row, Segment};
use crate::ui::theme::Palette;

const RAIL: &str = "│";
const NODE: &str = "●";

/// Card row the rail node lines up with (the title row).
const NODE_ROW: usize = 1;

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette, layout: &LayoutContext) {
    b.anchor(Section::Experience);
    b.push_heading("Experience & Education", palette.heading_style());

    let entries = &app.portfolio.timeline;
    let rail = palette.accent_style();

    if layout.split_timeline() {
        // card, space, rail, space, card
        let card_width = b.width().saturating_sub(3) / 2;
        for (i, entry) in entries.iter().enumerate() {
            let rows = card(
                entry_rows(entry, card_width.saturating_sub(4), palette),
                card_width,
                palette.border_style(),
                b.fill(),
            );
            for (r, row) in rows.into_iter().enumerate() {
                let marker = if r == NODE_ROW { NODE } else { RAIL };
                let (left, right) = match entry.side {
                    TimelineSide::Left => (row, Vec::new()),
                    TimelineSide::Right => (Vec::new(), row),
                };
                let mut line = fit_row(left, card_width, b.fill());
                line.push(Segment::styled(" ", b.fill()));
                line.push(Segment::styled(marker, rail));
                line.push(Segment::styled(" ", b.fill()));
                line.extend(right);
                b.push_row(line);
            }
            if i + 1 < entries.len() {
                b.push_row_at(card_width + 1, vec![Segment::styled(RAIL, rail)]);
            }
        }
    } else {
        let card_width = b.width().saturating_sub(2);
        for (i, entry) in entries.iter().enumerate() {
            let rows = card(
                entry_rows(entry, card_width.saturating_sub(4), palette),
                card_width,
                palette.border_style(),
                b.fill(),
            );
            for (r, row) in rows.into_iter().enumerate() {
                let marker = if r == NODE_ROW { NODE } else { RAIL };
                let mut line = vec![
                    Segment::styled(marker, rail),
                    Segment::styled(" ", b.fill()),
                ];
                line.extend(row);
                b.push_row(line);
            }
            if i + 1 < entries.len() {
                b.push_row(vec![Segment::styled(RAIL, rail)]);
            }
        }
    }

    b.blanks(SECTION_GAP);
}

/// Card body for one entry, wrapped to `width`.
fn entry_rows(entry: &TimelineEntry, width: usize, palette: &Palette) -> Vec<Row> {
    let mut rows = vec![
        vec![
            Segment::styled(format!("{} ", entry.kind.icon()), palette.accent_style()),
            Segment::styled(entry.title.clone(), palette.heading_style()),
        ],
        vec![Segment::styled(
            entry.organization.clone(),
            palette.accent_style().add_modifier(Modifier::BOLD),
        )],
        vec![Segment::styled(entry.period.clone(), palette.muted_style())],
    ];

    match &entry.description {
        Description::Text(text) => rows.extend(text_rows(text, width, palette.text_style())),
        Description::Bullets(items) => {
            for item in items {
                rows.extend(bullet_rows(
                    Segment::styled("• ", palette.highlight_style()),
                    item,
                    width,
                    palette.text_style(),
                    palette.base(),
                ));
            }
        }
    }
    rows
}
