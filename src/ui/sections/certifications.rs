//! Certifications & Recognition.

use super::SECTION_GAP;
use crate::app::App;
use crate::domain::Section;
use crate::ui::layout::LayoutContext;
use crate::ui::page::{bullet_rows, card, column_width, PageBuilder, Row, Segment};
use crate::ui::theme::Palette;

const AWARD: &str = "✪ ";
const GAP: usize = 2;

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette, layout: &LayoutContext) {
    b.anchor(Section::Certifications);
    b.push_heading("Certifications & Recognition", palette.heading_style());

    let side_by_side = layout.grid_columns() >= 2;
    let width = if side_by_side {
        column_width(b.width(), 2, GAP)
    } else {
        b.width()
    };
    let inner = width.saturating_sub(4);

    let mut certs: Vec<Row> = vec![title_row("Certifications", palette), Vec::new()];
    for cert in &app.portfolio.certifications {
        certs.extend(bullet_rows(
            Segment::styled("● ", palette.accent_style()),
            &cert.title,
            inner,
            palette.text_style(),
            b.fill(),
        ));
        certs.push(vec![
            Segment::styled("  ", b.fill()),
            Segment::styled(cert.issuer.clone(), palette.muted_style()),
        ]);
    }

    let mut recognition: Vec<Row> = vec![title_row("Recognition", palette), Vec::new()];
    for (i, item) in app.portfolio.recognitions.iter().enumerate() {
        if i > 0 {
            recognition.push(Vec::new());
        }
        recognition.extend(bullet_rows(
            Segment::styled("● ", palette.highlight_style()),
            &item.description,
            inner,
            palette.text_style(),
            b.fill(),
        ));
    }

    let border = palette.border_style();
    let certs = card(certs, width, border, b.fill());
    if app.portfolio.recognitions.is_empty() {
        b.push_columns(vec![certs], width, GAP);
    } else {
        let recognition = card(recognition, width, border, b.fill());
        if side_by_side {
            b.push_columns(vec![certs, recognition], width, GAP);
        } else {
            b.push_rows(certs);
            b.blank();
            b.push_rows(recognition);
        }
    }

    b.blanks(SECTION_GAP);
}

fn title_row(title: &str, palette: &Palette) -> Row {
    vec![
        Segment::styled(AWARD, palette.accent_style()),
        Segment::styled(title.to_string(), palette.heading_style()),
    ]
}
