//! Skills & Expertise grid.

use super::SECTION_GAP;
use crate::app::App;
use crate::content::SkillCategory;
use crate::domain::Section;
use crate::ui::page::{card, column_width, PageBuilder, Row, Segment};
use crate::ui::theme::Palette;

const GAP: usize = 2;

/// Narrowest a skill card gets before the grid drops a column.
const MIN_CARD_WIDTH: usize = 22;

pub fn render(b: &mut PageBuilder, app: &App, palette: &Palette) {
    b.anchor(Section::Skills);
    b.push_heading("Skills & Expertise", palette.heading_style());

    let categories = &app.portfolio.skill_categories;
    let columns = (b.width() / (MIN_CARD_WIDTH + GAP)).clamp(1, categories.len().clamp(1, 4));
    let width = column_width(b.width(), columns, GAP);

    let cards = categories
        .iter()
        .map(|category| {
            card(
                category_rows(category, palette),
                width,
                palette.border_style(),
                b.fill(),
            )
        })
        .collect();
    b.push_grid(cards, columns, width, GAP);

    b.blanks(SECTION_GAP);
}

fn category_rows(category: &SkillCategory, palette: &Palette) -> Vec<Row> {
    let mut rows = vec![
        vec![
            Segment::styled(format!("{} ", category.icon.glyph()), palette.accent_style()),
            Segment::styled(category.title.clone(), palette.heading_style()),
        ],
        Vec::new(),
    ];
    rows.extend(category.skills.iter().map(|skill| {
        vec![
            Segment::styled("• ", palette.highlight_style()),
            Segment::styled(skill.clone(), palette.text_style()),
        ]
    }));
    rows
}
