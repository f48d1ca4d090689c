//! Mobile navigation menu.
//!
//! Drawn under the nav bar while the menu is open on a narrow terminal:
//! seven section links, then a row with the theme toggle and the Resume
//! button. Clicking anywhere below the menu closes it.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

use super::interaction::ClickAction;
use super::nav::{draw_button, theme_glyph, RESUME_LABEL};
use super::theme::Palette;
use crate::app::{App, MenuItem};

/// Height of the menu card including its border.
pub fn menu_height() -> u16 {
    // seven links, one control row, two border rows
    MenuItem::all().len() as u16 - 2 + 1 + 2
}

pub fn render_menu(frame: &mut Frame, app: &mut App, page_area: Rect, palette: &Palette) {
    let height = menu_height().min(page_area.height);
    let card = Rect::new(page_area.x, page_area.y, page_area.width, height);

    // Registered first so the menu entries take precedence.
    app.hit_areas.register(page_area, ClickAction::ToggleMenu, None);

    frame.render_widget(Clear, card);
    frame.render_widget(
        Block::default()
            .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
            .border_style(palette.muted_style())
            .style(Style::default().fg(palette.text).bg(palette.surface)),
        card,
    );

    let inner = Rect::new(
        card.x + 1,
        card.y,
        card.width.saturating_sub(2),
        card.height.saturating_sub(1),
    );
    let hover = palette.hover_style();
    let surface = Style::default().bg(palette.surface);

    let mut y = inner.y;
    for (i, item) in MenuItem::all().into_iter().enumerate() {
        if y >= inner.bottom() {
            break;
        }
        let selected = i == app.menu_cursor;
        match item {
            MenuItem::Link(section) => {
                let style = if selected {
                    surface.fg(palette.accent).add_modifier(Modifier::BOLD)
                } else {
                    surface.fg(palette.text)
                };
                let marker = if selected { "› " } else { "  " };
                let row = Rect::new(inner.x, y, inner.width, 1);
                frame.render_widget(
                    Line::from(vec![
                        Span::styled(marker, style),
                        Span::styled(section.label(), style),
                    ]),
                    row,
                );
                app.hit_areas
                    .register(row, ClickAction::MobileNavigateTo(section), Some(hover));
                y += 1;
            }
            MenuItem::ToggleTheme => {
                let mut style = surface.fg(palette.accent);
                if selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                draw_button(
                    frame,
                    &mut app.hit_areas,
                    hover,
                    (inner.x + 1, y),
                    Span::styled(theme_glyph(app.theme), style),
                    ClickAction::ToggleTheme,
                );
            }
            MenuItem::DownloadResume => {
                let mut style = palette.button_style();
                if selected {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                let width = RESUME_LABEL.chars().count() as u16;
                draw_button(
                    frame,
                    &mut app.hit_areas,
                    hover,
                    (inner.right().saturating_sub(width + 1), y),
                    Span::styled(RESUME_LABEL, style),
                    ClickAction::DownloadResume,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_height() {
        assert_eq!(menu_height(), 10);
    }
}
