//! Bottom status line: the current status message, or keybind hints.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::theme::Palette;
use crate::app::{App, StatusKind};

/// Keybind hints for the current input mode, as (key, description) pairs.
pub fn keybind_hints(app: &App, layout: &LayoutContext) -> Vec<(&'static str, &'static str)> {
    if app.contact.is_editing() {
        return vec![
            ("Tab", "next field"),
            ("Enter", "next / newline / send"),
            ("^S", "send"),
            ("Esc", "done"),
        ];
    }
    if layout.is_mobile() {
        if app.menu_open {
            return vec![("↑↓", "select"), ("Enter", "open"), ("1-7", "jump"), ("Esc", "close")];
        }
        return vec![("m", "menu"), ("j/k", "scroll"), ("c", "contact"), ("q", "quit")];
    }
    vec![
        ("1-7", "jump"),
        ("j/k", "scroll"),
        ("w", "work"),
        ("c", "contact"),
        ("t", "theme"),
        ("r", "resume"),
        ("q", "quit"),
    ]
}

pub fn render_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    layout: &LayoutContext,
    palette: &Palette,
) {
    let width = usize::from(area.width.saturating_sub(1));
    let base = palette.muted_style();

    let line = match &app.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => palette.accent_style(),
                StatusKind::Error => Style::default()
                    .fg(palette.error)
                    .bg(palette.background)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(vec![
                Span::styled(" ", base),
                Span::styled(truncate_to_width(&status.text, width), style),
            ])
        }
        None => {
            let mut spans = vec![Span::styled(" ", base)];
            let mut used = 0;
            for (i, (key, desc)) in keybind_hints(app, layout).into_iter().enumerate() {
                let sep = if i == 0 { "" } else { " · " };
                let hint_width = sep.chars().count() + key.chars().count() + 1 + desc.chars().count();
                if used + hint_width > width {
                    break;
                }
                used += hint_width;
                spans.push(Span::styled(sep, base));
                spans.push(Span::styled(key, palette.accent_style().add_modifier(Modifier::BOLD)));
                spans.push(Span::styled(format!(" {}", desc), base));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(line.style(palette.base()), area);
}
