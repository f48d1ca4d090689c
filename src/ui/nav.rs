//! Navigation bar.
//!
//! Desktop layout:
//! ```text
//!    Home  About  Experience  Skills  Certifications  Projects  Contact   ☾  ⇩ Resume
//! ────────────────────────────────────────────────────────────────────────────────────
//! ```
//! Mobile layout (< 80 columns):
//! ```text
//!  Aparna Alamanda                         ☰
//! ───────────────────────────────────────────
//! ```

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::helpers::{display_width, truncate_to_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::Palette;
use crate::app::App;
use crate::domain::{Section, Theme};

pub const RESUME_LABEL: &str = " ⇩ Resume ";

/// Theme toggle glyph: the sun switches back to light, the moon to dark.
pub fn theme_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() {
        " ☀ "
    } else {
        " ☾ "
    }
}

pub fn menu_glyph(open: bool) -> &'static str {
    if open {
        " ✕ "
    } else {
        " ☰ "
    }
}

/// Draw `span` at (`x`, `y`) and register it as clickable. Returns its width.
pub fn draw_button(
    frame: &mut Frame,
    hit_areas: &mut HitAreaRegistry,
    hover: Style,
    (x, y): (u16, u16),
    span: Span<'static>,
    action: ClickAction,
) -> u16 {
    let width = u16::try_from(display_width(&span.content)).unwrap_or(u16::MAX);
    let rect = Rect::new(x, y, width, 1).intersection(frame.area());
    if rect.is_empty() {
        return 0;
    }
    frame.render_widget(span, rect);
    hit_areas.register(rect, action, Some(hover));
    width
}

pub fn render_nav(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    layout: &LayoutContext,
    palette: &Palette,
) {
    let bar = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(Block::default().style(palette.base()), area);

    if layout.is_mobile() {
        render_mobile_bar(frame, app, bar, palette);
    } else {
        render_desktop_bar(frame, app, bar, palette);
    }

    if area.height > 1 {
        let rule = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Span::styled("─".repeat(usize::from(area.width)), palette.muted_style()),
            rule,
        );
    }
}

fn render_desktop_bar(frame: &mut Frame, app: &mut App, bar: Rect, palette: &Palette) {
    let hover = palette.hover_style();
    let active = app.anchors.section_at(app.scroll.row());

    // Right-hand controls first so the links know how much room is left.
    let theme_text = theme_glyph(app.theme);
    let controls_width = (display_width(theme_text) + 1 + display_width(RESUME_LABEL)) as u16;
    let controls_x = bar.right().saturating_sub(controls_width + 1);
    let theme_width = draw_button(
        frame,
        &mut app.hit_areas,
        hover,
        (controls_x, bar.y),
        Span::styled(theme_text, palette.accent_style()),
        ClickAction::ToggleTheme,
    );
    draw_button(
        frame,
        &mut app.hit_areas,
        hover,
        (controls_x + theme_width + 1, bar.y),
        Span::styled(RESUME_LABEL, palette.button_style()),
        ClickAction::DownloadResume,
    );

    let labels_width: u16 = Section::ALL
        .iter()
        .map(|s| display_width(s.label()) as u16)
        .sum();
    let spacing = Section::COUNT as u16 - 1;
    // Widest link spacing that still leaves room for the controls.
    let gap = (1..=3u16)
        .rev()
        .find(|gap| labels_width + gap * spacing + controls_width + 3 <= bar.width)
        .unwrap_or(1);
    let links_width = labels_width + gap * spacing;
    let centered = bar.x + bar.width.saturating_sub(links_width) / 2;
    let mut x = if centered + links_width < controls_x {
        centered
    } else {
        bar.x + 1
    };

    for section in Section::ALL {
        let style = if active == Some(section) {
            palette
                .accent_style()
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            palette.text_style()
        };
        if x + display_width(section.label()) as u16 >= controls_x {
            break;
        }
        x += draw_button(
            frame,
            &mut app.hit_areas,
            hover,
            (x, bar.y),
            Span::styled(section.label(), style),
            ClickAction::NavigateTo(section),
        );
        x += gap;
    }
}

fn render_mobile_bar(frame: &mut Frame, app: &mut App, bar: Rect, palette: &Palette) {
    let glyph = menu_glyph(app.menu_open);
    let button_x = bar.right().saturating_sub(display_width(glyph) as u16 + 1);

    let title_room = usize::from(button_x.saturating_sub(bar.x + 2));
    let title = truncate_to_width(&app.portfolio.profile.name, title_room);
    frame.render_widget(
        Span::styled(title, palette.heading_style()),
        Rect::new(bar.x + 1, bar.y, button_x.saturating_sub(bar.x + 1), 1),
    );

    draw_button(
        frame,
        &mut app.hit_areas,
        palette.hover_style(),
        (button_x, bar.y),
        Span::styled(glyph, palette.heading_style()),
        ClickAction::ToggleMenu,
    );
}
