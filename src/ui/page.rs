//! Page document builder.
//!
//! The portfolio is one long document. Section renderers append rows of
//! [`Segment`]s to a [`PageBuilder`]; the builder turns them into ratatui
//! lines and remembers, in page coordinates, where each section starts and
//! where every clickable segment sits. The frame renderer then shows a window
//! of that document and maps the visible links to screen hit areas.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::helpers::{display_width, truncate_to_width, wrap_text};
use super::interaction::ClickAction;
use crate::app::SectionAnchors;
use crate::domain::Section;

/// A run of styled text, optionally clickable.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
    pub action: Option<ClickAction>,
}

impl Segment {
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            action: None,
        }
    }

    pub fn link(text: impl Into<String>, style: Style, action: ClickAction) -> Self {
        Self {
            text: text.into(),
            style,
            action: Some(action),
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One document row.
pub type Row = Vec<Segment>;

pub fn row_width(row: &[Segment]) -> usize {
    row.iter().map(Segment::width).sum()
}

/// Fit a row into exactly `width` columns: overflowing segments are
/// truncated, short rows are padded with `fill`.
pub fn fit_row(row: Row, width: usize, fill: Style) -> Row {
    let mut out = clip_row(row, width);
    let used = row_width(&out);
    if used < width {
        out.push(Segment::styled(" ".repeat(width - used), fill));
    }
    out
}

/// Truncate a row to at most `width` columns without padding it.
pub fn clip_row(row: Row, width: usize) -> Row {
    if row_width(&row) <= width {
        return row;
    }
    let mut out = Vec::with_capacity(row.len());
    let mut used = 0;
    for mut seg in row {
        let remaining = width - used;
        if remaining == 0 {
            break;
        }
        if seg.width() > remaining {
            seg.text = truncate_to_width(&seg.text, remaining);
        }
        used += seg.width();
        out.push(seg);
    }
    out
}

/// Wrap `text` to `width` and return one row per line.
pub fn text_rows(text: &str, width: usize, style: Style) -> Vec<Row> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| vec![Segment::styled(line, style)])
        .collect()
}

/// Rows wrapped with a hanging indent: `marker` on the first line, spaces of
/// the same width on the rest.
pub fn bullet_rows(
    marker: Segment,
    text: &str,
    width: usize,
    text_style: Style,
    fill: Style,
) -> Vec<Row> {
    let indent = marker.width();
    let mut marker = Some(marker);
    wrap_text(text, width.saturating_sub(indent))
        .into_iter()
        .map(|line| {
            let lead = marker
                .take()
                .unwrap_or_else(|| Segment::styled(" ".repeat(indent), fill));
            vec![lead, Segment::styled(line, text_style)]
        })
        .collect()
}

/// Draw a rounded box of `width` columns around `rows`.
pub fn card(rows: Vec<Row>, width: usize, border: Style, fill: Style) -> Vec<Row> {
    let inner = width.saturating_sub(4);
    let rule = "─".repeat(width.saturating_sub(2));
    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(vec![Segment::styled(format!("╭{}╮", rule), border)]);
    for row in rows {
        let mut line = vec![Segment::styled("│", border), Segment::styled(" ", fill)];
        line.extend(fit_row(row, inner, fill));
        line.push(Segment::styled(" ", fill));
        line.push(Segment::styled("│", border));
        out.push(line);
    }
    out.push(vec![Segment::styled(format!("╰{}╯", rule), border)]);
    out
}

/// A clickable region in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    /// Document row
    pub row: usize,
    /// Column offset from the left edge of the page column
    pub x: u16,
    pub width: u16,
    pub action: ClickAction,
}

/// The built document.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub anchors: SectionAnchors,
    pub links: Vec<PageLink>,
}

impl Page {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Links whose row falls in `first..first + rows`.
    pub fn visible_links(&self, first: usize, rows: usize) -> impl Iterator<Item = &PageLink> {
        self.links
            .iter()
            .filter(move |link| link.row >= first && link.row < first + rows)
    }

    /// Plain text of a row, for tests and debugging.
    pub fn row_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .unwrap_or_default()
    }

    /// First row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<usize> {
        (0..self.height()).find(|&row| self.row_text(row).contains(needle))
    }
}

/// Accumulates document rows.
#[derive(Debug)]
pub struct PageBuilder {
    width: usize,
    fill: Style,
    lines: Vec<Line<'static>>,
    anchors: SectionAnchors,
    links: Vec<PageLink>,
}

impl PageBuilder {
    /// `width` is the page column width; `fill` styles padding.
    pub fn new(width: u16, fill: Style) -> Self {
        Self {
            width: usize::from(width),
            fill,
            lines: Vec::new(),
            anchors: SectionAnchors::new(),
            links: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn fill(&self) -> Style {
        self.fill
    }

    /// Index the next pushed row will get.
    pub fn row(&self) -> usize {
        self.lines.len()
    }

    /// Mark the next row as the start of `section`.
    pub fn anchor(&mut self, section: Section) {
        self.anchors.set(section, self.row());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn blanks(&mut self, count: usize) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Append a row starting at column `indent`.
    ///
    /// Anything past the page column is clipped.
    pub fn push_row_at(&mut self, indent: usize, row: Row) {
        let indent = indent.min(self.width);
        let row = clip_row(row, self.width - indent);
        let row_index = self.row();
        let mut spans = Vec::with_capacity(row.len() + 1);
        if indent > 0 {
            spans.push(Span::styled(" ".repeat(indent), self.fill));
        }

        let mut x = indent;
        for seg in row {
            let width = seg.width();
            if let Some(action) = seg.action {
                if width > 0 {
                    self.links.push(PageLink {
                        row: row_index,
                        x: u16::try_from(x).unwrap_or(u16::MAX),
                        width: u16::try_from(width).unwrap_or(u16::MAX),
                        action,
                    });
                }
            }
            spans.push(Span::styled(seg.text, seg.style));
            x += width;
        }
        self.lines.push(Line::from(spans));
    }

    pub fn push_row(&mut self, row: Row) {
        self.push_row_at(0, row);
    }

    pub fn push_rows(&mut self, rows: Vec<Row>) {
        for row in rows {
            self.push_row(row);
        }
    }

    /// Append a row centered in the page column.
    pub fn push_centered(&mut self, row: Row) {
        let indent = self.width.saturating_sub(row_width(&row)) / 2;
        self.push_row_at(indent, row);
    }

    /// Wrap and append a paragraph, left aligned at `indent`.
    pub fn push_text_at(&mut self, indent: usize, text: &str, style: Style) {
        for row in text_rows(text, self.width.saturating_sub(indent), style) {
            self.push_row_at(indent, row);
        }
    }

    /// Wrap and append a paragraph with every line centered.
    pub fn push_centered_text(&mut self, text: &str, width: usize, style: Style) {
        for row in text_rows(text, width.min(self.width), style) {
            self.push_centered(row);
        }
    }

    /// Section title: centered heading followed by a blank row.
    pub fn push_heading(&mut self, title: &str, style: Style) {
        self.push_centered(vec![Segment::styled(title.to_string(), style)]);
        self.blank();
    }

    /// Lay blocks out side by side, `col_width` columns each, `gap` apart.
    /// Shorter blocks are padded so every column keeps its x position.
    pub fn push_columns(&mut self, blocks: Vec<Vec<Row>>, col_width: usize, gap: usize) {
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
        let count = blocks.len();
        let mut iters: Vec<_> = blocks.into_iter().map(Vec::into_iter).collect();
        let total = count * col_width + count.saturating_sub(1) * gap;
        let indent = self.width.saturating_sub(total) / 2;

        for _ in 0..height {
            let mut line = Vec::new();
            for (i, iter) in iters.iter_mut().enumerate() {
                if i > 0 {
                    line.push(Segment::styled(" ".repeat(gap), self.fill));
                }
                let row = iter.next().unwrap_or_default();
                line.extend(fit_row(row, col_width, self.fill));
            }
            self.push_row_at(indent, line);
        }
    }

    /// Lay `blocks` out in a grid of `columns` columns.
    pub fn push_grid(&mut self, blocks: Vec<Vec<Row>>, columns: usize, col_width: usize, gap: usize) {
        let columns = columns.max(1);
        let mut blocks = blocks.into_iter().peekable();
        while blocks.peek().is_some() {
            let chunk: Vec<_> = blocks.by_ref().take(columns).collect();
            self.push_columns(chunk, col_width, gap);
            if blocks.peek().is_some() {
                self.blank();
            }
        }
    }

    pub fn finish(self) -> Page {
        Page {
            lines: self.lines,
            anchors: self.anchors,
            links: self.links,
        }
    }
}

/// Width of each column when `columns` share `total` columns with `gap` between.
pub fn column_width(total: usize, columns: usize, gap: usize) -> usize {
    let columns = columns.max(1);
    total.saturating_sub(gap * (columns - 1)) / columns
}
