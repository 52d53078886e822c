use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::state::{ActivePanel, QuestionView};
use crate::ui::{clamp_scroll, scroll_to_show};
use crate::ui::layout::inner;

const HINT_LINE: &str = "* 모르는 단어가 있으면 클릭해두고, 해설창에서 확인하세요!";

/// Word-wrap `chars` into rows of at most `width` columns, as char ranges.
///
/// Newlines end a row and the space a soft break lands on is dropped, so
/// neither belongs to any row.
pub fn wrap_offsets(chars: &[char], width: usize) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    if width == 0 {
        rows.push(0..chars.len());
        return rows;
    }

    let mut start = 0;
    while start < chars.len() {
        let mut end = start;
        let mut used = 0;
        let mut last_space = None;
        while end < chars.len() && chars[end] != '\n' {
            let w = chars[end].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            if chars[end] == ' ' {
                last_space = Some(end);
            }
            used += w;
            end += 1;
        }

        if end >= chars.len() {
            rows.push(start..end);
            break;
        }
        if chars[end] == '\n' {
            rows.push(start..end);
            start = end + 1;
        } else if chars[end] == ' ' {
            rows.push(start..end);
            start = end + 1;
        } else if let Some(sp) = last_space.filter(|&sp| sp > start) {
            rows.push(start..sp);
            start = sp + 1;
        } else if end == start {
            // A single glyph wider than the row.
            rows.push(start..start + 1);
            start += 1;
        } else {
            rows.push(start..end);
            start = end;
        }
    }

    if rows.is_empty() {
        rows.push(0..0);
    }
    rows
}

/// Index of the row holding `offset`, or the row just before it when the
/// offset is a dropped break character.
pub fn row_of(rows: &[Range<usize>], offset: usize) -> usize {
    rows.iter()
        .rposition(|r| r.start <= offset)
        .unwrap_or(0)
}

/// Geometry of the passage panel, shared by drawing and mouse hit-testing.
pub struct PassageGeometry {
    pub inner: Rect,
    pub header_lines: usize,
    pub rows: Vec<Range<usize>>,
    pub scroll: usize,
}

impl PassageGeometry {
    pub fn compute(view: &QuestionView, area: Rect) -> Self {
        let inner = inner(area);
        let header_lines = header_lines(view).len();
        let chars: Vec<char> = view.passage.chars().collect();
        let rows = wrap_offsets(&chars, inner.width as usize);
        let visible = (inner.height as usize).saturating_sub(header_lines);
        let scroll = clamp_scroll(view.passage_scroll, visible, rows.len());
        Self {
            inner,
            header_lines,
            rows,
            scroll,
        }
    }

    pub fn visible_rows(&self) -> usize {
        (self.inner.height as usize).saturating_sub(self.header_lines)
    }

    /// Char offset under a terminal cell, clamped into the row it lands on.
    pub fn offset_at(&self, view: &QuestionView, x: u16, y: u16) -> Option<usize> {
        if !crate::ui::layout::contains(self.inner, x, y) {
            return None;
        }
        let line = (y - self.inner.y) as usize;
        let row_idx = line.checked_sub(self.header_lines)? + self.scroll;
        let row = self.rows.get(row_idx)?;
        let col = (x - self.inner.x) as usize;

        let mut used = 0;
        for (i, c) in view.passage.chars().enumerate().skip(row.start).take(row.len()) {
            let w = c.width().unwrap_or(0);
            if col < used + w {
                return Some(i);
            }
            used += w;
        }
        Some(row.end.saturating_sub(1).max(row.start))
    }
}

/// Scrolls the passage so the caret's row is on screen.
pub fn follow_caret(view: &mut QuestionView, area: Rect) {
    let geometry = PassageGeometry::compute(view, area);
    let row = row_of(&geometry.rows, view.selection.caret());
    view.passage_scroll = scroll_to_show(geometry.scroll, row, row, geometry.visible_rows());
}

fn header_lines(view: &QuestionView) -> Vec<Line<'static>> {
    if view.full_passage {
        return Vec::new();
    }
    let mut lines = vec![Line::from(Span::styled(
        HINT_LINE,
        Style::default().fg(Color::DarkGray),
    ))];
    if !view.questions.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("[1-{}] 다음 글을 읽고 질문에 답하시오.", view.questions.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines
}

fn char_style(view: &QuestionView, offset: usize, focused: bool) -> Style {
    let mut style = Style::default();
    if view.lookup.markers.is_marked(offset) {
        style = style.fg(Color::Black).bg(Color::Yellow);
    }
    if view.selection.is_selected(offset) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if focused && offset == view.selection.caret() {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    style
}

/// Rebuild a row from chars, grouping consecutive same-style chars into spans.
fn row_line(view: &QuestionView, chars: &[char], row: &Range<usize>, focused: bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;

    for offset in row.clone() {
        let style = char_style(view, offset, focused);
        if current.is_some_and(|s| s != style) {
            spans.push(Span::styled(std::mem::take(&mut text), current.unwrap_or_default()));
        }
        current = Some(style);
        text.push(chars[offset]);
    }
    if !text.is_empty() {
        spans.push(Span::styled(text, current.unwrap_or_default()));
    }
    Line::from(spans)
}

pub fn draw_passage(f: &mut Frame, area: Rect, view: &QuestionView) {
    let geometry = PassageGeometry::compute(view, area);
    let focused = view.active_panel == ActivePanel::Passage && !view.word_modal_open;
    let chars: Vec<char> = view.passage.chars().collect();

    let mut lines = header_lines(view);
    for row in geometry
        .rows
        .iter()
        .skip(geometry.scroll)
        .take(geometry.visible_rows())
    {
        lines.push(row_line(view, &chars, row, focused));
    }

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let title = if view.full_passage { " 지문 전체 " } else { " 지문 " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
