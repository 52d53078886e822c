use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::QuestionView;
use crate::ui::layout::{contains, inner};
use crate::ui::{clamp_scroll, scroll_to_show};

const WORD_MODAL_WIDTH: u16 = 44;
// Blank + heading + blank above the list, blank + hint below it.
const WORD_LIST_TOP: u16 = 3;
const WORD_LIST_BOTTOM: u16 = 2;
const DELETE_LABEL: &str = "[X]";

const POPUP_WIDTH: u16 = 40;
const CANCEL_LABEL: &str = "[ 뒤로 가기 ]";
const CONFIRM_LABEL: &str = "[ 제출하기 ]";

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Cuts `text` to `width` columns, ending in `…` when shortened.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

// Word list

pub struct WordModalGeometry {
    pub rect: Rect,
    pub list: Rect,
    pub scroll: usize,
}

impl WordModalGeometry {
    pub fn compute(view: &QuestionView, area: Rect) -> Self {
        let rows = view.highlighted_words().len().max(1) as u16;
        let height = rows + WORD_LIST_TOP + WORD_LIST_BOTTOM + 2;
        let rect = centered_rect(WORD_MODAL_WIDTH, height, area);
        let body = inner(rect);
        let list = Rect::new(
            body.x,
            body.y + WORD_LIST_TOP,
            body.width,
            body.height.saturating_sub(WORD_LIST_TOP + WORD_LIST_BOTTOM),
        );
        let visible = list.height as usize;
        let total = view.highlighted_words().len();
        let scroll = scroll_to_show(0, view.word_cursor, view.word_cursor, visible);
        Self {
            rect,
            list,
            scroll: clamp_scroll(scroll, visible, total),
        }
    }

    pub fn delete_column(&self) -> u16 {
        self.list.x + self.list.width.saturating_sub(DELETE_LABEL.len() as u16 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordModalHit {
    /// Outside the content: the backdrop.
    Backdrop,
    Delete(usize),
    Row(usize),
    /// Inside the content but on nothing in particular.
    Content,
}

pub fn hit_word_modal(view: &QuestionView, area: Rect, x: u16, y: u16) -> WordModalHit {
    let geometry = WordModalGeometry::compute(view, area);
    if !contains(geometry.rect, x, y) {
        return WordModalHit::Backdrop;
    }
    if !contains(geometry.list, x, y) {
        return WordModalHit::Content;
    }
    let index = (y - geometry.list.y) as usize + geometry.scroll;
    if index >= view.highlighted_words().len() {
        return WordModalHit::Content;
    }
    let delete_x = geometry.delete_column();
    if x >= delete_x && x < delete_x + DELETE_LABEL.len() as u16 {
        WordModalHit::Delete(index)
    } else {
        WordModalHit::Row(index)
    }
}

pub fn draw_word_modal(f: &mut Frame, area: Rect, view: &QuestionView) {
    let geometry = WordModalGeometry::compute(view, area);
    let words = view.highlighted_words();

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            " 모르는 단어",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let text_width = (geometry.delete_column() - geometry.list.x) as usize;
    if words.is_empty() {
        lines.push(Line::from(Span::styled(
            " (없음)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, word) in words
        .iter()
        .enumerate()
        .skip(geometry.scroll)
        .take(geometry.list.height as usize)
    {
        let selected = i == view.word_cursor;
        let text = fit(&format!(" {}. {}", i + 1, word), text_width);
        let pad = text_width.saturating_sub(text.width());
        let style = if selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(text, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(DELETE_LABEL, Style::default().fg(Color::Red)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [d] 삭제   [Esc] 닫기",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Clear, geometry.rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(lines).block(block), geometry.rect);
}

// Submit confirmation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    Cancel,
    Confirm,
}

fn popup_rect(area: Rect) -> Rect {
    centered_rect(POPUP_WIDTH, 9, area)
}

pub fn popup_buttons(area: Rect) -> [(Rect, PopupAction); 2] {
    let rect = popup_rect(area);
    let y = rect.y + 6;
    let cancel_w = CANCEL_LABEL.width() as u16;
    let confirm_w = CONFIRM_LABEL.width() as u16;
    let gap = 3;
    let x = rect.x + (rect.width.saturating_sub(cancel_w + gap + confirm_w)) / 2;
    [
        (Rect::new(x, y, cancel_w, 1), PopupAction::Cancel),
        (
            Rect::new(x + cancel_w + gap, y, confirm_w, 1),
            PopupAction::Confirm,
        ),
    ]
}

pub fn hit_popup(area: Rect, x: u16, y: u16) -> Option<PopupAction> {
    popup_buttons(area)
        .into_iter()
        .find(|(rect, _)| contains(*rect, x, y))
        .map(|(_, action)| action)
}

pub fn draw_submit_popup(f: &mut Frame, area: Rect, view: &QuestionView) {
    let rect = popup_rect(area);
    let [(cancel, _), (confirm, _)] = popup_buttons(area);
    let lead = cancel.x.saturating_sub(rect.x + 1) as usize;
    let gap = confirm.x.saturating_sub(cancel.x + cancel.width) as usize;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  정말 제출하시겠습니까?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  소요 시간: {}", view.elapsed_text)),
        Line::from(""),
        Line::from(vec![
            Span::raw(" ".repeat(lead)),
            Span::styled(CANCEL_LABEL, Style::default().fg(Color::DarkGray)),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                CONFIRM_LABEL,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
