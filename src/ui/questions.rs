use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::{ActivePanel, QuestionView};
use crate::ui::layout::inner;
use crate::ui::passage::wrap_offsets;
use crate::ui::{clamp_scroll, scroll_to_show};

/// The questions panel laid out as plain lines, with what each line hits.
pub struct QuestionLines {
    pub lines: Vec<Line<'static>>,
    /// `(question, slot)` for lines belonging to a choice.
    pub hits: Vec<Option<(usize, usize)>>,
    /// First and last line of every question.
    pub spans: Vec<(usize, usize)>,
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    wrap_offsets(&chars, width.max(1))
        .into_iter()
        .map(|r| chars[r].iter().collect())
        .collect()
}

pub fn build_lines(view: &QuestionView, width: usize) -> QuestionLines {
    let focused = view.active_panel == ActivePanel::Questions;
    let mut out = QuestionLines {
        lines: Vec::new(),
        hits: Vec::new(),
        spans: Vec::new(),
    };

    for (qi, question) in view.questions.iter().enumerate() {
        let is_current = qi == view.current_question;
        let first = out.lines.len();

        let number = format!("{}. ", qi + 1);
        let number_style = if is_current && focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let text_width = width.saturating_sub(number.width());
        for (i, part) in wrap_text(&question.question_text, text_width).into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(number.clone(), number_style)
            } else {
                Span::raw(" ".repeat(number.width()))
            };
            out.lines.push(Line::from(vec![lead, Span::raw(part)]));
            out.hits.push(None);
        }

        for (slot, choice) in question.offered_choices() {
            let selected = view.answers.is_selected(qi, choice);
            let under_cursor = is_current && focused && slot == view.choice_cursor;
            let marker = if under_cursor { " > " } else { "   " };
            let radio = if selected { "(•) " } else { "( ) " };
            let style = if selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if under_cursor {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            let prefix_width = marker.width() + radio.width();
            let parts = wrap_text(choice, width.saturating_sub(prefix_width));
            for (i, part) in parts.into_iter().enumerate() {
                let lead = if i == 0 {
                    vec![
                        Span::styled(marker, Style::default().fg(Color::Cyan)),
                        Span::styled(radio, style),
                    ]
                } else {
                    vec![Span::raw(" ".repeat(prefix_width))]
                };
                let mut spans = lead;
                spans.push(Span::styled(part, style));
                out.lines.push(Line::from(spans));
                out.hits.push(Some((qi, slot)));
            }
        }

        out.spans.push((first, out.lines.len().saturating_sub(1)));
        out.lines.push(Line::from(""));
        out.hits.push(None);
    }

    out
}

/// The scroll offset the panel is drawn with.
pub fn current_scroll(view: &QuestionView, area: Rect) -> usize {
    let inner = inner(area);
    let built = build_lines(view, inner.width as usize);
    clamp_scroll(view.question_scroll, inner.height as usize, built.lines.len())
}

/// Scrolls the panel so the focused question is on screen.
pub fn follow_current(view: &mut QuestionView, area: Rect) {
    let inner = inner(area);
    let built = build_lines(view, inner.width as usize);
    let Some(&(first, last)) = built.spans.get(view.current_question) else {
        return;
    };
    let scroll = clamp_scroll(view.question_scroll, inner.height as usize, built.lines.len());
    view.question_scroll = scroll_to_show(scroll, first, last, inner.height as usize);
}

/// `(question, slot)` under a terminal cell.
pub fn hit_choice(view: &QuestionView, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let inner = inner(area);
    if !crate::ui::layout::contains(inner, x, y) {
        return None;
    }
    let built = build_lines(view, inner.width as usize);
    let scroll = clamp_scroll(view.question_scroll, inner.height as usize, built.lines.len());
    let line = (y - inner.y) as usize + scroll;
    built.hits.get(line).copied().flatten()
}

pub fn draw_questions(f: &mut Frame, area: Rect, view: &QuestionView) {
    let inner = inner(area);
    let built = build_lines(view, inner.width as usize);
    let scroll = clamp_scroll(view.question_scroll, inner.height as usize, built.lines.len());

    let lines: Vec<Line> = built
        .lines
        .into_iter()
        .skip(scroll)
        .take(inner.height as usize)
        .collect();

    let focused = view.active_panel == ActivePanel::Questions && !view.word_modal_open;
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 문제 ")
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
