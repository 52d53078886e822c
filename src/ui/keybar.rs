use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{ActivePanel, QuestionView};

pub fn bindings(view: &QuestionView) -> Vec<(&'static str, &'static str)> {
    if view.popup_open() {
        return vec![("Enter", "제출하기"), ("Esc", "뒤로 가기")];
    }
    if view.word_modal_open {
        return vec![("↑/↓", "select"), ("d", "delete"), ("Esc", "close")];
    }

    let mut keys = match view.active_panel {
        ActivePanel::Passage => vec![
            ("←/→", "caret"),
            ("w/b", "word"),
            ("v", "select"),
            ("Enter", "mark word"),
        ],
        ActivePanel::Questions => vec![
            ("↑/↓", "question"),
            ("←/→", "choice"),
            ("1-5", "answer"),
        ],
    };
    if !view.full_passage {
        keys.push(("Tab", "panel"));
    }
    keys.extend([
        ("^W", "words"),
        ("^P", "passage"),
        ("^T", "timer"),
        ("^S", "submit"),
        ("^Q", "quit"),
    ]);
    keys
}

pub fn draw_keybar(f: &mut Frame, area: Rect, view: &QuestionView) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings(view).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
