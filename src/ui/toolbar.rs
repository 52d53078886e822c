use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::QuestionView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    WordList,
    TogglePassage,
    ToggleTimer,
    Submit,
}

pub struct ToolbarButton {
    pub rect: Rect,
    pub action: ToolbarAction,
    pub label: String,
}

fn label(view: &QuestionView, action: ToolbarAction) -> &'static str {
    match action {
        ToolbarAction::WordList => "모르는 단어",
        ToolbarAction::TogglePassage if view.full_passage => "문제로 돌아가기",
        ToolbarAction::TogglePassage => "지문만 보기",
        ToolbarAction::ToggleTimer if view.stopwatch.is_visible() => "HIDE",
        ToolbarAction::ToggleTimer => "SHOW",
        ToolbarAction::Submit => "답안 제출하기",
    }
}

/// Button positions, left group from the left edge and submit on the right.
pub fn toolbar_buttons(view: &QuestionView, area: Rect) -> Vec<ToolbarButton> {
    let mut buttons = Vec::new();
    let right = area.x + area.width;
    let mut x = area.x + 1;

    for action in [
        ToolbarAction::WordList,
        ToolbarAction::TogglePassage,
        ToolbarAction::ToggleTimer,
    ] {
        let text = format!("[ {} ]", label(view, action));
        let width = text.width() as u16;
        if x + width > right {
            break;
        }
        buttons.push(ToolbarButton {
            rect: Rect::new(x, area.y, width, 1),
            action,
            label: text,
        });
        x += width + 1;
    }

    let submit = format!("[ {} ]", label(view, ToolbarAction::Submit));
    let width = submit.width() as u16;
    let submit_x = right.saturating_sub(width + 1);
    if submit_x >= x {
        buttons.push(ToolbarButton {
            rect: Rect::new(submit_x, area.y, width, 1),
            action: ToolbarAction::Submit,
            label: submit,
        });
    }

    buttons
}

pub fn hit_toolbar(view: &QuestionView, area: Rect, x: u16, y: u16) -> Option<ToolbarAction> {
    toolbar_buttons(view, area)
        .into_iter()
        .find(|b| crate::ui::layout::contains(b.rect, x, y))
        .map(|b| b.action)
}

pub fn draw_toolbar(f: &mut Frame, area: Rect, view: &QuestionView) {
    let mut spans: Vec<Span> = Vec::new();
    let mut cursor = area.x;

    for button in toolbar_buttons(view, area) {
        if button.rect.x > cursor {
            spans.push(Span::raw(" ".repeat((button.rect.x - cursor) as usize)));
        }
        let style = match button.action {
            ToolbarAction::Submit => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            ToolbarAction::WordList => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::Cyan),
        };
        cursor = button.rect.x + button.rect.width;
        spans.push(Span::styled(button.label, style));
    }

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
