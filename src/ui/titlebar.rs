use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::QuestionView;
use crate::APP_TITLE;

pub fn draw_titlebar(f: &mut Frame, area: Rect, view: &QuestionView) {
    let progress = format!(
        " {}/{} ",
        view.answers.answered_count(),
        view.questions.len()
    );
    let progress_span = Span::styled(progress.clone(), Style::default().fg(Color::Gray));

    let timer_text = if view.stopwatch.is_visible() {
        format!(" {} ", view.stopwatch.clock())
    } else {
        String::new()
    };
    let timer_span = Span::styled(
        timer_text.clone(),
        Style::default()
            .fg(Color::Rgb(200, 200, 120))
            .add_modifier(Modifier::BOLD),
    );

    let title_text = format!("[ {} ]", APP_TITLE);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title over the full width
    let available = area.width as usize;
    let title_len = title_text.width();
    let center_pad = available
        .saturating_sub(title_len)
        / 2;
    let left_pad = center_pad.saturating_sub(progress.width());
    let right_pad = available.saturating_sub(
        progress.width() + left_pad + title_len + timer_text.width(),
    );

    let line = Line::from(vec![
        progress_span,
        Span::raw(" ".repeat(left_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
