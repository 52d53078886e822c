pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod passage;
pub mod questions;
pub mod result;
pub mod titlebar;
pub mod toolbar;

use ratatui::Frame;

use crate::route::Route;
use crate::state::QuestionView;

pub fn draw(f: &mut Frame, view: &QuestionView, route: Route) {
    let area = f.area();

    match route {
        Route::Question => draw_working(f, area, view),
        Route::Solution => result::draw_solution(f, area),
    }
}

fn draw_working(f: &mut Frame, area: ratatui::layout::Rect, view: &QuestionView) {
    let layout = layout::compute_layout(area, view.full_passage);

    titlebar::draw_titlebar(f, layout.titlebar, view);
    toolbar::draw_toolbar(f, layout.toolbar, view);
    passage::draw_passage(f, layout.passage, view);
    if let Some(questions) = layout.questions {
        questions::draw_questions(f, questions, view);
    }
    keybar::draw_keybar(f, layout.keybar, view);

    if view.word_modal_open {
        dialog::draw_word_modal(f, area, view);
    }
    if view.popup_open() {
        dialog::draw_submit_popup(f, area, view);
    }
}

/// Keeps a stored scroll offset within the content.
pub fn clamp_scroll(scroll: usize, visible: usize, total: usize) -> usize {
    scroll.min(total.saturating_sub(visible))
}

/// Smallest change to `scroll` that puts lines `first..=last` on screen,
/// favouring `first` when they do not fit.
pub fn scroll_to_show(scroll: usize, first: usize, last: usize, visible: usize) -> usize {
    if visible == 0 || first < scroll {
        first
    } else if last >= scroll + visible {
        (last + 1 - visible).min(first)
    } else {
        scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_follows_range() {
        assert_eq!(scroll_to_show(0, 2, 3, 10), 0);
        assert_eq!(scroll_to_show(5, 2, 3, 10), 2);
        assert_eq!(scroll_to_show(0, 12, 14, 10), 5);
        assert_eq!(scroll_to_show(0, 12, 30, 10), 12);
    }

    #[test]
    fn clamp_keeps_last_page_full() {
        assert_eq!(clamp_scroll(50, 10, 25), 15);
        assert_eq!(clamp_scroll(3, 10, 5), 0);
    }
}
