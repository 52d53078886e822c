use std::sync::mpsc;
use std::time::Duration;

use passage_quiz::model::{NavigationPayload, QuestionRecord};
use passage_quiz::route::Route;
use passage_quiz::state::QuestionView;
use passage_quiz::timer::TimerEvent;
use passage_quiz::ui;
use passage_quiz::ui::layout::compute_layout;
use passage_quiz::ui::passage::PassageGeometry;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

const IDLE: Duration = Duration::from_secs(3600);

fn sky_view() -> QuestionView {
    let (tx, _rx) = mpsc::channel();
    let question = QuestionRecord {
        question_text: "Color?".into(),
        choice1: "blue".into(),
        choice2: "red".into(),
        ..Default::default()
    };
    QuestionView::mount(
        Some(NavigationPayload::new("The sky is blue.", vec![question])),
        tx,
        IDLE,
    )
}

fn render(view: &QuestionView, route: Route) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, view, route)).unwrap();
    terminal
}

/// Screen text with spaces dropped, since wide glyphs leave blank cells.
fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out.replace(' ', "")
}

#[test]
fn test_working_view_shows_passage_and_choices() {
    let view = sky_view();
    let text = screen(&render(&view, Route::Question));

    assert!(text.contains("Theskyisblue."));
    assert!(text.contains("[1-1]다음글을읽고질문에답하시오."));
    assert!(text.contains("1.Color?"));
    assert!(text.contains("()blue"));
    assert!(text.contains("()red"));
    assert!(text.contains("MoonSSun빠워"));
    assert!(text.contains("0:00"));
}

#[test]
fn test_timer_hidden_and_shown() {
    let mut view = sky_view();
    for _ in 0..75 {
        let generation = view.stopwatch.generation();
        view.handle_timer(TimerEvent::Tick { generation });
    }
    assert!(screen(&render(&view, Route::Question)).contains("1:15"));

    view.toggle_timer_visibility();
    let text = screen(&render(&view, Route::Question));
    assert!(!text.contains("1:15"));
    assert!(text.contains("[SHOW]"));
}

#[test]
fn test_selected_choice_is_filled() {
    let mut view = sky_view();
    view.select_answer(0, "blue");
    let text = screen(&render(&view, Route::Question));
    assert!(text.contains("(•)blue"));
    assert!(text.contains("()red"));
    assert!(text.contains("1/1"));
}

#[test]
fn test_submit_popup_shows_elapsed_time() {
    let mut view = sky_view();
    for _ in 0..7 {
        let generation = view.stopwatch.generation();
        view.handle_timer(TimerEvent::Tick { generation });
    }
    view.submit();
    let text = screen(&render(&view, Route::Question));

    assert!(text.contains("정말제출하시겠습니까?"));
    assert!(text.contains("소요시간:0분7초"));
    assert!(text.contains("[뒤로가기]"));
    assert!(text.contains("[제출하기]"));
}

#[test]
fn test_word_modal_lists_words() {
    let mut view = sky_view();
    view.open_word_modal();
    assert!(screen(&render(&view, Route::Question)).contains("(없음)"));

    view.selection.press(4);
    view.selection.drag(6);
    view.selection.release();
    assert!(view.capture_selection());
    let text = screen(&render(&view, Route::Question));
    assert!(text.contains("1.sky"));
    assert!(text.contains("[X]"));
}

#[test]
fn test_marked_word_is_highlighted_in_passage() {
    let mut view = sky_view();
    view.selection.press(4);
    view.selection.drag(6);
    view.selection.release();
    view.capture_selection();

    let terminal = render(&view, Route::Question);
    let layout = compute_layout(ratatui::layout::Rect::new(0, 0, 80, 24), false);
    let geometry = PassageGeometry::compute(&view, layout.passage);
    let y = geometry.inner.y + geometry.header_lines as u16;
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(geometry.inner.x + 4, y)].symbol(), "s");
    assert_eq!(buffer[(geometry.inner.x + 4, y)].bg, Color::Yellow);
    assert_eq!(buffer[(geometry.inner.x + 6, y)].bg, Color::Yellow);
    assert_ne!(buffer[(geometry.inner.x + 8, y)].bg, Color::Yellow);
}

#[test]
fn test_full_passage_hides_questions() {
    let mut view = sky_view();
    view.show_full_passage();
    let text = screen(&render(&view, Route::Question));
    assert!(text.contains("Theskyisblue."));
    assert!(!text.contains("Color?"));
    assert!(text.contains("[문제로돌아가기]"));
}

#[test]
fn test_solution_route_replaces_view() {
    let view = sky_view();
    let text = screen(&render(&view, Route::Solution));
    assert!(text.contains("답안이제출되었습니다"));
    assert!(!text.contains("Theskyisblue."));
}
