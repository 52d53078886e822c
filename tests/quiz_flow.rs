use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use passage_quiz::highlight::{Selection, SelectionProvider};
use passage_quiz::model::NavigationPayload;
use passage_quiz::payload::load_payload;
use passage_quiz::route::{Route, Router};
use passage_quiz::state::{ActivePanel, QuestionView, SubmitPhase};
use passage_quiz::timer::TimerEvent;

// Long enough that the background ticker never fires during a test.
const IDLE: Duration = Duration::from_secs(3600);

fn fixture(name: &str) -> NavigationPayload {
    load_payload(Some(Path::new(&format!("fixtures/{}", name))))
        .unwrap()
        .unwrap()
}

fn tick(view: &mut QuestionView, n: usize) {
    for _ in 0..n {
        let generation = view.stopwatch.generation();
        view.handle_timer(TimerEvent::Tick { generation });
    }
}

struct Dragged(Option<Selection>);

impl SelectionProvider for Dragged {
    fn selection(&self) -> Option<Selection> {
        self.0.clone()
    }

    fn clear(&mut self) {
        self.0 = None;
    }
}

#[test]
fn test_answer_submit_confirm() {
    let (tx, _rx) = mpsc::channel();
    let mut view = QuestionView::mount(Some(fixture("sky_passage.yaml")), tx, IDLE);
    let mut router = Router::default();

    assert!(view.stopwatch.is_running());
    tick(&mut view, 4);

    view.select_answer(0, "blue");
    assert_eq!(view.answers.as_slice(), &[Some("blue".to_string())]);

    view.submit();
    assert_eq!(view.phase, SubmitPhase::ConfirmPending);
    assert!(view.popup_open());
    assert!(!view.stopwatch.is_running());
    assert_eq!(view.elapsed_text, "0분 4초");

    view.confirm_submit(&mut router);
    assert_eq!(router.current(), Route::Solution);
    assert_eq!(router.history(), &[Route::Question]);
    assert!(!view.popup_open());
}

#[test]
fn test_cancel_resumes_from_same_count() {
    let (tx, _rx) = mpsc::channel();
    let mut view = QuestionView::mount(Some(fixture("sky_passage.yaml")), tx, IDLE);

    tick(&mut view, 65);
    view.submit();
    assert_eq!(view.elapsed_text, "1분 5초");

    // Ticks while the popup is up do not count
    view.handle_timer(TimerEvent::Tick { generation: view.stopwatch.generation() });
    assert_eq!(view.elapsed_seconds(), 65);

    view.cancel_submit();
    assert_eq!(view.phase, SubmitPhase::Answering);
    assert!(view.stopwatch.is_running());
    tick(&mut view, 1);
    assert_eq!(view.elapsed_seconds(), 66);
}

#[test]
fn test_full_passage_round_trip_keeps_state() {
    let (tx, _rx) = mpsc::channel();
    let mut view = QuestionView::mount(Some(fixture("reading_set.json")), tx, IDLE);

    view.select_answer(1, "The food");
    let mut provider = Dragged(Some(Selection {
        range: 0..4,
        text: "Bees".to_string(),
    }));
    assert!(view.capture_selection_from(&mut provider));
    tick(&mut view, 3);

    view.show_full_passage();
    assert!(view.full_passage);
    assert_eq!(view.active_panel, ActivePanel::Passage);
    tick(&mut view, 2);

    view.hide_full_passage();
    assert!(!view.full_passage);
    assert_eq!(view.answers.get(1), Some("The food"));
    assert_eq!(view.highlighted_words(), &["Bees".to_string()]);
    assert_eq!(view.elapsed_seconds(), 5);
}

#[test]
fn test_words_trimmed_and_unique() {
    let (tx, _rx) = mpsc::channel();
    let mut view = QuestionView::mount(Some(fixture("reading_set.json")), tx, IDLE);

    for (range, text) in [(4..11, " dance "), (5..10, "dance"), (0..3, "   ")] {
        let mut provider = Dragged(Some(Selection {
            range,
            text: text.to_string(),
        }));
        view.capture_selection_from(&mut provider);
    }
    assert_eq!(view.highlighted_words(), &["dance".to_string()]);

    // Removing the word leaves the inline mark in place
    view.remove_word(0);
    assert!(view.highlighted_words().is_empty());
    assert!(view.lookup.markers.is_marked(5));
}

#[test]
fn test_empty_payload_still_mounts() {
    let (tx, _rx) = mpsc::channel();
    let mut view = QuestionView::mount(None, tx, IDLE);
    let mut router = Router::default();

    assert_eq!(view.passage, "");
    assert!(view.questions.is_empty());
    assert!(view.stopwatch.is_running());

    view.submit();
    view.confirm_submit(&mut router);
    assert_eq!(router.current(), Route::Solution);
    assert!(view.answers.is_empty());
}

#[test]
fn test_real_ticker_delivers_ticks() {
    let (tx, rx) = mpsc::channel();
    let mut view = QuestionView::mount(None, tx, Duration::from_millis(5));

    let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    view.handle_timer(event);
    assert_eq!(view.elapsed_seconds(), 1);

    view.teardown();
    assert!(!view.stopwatch.is_running());
}
