use std::sync::mpsc;
use std::time::Duration;

use crate::highlight::{SelectionProvider, WordLookup};
use crate::model::*;
use crate::route::{Navigator, Route};
use crate::selection::PassageSelection;
use crate::timer::{format_elapsed, Stopwatch, TimerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Answering,
    ConfirmPending,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    Passage,
    Questions,
}

/// Everything the question view owns while it is on screen.
pub struct QuestionView {
    pub passage: String,
    pub questions: Vec<QuestionRecord>,
    pub answers: AnswerMap,
    pub lookup: WordLookup,
    pub selection: PassageSelection,
    pub stopwatch: Stopwatch,
    pub phase: SubmitPhase,
    pub elapsed_text: String,
    pub word_modal_open: bool,
    pub full_passage: bool,
    pub active_panel: ActivePanel,
    pub current_question: usize,
    pub choice_cursor: usize,
    pub word_cursor: usize,
    pub question_scroll: usize,
    pub passage_scroll: usize,
    pub should_quit: bool,
}

impl QuestionView {
    pub fn new(
        payload: Option<NavigationPayload>,
        timer_tx: mpsc::Sender<TimerEvent>,
        tick_interval: Duration,
    ) -> Self {
        let payload = NavigationPayload::or_default(payload);
        let selection = PassageSelection::new(&payload.passage);
        let mut view = Self {
            passage: payload.passage,
            questions: payload.questions,
            answers: AnswerMap::new(),
            lookup: WordLookup::new(),
            selection,
            stopwatch: Stopwatch::new(timer_tx, tick_interval),
            phase: SubmitPhase::Answering,
            elapsed_text: String::new(),
            word_modal_open: false,
            full_passage: false,
            active_panel: ActivePanel::Questions,
            current_question: 0,
            choice_cursor: 0,
            word_cursor: 0,
            question_scroll: 0,
            passage_scroll: 0,
            should_quit: false,
        };
        view.choice_cursor = view.first_offered_slot();
        view
    }

    /// Builds the view and starts the timer, as happens when it first shows.
    pub fn mount(
        payload: Option<NavigationPayload>,
        timer_tx: mpsc::Sender<TimerEvent>,
        tick_interval: Duration,
    ) -> Self {
        let mut view = Self::new(payload, timer_tx, tick_interval);
        log::info!(
            "question view mounted: {} chars of passage, {} questions",
            view.passage.chars().count(),
            view.questions.len()
        );
        view.start_timer();
        view
    }

    /// Cancels the pending tick. Called when the view goes away.
    pub fn teardown(&mut self) {
        self.stopwatch.stop();
        log::info!("question view torn down at {}s", self.stopwatch.seconds());
    }

    // Timer

    pub fn start_timer(&mut self) {
        self.stopwatch.start();
    }

    pub fn stop_timer(&mut self) {
        self.stopwatch.stop();
    }

    pub fn handle_timer(&mut self, event: TimerEvent) {
        self.stopwatch.handle(event);
    }

    pub fn toggle_timer_visibility(&mut self) {
        self.stopwatch.toggle_visible();
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.stopwatch.seconds()
    }

    // Answers

    pub fn select_answer(&mut self, question_index: usize, choice: &str) {
        self.answers.select(question_index, choice);
    }

    pub fn current(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_question)
    }

    /// Selects the given slot of the focused question if it holds a choice.
    pub fn select_slot(&mut self, slot: usize) {
        let Some(choice) = self
            .current()
            .and_then(|q| q.choice(slot))
            .filter(|c| !c.is_empty())
            .map(str::to_string)
        else {
            return;
        };
        self.choice_cursor = slot;
        self.select_answer(self.current_question, &choice);
    }

    pub fn select_cursor_choice(&mut self) {
        self.select_slot(self.choice_cursor);
    }

    pub fn navigate_to(&mut self, idx: usize) {
        if idx < self.questions.len() {
            self.current_question = idx;
            self.choice_cursor = self.first_offered_slot();
        }
    }

    pub fn navigate_prev(&mut self) {
        if self.current_question > 0 {
            self.navigate_to(self.current_question - 1);
        }
    }

    pub fn navigate_next(&mut self) {
        self.navigate_to(self.current_question + 1);
    }

    fn first_offered_slot(&self) -> usize {
        self.current()
            .and_then(|q| q.offered_choices().first().map(|(slot, _)| *slot))
            .unwrap_or(0)
    }

    pub fn choice_cursor_next(&mut self) {
        let Some(q) = self.current() else { return };
        let next = q
            .offered_choices()
            .into_iter()
            .map(|(slot, _)| slot)
            .find(|&slot| slot > self.choice_cursor);
        if let Some(slot) = next {
            self.choice_cursor = slot;
        }
    }

    pub fn choice_cursor_prev(&mut self) {
        let Some(q) = self.current() else { return };
        let prev = q
            .offered_choices()
            .into_iter()
            .map(|(slot, _)| slot)
            .rev()
            .find(|&slot| slot < self.choice_cursor);
        if let Some(slot) = prev {
            self.choice_cursor = slot;
        }
    }

    // Unknown words

    /// Pointer released over the passage: take the terminal selection.
    pub fn capture_selection(&mut self) -> bool {
        self.lookup.capture(&mut self.selection)
    }

    pub fn capture_selection_from(&mut self, provider: &mut impl SelectionProvider) -> bool {
        self.lookup.capture(provider)
    }

    pub fn remove_word(&mut self, index: usize) {
        self.lookup.remove_word(index);
        let len = self.lookup.words.len();
        if self.word_cursor >= len {
            self.word_cursor = len.saturating_sub(1);
        }
    }

    pub fn highlighted_words(&self) -> &[String] {
        self.lookup.words.as_slice()
    }

    pub fn open_word_modal(&mut self) {
        self.word_modal_open = true;
        self.word_cursor = 0;
    }

    pub fn close_word_modal(&mut self) {
        self.word_modal_open = false;
    }

    pub fn word_cursor_next(&mut self) {
        if self.word_cursor + 1 < self.lookup.words.len() {
            self.word_cursor += 1;
        }
    }

    pub fn word_cursor_prev(&mut self) {
        self.word_cursor = self.word_cursor.saturating_sub(1);
    }

    // Passage view

    pub fn show_full_passage(&mut self) {
        self.full_passage = true;
        self.active_panel = ActivePanel::Passage;
    }

    pub fn hide_full_passage(&mut self) {
        self.full_passage = false;
    }

    pub fn toggle_full_passage(&mut self) {
        if self.full_passage {
            self.hide_full_passage();
        } else {
            self.show_full_passage();
        }
    }

    pub fn cycle_panel(&mut self) {
        if self.full_passage {
            return;
        }
        self.active_panel = match self.active_panel {
            ActivePanel::Passage => ActivePanel::Questions,
            ActivePanel::Questions => ActivePanel::Passage,
        };
    }

    // Submission

    pub fn popup_open(&self) -> bool {
        self.phase == SubmitPhase::ConfirmPending
    }

    pub fn submit(&mut self) {
        if self.phase != SubmitPhase::Answering {
            return;
        }
        self.stop_timer();
        self.elapsed_text = format_elapsed(self.stopwatch.seconds());
        self.phase = SubmitPhase::ConfirmPending;
        log::info!(
            "submit requested after {} with {}/{} answered",
            self.elapsed_text,
            self.answers.answered_count(),
            self.questions.len()
        );
    }

    pub fn cancel_submit(&mut self) {
        if self.phase != SubmitPhase::ConfirmPending {
            return;
        }
        self.phase = SubmitPhase::Answering;
        self.start_timer();
        log::info!("submit cancelled, timer resumed at {}s", self.stopwatch.seconds());
    }

    pub fn confirm_submit(&mut self, navigator: &mut impl Navigator) {
        if self.phase != SubmitPhase::ConfirmPending {
            return;
        }
        self.phase = SubmitPhase::Submitted;
        log::info!("submit confirmed");
        navigator.navigate(Route::Solution);
    }
}

impl Drop for QuestionView {
    fn drop(&mut self) {
        self.stopwatch.stop();
    }
}
