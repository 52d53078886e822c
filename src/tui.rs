use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::cli::Cli;
use crate::highlight::SelectionProvider;
use crate::model::NavigationPayload;
use crate::route::{Route, Router};
use crate::state::{ActivePanel, QuestionView};
use crate::timer::{TimerEvent, TICK_INTERVAL};
use crate::ui::dialog::{self, PopupAction, WordModalHit};
use crate::ui::layout::{compute_layout, contains};
use crate::ui::passage::{self, PassageGeometry};
use crate::ui::questions;
use crate::ui::toolbar::{self, ToolbarAction};
use crate::APP_TITLE;

/// The question view plus where the user currently is.
pub struct Session {
    pub view: QuestionView,
    pub router: Router,
}

impl Session {
    pub fn new(view: QuestionView) -> Self {
        Self {
            view,
            router: Router::new(Route::Question),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.view.should_quit
    }
}

pub fn run_tui(payload: Option<NavigationPayload>, cli: &Cli) -> Result<()> {
    enable_raw_mode().context("Cannot enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(APP_TITLE))
        .context("Cannot enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Cannot create terminal")?;

    let (timer_tx, timer_rx) = mpsc::channel::<TimerEvent>();
    let mut view = QuestionView::mount(payload, timer_tx, TICK_INTERVAL);
    if cli.hide_timer {
        view.stopwatch.set_visible(false);
    }
    let mut session = Session::new(view);

    let result = main_loop(&mut terminal, &mut session, &timer_rx);

    session.view.teardown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    timer_rx: &mpsc::Receiver<TimerEvent>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, &session.view, session.router.current()))
            .context("Draw error")?;

        if session.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(100)).context("Poll error")? {
            let size = terminal.size().context("Cannot read terminal size")?;
            let area = Rect::new(0, 0, size.width, size.height);
            match event::read().context("Read error")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, session, area);
                }
                Event::Mouse(mouse) => handle_mouse(mouse, session, area),
                _ => {}
            }
        }

        while let Ok(ev) = timer_rx.try_recv() {
            session.view.handle_timer(ev);
        }
    }

    Ok(())
}

pub fn handle_key(key: KeyEvent, session: &mut Session, area: Rect) {
    if session.router.current() == Route::Solution {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
            session.view.should_quit = true;
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        session.view.should_quit = true;
        return;
    }

    // Overlays take the keyboard first
    if session.view.popup_open() {
        handle_popup_key(key, session);
        return;
    }
    if session.view.word_modal_open {
        handle_word_modal_key(key, &mut session.view);
        return;
    }

    let view = &mut session.view;
    if ctrl {
        match key.code {
            KeyCode::Char('s') => view.submit(),
            KeyCode::Char('w') => view.open_word_modal(),
            KeyCode::Char('p') => view.toggle_full_passage(),
            KeyCode::Char('t') => view.toggle_timer_visibility(),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::Tab {
        view.cycle_panel();
        return;
    }

    let layout = compute_layout(area, view.full_passage);
    match view.active_panel {
        ActivePanel::Passage => {
            handle_passage_key(key, view);
            passage::follow_caret(view, layout.passage);
        }
        ActivePanel::Questions => {
            handle_questions_key(key, view);
            if let Some(panel) = layout.questions {
                questions::follow_current(view, panel);
            }
        }
    }
}

fn handle_popup_key(key: KeyEvent, session: &mut Session) {
    match key.code {
        KeyCode::Enter => session.view.confirm_submit(&mut session.router),
        KeyCode::Esc => session.view.cancel_submit(),
        _ => {}
    }
}

fn handle_word_modal_key(key: KeyEvent, view: &mut QuestionView) {
    match key.code {
        KeyCode::Esc => view.close_word_modal(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            view.close_word_modal();
        }
        KeyCode::Up | KeyCode::Char('k') => view.word_cursor_prev(),
        KeyCode::Down | KeyCode::Char('j') => view.word_cursor_next(),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            view.remove_word(view.word_cursor);
        }
        _ => {}
    }
}

fn handle_passage_key(key: KeyEvent, view: &mut QuestionView) {
    let sel = &mut view.selection;
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => sel.move_left(),
        KeyCode::Right | KeyCode::Char('l') => sel.move_right(),
        KeyCode::Char('w') => sel.word_forward(),
        KeyCode::Char('b') => sel.word_backward(),
        KeyCode::Home => sel.move_to_start(),
        KeyCode::End => sel.move_to_end(),
        KeyCode::Char('v') => sel.toggle_anchor(),
        KeyCode::Enter => {
            view.capture_selection();
        }
        KeyCode::Esc => sel.clear(),
        _ => {}
    }
}

fn handle_questions_key(key: KeyEvent, view: &mut QuestionView) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => view.navigate_prev(),
        KeyCode::Down | KeyCode::Char('j') => view.navigate_next(),
        KeyCode::Left | KeyCode::Char('h') => view.choice_cursor_prev(),
        KeyCode::Right | KeyCode::Char('l') => view.choice_cursor_next(),
        KeyCode::Char(' ') | KeyCode::Enter => view.select_cursor_choice(),
        KeyCode::Char(c @ '1'..='5') => {
            let slot = (c as u8 - b'1') as usize;
            view.select_slot(slot);
        }
        KeyCode::Home => view.navigate_to(0),
        KeyCode::End => {
            let last = view.questions.len().saturating_sub(1);
            view.navigate_to(last);
        }
        _ => {}
    }
}

pub fn handle_mouse(mouse: MouseEvent, session: &mut Session, area: Rect) {
    if session.router.current() != Route::Question {
        return;
    }
    let x = mouse.column;
    let y = mouse.row;

    if session.view.popup_open() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match dialog::hit_popup(area, x, y) {
                Some(PopupAction::Confirm) => session.view.confirm_submit(&mut session.router),
                Some(PopupAction::Cancel) => session.view.cancel_submit(),
                None => {}
            }
        }
        return;
    }

    let view = &mut session.view;

    if view.word_modal_open {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match dialog::hit_word_modal(view, area, x, y) {
                WordModalHit::Backdrop => view.close_word_modal(),
                WordModalHit::Delete(i) => view.remove_word(i),
                WordModalHit::Row(i) => view.word_cursor = i,
                WordModalHit::Content => {}
            }
        }
        return;
    }

    let layout = compute_layout(area, view.full_passage);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = toolbar::hit_toolbar(view, layout.toolbar, x, y) {
                match action {
                    ToolbarAction::WordList => view.open_word_modal(),
                    ToolbarAction::TogglePassage => view.toggle_full_passage(),
                    ToolbarAction::ToggleTimer => view.toggle_timer_visibility(),
                    ToolbarAction::Submit => view.submit(),
                }
            } else if contains(layout.passage, x, y) {
                view.active_panel = ActivePanel::Passage;
                let geometry = PassageGeometry::compute(view, layout.passage);
                if let Some(offset) = geometry.offset_at(view, x, y) {
                    view.selection.press(offset);
                }
            } else if let Some(panel) = layout.questions.filter(|p| contains(*p, x, y)) {
                view.active_panel = ActivePanel::Questions;
                if let Some((qi, slot)) = questions::hit_choice(view, panel, x, y) {
                    view.navigate_to(qi);
                    view.select_slot(slot);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if view.selection.is_dragging() {
                let geometry = PassageGeometry::compute(view, layout.passage);
                if let Some(offset) = geometry.offset_at(view, x, y) {
                    view.selection.drag(offset);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            // Pointer release over the passage is what marks a word.
            if view.selection.release() {
                if contains(layout.passage, x, y) {
                    view.capture_selection();
                } else {
                    view.selection.clear();
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if contains(layout.passage, x, y) {
                let geometry = PassageGeometry::compute(view, layout.passage);
                view.passage_scroll = geometry.scroll.saturating_sub(1);
            } else if let Some(panel) = layout.questions.filter(|p| contains(*p, x, y)) {
                view.question_scroll = questions::current_scroll(view, panel).saturating_sub(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if contains(layout.passage, x, y) {
                let geometry = PassageGeometry::compute(view, layout.passage);
                view.passage_scroll = geometry.scroll + 1;
            } else if let Some(panel) = layout.questions.filter(|p| contains(*p, x, y)) {
                view.question_scroll = questions::current_scroll(view, panel) + 1;
            }
        }
        _ => {}
    }
}
