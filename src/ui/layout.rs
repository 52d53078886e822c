use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub toolbar: Rect,
    pub passage: Rect,
    /// `None` while the passage fills the body.
    pub questions: Option<Rect>,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect, full_passage: bool) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Length(1), // toolbar
            Constraint::Min(5),    // body
            Constraint::Length(1), // keybar
        ])
        .split(area);

    let (passage, questions) = if full_passage {
        (vertical[2], None)
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[2]);
        (body[0], Some(body[1]))
    };

    AppLayout {
        titlebar: vertical[0],
        toolbar: vertical[1],
        passage,
        questions,
        keybar: vertical[3],
    }
}

/// Inside of a bordered block.
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

pub fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_passage_drops_question_panel() {
        let area = Rect::new(0, 0, 100, 30);
        let split = compute_layout(area, false);
        assert!(split.questions.is_some());
        assert_eq!(split.passage.y, 2);

        let full = compute_layout(area, true);
        assert!(full.questions.is_none());
        assert_eq!(full.passage.width, 100);
        assert_eq!(full.keybar.y, 29);
    }
}
