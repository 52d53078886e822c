use crate::highlight::{Selection, SelectionProvider};

/// Caret and selection over the passage text, driven by keys or the mouse.
///
/// The selection spans from the anchor to the caret, both ends inclusive.
#[derive(Debug, Clone)]
pub struct PassageSelection {
    chars: Vec<char>,
    caret: usize,
    anchor: Option<usize>,
    dragging: bool,
    dragged: bool,
}

impl PassageSelection {
    pub fn new(passage: &str) -> Self {
        Self {
            chars: passage.chars().collect(),
            caret: 0,
            anchor: None,
            dragging: false,
            dragged: false,
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn is_selected(&self, offset: usize) -> bool {
        self.range().is_some_and(|(lo, hi)| (lo..=hi).contains(&offset))
    }

    fn range(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if self.chars.is_empty() {
            return None;
        }
        Some((anchor.min(self.caret), anchor.max(self.caret)))
    }

    fn last(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.last());
    }

    pub fn move_to_start(&mut self) {
        self.caret = 0;
    }

    pub fn move_to_end(&mut self) {
        self.caret = self.last();
    }

    pub fn word_forward(&mut self) {
        let mut i = self.caret;
        while i < self.chars.len() && !self.chars[i].is_whitespace() {
            i += 1;
        }
        while i < self.chars.len() && self.chars[i].is_whitespace() {
            i += 1;
        }
        self.caret = i.min(self.last());
    }

    pub fn word_backward(&mut self) {
        let mut i = self.caret;
        while i > 0 && self.chars[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.chars[i - 1].is_whitespace() {
            i -= 1;
        }
        self.caret = i;
    }

    /// Starts a selection at the caret, or drops the one in progress.
    pub fn toggle_anchor(&mut self) {
        self.anchor = match self.anchor {
            Some(_) => None,
            None if self.chars.is_empty() => None,
            None => Some(self.caret),
        };
    }

    pub fn press(&mut self, offset: usize) {
        let offset = offset.min(self.last());
        self.caret = offset;
        self.anchor = Some(offset);
        self.dragging = true;
        self.dragged = false;
    }

    pub fn drag(&mut self, offset: usize) {
        if !self.dragging {
            return;
        }
        let offset = offset.min(self.last());
        if offset != self.caret {
            self.dragged = true;
        }
        self.caret = offset;
    }

    /// Ends a mouse gesture. A click without movement selects nothing.
    /// Returns whether a press was in progress.
    pub fn release(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        if !self.dragged {
            self.anchor = None;
        }
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

impl SelectionProvider for PassageSelection {
    fn selection(&self) -> Option<Selection> {
        let (lo, hi) = self.range()?;
        let end = (hi + 1).min(self.chars.len());
        Some(Selection {
            range: lo..end,
            text: self.chars[lo..end].iter().collect(),
        })
    }

    fn clear(&mut self) {
        self.anchor = None;
        self.dragging = false;
        self.dragged = false;
    }
}
