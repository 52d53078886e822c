use std::ops::Range;

/// A selected stretch of the passage, as char offsets plus the text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub range: Range<usize>,
    pub text: String,
}

/// Source of the user's current text selection.
pub trait SelectionProvider {
    fn selection(&self) -> Option<Selection>;
    fn clear(&mut self);
}

/// Unknown words the user marked, unique, in the order they were marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedWords {
    words: Vec<String>,
}

impl HighlightedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed text unless it is empty or already listed.
    /// Returns whether the list changed.
    pub fn insert(&mut self, text: &str) -> bool {
        let word = text.trim();
        if word.is_empty() || self.contains(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.words.len() {
            Some(self.words.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Inline marks painted over the passage. Independent of the word list:
/// removing a word does not unpaint its mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageMarkers {
    ranges: Vec<Range<usize>>,
}

impl PassageMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let at = self
            .ranges
            .partition_point(|r| r.start <= range.start);
        self.ranges.insert(at, range);
    }

    pub fn is_marked(&self, offset: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(&offset))
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// The word list together with the marks it left on the passage.
#[derive(Debug, Clone, Default)]
pub struct WordLookup {
    pub words: HighlightedWords,
    pub markers: PassageMarkers,
}

impl WordLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the provider's current selection as an unknown word.
    ///
    /// Blank or already-listed text changes nothing and leaves the
    /// selection in place. Otherwise the word is appended, its range is
    /// marked and the selection is cleared.
    pub fn capture(&mut self, provider: &mut impl SelectionProvider) -> bool {
        let Some(selection) = provider.selection() else {
            return false;
        };
        if !self.words.insert(&selection.text) {
            return false;
        }
        log::info!("marked unknown word {:?}", selection.text.trim());
        self.markers.mark(selection.range);
        provider.clear();
        true
    }

    pub fn remove_word(&mut self, index: usize) -> Option<String> {
        let removed = self.words.remove(index);
        if let Some(word) = &removed {
            log::info!("removed unknown word {:?}", word);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSelection {
        current: Option<Selection>,
        cleared: usize,
    }

    impl FixedSelection {
        fn of(range: Range<usize>, text: &str) -> Self {
            Self {
                current: Some(Selection {
                    range,
                    text: text.to_string(),
                }),
                cleared: 0,
            }
        }
    }

    impl SelectionProvider for FixedSelection {
        fn selection(&self) -> Option<Selection> {
            self.current.clone()
        }

        fn clear(&mut self) {
            self.current = None;
            self.cleared += 1;
        }
    }

    #[test]
    fn capture_appends_marks_and_clears() {
        let mut lookup = WordLookup::new();
        let mut provider = FixedSelection::of(4..11, " apple ");
        assert!(lookup.capture(&mut provider));
        assert_eq!(lookup.words.as_slice(), &["apple".to_string()]);
        assert_eq!(lookup.markers.ranges(), &[4..11]);
        assert_eq!(provider.cleared, 1);
        assert!(provider.selection().is_none());
    }

    #[test]
    fn capture_of_whitespace_is_a_no_op() {
        let mut lookup = WordLookup::new();
        let mut provider = FixedSelection::of(0..3, "  \n");
        assert!(!lookup.capture(&mut provider));
        assert!(lookup.words.is_empty());
        assert!(lookup.markers.is_empty());
        assert_eq!(provider.cleared, 0);
    }

    #[test]
    fn capture_twice_keeps_one_entry() {
        let mut lookup = WordLookup::new();
        lookup.capture(&mut FixedSelection::of(0..5, "apple"));
        let mut again = FixedSelection::of(20..25, "apple");
        assert!(!lookup.capture(&mut again));
        assert_eq!(lookup.words.as_slice(), &["apple".to_string()]);
        assert_eq!(lookup.markers.len(), 1);
        assert_eq!(again.cleared, 0);
    }

    #[test]
    fn capture_without_selection_is_a_no_op() {
        let mut lookup = WordLookup::new();
        let mut provider = FixedSelection {
            current: None,
            cleared: 0,
        };
        assert!(!lookup.capture(&mut provider));
    }

    #[test]
    fn removing_a_word_keeps_its_mark() {
        let mut lookup = WordLookup::new();
        lookup.capture(&mut FixedSelection::of(0..5, "apple"));
        lookup.capture(&mut FixedSelection::of(6..12, "banana"));
        assert_eq!(lookup.remove_word(0).as_deref(), Some("apple"));
        assert_eq!(lookup.words.as_slice(), &["banana".to_string()]);
        assert!(lookup.markers.is_marked(2));
    }

    #[test]
    fn insert_trims_and_rejects_blank() {
        let mut words = HighlightedWords::new();
        assert!(!words.insert("   \n\t"));
        assert!(!words.insert(""));
        assert!(words.insert("  apple "));
        assert_eq!(words.as_slice(), &["apple".to_string()]);
    }

    #[test]
    fn insert_keeps_first_occurrence_only() {
        let mut words = HighlightedWords::new();
        assert!(words.insert("apple"));
        assert!(!words.insert("apple"));
        assert!(!words.insert(" apple"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn remove_by_position() {
        let mut words = HighlightedWords::new();
        words.insert("apple");
        words.insert("banana");
        assert_eq!(words.remove(0).as_deref(), Some("apple"));
        assert_eq!(words.as_slice(), &["banana".to_string()]);
        assert_eq!(words.remove(5), None);
    }

    #[test]
    fn markers_stay_sorted() {
        let mut markers = PassageMarkers::new();
        markers.mark(10..14);
        markers.mark(2..5);
        markers.mark(3..3);
        assert_eq!(markers.ranges(), &[2..5, 10..14]);
        assert!(markers.is_marked(4));
        assert!(!markers.is_marked(5));
        assert!(markers.is_marked(13));
    }
}
