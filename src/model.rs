use serde::{Deserialize, Serialize};

/// Number of choice slots every question carries.
pub const CHOICE_SLOTS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub choice1: String,
    #[serde(default)]
    pub choice2: String,
    #[serde(default)]
    pub choice3: String,
    #[serde(default)]
    pub choice4: String,
    #[serde(default)]
    pub choice5: String,
}

impl QuestionRecord {
    /// All five slots in order, empty ones included.
    pub fn choices(&self) -> [&str; CHOICE_SLOTS] {
        [
            &self.choice1,
            &self.choice2,
            &self.choice3,
            &self.choice4,
            &self.choice5,
        ]
    }

    pub fn choice(&self, slot: usize) -> Option<&str> {
        self.choices().get(slot).copied()
    }

    /// (slot, text) for the slots that hold something to show.
    pub fn offered_choices(&self) -> Vec<(usize, &str)> {
        self.choices()
            .into_iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .collect()
    }
}

/// What the caller hands the question view when routing to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPayload {
    #[serde(default)]
    pub passage: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl NavigationPayload {
    pub fn new(passage: impl Into<String>, questions: Vec<QuestionRecord>) -> Self {
        Self {
            passage: passage.into(),
            questions,
        }
    }

    /// An absent payload becomes an empty passage with no questions.
    pub fn or_default(payload: Option<NavigationPayload>) -> Self {
        payload.unwrap_or_default()
    }
}

/// Selected choice text per question position. Slots past the highest
/// answered index do not exist yet; unanswered slots in between are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    slots: Vec<Option<String>>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, question_index: usize, choice: impl Into<String>) {
        if question_index >= self.slots.len() {
            self.slots.resize(question_index + 1, None);
        }
        self.slots[question_index] = Some(choice.into());
    }

    pub fn get(&self, question_index: usize) -> Option<&str> {
        self.slots
            .get(question_index)
            .and_then(|s| s.as_deref())
    }

    pub fn is_selected(&self, question_index: usize, choice: &str) -> bool {
        self.get(question_index) == Some(choice)
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn as_slice(&self) -> &[Option<String>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
