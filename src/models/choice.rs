use serde::Serialize;

/// Identifier of a choice, unique within its question.
pub type ChoiceId = u64;

/// A single answer option belonging to a question.
///
/// Choices are only created through [`Question::add_choice`](super::Question::add_choice),
/// which assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
