use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use super::choice::{Choice, ChoiceId};
use crate::error::{QuestionError, Result};

/// Title length validation constants, in characters.
pub const TITLE_MIN_LENGTH: usize = 1;
pub const TITLE_MAX_LENGTH: usize = 200;

pub const DEFAULT_POINTS: u32 = 1;
pub const DEFAULT_MAX_SELECTIONS: usize = 1;

/// Unique identifier of a question, generated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz question and its ordered answer choices.
///
/// Choice ids start at 1 and are never reused within a question, even after
/// the choice holding them is removed. `Question` is not `Clone`: two copies
/// would share one id, so [`Question::duplicate`] issues a fresh one.
#[derive(Debug, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    #[serde(skip)]
    next_choice_id: ChoiceId,
}

impl Question {
    /// Create a question worth one point that accepts a single selection.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Self::with_limits(title, DEFAULT_POINTS, DEFAULT_MAX_SELECTIONS)
    }

    /// Create a question with an explicit scoring weight and selection limit.
    ///
    /// A `max_selections` of zero is allowed; such a question only grades an
    /// empty selection.
    ///
    /// # Errors
    ///
    /// Fails if the title is empty or longer than [`TITLE_MAX_LENGTH`]
    /// characters, or if `points` is zero.
    pub fn with_limits(
        title: impl Into<String>,
        points: u32,
        max_selections: usize,
    ) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;

        if points == 0 {
            return Err(QuestionError::InvalidPoints);
        }

        let question = Self {
            id: QuestionId::new(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
            next_choice_id: 1,
        };
        debug!(
            question_id = %question.id,
            points,
            max_selections,
            "created question"
        );

        Ok(question)
    }

    /// Copy this question and its choices under a new question id.
    ///
    /// Choice ids and the choice counter carry over unchanged.
    pub fn duplicate(&self) -> Self {
        let copy = Self {
            id: QuestionId::new(),
            title: self.title.clone(),
            points: self.points,
            max_selections: self.max_selections,
            choices: self.choices.clone(),
            next_choice_id: self.next_choice_id,
        };
        debug!(question_id = %copy.id, source_id = %self.id, "duplicated question");
        copy
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    /// Ids of all choices currently marked correct.
    pub fn correct_choice_ids(&self) -> HashSet<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Append a new choice and return it.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> &Choice {
        let id = self.next_choice_id;
        self.next_choice_id += 1;
        debug!(question_id = %self.id, choice_id = id, is_correct, "added choice");

        let index = self.choices.len();
        self.choices.push(Choice::new(id, text.into(), is_correct));
        &self.choices[index]
    }

    /// Remove the choice with the given id, keeping the order of the rest.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<Choice> {
        let Some(index) = self.choices.iter().position(|c| c.id() == id) else {
            warn!(question_id = %self.id, choice_id = id, "no such choice to remove");
            return Err(QuestionError::InvalidChoiceId(id));
        };

        let removed = self.choices.remove(index);
        debug!(question_id = %self.id, choice_id = id, "removed choice");
        Ok(removed)
    }

    /// Remove every choice. The id counter keeps counting from where it was.
    pub fn remove_all_choices(&mut self) {
        if !self.choices.is_empty() {
            debug!(question_id = %self.id, count = self.choices.len(), "removed all choices");
        }
        self.choices.clear();
    }

    /// Mark exactly the listed choices as correct and every other one as
    /// incorrect. Ids that match no choice are ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        let ids: HashSet<ChoiceId> = ids.iter().copied().collect();

        let unknown: Vec<ChoiceId> = ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_none())
            .collect();
        if !unknown.is_empty() {
            warn!(question_id = %self.id, ?unknown, "ignoring unknown choice ids");
        }

        for choice in &mut self.choices {
            choice.set_correct(ids.contains(&choice.id()));
        }
        debug!(question_id = %self.id, correct = ids.len() - unknown.len(), "set correct choices");
    }

    /// Grade a selection, returning the selected ids that are correct.
    ///
    /// Selected ids that match no choice, or match an incorrect one, are left
    /// out of the result. The question is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::SelectionLimit`] if more than
    /// `max_selections` ids are given.
    pub fn correct_selected_choices(&self, selected: &[ChoiceId]) -> Result<HashSet<ChoiceId>> {
        if selected.len() > self.max_selections {
            warn!(
                question_id = %self.id,
                selected = selected.len(),
                max = self.max_selections,
                "selection exceeds limit"
            );
            return Err(QuestionError::SelectionLimit {
                max: self.max_selections,
            });
        }

        let correct = self.correct_choice_ids();
        Ok(selected
            .iter()
            .copied()
            .filter(|id| correct.contains(id))
            .collect())
    }
}

/// Validates a title according to the length rules.
fn validate_title(title: &str) -> Result<()> {
    let length = title.chars().count();

    if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
        return Err(QuestionError::InvalidTitle { length });
    }

    Ok(())
}
