//! Error types for question construction and mutation.

use thiserror::Error;

use crate::models::ChoiceId;

/// Errors raised by the question aggregate.
///
/// Every operation validates before it mutates, so a returned error means
/// the question is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Title must be between 1 and 200 characters, got {length}")]
    InvalidTitle { length: usize },

    #[error("Points must be a positive integer")]
    InvalidPoints,

    #[error("Invalid choice id: {0}")]
    InvalidChoiceId(ChoiceId),

    #[error("Cannot select more than {max} choices")]
    SelectionLimit { max: usize },
}

impl QuestionError {
    /// Check if this error was raised while validating a new question.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuestionError::InvalidTitle { .. } | QuestionError::InvalidPoints
        )
    }
}

pub type Result<T> = std::result::Result<T, QuestionError>;
