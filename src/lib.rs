//! # quiz-question
//!
//! A quiz question aggregate: a titled, weighted question owning an ordered
//! list of answer choices, with validation on construction and grading of a
//! user's selection.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_question::{Question, QuestionError};
//!
//! fn main() -> Result<(), QuestionError> {
//!     let mut question = Question::with_limits("Which are primes?", 2, 2)?;
//!     let two = question.add_choice("2", true).id();
//!     let four = question.add_choice("4", false).id();
//!
//!     let correct = question.correct_selected_choices(&[two, four])?;
//!     assert!(correct.contains(&two));
//!     assert!(!correct.contains(&four));
//!
//!     Ok(())
//! }
//! ```
//!
//! Question banks can also be loaded from JSON with
//! [`load_questions_from_json`].

mod data;
mod error;
mod models;

pub use data::{
    ChoiceDefinition, LoadError, QuestionDefinition, load_questions_from_json, parse_questions,
};
pub use error::{QuestionError, Result};
pub use models::{
    Choice, ChoiceId, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, Question, QuestionId,
    TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
