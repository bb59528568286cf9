//! Building questions from JSON question definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::error::QuestionError;
use crate::models::{DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, Question};

/// Error loading a question bank.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Question bank must contain at least one question")]
    Empty,

    #[error("Question {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Definition of a question as written in a question bank file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionDefinition {
    pub title: String,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default = "default_max_selections")]
    pub max_selections: usize,
    #[serde(default)]
    pub choices: Vec<ChoiceDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceDefinition {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> usize {
    DEFAULT_MAX_SELECTIONS
}

impl QuestionDefinition {
    /// Build a validated question, adding the choices in definition order.
    pub fn build(&self) -> Result<Question, QuestionError> {
        let mut question =
            Question::with_limits(self.title.as_str(), self.points, self.max_selections)?;
        for choice in &self.choices {
            question.add_choice(choice.text.as_str(), choice.correct);
        }
        Ok(question)
    }
}

/// Parse a JSON array of question definitions into questions.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let definitions: Vec<QuestionDefinition> = serde_json::from_str(json)?;

    if definitions.is_empty() {
        return Err(LoadError::Empty);
    }

    definitions
        .iter()
        .enumerate()
        .map(|(index, definition)| {
            definition
                .build()
                .map_err(|source| LoadError::Invalid { index, source })
        })
        .collect()
}

/// Load questions from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file containing question definitions.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content)?;
    info!(path = %path.display(), count = questions.len(), "loaded questions");

    Ok(questions)
}
