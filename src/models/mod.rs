mod choice;
mod question;

pub use choice::{Choice, ChoiceId};
pub use question::{
    DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, Question, QuestionId, TITLE_MAX_LENGTH,
    TITLE_MIN_LENGTH,
};
