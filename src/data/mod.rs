mod loader;

pub use loader::{
    ChoiceDefinition, LoadError, QuestionDefinition, load_questions_from_json, parse_questions,
};
