mod answer;
mod catalog;
mod operation;
mod question;
mod score;
mod settings;

pub use answer::{AnswerError, parse_answer};
pub use catalog::{CatalogEntry, OperationCatalog};
pub use operation::{
    ADDITION_RANGE, Addition, MULTIPLICATION_RANGE, Multiplication, Operation,
};
pub use question::Question;
pub use score::Score;
pub use settings::{DEFAULT_MAX_QUESTIONS, QuizSettings};
