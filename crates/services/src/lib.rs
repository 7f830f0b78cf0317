#![forbid(unsafe_code)]

pub mod error;
pub mod frontend;
pub mod quiz;

pub use error::QuizError;
pub use frontend::Frontend;

pub use quiz::{
    MainMenuScreen, MenuEntry, QuestionScreen, QuizController, QuizIntent, QuizPhase,
    QuizProgress, QuizView, ResultScreen, SummaryScreen,
};
