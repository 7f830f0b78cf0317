mod controller;
mod phase;
mod progress;
mod screens;
mod view;

// Public API of the quiz subsystem.
pub use controller::QuizController;
pub use phase::{QuizIntent, QuizPhase};
pub use progress::QuizProgress;
pub use screens::{MainMenuScreen, MenuEntry, QuestionScreen, ResultScreen, SummaryScreen};
pub use view::QuizView;
