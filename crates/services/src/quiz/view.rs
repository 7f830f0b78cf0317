use trainer_core::model::AnswerError;

use super::screens::{MainMenuScreen, QuestionScreen, ResultScreen, SummaryScreen};

/// Rendering contract shared by every front end.
///
/// The controller calls exactly one of these after each transition. Each call
/// describes a whole screen; implementations replace whatever they showed
/// before.
pub trait QuizView {
    fn render_main_menu(&mut self, screen: &MainMenuScreen);

    /// `error` is set when the previous submission could not be parsed.
    fn render_question(&mut self, screen: &QuestionScreen, error: Option<&AnswerError>);

    fn render_result(&mut self, screen: &ResultScreen);

    fn render_summary(&mut self, screen: &SummaryScreen);
}
