use services::{MainMenuScreen, QuestionScreen, QuizView, ResultScreen, SummaryScreen};
use trainer_core::model::AnswerError;

/// Renders screens as plain text into an internal buffer.
///
/// The driver drains the buffer to its writer after every transition, so
/// rendering itself never fails.
#[derive(Debug, Default)]
pub struct ConsoleView {
    buffer: String,
}

impl ConsoleView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything rendered since the last call.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.buffer.push_str(text.as_ref());
        self.buffer.push('\n');
    }
}

impl QuizView for ConsoleView {
    fn render_main_menu(&mut self, screen: &MainMenuScreen) {
        self.line(MainMenuScreen::TITLE);
        self.line(
            "Enter the number associated with the test you want to perform \
             or 'EXIT' to quit the program:",
        );
        for entry in &screen.entries {
            self.line(format!("{} - {}", entry.position, entry.name));
        }
    }

    fn render_question(&mut self, screen: &QuestionScreen, error: Option<&AnswerError>) {
        self.line(format!("Question {}", screen.progress.fraction()));
        self.line(screen.prompt());
        self.line("Enter your answer or 'EXIT' to quit the program:");
        if let Some(err) = error {
            self.line(err.to_string());
        }
    }

    fn render_result(&mut self, screen: &ResultScreen) {
        self.line(screen.message());
        self.line("Press enter to continue or 'EXIT' to quit the program:");
    }

    fn render_summary(&mut self, screen: &SummaryScreen) {
        self.line(screen.message());
        self.line("Press enter to return to the main menu or 'EXIT' to quit the program:");
    }
}
