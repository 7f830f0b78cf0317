use std::io::{self, BufRead, StdinLock, Stdout, Write};

use services::{Frontend, MainMenuScreen, QuizController, QuizIntent, QuizPhase};
use tracing::{debug, info, warn};
use trainer_core::model::{OperationCatalog, QuizSettings};

use crate::error::ConsoleError;
use crate::view::ConsoleView;

/// Typing this at any prompt ends the session.
pub const EXIT_SENTINEL: &str = "EXIT";

/// Why the console loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    ExitRequested,
    EndOfInput,
}

/// Blocking line-based front end over any reader/writer pair.
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl ConsoleFrontend<StdinLock<'static>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run quiz sets until the user types `EXIT` or input ends.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if reading or writing the terminal fails.
    pub fn run(
        &mut self,
        catalog: OperationCatalog,
        settings: QuizSettings,
    ) -> Result<ConsoleExit, ConsoleError> {
        let mut controller = QuizController::new(ConsoleView::new(), catalog, settings);
        controller.start();
        self.flush(&mut controller)?;

        loop {
            let Some(line) = self.read_line()? else {
                info!("console input closed");
                return Ok(ConsoleExit::EndOfInput);
            };
            if line.trim() == EXIT_SENTINEL {
                info!("exit requested");
                return Ok(ConsoleExit::ExitRequested);
            }

            match intent_for(&controller, &line) {
                Some(intent) => {
                    if let Err(err) = controller.dispatch(intent) {
                        warn!(%err, "console intent rejected");
                    }
                }
                None => {
                    debug!(input = %line, "unrecognised menu choice");
                    controller.return_to_main_menu();
                }
            }
            self.flush(&mut controller)?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn flush(&mut self, controller: &mut QuizController<ConsoleView>) -> Result<(), ConsoleError> {
        let rendered = controller.view_mut().take_output();
        self.output.write_all(rendered.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

/// Translate one line of input into an intent for the current phase.
///
/// `None` means a main-menu line that names no operation.
fn intent_for(controller: &QuizController<ConsoleView>, line: &str) -> Option<QuizIntent> {
    match controller.phase() {
        QuizPhase::MainMenu => {
            let position = line.trim().parse::<usize>().ok()?;
            MainMenuScreen::from_catalog(controller.catalog())
                .index_for_position(position)
                .map(QuizIntent::SelectOperation)
        }
        QuizPhase::QuestionPending => Some(QuizIntent::SubmitAnswer(line.to_string())),
        QuizPhase::ResultShown => Some(QuizIntent::NextQuestion),
        QuizPhase::Summary => Some(QuizIntent::MainMenu),
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    type Error = ConsoleError;

    fn launch(mut self, catalog: OperationCatalog, settings: QuizSettings) -> Result<(), ConsoleError> {
        self.run(catalog, settings).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, max_questions: u32) -> (ConsoleExit, String) {
        let mut output = Vec::new();
        let exit = ConsoleFrontend::new(script.as_bytes(), &mut output)
            .run(OperationCatalog::standard(), QuizSettings::new(max_questions))
            .unwrap();
        (exit, String::from_utf8(output).unwrap())
    }

    #[test]
    fn exit_at_menu_stops_without_rendering_more() {
        let (exit, output) = run_script("EXIT\nthis is never read\n", 10);
        assert_eq!(exit, ConsoleExit::ExitRequested);
        assert_eq!(output.matches("Welcome to Mental Math Trainer!").count(), 1);
        assert!(!output.contains("Question"));
    }

    #[test]
    fn invalid_menu_choice_rerenders_menu() {
        let (exit, output) = run_script("0\nabc\n3\n", 10);
        assert_eq!(exit, ConsoleExit::EndOfInput);
        assert_eq!(output.matches("Welcome to Mental Math Trainer!").count(), 4);
    }

    #[test]
    fn exit_at_question_prompt() {
        let (exit, output) = run_script("1\nEXIT\n", 10);
        assert_eq!(exit, ConsoleExit::ExitRequested);
        assert!(output.contains("Question 1 / 10"));
        assert!(!output.contains("You answered"));
    }

    #[test]
    fn malformed_answer_reprompts_same_question() {
        let (_, output) = run_script("2\nabc\n", 10);
        assert!(output.contains("You must enter an integer"));
        assert_eq!(output.matches("Question 1 / 10").count(), 2);
        assert!(!output.contains("Question 2 / 10"));
    }

    #[test]
    fn zero_budget_shows_empty_summary_and_returns_to_menu() {
        let (exit, output) = run_script("1\n\nEXIT\n", 0);
        assert_eq!(exit, ConsoleExit::ExitRequested);
        assert!(output.contains("Your score: 0 / 0"));
        assert_eq!(output.matches("Welcome to Mental Math Trainer!").count(), 2);
    }

    #[test]
    fn any_input_after_result_moves_on() {
        // Addition operands are positive, so -1 is always wrong.
        let (_, output) = run_script("1\n-1\nanything\n", 2);
        assert!(output.contains("You answered -1."));
        assert!(output.contains("Question 2 / 2"));
    }
}
