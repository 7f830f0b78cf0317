use tracing::{debug, info};
use trainer_core::model::{
    CatalogEntry, OperationCatalog, Question, QuizSettings, Score, parse_answer,
};

use super::phase::{QuizIntent, QuizPhase};
use super::progress::QuizProgress;
use super::screens::{MainMenuScreen, QuestionScreen, ResultScreen, SummaryScreen};
use super::view::QuizView;
use crate::error::QuizError;

/// Per-run mutable state. Each controller owns a fresh one.
#[derive(Debug, Default)]
struct QuizSession {
    phase: QuizPhase,
    operation: Option<CatalogEntry>,
    question_index: u32,
    score: u32,
    pending: Option<Question>,
}

/// Sequences menu, question, result and summary screens for one view.
pub struct QuizController<V> {
    view: V,
    catalog: OperationCatalog,
    settings: QuizSettings,
    session: QuizSession,
}

impl<V: QuizView> QuizController<V> {
    #[must_use]
    pub fn new(view: V, catalog: OperationCatalog, settings: QuizSettings) -> Self {
        Self {
            view,
            catalog,
            settings,
            session: QuizSession::default(),
        }
    }

    /// Reset the session and render the main menu.
    pub fn start(&mut self) {
        self.session = QuizSession::default();
        debug!(
            operations = self.catalog.len(),
            max_questions = self.settings.max_questions(),
            "quiz controller started"
        );
        self.render_main_menu();
    }

    /// Record the operation at `index` and issue the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownOperation` if `index` is not in the catalog.
    /// Returns `QuizError::UnexpectedAction` outside the main menu.
    pub fn begin_question_sequence(&mut self, index: usize) -> Result<QuizPhase, QuizError> {
        if self.session.phase != QuizPhase::MainMenu {
            return Err(QuizError::UnexpectedAction {
                action: "begin a question sequence",
                phase: self.session.phase,
            });
        }
        let entry = self
            .catalog
            .get(index)
            .cloned()
            .ok_or(QuizError::UnknownOperation {
                index,
                available: self.catalog.len(),
            })?;

        info!(operation = entry.name(), "question sequence started");
        self.session.operation = Some(entry);
        self.issue_next_question()
    }

    /// Issue the next question, or show the summary once the budget is spent.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedAction` while an answer is still pending.
    /// Returns `QuizError::NoOperationSelected` if no sequence was begun.
    pub fn issue_next_question(&mut self) -> Result<QuizPhase, QuizError> {
        if self.session.phase == QuizPhase::QuestionPending {
            return Err(QuizError::UnexpectedAction {
                action: "skip a pending question",
                phase: self.session.phase,
            });
        }

        if self.progress().is_exhausted() {
            self.session.pending = None;
            self.session.phase = QuizPhase::Summary;
            let screen = SummaryScreen {
                score: self.score(),
            };
            info!(score = %screen.score, "question sequence finished");
            self.view.render_summary(&screen);
            return Ok(QuizPhase::Summary);
        }

        let entry = self
            .session
            .operation
            .as_ref()
            .ok_or(QuizError::NoOperationSelected)?;
        let question = Question::issue(entry.operation());

        self.session.question_index += 1;
        self.session.pending = Some(question);
        self.session.phase = QuizPhase::QuestionPending;
        debug!(
            index = self.session.question_index,
            question = %question,
            "question issued"
        );

        let screen = self.question_screen(question);
        self.view.render_question(&screen, None);
        Ok(QuizPhase::QuestionPending)
    }

    /// Check a raw answer against the pending question.
    ///
    /// Text that is not an integer re-renders the question with an error and
    /// leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoPendingQuestion` if no question awaits an answer.
    pub fn assess_answer(&mut self, raw: &str) -> Result<QuizPhase, QuizError> {
        let question = match (self.session.phase, self.session.pending) {
            (QuizPhase::QuestionPending, Some(question)) => question,
            _ => return Err(QuizError::NoPendingQuestion),
        };

        let submitted = match parse_answer(raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, raw, "answer rejected");
                let screen = self.question_screen(question);
                self.view.render_question(&screen, Some(&err));
                return Ok(QuizPhase::QuestionPending);
            }
        };

        let is_correct = question.is_correct(submitted);
        if is_correct {
            self.session.score += 1;
        }
        self.session.pending = None;
        self.session.phase = QuizPhase::ResultShown;
        debug!(submitted, expected = question.expected(), is_correct, "answer assessed");

        let screen = ResultScreen {
            progress: self.progress(),
            submitted,
            expected: question.expected(),
            is_correct,
        };
        self.view.render_result(&screen);
        Ok(QuizPhase::ResultShown)
    }

    /// Drop the current set and render the main menu.
    pub fn return_to_main_menu(&mut self) {
        self.session.question_index = 0;
        self.session.score = 0;
        self.session.pending = None;
        self.session.operation = None;
        debug!("returned to main menu");
        self.render_main_menu();
    }

    /// Route a front-end intent to the matching transition.
    ///
    /// # Errors
    ///
    /// Propagates the `QuizError` of the underlying transition.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizPhase, QuizError> {
        match intent {
            QuizIntent::SelectOperation(index) => self.begin_question_sequence(index),
            QuizIntent::SubmitAnswer(raw) => self.assess_answer(&raw),
            QuizIntent::NextQuestion => self.issue_next_question(),
            QuizIntent::MainMenu => {
                self.return_to_main_menu();
                Ok(QuizPhase::MainMenu)
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            asked: self.session.question_index,
            max_questions: self.settings.max_questions(),
            score: self.session.score,
        }
    }

    /// Score over questions issued so far.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(self.session.score, self.session.question_index)
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn pending_question(&self) -> Option<&Question> {
        self.session.pending.as_ref()
    }

    #[must_use]
    pub fn current_operation(&self) -> Option<&CatalogEntry> {
        self.session.operation.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn render_main_menu(&mut self) {
        self.session.phase = QuizPhase::MainMenu;
        let screen = MainMenuScreen::from_catalog(&self.catalog);
        self.view.render_main_menu(&screen);
    }

    fn question_screen(&self, question: Question) -> QuestionScreen {
        QuestionScreen {
            progress: self.progress(),
            question,
        }
    }
}
