use services::{MainMenuScreen, QuestionScreen, QuizView, ResultScreen, SummaryScreen};
use trainer_core::model::AnswerError;

use crate::vm::{ScreenVm, map_main_menu, map_question, map_result, map_summary};

/// `QuizView` for the desktop window.
///
/// Each render swaps in a whole new `ScreenVm`; the root component rebuilds
/// the page from it.
#[derive(Debug, Default)]
pub struct DesktopView {
    screen: ScreenVm,
    renders: u64,
}

impl DesktopView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> &ScreenVm {
        &self.screen
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn replace(&mut self, screen: ScreenVm) {
        self.screen = screen;
        self.renders += 1;
    }
}

impl QuizView for DesktopView {
    fn render_main_menu(&mut self, screen: &MainMenuScreen) {
        self.replace(ScreenVm::MainMenu(map_main_menu(screen)));
    }

    fn render_question(&mut self, screen: &QuestionScreen, error: Option<&AnswerError>) {
        self.replace(ScreenVm::Question(map_question(screen, error)));
    }

    fn render_result(&mut self, screen: &ResultScreen) {
        self.replace(ScreenVm::Result(map_result(screen)));
    }

    fn render_summary(&mut self, screen: &SummaryScreen) {
        self.replace(ScreenVm::Summary(map_summary(screen)));
    }
}

#[cfg(test)]
mod tests {
    use services::{QuizController, QuizIntent};
    use trainer_core::model::{OperationCatalog, QuizSettings};

    use super::*;

    #[test]
    fn controller_drives_screen_swaps() {
        let mut controller = QuizController::new(
            DesktopView::new(),
            OperationCatalog::standard(),
            QuizSettings::new(1),
        );
        assert_eq!(controller.view().screen(), &ScreenVm::Blank);

        controller.start();
        let ScreenVm::MainMenu(menu) = controller.view().screen() else {
            panic!("expected main menu");
        };
        assert_eq!(menu.options.len(), 2);

        controller.dispatch(QuizIntent::SelectOperation(1)).unwrap();
        let expected = controller.pending_question().unwrap().expected();
        controller
            .dispatch(QuizIntent::SubmitAnswer("twelve".to_string()))
            .unwrap();
        let ScreenVm::Question(question) = controller.view().screen() else {
            panic!("expected question");
        };
        assert_eq!(question.progress_label, "Progress: 1 / 1");
        assert!(question.error.is_some());

        controller
            .dispatch(QuizIntent::SubmitAnswer(expected.to_string()))
            .unwrap();
        let ScreenVm::Result(result) = controller.view().screen() else {
            panic!("expected result");
        };
        assert!(result.is_correct);

        controller.dispatch(QuizIntent::NextQuestion).unwrap();
        assert_eq!(
            controller.view().screen(),
            &ScreenVm::Summary(crate::vm::SummaryVm {
                message: "Your score: 1 / 1".to_string()
            })
        );
        assert_eq!(controller.view().render_count(), 5);
    }
}
