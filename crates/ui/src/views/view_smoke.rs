use services::{QuizController, QuizIntent};
use trainer_core::model::{OperationCatalog, QuizSettings};

use super::test_harness::{setup_app_harness, setup_screen_harness};
use crate::view::DesktopView;
use crate::vm::{QuestionVm, ResultVm, ScreenVm, SummaryVm};

#[test]
fn app_smoke_renders_main_menu() {
    let mut harness = setup_app_harness(10);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Welcome to Mental Math Trainer!"),
        "missing title in {html}"
    );
    assert!(html.contains("Choose a test:"), "missing subtitle in {html}");
    assert!(html.contains("Addition"), "missing addition in {html}");
    assert!(html.contains("Multiplication"), "missing multiplication in {html}");
}

#[test]
fn question_page_smoke_renders_prompt_and_error() {
    let mut harness = setup_screen_harness(ScreenVm::Question(QuestionVm {
        progress_label: "Progress: 1 / 10".to_string(),
        prompt: "2 + 3 ?".to_string(),
        error: Some("You must enter an integer".to_string()),
    }));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Progress: 1 / 10"), "missing progress in {html}");
    assert!(html.contains("2 + 3 ?"), "missing prompt in {html}");
    assert!(html.contains("Send"), "missing send button in {html}");
    assert!(html.contains("Main Menu"), "missing menu button in {html}");
    assert!(
        html.contains("You must enter an integer"),
        "missing error in {html}"
    );
}

#[test]
fn question_page_smoke_hides_missing_error() {
    let mut harness = setup_screen_harness(ScreenVm::Question(QuestionVm {
        progress_label: "Progress: 1 / 10".to_string(),
        prompt: "7 X 8 ?".to_string(),
        error: None,
    }));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("7 X 8 ?"), "missing prompt in {html}");
    assert!(!html.contains("class=\"error\""), "unexpected error in {html}");
}

#[test]
fn result_page_smoke_renders_navigation() {
    let mut harness = setup_screen_harness(ScreenVm::Result(ResultVm {
        progress_label: "Progress: 1 / 1".to_string(),
        message: "You answered 4. Wrong answer! The correct answer was 5".to_string(),
        is_correct: false,
    }));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("The correct answer was 5"),
        "missing message in {html}"
    );
    assert!(html.contains("message--wrong"), "missing outcome class in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(html.contains("Main Menu"), "missing menu button in {html}");
}

#[test]
fn summary_page_smoke_renders_score_from_controller() {
    let mut controller = QuizController::new(
        DesktopView::new(),
        OperationCatalog::standard(),
        QuizSettings::new(0),
    );
    controller.start();
    controller.dispatch(QuizIntent::SelectOperation(0)).unwrap();
    let screen = controller.view().screen().clone();
    assert_eq!(
        screen,
        ScreenVm::Summary(SummaryVm {
            message: "Your score: 0 / 0".to_string()
        })
    );

    let mut harness = setup_screen_harness(screen);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your score: 0 / 0"), "missing score in {html}");
    assert!(html.contains("Main Menu"), "missing menu button in {html}");
}
