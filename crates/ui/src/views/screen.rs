use dioxus::prelude::*;
use services::QuizIntent;

use crate::views::{MainMenuPage, QuestionPage, ResultPage, SummaryPage};
use crate::vm::ScreenVm;

/// Renders whichever page the controller last asked for.
#[component]
pub fn QuizScreen(screen: ScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    match screen {
        ScreenVm::Blank => rsx! {},
        ScreenVm::MainMenu(menu) => rsx! {
            MainMenuPage { menu, on_intent }
        },
        ScreenVm::Question(question) => rsx! {
            QuestionPage { question, on_intent }
        },
        ScreenVm::Result(result) => rsx! {
            ResultPage { result, on_intent }
        },
        ScreenVm::Summary(summary) => rsx! {
            SummaryPage { summary, on_intent }
        },
    }
}
