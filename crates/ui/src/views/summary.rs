use dioxus::prelude::*;
use services::QuizIntent;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryPage(summary: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "page summary-page",
            h2 { class: "summary-title", "Test finished" }
            p { class: "message", "{summary.message}" }
            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::MainMenu),
                    "Main Menu"
                }
            }
        }
    }
}
