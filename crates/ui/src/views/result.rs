use dioxus::prelude::*;
use services::QuizIntent;

use crate::vm::ResultVm;

#[component]
pub fn ResultPage(result: ResultVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let outcome_class = if result.is_correct {
        "message message--correct"
    } else {
        "message message--wrong"
    };

    rsx! {
        div { class: "page result-page",
            p { class: "progress", "{result.progress_label}" }
            p { class: "{outcome_class}", "{result.message}" }
            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::NextQuestion),
                    "Next"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::MainMenu),
                    "Main Menu"
                }
            }
        }
    }
}
