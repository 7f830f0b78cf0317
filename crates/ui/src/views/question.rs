use dioxus::prelude::*;
use services::QuizIntent;

use crate::vm::QuestionVm;

#[component]
pub fn QuestionPage(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let mut answer = use_signal(String::new);

    rsx! {
        div { class: "page question-page",
            p { class: "progress", "{question.progress_label}" }
            p { class: "prompt", "{question.prompt}" }
            input {
                class: "answer-input",
                r#type: "text",
                value: "{answer}",
                oninput: move |evt| answer.set(evt.value()),
            }
            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let raw = answer();
                        answer.set(String::new());
                        on_intent.call(QuizIntent::SubmitAnswer(raw));
                    },
                    "Send"
                }
                if let Some(error) = question.error.as_ref() {
                    p { class: "error", "{error}" }
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
