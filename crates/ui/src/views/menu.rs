use dioxus::prelude::*;
use services::QuizIntent;

use crate::vm::MainMenuVm;

#[component]
pub fn MainMenuPage(menu: MainMenuVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let buttons = menu.options.iter().map(|option| {
        let index = option.index;
        let label = option.label.clone();
        rsx! {
            button {
                key: "{index}",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::SelectOperation(index)),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "page menu-page",
            h1 { class: "view-title", "{menu.title}" }
            p { class: "view-subtitle", "{menu.subtitle}" }
            div { class: "actions", {buttons} }
        }
    }
}
