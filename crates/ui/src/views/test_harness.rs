use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuizIntent;
use trainer_core::model::{OperationCatalog, QuizSettings};

use crate::app::App;
use crate::context::{QuizContext, build_quiz_context};
use crate::views::QuizScreen;
use crate::vm::ScreenVm;

#[derive(Props, Clone)]
struct AppHarnessProps {
    context: QuizContext,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    rsx! { App {} }
}

#[component]
fn ScreenHarness(screen: ScreenVm) -> Element {
    rsx! {
        QuizScreen { screen, on_intent: move |_: QuizIntent| {} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_app_harness(max_questions: u32) -> ViewHarness {
    let context = build_quiz_context(
        OperationCatalog::standard(),
        QuizSettings::new(max_questions),
    );
    let dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { context });
    ViewHarness { dom }
}

pub fn setup_screen_harness(screen: ScreenVm) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen });
    ViewHarness { dom }
}
