mod screen_vm;

pub use screen_vm::{
    MainMenuVm, MenuOptionVm, QuestionVm, ResultVm, ScreenVm, SummaryVm, map_main_menu,
    map_question, map_result, map_summary,
};
