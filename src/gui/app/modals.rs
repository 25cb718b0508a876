use crate::gui::{
    error_modal::ErrorModal,
    lessons_modal::LessonsModal,
};

#[derive(Default)]
pub struct Modals {
    pub error: ErrorModal,
    pub lessons: LessonsModal,
}
