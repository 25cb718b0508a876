use std::path::PathBuf;

use crate::core::models::{
    Document,
    LessonSummary,
};

pub type UploadResult = Result<Document, crate::core::NotesError>;

#[derive(Debug)]
pub enum TaskResult {
    Upload { file: PathBuf, result: UploadResult },
    Health(bool),
    Lessons(Result<Vec<LessonSummary>, String>),
    LessonNotions { summary: LessonSummary, result: Result<Document, String> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Upload { .. } => "upload",
            TaskResult::Health(_) => "health",
            TaskResult::Lessons(_) => "lessons",
            TaskResult::LessonNotions { .. } => "lesson_notions",
        }
    }
}
