pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;
pub mod upload;
pub mod view;

pub use config::ClientConfig;
pub use errors::NotesError;
pub use http::ApiClient;
pub use models::{
    Category,
    Document,
    LessonSummary,
    Notion,
};
pub use upload::{
    UploadForm,
    UploadState,
};
pub use view::Section;
