pub mod app;
pub mod error_modal;
pub mod lessons_modal;
pub mod modal;
pub mod notions_view;
pub mod recent_files;
pub mod settings;
pub mod theme;
pub mod top_bar;
pub mod upload_panel;

pub use app::NotesApp;
