//! Desktop client for the Romanian course analysis service.
//!
//! A course document (`.docx` or `.pptx`) is uploaded to `POST {API_BASE}/api/upload`;
//! the returned notions are shown grouped by category in a fixed order.

pub mod core;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    ApiClient,
    ClientConfig,
    NotesError,
};
