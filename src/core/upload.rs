use std::path::{
    Path,
    PathBuf,
};

use tracing::{
    debug,
    warn,
};

use super::{
    errors::NotesError,
    models::Document,
};

pub const SUBMIT_LABEL: &str = "Importer et analyser";
pub const LOADING_LABEL: &str = "Analyse en cours…";

/// Lifecycle of one upload attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Success(Document),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct UploadForm {
    selected_file: Option<PathBuf>,
    state: UploadState,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        self.selected_file = Some(path.into());
    }

    pub fn clear_file(&mut self) {
        self.selected_file = None;
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UploadState::Loading)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            UploadState::Success(document) => Some(document),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            UploadState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Starts an attempt. `launch` runs only when a file is selected and no
    /// other upload is outstanding. Returns whether it ran.
    pub fn submit<F>(&mut self, launch: F) -> bool
    where
        F: FnOnce(PathBuf),
    {
        if self.is_loading() {
            debug!("Upload already in flight, ignoring submit");
            return false;
        }

        self.state = UploadState::Idle;

        let Some(path) = self.selected_file.clone() else {
            self.state = UploadState::Failure(NotesError::MissingFile.user_message());
            return false;
        };

        self.state = UploadState::Loading;
        launch(path);
        true
    }

    pub fn finish(&mut self, result: Result<Document, NotesError>) {
        if !self.is_loading() {
            warn!("Upload result arrived with no request outstanding");
        }

        self.state = match result {
            Ok(document) => UploadState::Success(document),
            Err(e) => UploadState::Failure(e.user_message()),
        };
    }

    /// Displays a document loaded from lesson history. Ignored mid-upload.
    pub fn show(&mut self, document: Document) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = UploadState::Success(document);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn sample_document() -> Document {
        serde_json::from_str(
            r#"{"title": "t", "notions": {"vocab": [{"title": "Hello", "is_revision": false}]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_submit_without_file_never_launches() {
        let mut form = UploadForm::new();
        let launched = Cell::new(0);

        let started = form.submit(|_| launched.set(launched.get() + 1));

        assert!(!started);
        assert_eq!(launched.get(), 0);
        assert_eq!(form.error(), Some("Choisis un fichier .docx ou .pptx"));
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_with_file_enters_loading() {
        let mut form = UploadForm::new();
        form.select_file("/tmp/cours.docx");

        let mut launched_with = None;
        assert!(form.submit(|path| launched_with = Some(path)));

        assert_eq!(launched_with, Some(PathBuf::from("/tmp/cours.docx")));
        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "Analyse en cours…");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_only_one_upload_in_flight() {
        let mut form = UploadForm::new();
        form.select_file("/tmp/cours.pptx");
        let launched = Cell::new(0);

        assert!(form.submit(|_| launched.set(launched.get() + 1)));
        assert!(!form.submit(|_| launched.set(launched.get() + 1)));

        assert_eq!(launched.get(), 1);
        assert!(form.is_loading());
    }

    #[test]
    fn test_finish_success_and_failure_reenable_submit() {
        let mut form = UploadForm::new();
        form.select_file("/tmp/cours.docx");

        form.submit(|_| {});
        form.finish(Ok(sample_document()));
        assert!(form.can_submit());
        assert_eq!(form.submit_label(), "Importer et analyser");
        assert_eq!(form.document().map(|d| d.sections().len()), Some(1));

        form.submit(|_| {});
        form.finish(Err(NotesError::Server("Bad file".to_string())));
        assert!(form.can_submit());
        assert_eq!(form.error(), Some("Bad file"));
        assert!(form.document().is_none());
    }

    #[test]
    fn test_new_attempt_resets_previous_outcome() {
        let mut form = UploadForm::new();
        form.select_file("/tmp/cours.docx");
        form.submit(|_| {});
        form.finish(Ok(sample_document()));

        form.clear_file();
        form.submit(|_| {});

        assert!(form.document().is_none());
        assert_eq!(form.error(), Some("Choisis un fichier .docx ou .pptx"));
    }

    #[test]
    fn test_show_is_ignored_while_loading() {
        let mut form = UploadForm::new();
        form.select_file("/tmp/cours.docx");
        form.submit(|_| {});

        assert!(!form.show(sample_document()));
        assert!(form.is_loading());

        form.finish(Err(NotesError::Server("Erreur serveur".to_string())));
        assert!(form.show(sample_document()));
        assert!(form.document().is_some());
    }

    #[test]
    fn test_selected_file_name() {
        let mut form = UploadForm::new();
        assert_eq!(form.selected_file_name(), None);
        form.select_file("/home/ana/cours/lecon-2.pptx");
        assert_eq!(form.selected_file_name().as_deref(), Some("lecon-2.pptx"));
    }
}
