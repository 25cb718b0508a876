use thiserror::Error;

pub const MISSING_FILE_MESSAGE: &str = "Choisis un fichier .docx ou .pptx";
pub const GENERIC_SERVER_MESSAGE: &str = "Erreur serveur";

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("{}", MISSING_FILE_MESSAGE)]
    MissingFile,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("{0}")]
    Server(String),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotesError {
    /// Text shown inline under the upload form.
    pub fn user_message(&self) -> String {
        match self {
            NotesError::MissingFile => MISSING_FILE_MESSAGE.to_string(),
            NotesError::Server(message) => message.clone(),
            NotesError::Reqwest(e) => e.to_string(),
            NotesError::Io(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for NotesError {
    fn from(error: std::io::Error) -> Self {
        NotesError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for NotesError {
    fn from(error: reqwest::Error) -> Self {
        NotesError::Reqwest(Box::new(error))
    }
}
