use std::path::Path;

use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    multipart::{
        Form,
        Part,
    },
    Client,
    StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{
    debug,
    info,
    warn,
};

use super::{
    config::ClientConfig,
    errors::{
        NotesError,
        GENERIC_SERVER_MESSAGE,
    },
    models::{
        Document,
        Health,
        LessonNotions,
        LessonSummary,
    },
};

const UPLOAD_PATH: &str = "/api/upload";
const UPLOAD_FIELD: &str = "file";
const CLIENT_AGENT: &str = concat!("roumain-notes/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

pub fn http_client(config: &ClientConfig) -> Result<Client, NotesError> {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| NotesError::Config(format!("HTTP client build failed: {e}")))
}

/// Thin client for the lesson-analysis service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, NotesError> {
        Ok(Self { client: http_client(&config)?, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn upload(&self, path: &Path) -> Result<Document, NotesError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("lecon")
            .to_string();
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        info!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime.essence_str())?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.config.endpoint(UPLOAD_PATH))
            .header(USER_AGENT, CLIENT_AGENT)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Upload answered {} with {} bytes", status, body.len());

        interpret_upload(status, &body)
    }

    pub async fn health(&self) -> Result<bool, NotesError> {
        let health: Health = self.get_json("/health").await?;
        Ok(health.ok)
    }

    pub async fn list_lessons(&self) -> Result<Vec<LessonSummary>, NotesError> {
        self.get_json("/api/lessons").await
    }

    pub async fn lesson_notions(&self, lesson_id: i64) -> Result<LessonNotions, NotesError> {
        self.get_json(&format!("/api/lessons/{lesson_id}/notions")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NotesError> {
        let response = self
            .client
            .get(self.config.endpoint(path))
            .header(USER_AGENT, CLIENT_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        interpret_json(status, &body)
    }
}

/// Maps an upload response to a document or the message to show.
///
/// An `error` field fails the attempt whatever the status; a non-2xx status
/// without one falls back to [`GENERIC_SERVER_MESSAGE`].
pub fn interpret_upload(status: StatusCode, body: &[u8]) -> Result<Document, NotesError> {
    interpret_json(status, body)
}

fn interpret_json<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, NotesError> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            if !status.is_success() {
                warn!("HTTP error {} with unreadable body", status);
                return Err(NotesError::Server(GENERIC_SERVER_MESSAGE.to_string()));
            }
            return Err(NotesError::InvalidResponse(e.to_string()));
        }
    };

    if let Some(message) = server_error(&value) {
        warn!("Service reported an error ({}): {}", status, message);
        return Err(NotesError::Server(message));
    }

    if !status.is_success() {
        warn!("HTTP error {}", status);
        return Err(NotesError::Server(GENERIC_SERVER_MESSAGE.to_string()));
    }

    serde_json::from_value(value).map_err(|e| NotesError::InvalidResponse(e.to_string()))
}

fn server_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
