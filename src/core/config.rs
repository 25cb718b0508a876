//! Client configuration, read once at start-up.

use std::{
    env,
    time::Duration,
};

use tracing::info;
use url::Url;

use super::errors::NotesError;

pub const API_BASE_VAR: &str = "ROUMAIN_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "ROUMAIN_REQUEST_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base: Url,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Result<Self, NotesError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, NotesError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(API_BASE_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| NotesError::Config(format!("{API_BASE_VAR} is not set")))?;

        let request_timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    NotesError::Config(format!("{TIMEOUT_VAR} must be a number of seconds: {raw}"))
                })?;
                Duration::from_secs(secs.max(1))
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { api_base: parse_api_base(&api_base)?, request_timeout })
    }

    /// `{api_base}{path}`, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn parse_api_base(raw: &str) -> Result<Url, NotesError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| NotesError::Config(format!("Invalid {API_BASE_VAR} '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NotesError::Config(format!("Unsupported scheme '{other}' in {API_BASE_VAR}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[(API_BASE_VAR, "http://localhost:8000")])).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.endpoint("/api/upload"), "http://localhost:8000/api/upload");
    }

    #[test]
    fn test_trailing_slash_and_prefix_path() {
        let config = ClientConfig::new("https://notes.example.org/backend/").unwrap();
        assert_eq!(config.endpoint("/api/lessons"), "https://notes.example.org/backend/api/lessons");
        assert_eq!(config.endpoint("health"), "https://notes.example.org/backend/health");
    }

    #[test]
    fn test_missing_or_invalid_base() {
        assert!(matches!(ClientConfig::from_lookup(lookup(&[])), Err(NotesError::Config(_))));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(API_BASE_VAR, "   ")])),
            Err(NotesError::Config(_))
        ));
        assert!(matches!(ClientConfig::new("not a url"), Err(NotesError::Config(_))));
        assert!(matches!(ClientConfig::new("ftp://host/"), Err(NotesError::Config(_))));
    }

    #[test]
    fn test_timeout_override() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_BASE_VAR, "http://localhost:8000"),
            (TIMEOUT_VAR, " 15 "),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(15));

        let bad = ClientConfig::from_lookup(lookup(&[
            (API_BASE_VAR, "http://localhost:8000"),
            (TIMEOUT_VAR, "soon"),
        ]));
        assert!(matches!(bad, Err(NotesError::Config(_))));
    }
}
