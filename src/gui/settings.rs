use serde::{
    Deserialize,
    Serialize,
};

use super::recent_files::RecentUploads;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub recent_uploads: RecentUploads,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, recent_uploads: RecentUploads::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: SettingsData = serde_json::from_str(r#"{"dark_mode": false}"#).unwrap();
        assert!(!settings.dark_mode);
        assert!(settings.recent_uploads.is_empty());
    }
}
