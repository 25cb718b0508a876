use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::NotesError;

const APP_NAME: &str = "roumain-notes";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), NotesError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    let path = get_data_file_path(filename);
    match load_json_from::<T>(&path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), NotesError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!("Data saved to: {}", path.display());
    Ok(())
}

/// Missing files load as `T::default()`.
pub fn load_json_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T, NotesError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!("Data loaded from: {}", path.display());
    Ok(data)
}
