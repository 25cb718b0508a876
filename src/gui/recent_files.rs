use std::{
    collections::VecDeque,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

const DEFAULT_MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentUpload {
    pub file_path: PathBuf,
    pub title: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub file_size: Option<u64>,
    pub notion_count: usize,
}

impl RecentUpload {
    pub fn new(file_path: PathBuf, title: String, notion_count: usize) -> Self {
        let file_size = std::fs::metadata(&file_path).map(|metadata| metadata.len()).ok();

        Self { file_path, title, uploaded_at: chrono::Utc::now(), file_size, notion_count }
    }

    pub fn file_exists(&self) -> bool {
        self.file_path.exists()
    }

    pub fn format_uploaded_at(&self) -> String {
        let local_time = self.uploaded_at.with_timezone(&chrono::Local);
        local_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn format_file_size(&self) -> String {
        match self.file_size {
            Some(size) if size < 1024 => format!("{} B", size),
            Some(size) if size < 1024 * 1024 => format!("{:.1} KB", size as f64 / 1024.0),
            Some(size) => format!("{:.1} MB", size as f64 / (1024.0 * 1024.0)),
            None => "?".to_string(),
        }
    }

    pub fn format_notion_count(&self) -> String {
        match self.notion_count {
            1 => "1 notion".to_string(),
            n => format!("{} notions", n),
        }
    }

    pub fn get_filename(&self) -> String {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("?")
            .to_string()
    }
}

/// Most recent first, one entry per path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentUploads {
    files: VecDeque<RecentUpload>,
    max_entries: usize,
}

impl Default for RecentUploads {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl RecentUploads {
    pub fn new(max_entries: usize) -> Self {
        Self { files: VecDeque::new(), max_entries }
    }

    pub fn record(&mut self, entry: RecentUpload) {
        self.files.retain(|existing| existing.file_path != entry.file_path);
        self.files.push_front(entry);

        while self.files.len() > self.max_entries {
            self.files.pop_back();
        }
    }

    pub fn get_valid_files(&self) -> Vec<&RecentUpload> {
        self.files.iter().filter(|entry| entry.file_exists()).collect()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, notions: usize) -> RecentUpload {
        RecentUpload::new(PathBuf::from(path), path.to_string(), notions)
    }

    #[test]
    fn test_record_dedupes_and_caps() {
        let mut recent = RecentUploads::new(3);
        recent.record(entry("/a.docx", 1));
        recent.record(entry("/b.docx", 2));
        recent.record(entry("/a.docx", 5));
        recent.record(entry("/c.pptx", 3));
        recent.record(entry("/d.pptx", 4));

        assert_eq!(recent.len(), 3);
        let paths: Vec<PathBuf> = recent.files.iter().map(|e| e.file_path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/d.pptx"), PathBuf::from("/c.pptx"), PathBuf::from("/a.docx")]
        );
        assert_eq!(recent.files[2].notion_count, 5);

        recent.clear();
        assert!(recent.is_empty());
    }

    #[test]
    fn test_valid_files_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("lecon.docx");
        std::fs::write(&existing, b"PK").unwrap();

        let mut recent = RecentUploads::default();
        recent.record(RecentUpload::new(dir.path().join("gone.pptx"), "gone".to_string(), 0));
        recent.record(RecentUpload::new(existing.clone(), "lecon".to_string(), 3));

        let valid = recent.get_valid_files();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].file_path, existing);
        assert_eq!(valid[0].file_size, Some(2));
        assert_eq!(valid[0].format_file_size(), "2 B");
        assert_eq!(valid[0].get_filename(), "lecon.docx");
    }

    #[test]
    fn test_formatting() {
        let mut upload = entry("/x.docx", 1);
        assert_eq!(upload.format_notion_count(), "1 notion");
        upload.notion_count = 12;
        assert_eq!(upload.format_notion_count(), "12 notions");

        upload.file_size = Some(2048);
        assert_eq!(upload.format_file_size(), "2.0 KB");
        upload.file_size = Some(3 * 1024 * 1024);
        assert_eq!(upload.format_file_size(), "3.0 MB");
        upload.file_size = None;
        assert_eq!(upload.format_file_size(), "?");
    }
}
