use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary RedNotebook data directory
pub fn create_test_data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a month file (or any other file) with content
pub fn create_test_file(data_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = data_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
