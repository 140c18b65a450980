//! Append-only solve log.
//!
//! One CSV file with columns `Username,Time,Scramble`. The header row is
//! written exactly once, when the file is empty or about to be created;
//! every save after that appends a single data row. Single writer, no
//! rewriting.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("username cannot be empty")]
    EmptyUsername,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

const HEADER: [&str; 3] = ["Username", "Time", "Scramble"];

/// Default location of the solve log: `solve_times.csv` in the user's
/// documents directory, or the working directory if none exists.
pub fn default_log_path() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("solve_times.csv")
}

/// Appends solve records to the log file.
pub struct Recorder {
    path: PathBuf,
}

impl Recorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `(username, time, scramble)` row, writing the header
    /// first if the log is new. An empty username fails validation before
    /// anything touches the filesystem.
    pub fn save(&self, username: &str, time: &str, scramble: &str) -> Result<(), RecordError> {
        if username.is_empty() {
            return Err(RecordError::EmptyUsername);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_new_log = file.metadata()?.len() == 0;

        let mut writer = csv::Writer::from_writer(file);
        if is_new_log {
            writer.write_record(HEADER)?;
        }
        writer.write_record([username, time, scramble])?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_empty_username_is_rejected_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.csv");
        let recorder = Recorder::new(&path);

        let err = recorder.save("", "12.34", "U D2 F'").unwrap_err();
        assert!(matches!(err, RecordError::EmptyUsername));
        assert!(!path.exists());
    }

    #[test]
    fn test_first_save_writes_header_then_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.csv");
        let recorder = Recorder::new(&path);

        recorder.save("alice", "12.34", "U D2 F'").unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["Username", "Time", "Scramble"]);
        assert_eq!(rows[1], ["alice", "12.34", "U D2 F'"]);
    }

    #[test]
    fn test_second_save_appends_without_repeating_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.csv");
        let recorder = Recorder::new(&path);

        recorder.save("alice", "12.34", "U D2 F'").unwrap();
        recorder.save("bob", "07.42", "R' L B2").unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Username", "Time", "Scramble"]);
        assert_eq!(rows[1], ["alice", "12.34", "U D2 F'"]);
        assert_eq!(rows[2], ["bob", "07.42", "R' L B2"]);
    }

    #[test]
    fn test_saving_with_no_scramble_records_an_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.csv");
        let recorder = Recorder::new(&path);

        recorder.save("alice", "03.17", "").unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[1], ["alice", "03.17", ""]);
    }

    #[test]
    fn test_missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("times.csv");
        let recorder = Recorder::new(&path);

        recorder.save("alice", "12.34", "U").unwrap();
        assert!(path.exists());
    }
}
