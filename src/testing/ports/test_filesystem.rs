//! Test double for `ProjectFilesystem`.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory implementation of [`ProjectFilesystem`] for unit tests.
#[derive(Debug, Clone, Default)]
pub struct TestFilesystem {
    files: BTreeMap<PathBuf, String>,
    read_failure: Option<String>,
}

impl TestFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as an existing file with empty contents.
    pub fn touch(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into(), String::new());
        self
    }

    /// Add a file with the given contents.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.insert(path.into(), contents.to_string());
        self
    }

    /// Make every `read_text` call fail with `message`.
    pub fn failing_reads(mut self, message: &str) -> Self {
        self.read_failure = Some(message.to_string());
        self
    }
}

impl ProjectFilesystem for TestFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        if let Some(message) = &self.read_failure {
            return Err(AppError::config_error(message.clone()));
        }

        self.files.get(path).cloned().ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }
}
