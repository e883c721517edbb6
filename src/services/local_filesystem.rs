use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// `std::fs`-backed implementation of [`ProjectFilesystem`].
///
/// Relative paths resolve against the process working directory, which is the
/// project directory for a CLI invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl ProjectFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }
}
