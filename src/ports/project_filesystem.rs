//! Read-only filesystem access.
//!
//! This port covers the only file I/O the decision core needs: probing built
//! test bundles and reading the command's own package manifest. Keeping it
//! behind a trait lets tests substitute an in-memory double.

use std::path::Path;

use crate::domain::AppError;

/// Port for read-only filesystem operations.
pub trait ProjectFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;
}
