//! Runner configuration shipped inside the binary.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::domain::paths::RUNNER_CONFIG_FILE;

static RUNNER_ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Access to the command's resource directory and embedded runner configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerAssets;

impl RunnerAssets {
    pub fn new() -> Self {
        RunnerAssets
    }

    /// On-disk resource directory the command's configuration ships in.
    pub fn resource_dir(&self) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/src/assets"))
    }

    /// Embedded text of the runner configuration.
    pub fn runner_config(&self) -> &'static str {
        RUNNER_ASSETS_DIR
            .get_file(RUNNER_CONFIG_FILE)
            .and_then(|file| file.contents_utf8())
            .unwrap_or_default()
    }

    /// Write the embedded runner configuration into `dir` so a spawned runner
    /// can load it, returning the written path.
    pub fn materialize(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let path = dir.join(RUNNER_CONFIG_FILE);
        fs::write(&path, self.runner_config())?;
        Ok(path)
    }
}
