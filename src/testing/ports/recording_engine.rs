//! Test double for `TestEngine`.

use std::sync::Mutex;

use crate::domain::{AppError, EngineConfig};
use crate::ports::TestEngine;

/// Recording implementation of [`TestEngine`] for unit tests.
///
/// Every invocation is captured so tests can assert on the merged
/// configuration the pipeline hands over.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    runs: Mutex<Vec<EngineConfig>>,
    failure: Option<String>,
}

impl RecordingEngine {
    /// An engine whose runs complete successfully.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// An engine whose runs reject with `message`.
    pub fn failing(message: &str) -> Self {
        Self { runs: Mutex::new(Vec::new()), failure: Some(message.to_string()) }
    }

    /// Configurations the engine has been invoked with, in order.
    pub fn runs(&self) -> Vec<EngineConfig> {
        self.runs.lock().unwrap().clone()
    }
}

impl TestEngine for RecordingEngine {
    fn run(&self, config: &EngineConfig) -> Result<(), AppError> {
        self.runs.lock().unwrap().push(config.clone());

        match &self.failure {
            Some(message) => Err(AppError::Engine(message.clone())),
            None => Ok(()),
        }
    }
}
