use crate::domain::{AppError, EngineConfig};

/// Port to the external test-execution engine.
pub trait TestEngine {
    /// Execute the suites described by `config`.
    ///
    /// The outcome is surfaced to the caller unchanged; this command only
    /// observes it to emit run-mode guidance.
    fn run(&self, config: &EngineConfig) -> Result<(), AppError>;
}
