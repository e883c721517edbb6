use std::io;

use thiserror::Error;

/// Library-wide error type for dojo-test operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or host misuse issue.
    #[error("{0}")]
    Configuration(String),

    /// The Java VM required for in-process unit execution is absent.
    #[error("Error! Java VM could not be found.")]
    JavaNotFound,

    /// A required test bundle has not been built.
    #[error(
        "Could not find tests, have you built the tests using dojo build?\n\nFor @dojo/cli-build-app run: dojo build app --mode unit or dojo build app --mode functional"
    )]
    TestsNotFound,

    /// Verbose form of [`AppError::TestsNotFound`] naming the missing bundle.
    #[error(
        "Could not find tests at \"{path}\". Have you built the tests using dojo build?\n\nFor @dojo/cli-build-app run: dojo build app --mode unit or dojo build app --mode functional"
    )]
    TestsNotFoundAt { path: String },

    /// The command's own package manifest could not be read during ejection.
    #[error("Failed reading dependencies from package.json - {0}")]
    PackageJsonRead(String),

    /// The external test runner rejected the run.
    #[error("{0}")]
    Engine(String),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
