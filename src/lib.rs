//! dojo-test: orchestrate a Dojo project's unit and functional test suites.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::AppContext;
use app::commands::{eject, test};
use services::{ConsoleReporter, InternCommand, JavaCommand, LocalFilesystem, RunnerAssets};

pub use domain::{AppError, EjectDescriptor, TestRequest};

/// Run the requested test suites against the project in the current directory.
///
/// Gates on Java availability when in-process unit execution is requested,
/// verifies the built test bundles exist, delegates to the intern runner, and
/// prints run-mode guidance whether the runner succeeds or fails.
pub fn test(request: &TestRequest) -> Result<(), AppError> {
    let ctx = AppContext::new(
        LocalFilesystem,
        JavaCommand,
        InternCommand::new(RunnerAssets::new()),
        ConsoleReporter,
    );

    test::execute(&ctx, request)
}

/// Describe the dependency and configuration footprint a project adopts when
/// taking ownership of the raw runner configuration.
///
/// Nothing is copied or installed; the returned descriptor only tells the
/// caller what to do.
pub fn eject() -> Result<EjectDescriptor, AppError> {
    eject::execute(&LocalFilesystem, &RunnerAssets::new())
}
