mod console_reporter;
mod intern_command;
mod java_command;
mod local_filesystem;
mod runner_assets;

pub use console_reporter::ConsoleReporter;
pub use intern_command::InternCommand;
pub use java_command::JavaCommand;
pub use local_filesystem::LocalFilesystem;
pub use runner_assets::RunnerAssets;
