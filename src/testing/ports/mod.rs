mod recording_engine;
mod recording_reporter;
mod stub_java;
mod test_filesystem;

pub use self::recording_engine::RecordingEngine;
pub use self::recording_reporter::RecordingReporter;
pub use self::stub_java::StubJavaRuntime;
pub use self::test_filesystem::TestFilesystem;
