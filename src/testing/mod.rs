pub mod ports;

#[allow(unused_imports)]
pub use ports::RecordingEngine;
#[allow(unused_imports)]
pub use ports::RecordingReporter;
#[allow(unused_imports)]
pub use ports::StubJavaRuntime;
#[allow(unused_imports)]
pub use ports::TestFilesystem;
