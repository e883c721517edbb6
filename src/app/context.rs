use crate::ports::{JavaRuntime, ProjectFilesystem, Reporter, TestEngine};

/// Application context holding the capabilities command execution needs.
pub struct AppContext<F, J, E, R>
where
    F: ProjectFilesystem,
    J: JavaRuntime,
    E: TestEngine,
    R: Reporter,
{
    filesystem: F,
    java: J,
    engine: E,
    reporter: R,
}

impl<F, J, E, R> AppContext<F, J, E, R>
where
    F: ProjectFilesystem,
    J: JavaRuntime,
    E: TestEngine,
    R: Reporter,
{
    /// Create a new application context.
    pub fn new(filesystem: F, java: J, engine: E, reporter: R) -> Self {
        Self { filesystem, java, engine, reporter }
    }

    /// Get a reference to the filesystem capability.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the Java runtime probe.
    pub fn java(&self) -> &J {
        &self.java
    }

    /// Get a reference to the test engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get a reference to the guidance reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
