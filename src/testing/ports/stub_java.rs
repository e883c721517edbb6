//! Test double for `JavaRuntime`.

use crate::ports::JavaRuntime;

/// Canned-answer implementation of [`JavaRuntime`] for unit tests.
#[derive(Debug, Clone, Copy)]
pub struct StubJavaRuntime {
    available: bool,
}

impl StubJavaRuntime {
    /// A machine with a working Java VM.
    pub fn available() -> Self {
        Self { available: true }
    }

    /// A machine without a Java VM.
    pub fn missing() -> Self {
        Self { available: false }
    }
}

impl JavaRuntime for StubJavaRuntime {
    fn is_available(&self) -> bool {
        self.available
    }
}
