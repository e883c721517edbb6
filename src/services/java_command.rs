use std::process::Command;

use crate::ports::JavaRuntime;

/// Probes for a Java VM by spawning `java -version`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaCommand;

impl JavaRuntime for JavaCommand {
    fn is_available(&self) -> bool {
        // `java -version` reports to stderr and exits zero when a VM is present.
        Command::new("java")
            .arg("-version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
