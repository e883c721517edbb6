/// Port for probing the Java VM required by in-process unit runs.
pub trait JavaRuntime {
    /// Whether a usable Java VM is reachable on this machine.
    fn is_available(&self) -> bool;
}
