/// Port for operator-facing guidance output.
pub trait Reporter {
    /// Emit one guidance message.
    fn log(&self, message: &str);
}
