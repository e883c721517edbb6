/// Raw operator intent for a test run, as collected by the CLI surface.
///
/// Constructed once per invocation and never mutated. Resolution into an
/// executable plan happens in [`TestScope::resolve`](super::TestScope::resolve).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRequest {
    /// Run both unit and functional suites, including in-process unit tests.
    pub all: bool,
    /// Run the unit suites (in-process and remote).
    pub unit: bool,
    /// Run the remote functional suites.
    pub functional: bool,
    /// Execution-target metadata: in-process runs use the Node environment.
    pub node: bool,
    /// Runner configuration variant, e.g. "local" for a developer-hosted browser.
    pub config: Option<String>,
    /// Test-name filter forwarded to the runner as a grep pattern.
    pub filter: Option<String>,
    /// Emit detailed diagnostics, including exact artifact paths.
    pub verbose: bool,
    /// Reporters forwarded verbatim to the runner.
    pub reporters: Vec<String>,
    /// Tunnel secret forwarded verbatim to the runner.
    pub secret: Option<String>,
    /// Remote testing service access key, forwarded verbatim.
    pub testing_key: Option<String>,
    /// Remote testing service user name, forwarded verbatim.
    pub user_name: Option<String>,
}
