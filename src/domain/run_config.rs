use super::{AppError, TestRequest};

/// Which test suites a run executes.
///
/// Exactly one scope applies per run. Flag precedence is `--all`, then
/// `--unit`, then `--functional`; the CLI surface additionally rejects
/// ambiguous combinations before a request is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestScope {
    /// In-process unit, remote unit, and remote functional suites.
    All,
    /// In-process and remote unit suites only.
    Unit,
    /// Remote functional suites only.
    Functional,
}

impl TestScope {
    /// Resolve the requested flags into a scope, highest precedence first.
    ///
    /// Returns `None` when no suite flag is set; the CLI requires one of the
    /// three flags, so this only concerns programmatic callers.
    pub fn resolve(request: &TestRequest) -> Option<TestScope> {
        if request.all {
            Some(TestScope::All)
        } else if request.unit {
            Some(TestScope::Unit)
        } else if request.functional {
            Some(TestScope::Functional)
        } else {
            None
        }
    }

    /// Unit tests executed in-process against the Node environment.
    pub fn node_unit(self) -> bool {
        matches!(self, TestScope::All | TestScope::Unit)
    }

    /// Unit tests mirrored in a remote or browser environment.
    pub fn remote_unit(self) -> bool {
        matches!(self, TestScope::All | TestScope::Unit)
    }

    /// Functional tests driving a real browser session.
    pub fn remote_functional(self) -> bool {
        matches!(self, TestScope::All | TestScope::Functional)
    }
}

/// Resolved execution plan for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub scope: TestScope,
    /// Runner configuration variant carried through from the request.
    pub config: Option<String>,
    /// Test-name filter carried through from the request.
    pub filter: Option<String>,
}

impl RunConfig {
    /// Derive the plan for a request. Fails when no suite flag is set.
    pub fn from_request(request: &TestRequest) -> Result<RunConfig, AppError> {
        let scope = TestScope::resolve(request).ok_or_else(|| {
            AppError::config_error("No test suites selected. Pass --all, --unit, or --functional.")
        })?;

        Ok(RunConfig {
            scope,
            config: request.config.clone(),
            filter: request.filter.clone(),
        })
    }
}

/// Merged configuration handed to the external test runner.
///
/// The suite booleans come from the resolved scope; the remaining fields are
/// request pass-through the runner interprets on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub node_unit: bool,
    pub remote_unit: bool,
    pub remote_functional: bool,
    pub config: Option<String>,
    pub filter: Option<String>,
    pub node: bool,
    pub verbose: bool,
    pub reporters: Vec<String>,
    pub secret: Option<String>,
    pub testing_key: Option<String>,
    pub user_name: Option<String>,
}

impl EngineConfig {
    /// Merge the resolved plan with the request's pass-through fields.
    pub fn merge(config: &RunConfig, request: &TestRequest) -> EngineConfig {
        EngineConfig {
            node_unit: config.scope.node_unit(),
            remote_unit: config.scope.remote_unit(),
            remote_functional: config.scope.remote_functional(),
            config: config.config.clone(),
            filter: config.filter.clone(),
            node: request.node,
            verbose: request.verbose,
            reporters: request.reporters.clone(),
            secret: request.secret.clone(),
            testing_key: request.testing_key.clone(),
            user_name: request.user_name.clone(),
        }
    }
}
