use std::env;
use std::path::Path;
use std::process::Command;

use serde_json::json;

use crate::domain::paths::{FUNCTIONAL_TEST_BUNDLE, UNIT_TEST_BUNDLE};
use crate::domain::{AppError, EngineConfig};
use crate::ports::TestEngine;
use crate::services::RunnerAssets;

/// Spawns the intern runner with arguments derived from the merged
/// engine configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternCommand {
    assets: RunnerAssets,
}

impl InternCommand {
    pub fn new(assets: RunnerAssets) -> Self {
        Self { assets }
    }

    fn build_args(runner_config: &Path, config: &EngineConfig) -> Vec<String> {
        let mut config_value = runner_config.display().to_string();
        if let Some(child) = &config.config {
            config_value.push('@');
            config_value.push_str(child);
        }

        let mut args = vec![format!("config={config_value}")];

        // Empty assignments clear the defaults baked into the shipped config.
        if config.node_unit || config.remote_unit {
            args.push(format!("suites={UNIT_TEST_BUNDLE}"));
        } else {
            args.push("suites=".to_string());
        }
        if config.remote_functional {
            args.push(format!("functionalSuites={FUNCTIONAL_TEST_BUNDLE}"));
        } else {
            args.push("functionalSuites=".to_string());
        }

        if let Some(filter) = &config.filter {
            args.push(format!("grep={filter}"));
        }
        for reporter in &config.reporters {
            args.push(format!("reporters={reporter}"));
        }
        if let (Some(user), Some(key)) = (&config.user_name, &config.testing_key) {
            let tunnel = json!({ "username": user, "accessKey": key });
            args.push(format!("tunnelOptions={tunnel}"));
        }
        if config.verbose {
            args.push("debug=true".to_string());
        }

        args
    }
}

impl TestEngine for InternCommand {
    fn run(&self, config: &EngineConfig) -> Result<(), AppError> {
        let runner_config = self.assets.materialize(&env::temp_dir())?;

        let mut command = Command::new("intern");
        command.args(Self::build_args(&runner_config, config));
        if let Some(secret) = &config.secret {
            command.env("DOJO_TEST_SECRET", secret);
        }

        let status = command
            .status()
            .map_err(|e| AppError::Engine(format!("Failed to start the intern runner: {e}")))?;

        if !status.success() {
            return Err(AppError::Engine("Tests did not complete successfully".to_string()));
        }
        Ok(())
    }
}
