//! CLI Adapter.

use clap::{ArgGroup, Parser, Subcommand};

use crate::domain::{AppError, TestRequest};

#[derive(Parser)]
#[command(name = "dojo-test")]
#[command(version)]
#[command(
    about = "Run a Dojo project's unit and functional test suites with the intern runner",
    long_about = None
)]
#[command(subcommand_negates_reqs = true)]
#[command(group(
    ArgGroup::new("suites")
        .args(["all", "unit", "functional"])
        .required(true)
        .multiple(false)
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run both the unit and functional test suites
    #[arg(short = 'a', long)]
    all: bool,

    /// Runner configuration to use, e.g. "local" for a developer-hosted browser
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Run the functional test suites
    #[arg(short = 'f', long)]
    functional: bool,

    /// Run in-process unit tests against the Node environment
    #[arg(short = 'n', long)]
    node: bool,

    /// Access key for the remote testing service
    #[arg(short = 'k', long = "testingKey")]
    testing_key: Option<String>,

    /// User name for the remote testing service
    #[arg(long = "userName", visible_alias = "usr")]
    user_name: Option<String>,

    /// Reporters to forward to the runner
    #[arg(short = 'r', long, value_delimiter = ',')]
    reporters: Vec<String>,

    /// Secret for the remote testing service
    #[arg(short = 's', long)]
    secret: Option<String>,

    /// Run the unit test suites
    #[arg(short = 'u', long)]
    unit: bool,

    /// Print detailed diagnostics, including checked artifact paths
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only run tests whose names match this pattern
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the command's dependency and configuration footprint
    #[clap(visible_alias = "e")]
    Eject,
}

impl Cli {
    fn to_request(&self) -> TestRequest {
        TestRequest {
            all: self.all,
            unit: self.unit,
            functional: self.functional,
            node: self.node,
            config: self.config.clone(),
            filter: self.filter.clone(),
            verbose: self.verbose,
            reporters: self.reporters.clone(),
            secret: self.secret.clone(),
            testing_key: self.testing_key.clone(),
            user_name: self.user_name.clone(),
        }
    }
}

/// Parse the command line and dispatch.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Eject) => {
            let descriptor = crate::eject()?;
            let rendered = serde_json::to_string_pretty(&descriptor)
                .map_err(|e| AppError::config_error(e.to_string()))?;
            println!("{rendered}");
            Ok(())
        }
        None => crate::test(&cli.to_request()),
    }
}
