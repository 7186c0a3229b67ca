use std::io;
use std::process::ExitCode;

use clap::Parser;

use userlog_bootstrap::{
    cli::{Cli, Command},
    config,
    services::{self, BootstrapPlan, MongoProvisioner, Outcome},
    BootstrapError,
};

#[tokio::main]
async fn main() -> ExitCode {
    // stdout is reserved for the JSON the tool prints
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    let mut settings = config::load();
    if let Some(uri) = cli.uri.clone() {
        settings.mongodb_uri = uri;
    }
    tracing::debug!("settings: {:?}", settings);

    match run(cli.action(), &settings).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, settings: &config::Settings) -> Result<ExitCode, BootstrapError> {
    let plan = BootstrapPlan::from_settings(settings);
    let provisioner = MongoProvisioner::connect(settings).await?;

    match command {
        Command::Run => {
            let outcome = services::ensure_initial_state(&provisioner, &plan).await?;
            if let Outcome::Provisioned(report) = &outcome {
                tracing::info!(
                    "bootstrap complete: users={:?} collection={} index={}",
                    report.users,
                    report.collection,
                    report.index
                );
            }
            if let Err(e) = services::emit_notice(&outcome, &mut io::stdout().lock()) {
                tracing::error!("failed to write notice: {}", e);
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Status => {
            let report = services::inspect(&provisioner, &plan).await?;
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    tracing::error!("failed to encode status: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
            Ok(if report.is_complete() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
    }
}
