// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provisioning CLI
//!
//! Resolves a stage's configuration, validates it and runs the composition
//! against the recording backend, printing the outputs and the declared
//! resources as JSON.
//!
//! Run with: cargo run --bin provision -- --stage production plan

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecs_platform::config::{get_config, EnvironmentConfig};
use ecs_platform::domain::{validate_config, Environment};
use ecs_platform::provision::RecordingProvisioner;
use ecs_platform::stack::create_infrastructure_with;
use ecs_platform::{telemetry, PlatformResult};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "provision", about = "Plan infrastructure for a deployment stage")]
struct Cli {
    /// Deployment stage: dev, staging or production
    #[arg(short, long, env = "STAGE", default_value = "dev")]
    stage: Environment,

    /// Read the environment configuration from a JSON file instead of the registry
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved configuration
    Config,
    /// Validate the configuration without declaring anything
    Validate,
    /// Declare every resource against the recording backend
    Plan,
}

fn load_config(cli: &Cli) -> PlatformResult<EnvironmentConfig> {
    match &cli.config {
        Some(path) => Ok(EnvironmentConfig::from_json_file(path)?),
        None => Ok(get_config(cli.stage)),
    }
}

async fn run(cli: &Cli) -> PlatformResult<serde_json::Value> {
    let config = load_config(cli)?;

    match cli.command {
        Command::Config => Ok(serde_json::to_value(&config)?),
        Command::Validate => {
            validate_config(&config).map_err(ecs_platform::stack::StackError::from)?;
            info!(stage = %cli.stage, "Configuration valid");
            Ok(json!({ "stage": cli.stage, "valid": true }))
        }
        Command::Plan => {
            let provisioner = RecordingProvisioner::new();
            let outputs = create_infrastructure_with(&provisioner, cli.stage, &config).await?;
            Ok(json!({
                "stage": cli.stage,
                "removal": cli.stage.removal_policy(),
                "outputs": outputs,
                "resources": provisioner.resources().await,
            }))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).context("Failed to initialise logging")?;

    let report = run(&cli)
        .await
        .with_context(|| format!("Provisioning stage '{}' failed", cli.stage))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
