//! # kc-sync
//!
//! Command-line entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use kc_sync::{
    cli::{Cli, Command},
    commands::{
        run_client, run_config, run_group, run_realm, run_role, run_status, run_user,
        run_user_role, Context,
    },
    config::CliConfig,
    output::error,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(e.exit_code());
        }
    };
    let context = Context::resolve(&cli, &config);

    // Execute command
    let result = match cli.command {
        Command::Realm(cmd) => run_realm(cmd, &context).await,
        Command::Client(cmd) => run_client(cmd, &context).await,
        Command::Role(cmd) => run_role(cmd, &context).await,
        Command::User(cmd) => run_user(cmd, &context).await,
        Command::Group(cmd) => run_group(cmd, &context).await,
        Command::UserRole(cmd) => run_user_role(cmd, &context).await,
        Command::Config(cmd) => run_config(cmd, &mut config),
        Command::Status => run_status(&context).await,
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
