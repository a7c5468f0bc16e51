//! CLI entry point for conform.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load configuration env files: ~/.conform/env first, then the nearest
/// project .env (walking up from the current directory).
fn load_conform_env() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".conform").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

/// Tracing goes to stderr so stdout stays clean for result payloads.
/// Filter order: CONFORM_LOG, then RUST_LOG, then a verbosity default.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("CONFORM_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    load_conform_env();
    let cli = Cli::parse();
    output::init(cli.output);
    init_tracing(cli.verbose);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
