//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Configuration-management module host
#[derive(Parser)]
#[command(name = "conform", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect and run configuration modules
    Modules {
        #[command(subcommand)]
        action: ModulesAction,
    },
}

#[derive(Subcommand)]
pub enum ModulesAction {
    /// List registered modules
    List,
    /// Show a module's documentation and argument schema
    Info {
        /// Module name
        module: String,
    },
    /// Run a module with JSON arguments
    Call {
        /// Module name
        module: String,
        /// JSON arguments, e.g. '{"path": "/tmp/motd", "content": "hello"}'
        #[arg(long)]
        args: String,
    },
}
