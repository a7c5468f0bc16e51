//! Command dispatch.

pub mod modules;

use crate::cli::{Cli, Command};
use anyhow::Result;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Modules { action } => modules::handle(action).await,
    }
}
