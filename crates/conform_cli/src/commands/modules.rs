//! `conform modules` subcommands.

use anyhow::{anyhow, Result};
use conform_core::Outcome;
use conform_modulebus::ModuleBus;
use serde_json::Value as JsonValue;

use crate::cli::ModulesAction;
use crate::output;

pub async fn handle(action: ModulesAction) -> Result<()> {
    let bus = ModuleBus::new();

    match action {
        ModulesAction::List => list(&bus),
        ModulesAction::Info { module } => info(&bus, &module),
        ModulesAction::Call { module, args } => call(&bus, &module, &args).await,
    }
}

fn list(bus: &ModuleBus) -> Result<()> {
    let modules = bus.list_modules();

    if modules.is_empty() {
        output::dim("No modules registered");
        return Ok(());
    }

    output::header("Registered Modules");

    let mut table = output::table();
    output::table_header(&mut table, "Module", "Description");

    let items: Vec<_> = modules
        .iter()
        .map(|m| {
            output::table_row(&mut table, &m.name, &m.description);
            (m.name.as_str(), m.description.as_str())
        })
        .collect();

    output::table_print(&table, &items);

    Ok(())
}

fn info(bus: &ModuleBus, module_name: &str) -> Result<()> {
    let modules = bus.list_modules();
    let module = modules
        .iter()
        .find(|m| m.name == module_name)
        .ok_or_else(|| anyhow!("Module not found: {}", module_name))?;

    output::header(&format!("Module: {}", module.name));
    output::dim(&module.description);
    println!();
    output::header("Arguments");
    output::json_pretty(&module.parameters);

    if let Some(docs) = bus.docs(module_name) {
        println!();
        output::header("Documentation");
        output::json_pretty(&docs.to_json());
    }

    Ok(())
}

async fn call(bus: &ModuleBus, module_name: &str, args_str: &str) -> Result<()> {
    let args: JsonValue =
        serde_json::from_str(args_str).map_err(|e| anyhow!("Invalid JSON arguments: {}", e))?;

    let spinner = output::spinner(&format!("Running {}...", module_name));

    match bus.call(module_name, args).await {
        Ok((result, duration_ms)) => {
            output::spinner_success(&spinner, &format!("Completed in {}ms", duration_ms));
            println!();
            output::json_pretty(&result);
            Ok(())
        }
        Err(err) => {
            output::spinner_error(&spinner, "Module failed");
            output::json_pretty(&Outcome::failure(err.to_string()).to_json());
            Err(err.into())
        }
    }
}
