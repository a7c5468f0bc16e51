pub mod modules;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use conform_core::{ConformError, Result};
use serde_json::Value as JsonValue;
use uuid::Uuid;

pub use modules::{CreateFile, CreateFileArgs, CreateFileError, Module, ModuleResult};

pub struct ModuleBus {
    modules: HashMap<String, Arc<dyn Module>>,
}

impl ModuleBus {
    pub fn new() -> Self {
        let mut bus = Self {
            modules: HashMap::new(),
        };
        bus.register_defaults();
        bus
    }

    fn register_defaults(&mut self) {
        self.register(CreateFile::new());
    }

    pub fn register<M: Module + 'static>(&mut self, module: M) {
        tracing::debug!("Registering module: {}", module.name());
        self.modules
            .insert(module.name().to_string(), Arc::new(module));
    }

    pub async fn call(&self, module_name: &str, args: JsonValue) -> Result<(JsonValue, u64)> {
        let module = self
            .modules
            .get(module_name)
            .ok_or_else(|| ConformError::ModuleNotFound(module_name.to_string()))?;

        let invocation = Uuid::new_v4();
        tracing::debug!(module = module_name, %invocation, "dispatching module");

        let start = Instant::now();
        let result = match module.run(args).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(module = module_name, %invocation, error = %err, "module failed");
                return Err(ConformError::Other(err));
            }
        };
        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(module = module_name, %invocation, duration_ms, "module completed");

        Ok((result, duration_ms))
    }

    pub fn docs(&self, module_name: &str) -> Option<conform_core::ModuleDoc> {
        self.modules.get(module_name).map(|m| m.docs())
    }

    pub fn list_modules(&self) -> Vec<ModuleInfo> {
        self.modules
            .values()
            .map(|m| ModuleInfo {
                name: m.name().to_string(),
                description: m.description().to_string(),
                parameters: m.argument_spec(),
            })
            .collect()
    }
}

impl Default for ModuleBus {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ModuleInfo {
    pub name: String,
    pub description: String,
    pub parameters: JsonValue,
}
