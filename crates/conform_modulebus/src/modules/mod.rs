pub mod create_file;

use async_trait::async_trait;
use conform_core::ModuleDoc;
use serde_json::Value as JsonValue;

pub use create_file::{CreateFile, CreateFileArgs, CreateFileError};

pub type ModuleResult = anyhow::Result<JsonValue>;

/// A configuration module: takes JSON arguments, acts on the host, and
/// reports an outcome envelope (changed / message / failed).
#[async_trait]
pub trait Module: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn argument_spec(&self) -> JsonValue;
    fn docs(&self) -> ModuleDoc;
    async fn run(&self, args: JsonValue) -> ModuleResult;
}
