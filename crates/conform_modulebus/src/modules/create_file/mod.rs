mod args;
mod error;

pub use args::CreateFileArgs;
pub use error::CreateFileError;

use crate::modules::{Module, ModuleResult};
use async_trait::async_trait;
use conform_core::{ModuleDoc, OptionDoc, Outcome, ReturnDoc};
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;
use tokio::fs;

const ALLOWED_SYMBOLS_MSG: &str = "Incorrect file path, allowed symbols are: a-zA-Z0-9_-/.";
const TRAILING_SLASH_MSG: &str = "Incorrect file path, / at the end of the path is not allowed";

// Whitelist applied before any filesystem access; everything outside it is
// rejected, including the empty path.
fn path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_/.\-]+$").expect("path whitelist pattern"))
}

pub struct CreateFile;

impl CreateFile {
    pub fn new() -> Self {
        Self
    }

    fn validate_path(path: &str) -> Result<(), CreateFileError> {
        if !path_pattern().is_match(path) {
            return Err(CreateFileError::InvalidPath(ALLOWED_SYMBOLS_MSG.to_string()));
        }

        if path.ends_with('/') {
            return Err(CreateFileError::InvalidPath(TRAILING_SLASH_MSG.to_string()));
        }

        Ok(())
    }
}

impl Default for CreateFile {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for CreateFile {
    fn name(&self) -> &'static str {
        "create_file"
    }

    fn description(&self) -> &'static str {
        "Create a file with the given content. Confirms a matching file, never overwrites a differing one."
    }

    fn argument_spec(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Target path for the file"
                },
                "content": {
                    "type": "string",
                    "description": "Desired file content",
                    "default": ""
                }
            },
            "required": ["path"]
        })
    }

    fn docs(&self) -> ModuleDoc {
        ModuleDoc {
            module: "create_file".to_string(),
            short_description: "Creates a file".to_string(),
            description: "Creates a file with content. The target is only ever \
                          written when it does not exist yet; an existing file with \
                          different content is reported as a conflict and left as-is."
                .to_string(),
            version_added: "1.0.0".to_string(),
            author: vec!["Conform maintainers".to_string()],
            options: vec![
                OptionDoc {
                    name: "path".to_string(),
                    description: "Target path for the file. Parent directories must already exist."
                        .to_string(),
                    required: true,
                    default: None,
                },
                OptionDoc {
                    name: "content".to_string(),
                    description: "Desired file content".to_string(),
                    required: false,
                    default: Some(String::new()),
                },
            ],
            returns: vec![ReturnDoc {
                name: "message".to_string(),
                description: "File creation result".to_string(),
                returned: "always".to_string(),
                sample: "The file was created".to_string(),
            }],
            examples: vec![
                "conform modules call create_file --args '{\"path\": \"/etc/conform/marker\", \"content\": \"managed\\n\"}'"
                    .to_string(),
            ],
        }
    }

    async fn run(&self, args: JsonValue) -> ModuleResult {
        let module_args: CreateFileArgs = serde_json::from_value(args)?;

        CreateFile::validate_path(&module_args.path)?;

        if fs::try_exists(&module_args.path)
            .await
            .map_err(CreateFileError::Io)?
        {
            let prev_content = fs::read_to_string(&module_args.path)
                .await
                .map_err(CreateFileError::Io)?;

            if prev_content == module_args.content {
                tracing::debug!(path = %module_args.path, "file already matches");
                return Ok(Outcome::unchanged("The file already exists").to_json());
            }

            tracing::warn!(path = %module_args.path, "existing file content differs");
            return Err(CreateFileError::ContentConflict.into());
        }

        fs::write(&module_args.path, &module_args.content)
            .await
            .map_err(CreateFileError::Io)?;

        tracing::info!(
            path = %module_args.path,
            bytes = module_args.content.len(),
            "file created"
        );
        Ok(Outcome::changed("The file was created").to_json())
    }
}
