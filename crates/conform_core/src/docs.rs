use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Operator-facing documentation for a module, rendered by `conform modules info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDoc {
    pub module: String,
    pub short_description: String,
    pub description: String,
    pub version_added: String,
    pub author: Vec<String>,
    pub options: Vec<OptionDoc>,
    pub returns: Vec<ReturnDoc>,
    pub examples: Vec<String>,
}

/// One accepted argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDoc {
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// One field of the result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnDoc {
    pub name: String,
    pub description: String,
    pub returned: String,
    pub sample: String,
}

impl ModuleDoc {
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}
