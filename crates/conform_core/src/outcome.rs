use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Result of a module run: whether host state changed, and what happened.
///
/// Success and failure share this shape so callers read one envelope; a
/// failure never reports `changed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub changed: bool,
    pub message: String,
    pub failed: bool,
}

impl Outcome {
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            changed: true,
            message: message.into(),
            failed: false,
        }
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: message.into(),
            failed: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: message.into(),
            failed: true,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "changed": self.changed,
            "message": self.message,
            "failed": self.failed,
        })
    }
}
