use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateFileArgs {
    /// Target path for the file
    pub path: String,

    /// Desired file content
    #[serde(default)]
    pub content: String,
}
