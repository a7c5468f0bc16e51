use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConformError {
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("module error: {0}")]
    Module(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ConformError>;
